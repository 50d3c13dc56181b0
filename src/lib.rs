//! Graph View Config - defaults and override merging
//!
//! This crate produces the effective configuration for a graph
//! visualization front-end: how to reach and query the graph database,
//! how to style nodes and edges, and how to tune the force-directed
//! layout. It produces data only; no connection is opened and nothing
//! is rendered.

pub mod config;

pub use config::{
    get_defaults, resolve_config, resolve_layers, ConfigError, EffectiveConfig, ErrorKind,
    LayeredConfig,
};
pub use graph_view_schema as schema;
pub use graph_view_schema::{ConnectionConfig, EncryptionMode, PhysicsConfig, RenderConfig, TrustMode};
