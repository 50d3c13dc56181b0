//! Typed schemas for the graph view configuration.
//!
//! Three sub-schemas are versioned independently:
//! - [`ConnectionConfig`]: how to reach and query the graph database
//! - [`RenderConfig`]: node, edge and layout styling
//! - [`PhysicsConfig`]: force-directed simulation tuning
//!
//! Every object keeps keys it does not recognize in an `extra` map so
//! that options meant for downstream consumers survive a round trip.

mod connection;
mod error;
mod physics;
mod render;

pub use connection::{ConnectionConfig, EncryptionMode, TrustMode};
pub use error::UnknownVariant;
pub use physics::{ForceParameters, PhysicsConfig, Stabilization};
pub use render::{EdgeStyle, FontStyle, HierarchicalLayout, LayoutConfig, NodeStyle, RenderConfig, SortMethod};

/// Pass-through storage for unrecognized keys.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Schema identifiers of the three sub-schemas, keyed by section name.
pub const SCHEMA_IDS: &[(&str, &str)] = &[
    ("connection", ConnectionConfig::SCHEMA_ID),
    ("render", RenderConfig::SCHEMA_ID),
    ("physics", PhysicsConfig::SCHEMA_ID),
];
