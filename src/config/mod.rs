//! Graph view configuration
//!
//! Built-in defaults plus the rule for overlaying a caller's partial
//! configuration onto them:
//! - Leaves: the caller's value wins after type and enum checks
//! - Nested objects: merged field by field
//! - Unrecognized keys: passed through unchanged
//! - Advanced force parameters: all or nothing

mod defaults;
mod effective;
mod error;
mod layers;
mod merge;
mod resolve;

pub use defaults::{get_defaults, DEFAULT_INITIAL_QUERY, DEFAULT_URI, DEFAULT_USERNAME};
pub use effective::EffectiveConfig;
pub use error::{ConfigError, ErrorKind};
pub use layers::{
    load_layer, parse_override, parse_overrides, ConfigOrigin, ConfigReport, ConfigSource,
    LayeredConfig, REPORT_SCHEMA_ID,
};
pub use merge::{deep_merge, merge_layers, merge_maps};
pub use resolve::{resolve_config, resolve_layers};
