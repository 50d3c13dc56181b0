//! Layered configuration with provenance
//!
//! Layers, lowest precedence first:
//! 1. Built-in defaults
//! 2. Config files (TOML or JSON), in the order given
//! 3. Command-line overrides

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use graph_view_schema::SCHEMA_IDS;

use super::effective::EffectiveConfig;
use super::error::ConfigError;
use super::merge::deep_merge;
use super::resolve::resolve_layers;

/// Schema identifier of the provenance report
pub const REPORT_SCHEMA_ID: &str = "graph-view/config_report@1";

/// Origin of a configuration source
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Cli,
}

/// A contributing config source with provenance
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,

    /// File path (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Effective configuration plus the sources it was built from
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub effective: EffectiveConfig,

    /// Contributing sources in precedence order
    pub sources: Vec<ConfigSource>,
}

/// Serializable record of a layered resolution, secrets redacted
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    pub schema_id: String,

    /// Sub-schema identifiers, by section
    pub schemas: BTreeMap<String, String>,

    pub created_at: DateTime<Utc>,

    pub config: Value,

    pub sources: Vec<ConfigSource>,

    /// Redacted key paths
    pub redactions: Vec<String>,
}

impl LayeredConfig {
    /// Build from config files and command-line overrides.
    ///
    /// Every listed file must exist; a missing file is an IO error.
    pub fn load(files: &[PathBuf], cli_overrides: Option<Value>) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();
        let mut sources = vec![ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        }];

        for path in files {
            let (value, digest) = load_layer(path)?;
            layers.push(value);
            sources.push(ConfigSource {
                origin: ConfigOrigin::File,
                path: Some(path.to_string_lossy().to_string()),
                digest: Some(digest),
            });
        }

        if let Some(cli) = cli_overrides {
            layers.push(cli);
            sources.push(ConfigSource {
                origin: ConfigOrigin::Cli,
                path: None,
                digest: None,
            });
        }

        let effective = resolve_layers(layers)?;
        Ok(Self { effective, sources })
    }

    pub fn report(&self) -> ConfigReport {
        let (config, redactions) = self.effective.redacted();
        ConfigReport {
            schema_id: REPORT_SCHEMA_ID.to_string(),
            schemas: SCHEMA_IDS
                .iter()
                .map(|(section, id)| (section.to_string(), id.to_string()))
                .collect(),
            created_at: Utc::now(),
            config,
            sources: self.sources.clone(),
            redactions,
        }
    }
}

/// Load a partial config file, returning the value and the SHA-256 of its bytes.
///
/// `.json` files parse as JSON; anything else as TOML.
pub fn load_layer(path: &Path) -> Result<(Value, String), ConfigError> {
    let bytes = fs::read(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hex::encode(hasher.finalize());

    let contents = String::from_utf8(bytes)
        .map_err(|e| ConfigError::Parse(format!("Invalid UTF-8: {}", e)))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let value = if is_json {
        serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))?
    } else {
        let toml_value: toml::Value = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e)))?;
        toml_to_json(toml_value)?
    };

    tracing::debug!(path = %path.display(), digest = %digest, "loaded config layer");
    Ok((value, digest))
}

/// Convert TOML Value to JSON Value
///
/// JSON has no NaN or infinity, so non-finite floats are rejected.
fn toml_to_json(toml: toml::Value) -> Result<Value, ConfigError> {
    Ok(match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| ConfigError::Parse(format!("Non-finite number not supported: {}", f)))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(
            arr.into_iter()
                .map(toml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        toml::Value::Table(table) => {
            let map = table
                .into_iter()
                .map(|(k, v)| toml_to_json(v).map(|v| (k, v)))
                .collect::<Result<Map<String, Value>, _>>()?;
            Value::Object(map)
        }
    })
}

/// Parse `path=value` into a nested partial.
///
/// The value is read as JSON when it parses, otherwise as a plain string,
/// so `render.edge.length=300` sets a number and `connection.uri=bolt://db:7687`
/// a string.
pub fn parse_override(spec: &str) -> Result<Value, ConfigError> {
    let (path, raw) = spec
        .split_once('=')
        .ok_or_else(|| ConfigError::Parse(format!("expected path=value, got: {}", spec)))?;

    let segments: Vec<&str> = path.trim().split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::Parse(format!("invalid override path: '{}'", path)));
    }

    let leaf = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok(segments.iter().rev().fold(leaf, |inner, segment| {
        let mut map = Map::new();
        map.insert(segment.to_string(), inner);
        Value::Object(map)
    }))
}

/// Parse and merge several overrides, later ones winning.
pub fn parse_overrides(specs: &[String]) -> Result<Option<Value>, ConfigError> {
    let mut merged: Option<Value> = None;
    for spec in specs {
        let value = parse_override(spec)?;
        merged = Some(match merged {
            Some(base) => deep_merge(base, value),
            None => value,
        });
    }
    Ok(merged)
}
