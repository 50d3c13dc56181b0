//! Effective configuration
//!
//! The merged result handed to the database driver (`connection`) and to
//! the layout engine (`render` + `physics`).

use serde::Serialize;
use serde_json::{json, Map, Value};

use graph_view_schema::{ConnectionConfig, Extra, PhysicsConfig, RenderConfig};

use super::merge::merge_maps;

/// Keys that contain secrets and should be redacted
const SECRET_KEYS: &[&str] = &[
    "password",
    "token",
    "secret",
    "private_key",
    "api_key",
    "credential",
];

pub(crate) fn is_secret_key(key: &str) -> bool {
    let key_lower = key.to_lowercase();
    SECRET_KEYS.iter().any(|s| key_lower.contains(s))
}

/// Effective configuration, owned by whoever requested it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    pub connection: ConnectionConfig,
    pub render: RenderConfig,
    pub physics: PhysicsConfig,

    /// Unrecognized top-level keys, passed through.
    #[serde(flatten)]
    pub extra: Extra,
}

impl EffectiveConfig {
    /// Split into the three sub-schemas.
    pub fn into_parts(self) -> (ConnectionConfig, RenderConfig, PhysicsConfig) {
        (self.connection, self.render, self.physics)
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Value {
        let known = json!({
            "connection": self.connection,
            "render": self.render,
            "physics": self.physics,
        });
        match known {
            Value::Object(known) => Value::Object(merge_maps(self.extra.clone(), known)),
            other => other,
        }
    }

    /// Serialize to JSON, with secrets redacted unless `reveal` is set
    pub fn to_json(&self, reveal: bool) -> Result<String, serde_json::Error> {
        if reveal {
            serde_json::to_string_pretty(&self.to_value())
        } else {
            serde_json::to_string_pretty(&self.redacted().0)
        }
    }

    /// Get a config value by path (dot-separated)
    pub fn get(&self, path: &str) -> Option<Value> {
        let value = self.to_value();
        let mut current = &value;
        for part in path.split('.') {
            current = current.get(part)?;
        }
        Some(current.clone())
    }

    /// Get a config value as string
    pub fn get_str(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(str::to_string))
    }

    /// Get a config value as bool
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(|v| v.as_bool())
    }

    /// Get a config value as f64
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(|v| v.as_f64())
    }

    /// Serialized copy with secrets replaced, plus the redacted key paths
    pub fn redacted(&self) -> (Value, Vec<String>) {
        let mut value = self.to_value();
        let mut redactions = Vec::new();
        redact_recursive(&mut value, String::new(), &mut redactions);
        (value, redactions)
    }

    /// Combined options object for the layout engine.
    ///
    /// Uses the engine's own nesting (`nodes`, `edges.arrows.to.enabled`,
    /// `physics.barnesHut`). Pass-through keys are kept; known fields win
    /// over pass-through keys with the same name.
    pub fn engine_options(&self) -> Value {
        let render = &self.render;
        let physics = &self.physics;

        let edges = json!({
            "arrows": {"to": {"enabled": render.edge.arrow_to_enabled}},
            "length": render.edge.length,
        });

        let mut physics_options = Map::new();
        if let Some(enabled) = physics.enabled {
            physics_options.insert("enabled".to_string(), json!(enabled));
        }
        if let Some(timestep) = physics.timestep {
            physics_options.insert("timestep".to_string(), json!(timestep));
        }
        physics_options.insert("adaptiveTimestep".to_string(), json!(physics.adaptive_timestep));
        physics_options.insert("stabilization".to_string(), json!(physics.stabilization));
        if let Some(forces) = physics.forces {
            physics_options.insert("barnesHut".to_string(), json!(forces));
        }

        let mut options = render.extra.clone();
        options.insert("nodes".to_string(), json!(render.node));
        options.insert("edges".to_string(), overlay(&render.edge.extra, edges));
        options.insert("layout".to_string(), json!(render.layout));
        options.insert(
            "physics".to_string(),
            Value::Object(merge_maps(physics.extra.clone(), physics_options)),
        );
        Value::Object(options)
    }
}

fn overlay(extra: &Extra, known: Value) -> Value {
    match known {
        Value::Object(known) => Value::Object(merge_maps(extra.clone(), known)),
        other => other,
    }
}

fn redact_recursive(value: &mut Value, path: String, redactions: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                let current_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };

                if is_secret_key(key) && !val.is_object() && !val.is_array() {
                    *val = Value::String("[REDACTED]".to_string());
                    redactions.push(current_path);
                } else {
                    redact_recursive(val, current_path, redactions);
                }
            }
        }
        Value::Array(arr) => {
            for (i, val) in arr.iter_mut().enumerate() {
                let current_path = format!("{}[{}]", path, i);
                redact_recursive(val, current_path, redactions);
            }
        }
        _ => {}
    }
}
