//! Physics sub-schema (force-directed simulation tuning).

use serde::Serialize;

use crate::Extra;

/// Simulation parameters handed to the layout engine.
///
/// `enabled` and `timestep` are independently optional. The advanced
/// forces form one group and are either all present or all absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestep: Option<f64>,

    pub adaptive_timestep: bool,

    pub stabilization: Stabilization,

    #[serde(flatten)]
    pub forces: Option<ForceParameters>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl PhysicsConfig {
    pub const SCHEMA_VERSION: u32 = 1;
    pub const SCHEMA_ID: &'static str = "graph-view/physics@1";
}

/// Iterations run before the graph is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stabilization {
    pub iterations: u32,

    /// Zoom to fit once stabilized.
    pub fit: bool,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Barnes-Hut force triple. Disabled unless supplied in full.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceParameters {
    pub gravitational_constant: f64,
    pub spring_constant: f64,
    pub spring_length: f64,
}

impl ForceParameters {
    /// Group name used in error reports.
    pub const GROUP: &'static str = "physics.barnesHut";

    /// Member keys, as they appear under `physics`.
    pub const FIELDS: &'static [&'static str] =
        &["gravitationalConstant", "springConstant", "springLength"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn physics(forces: Option<ForceParameters>) -> PhysicsConfig {
        PhysicsConfig {
            enabled: None,
            timestep: None,
            adaptive_timestep: true,
            stabilization: Stabilization {
                iterations: 200,
                fit: true,
                extra: Extra::new(),
            },
            forces,
            extra: Extra::new(),
        }
    }

    #[test]
    fn test_absent_optionals_not_serialized() {
        let value = serde_json::to_value(physics(None)).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("enabled"));
        assert!(!object.contains_key("timestep"));
        assert!(!object.contains_key("springLength"));
        assert_eq!(value["stabilization"], json!({"iterations": 200, "fit": true}));
    }

    #[test]
    fn test_forces_serialized_flat() {
        let value = serde_json::to_value(physics(Some(ForceParameters {
            gravitational_constant: -8000.0,
            spring_constant: 0.04,
            spring_length: 95.0,
        })))
        .unwrap();

        assert_eq!(value["gravitationalConstant"], -8000.0);
        assert_eq!(value["springConstant"], 0.04);
        assert_eq!(value["springLength"], 95.0);
    }
}
