//! Resolution properties
//!
//! Exercises the public contract of `get_defaults` / `resolve_config`:
//! identity, per-field override, validation and pass-through.

use graph_view_config::{
    get_defaults, resolve_config, ConfigError, EncryptionMode, ErrorKind, TrustMode,
};
use serde_json::json;

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn defaults_are_equal_but_independent() {
    let mut first = get_defaults();
    let second = get_defaults();
    assert_eq!(first, second);

    first.render.node.font.size = 12.0;
    first.connection.uri.push_str("/changed");
    first.physics.stabilization.extra.insert("onlyHere".to_string(), json!(true));

    let third = get_defaults();
    assert_eq!(second, third);
    assert_eq!(third.render.node.font.size, 26.0);
    assert!(third.physics.stabilization.extra.is_empty());
}

#[test]
fn empty_partial_resolves_to_defaults() {
    assert_eq!(resolve_config(&json!({})).unwrap(), get_defaults());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn leaf_override_preserves_siblings() {
    let config = resolve_config(&json!({"render": {"node": {"font": {"size": 40}}}})).unwrap();

    assert_eq!(config.render.node.font.size, 40.0);
    assert_eq!(config.render.node.font.stroke_width, 7.0);
}

#[test]
fn driver_field_names_are_stable() {
    let config = resolve_config(&json!({
        "connection": {
            "initialQuery": "MATCH (p:Person)-[r]-(q) RETURN p, r, q // sample",
            "uri": "bolt://graph.example:7687",
            "username": "viewer",
            "password": "pw",
            "encryptionMode": "ENCRYPTION_ON",
            "trustMode": "TRUST_CUSTOM_CA_SIGNED_CERTIFICATES"
        }
    }))
    .unwrap();

    assert_eq!(config.connection.encryption_mode, EncryptionMode::On);
    assert_eq!(config.connection.trust_mode, TrustMode::CustomCaSigned);

    let value = config.to_value();
    let connection = value["connection"].as_object().unwrap();
    let mut keys: Vec<&str> = connection.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["encryptionMode", "initialQuery", "password", "trustMode", "uri", "username"]
    );
    assert_eq!(value["connection"]["initialQuery"], "MATCH (p:Person)-[r]-(q) RETURN p, r, q // sample");
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn unknown_encryption_mode_is_rejected() {
    let err = resolve_config(&json!({"connection": {"encryptionMode": "BOGUS"}})).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidConfigField);
    match err {
        ConfigError::InvalidConfigField { path, received, .. } => {
            assert_eq!(path, "connection.encryptionMode");
            assert_eq!(received, json!("BOGUS"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn partial_force_group_is_rejected() {
    let err = resolve_config(&json!({"physics": {"gravitationalConstant": -8000}})).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IncompleteFieldGroup);
    assert_eq!(
        err.missing_fields(),
        ["physics.springConstant", "physics.springLength"]
    );
}

#[test]
fn complete_force_group_is_accepted() {
    let config = resolve_config(&json!({
        "physics": {
            "gravitationalConstant": -8000,
            "springConstant": 0.04,
            "springLength": 95
        }
    }))
    .unwrap();

    let forces = config.physics.forces.expect("forces should be set");
    assert_eq!(forces.gravitational_constant, -8000.0);
    assert_eq!(forces.spring_constant, 0.04);
    assert_eq!(forces.spring_length, 95.0);

    let value = config.to_value();
    assert_eq!(value["physics"]["gravitationalConstant"], -8000.0);
    assert_eq!(value["physics"]["springConstant"], 0.04);
    assert_eq!(value["physics"]["springLength"], 95.0);
    assert_eq!(value["physics"]["adaptiveTimestep"], true);
}

#[test]
fn partial_nested_force_group_is_rejected() {
    let err = resolve_config(&json!({"physics": {"barnesHut": {"springConstant": 0.04}}}))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IncompleteFieldGroup);
    assert_eq!(
        err.missing_fields(),
        ["physics.barnesHut.gravitationalConstant", "physics.barnesHut.springLength"]
    );
}

// =============================================================================
// Ownership and pass-through
// =============================================================================

#[test]
fn mutating_partial_afterwards_does_not_leak() {
    let mut partial = json!({
        "render": {"edge": {"length": 320}, "interaction": {"hover": true}}
    });
    let config = resolve_config(&partial).unwrap();

    partial["render"]["edge"]["length"] = json!(1);
    partial["render"]["interaction"]["hover"] = json!(false);

    assert_eq!(config.render.edge.length, 320.0);
    assert_eq!(config.render.extra["interaction"]["hover"], true);
}

#[test]
fn unknown_render_flag_passes_through() {
    let config = resolve_config(&json!({"render": {"unknownVendorFlag": true}})).unwrap();

    assert_eq!(config.render.extra["unknownVendorFlag"], true);

    let value = config.to_value();
    assert_eq!(value["render"]["unknownVendorFlag"], true);
    assert_eq!(value["render"]["node"]["font"]["size"], 26.0);
    assert_eq!(value["render"]["edge"]["length"], 200.0);

    let options = config.engine_options();
    assert_eq!(options["unknownVendorFlag"], true);
}

#[test]
fn resolution_is_deterministic() {
    let partial = json!({
        "connection": {"uri": "bolt://a:7687"},
        "render": {"layout": {"hierarchical": {"enabled": true, "sortMethod": "directed"}}},
        "physics": {"stabilization": {"iterations": 50}}
    });

    assert_eq!(resolve_config(&partial).unwrap(), resolve_config(&partial).unwrap());
}
