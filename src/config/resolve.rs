//! Overlaying a caller's partial configuration onto the defaults.
//!
//! Every recognized leaf is taken from the partial when present (after
//! type and enum checks) and from the defaults otherwise. Nested objects
//! merge field by field. Unrecognized keys are carried through as-is.

use serde_json::{Map, Value};
use std::str::FromStr;

use graph_view_schema::{
    ConnectionConfig, EdgeStyle, EncryptionMode, Extra, FontStyle, ForceParameters,
    HierarchicalLayout, LayoutConfig, NodeStyle, PhysicsConfig, RenderConfig, SortMethod,
    Stabilization, TrustMode, UnknownVariant,
};

use super::defaults::baseline;
use super::effective::EffectiveConfig;
use super::error::ConfigError;
use super::merge::{merge_layers, merge_maps};

const ROOT_FIELDS: &[&str] = &["connection", "render", "physics"];
const CONNECTION_FIELDS: &[&str] = &[
    "initialQuery",
    "uri",
    "username",
    "password",
    "encryptionMode",
    "trustMode",
];
const RENDER_FIELDS: &[&str] = &["node", "edge", "layout"];
const NODE_FIELDS: &[&str] = &["font", "scaling"];
const FONT_FIELDS: &[&str] = &["size", "strokeWidth"];
const EDGE_FIELDS: &[&str] = &["arrowToEnabled", "length"];
const LAYOUT_FIELDS: &[&str] = &["improvedLayout", "hierarchical"];
const HIERARCHICAL_FIELDS: &[&str] = &["enabled", "sortMethod"];
const PHYSICS_FIELDS: &[&str] = &[
    "enabled",
    "timestep",
    "adaptiveTimestep",
    "stabilization",
    BARNES_HUT,
    "gravitationalConstant",
    "springConstant",
    "springLength",
];
const BARNES_HUT: &str = "barnesHut";
const STABILIZATION_FIELDS: &[&str] = &["iterations", "fit"];

/// Resolve a partial configuration against the built-in defaults.
///
/// `null` is treated as an empty partial. Neither input is modified; the
/// result shares nothing with either.
pub fn resolve_config(partial: &Value) -> Result<EffectiveConfig, ConfigError> {
    let defaults = baseline();
    let root = Section::root(partial)?;

    let effective = EffectiveConfig {
        connection: resolve_connection(&root.child("connection")?, &defaults.connection)?,
        render: resolve_render(&root.child("render")?, &defaults.render)?,
        physics: resolve_physics(&root.child("physics")?, &defaults.physics)?,
        extra: root.extra(ROOT_FIELDS, &defaults.extra),
    };

    tracing::debug!(
        uri = %effective.connection.uri,
        forces = effective.physics.forces.is_some(),
        "resolved graph view config"
    );
    if !effective.connection.has_credentials() {
        tracing::warn!(uri = %effective.connection.uri, "no password configured for graph database");
    }

    Ok(effective)
}

/// Merge partial layers in precedence order, then resolve once.
///
/// A field group may be completed across layers.
pub fn resolve_layers(layers: Vec<Value>) -> Result<EffectiveConfig, ConfigError> {
    tracing::debug!(layers = layers.len(), "merging config layers");
    resolve_config(&merge_layers(layers))
}

fn resolve_connection(
    section: &Section<'_>,
    default: &ConnectionConfig,
) -> Result<ConnectionConfig, ConfigError> {
    Ok(ConnectionConfig {
        initial_query: section.string("initialQuery", &default.initial_query)?,
        uri: section.string("uri", &default.uri)?,
        username: section.string("username", &default.username)?,
        password: section.string("password", &default.password)?,
        encryption_mode: section.enumerated(
            "encryptionMode",
            default.encryption_mode,
            EncryptionMode::VARIANTS,
        )?,
        trust_mode: section.enumerated("trustMode", default.trust_mode, TrustMode::VARIANTS)?,
        extra: section.extra(CONNECTION_FIELDS, &default.extra),
    })
}

fn resolve_render(section: &Section<'_>, default: &RenderConfig) -> Result<RenderConfig, ConfigError> {
    let node = section.child("node")?;
    let font = node.child("font")?;
    let edge = section.child("edge")?;
    let layout = section.child("layout")?;
    let hierarchical = layout.child("hierarchical")?;

    Ok(RenderConfig {
        node: NodeStyle {
            font: FontStyle {
                size: font.number("size", default.node.font.size)?,
                stroke_width: font.number("strokeWidth", default.node.font.stroke_width)?,
                extra: font.extra(FONT_FIELDS, &default.node.font.extra),
            },
            // Every scaling rule is opaque, so the whole map merges by key
            scaling: node.child("scaling")?.extra(&[], &default.node.scaling),
            extra: node.extra(NODE_FIELDS, &default.node.extra),
        },
        edge: EdgeStyle {
            arrow_to_enabled: edge.boolean("arrowToEnabled", default.edge.arrow_to_enabled)?,
            length: edge.number("length", default.edge.length)?,
            extra: edge.extra(EDGE_FIELDS, &default.edge.extra),
        },
        layout: LayoutConfig {
            improved_layout: layout.boolean("improvedLayout", default.layout.improved_layout)?,
            hierarchical: HierarchicalLayout {
                enabled: hierarchical.boolean("enabled", default.layout.hierarchical.enabled)?,
                sort_method: hierarchical.enumerated(
                    "sortMethod",
                    default.layout.hierarchical.sort_method,
                    SortMethod::VARIANTS,
                )?,
                extra: hierarchical.extra(HIERARCHICAL_FIELDS, &default.layout.hierarchical.extra),
            },
            extra: layout.extra(LAYOUT_FIELDS, &default.layout.extra),
        },
        extra: section.extra(RENDER_FIELDS, &default.extra),
    })
}

fn resolve_physics(
    section: &Section<'_>,
    default: &PhysicsConfig,
) -> Result<PhysicsConfig, ConfigError> {
    let stabilization = section.child("stabilization")?;
    let barnes_hut = section.child("barnesHut")?;

    Ok(PhysicsConfig {
        enabled: section.optional_boolean("enabled", default.enabled)?,
        timestep: section.optional_number("timestep", default.timestep)?,
        adaptive_timestep: section.boolean("adaptiveTimestep", default.adaptive_timestep)?,
        stabilization: Stabilization {
            iterations: stabilization.count("iterations", default.stabilization.iterations)?,
            fit: stabilization.boolean("fit", default.stabilization.fit)?,
            extra: stabilization.extra(STABILIZATION_FIELDS, &default.stabilization.extra),
        },
        forces: resolve_forces(section, &barnes_hut, default.forces)?,
        extra: physics_extra(section, &barnes_hut, &default.extra),
    })
}

/// Pass-through keys of `physics`, plus non-member keys of `physics.barnesHut`.
fn physics_extra(section: &Section<'_>, barnes_hut: &Section<'_>, default: &Extra) -> Extra {
    let mut extra = section.extra(PHYSICS_FIELDS, default);
    let nested = barnes_hut.extra(ForceParameters::FIELDS, &Extra::new());
    if !nested.is_empty() {
        let merged = match extra.remove(BARNES_HUT) {
            Some(Value::Object(base)) => merge_maps(base, nested),
            _ => nested,
        };
        extra.insert(BARNES_HUT.to_string(), Value::Object(merged));
    }
    extra
}

/// Where a force member was supplied: nested under `barnesHut` first, then flat.
fn locate<'s, 'a>(flat: &'s Section<'a>, nested: &'s Section<'a>, key: &str) -> Option<&'s Section<'a>> {
    [nested, flat]
        .into_iter()
        .find(|section| section.raw(key).is_some_and(|v| !v.is_null()))
}

/// All three force members or none of them.
///
/// Members may sit flat under `physics` or under `physics.barnesHut`.
/// Explicit `null`s for every member clear the group.
fn resolve_forces(
    flat: &Section<'_>,
    nested: &Section<'_>,
    default: Option<ForceParameters>,
) -> Result<Option<ForceParameters>, ConfigError> {
    let fields = ForceParameters::FIELDS;
    let present = |key: &str| flat.raw(key).is_some() || nested.raw(key).is_some();

    if fields.iter().all(|key| locate(flat, nested, key).is_none()) {
        let cleared = fields.iter().copied().any(present);
        return Ok(if cleared { None } else { default });
    }

    // Report in the shape the caller used
    let reporter = if fields.iter().any(|key| nested.raw(key).is_some()) {
        nested
    } else {
        flat
    };
    let missing: Vec<String> = fields
        .iter()
        .filter(|key| locate(flat, nested, key).is_none())
        .map(|key| reporter.path_of(key))
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::IncompleteFieldGroup {
            group: ForceParameters::GROUP.to_string(),
            missing,
        });
    }

    let number = |key: &str| locate(flat, nested, key).unwrap_or(flat).required_number(key);
    Ok(Some(ForceParameters {
        gravitational_constant: number("gravitationalConstant")?,
        spring_constant: number("springConstant")?,
        spring_length: number("springLength")?,
    }))
}

/// One object of the partial, with its dotted path.
///
/// `fields` is `None` when the caller did not supply the object at all.
struct Section<'a> {
    path: String,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Section<'a> {
    fn root(partial: &'a Value) -> Result<Self, ConfigError> {
        let fields = match partial {
            Value::Null => None,
            Value::Object(map) => Some(map),
            other => return Err(ConfigError::invalid_field("<root>", "object", other.clone())),
        };
        Ok(Self {
            path: String::new(),
            fields,
        })
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn raw(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|map| map.get(key))
    }

    fn child(&self, key: &str) -> Result<Section<'a>, ConfigError> {
        let path = self.path_of(key);
        let fields = match self.raw(key) {
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => return Err(ConfigError::invalid_field(path, "object", other.clone())),
        };
        Ok(Section { path, fields })
    }

    fn leaf<T>(
        &self,
        key: &str,
        expected: &str,
        default: impl FnOnce() -> T,
        convert: impl FnOnce(&Value) -> Option<T>,
    ) -> Result<T, ConfigError> {
        match self.raw(key) {
            None => Ok(default()),
            Some(value) => convert(value)
                .ok_or_else(|| ConfigError::invalid_field(self.path_of(key), expected, value.clone())),
        }
    }

    fn string(&self, key: &str, default: &str) -> Result<String, ConfigError> {
        self.leaf(key, "string", || default.to_string(), |v| v.as_str().map(str::to_string))
    }

    fn boolean(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        self.leaf(key, "boolean", || default, Value::as_bool)
    }

    fn number(&self, key: &str, default: f64) -> Result<f64, ConfigError> {
        self.leaf(key, "number", || default, Value::as_f64)
    }

    fn count(&self, key: &str, default: u32) -> Result<u32, ConfigError> {
        self.leaf(key, "non-negative integer", || default, |v| match v.as_u64() {
            Some(n) => u32::try_from(n).ok(),
            // 200.0 is an integer too
            None => v
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u32),
        })
    }

    fn required_number(&self, key: &str) -> Result<f64, ConfigError> {
        let value = self.raw(key).cloned().unwrap_or(Value::Null);
        value
            .as_f64()
            .ok_or_else(|| ConfigError::invalid_field(self.path_of(key), "number", value))
    }

    fn optional_boolean(&self, key: &str, default: Option<bool>) -> Result<Option<bool>, ConfigError> {
        self.leaf(key, "boolean or null", || default, |v| match v {
            Value::Null => Some(None),
            other => other.as_bool().map(Some),
        })
    }

    fn optional_number(&self, key: &str, default: Option<f64>) -> Result<Option<f64>, ConfigError> {
        self.leaf(key, "number or null", || default, |v| match v {
            Value::Null => Some(None),
            other => other.as_f64().map(Some),
        })
    }

    fn enumerated<T>(&self, key: &str, default: T, variants: &[&str]) -> Result<T, ConfigError>
    where
        T: FromStr<Err = UnknownVariant>,
    {
        let expected = format!("one of {}", variants.join(", "));
        self.leaf(key, &expected, || default, |v| v.as_str().and_then(|s| s.parse().ok()))
    }

    /// Keys outside `known`, deep-merged over the default pass-through map.
    fn extra(&self, known: &[&str], default: &Extra) -> Extra {
        let overlay: Map<String, Value> = self
            .fields
            .into_iter()
            .flatten()
            .filter(|(key, _)| !known.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        merge_maps(default.clone(), overlay)
    }
}
