//! Render sub-schema (node, edge and layout styling).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Extra, UnknownVariant};

/// Styling defaults for nodes and edges, plus layout hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub node: NodeStyle,
    pub edge: EdgeStyle,
    pub layout: LayoutConfig,

    /// Unrecognized keys, passed through to the engine.
    #[serde(flatten)]
    pub extra: Extra,
}

impl RenderConfig {
    pub const SCHEMA_VERSION: u32 = 1;
    pub const SCHEMA_ID: &'static str = "graph-view/render@1";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub font: FontStyle,

    /// Scaling rules by name. Rules are opaque to this crate.
    pub scaling: Extra,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontStyle {
    pub size: f64,
    pub stroke_width: f64,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// Draw an arrow head at the target end.
    pub arrow_to_enabled: bool,

    /// Preferred rest length in layout units.
    pub length: f64,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub improved_layout: bool,
    pub hierarchical: HierarchicalLayout,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalLayout {
    pub enabled: bool,
    pub sort_method: SortMethod,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Level assignment strategy for hierarchical layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Most connected nodes on top.
    Hubsize,
    /// Follow edge direction.
    Directed,
}

impl SortMethod {
    pub const VARIANTS: &'static [&'static str] = &["hubsize", "directed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hubsize => "hubsize",
            Self::Directed => "directed",
        }
    }
}

impl FromStr for SortMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hubsize" => Ok(Self::Hubsize),
            "directed" => Ok(Self::Directed),
            other => Err(UnknownVariant::new("sort method", other, Self::VARIANTS)),
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
