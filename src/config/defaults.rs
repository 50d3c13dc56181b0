//! Built-in defaults
//!
//! The baseline is built once, on first access, and never handed out by
//! reference outside this crate: callers always receive their own copy.

use std::sync::OnceLock;

use graph_view_schema::{
    ConnectionConfig, EdgeStyle, EncryptionMode, Extra, FontStyle, HierarchicalLayout,
    LayoutConfig, NodeStyle, PhysicsConfig, RenderConfig, SortMethod, Stabilization, TrustMode,
};

use super::effective::EffectiveConfig;

/// Query run on load: a random sample of ranked nodes and their neighbours.
pub const DEFAULT_INITIAL_QUERY: &str = concat!(
    "MATCH (n) WHERE exists(n.pagerank)\n",
    "WITH (n), RAND() AS random\n",
    "ORDER BY random LIMIT 3000\n",
    "OPTIONAL MATCH (n)-[r]-(m)\n",
    "//WITH n,r,m WHERE exists(n.pagerank) AND exists(m.pagerank) AND exists(m.community)\n",
    "RETURN n, r, m;",
);

pub const DEFAULT_URI: &str = "bolt://localhost:7687";
pub const DEFAULT_USERNAME: &str = "neo4j";

static BASELINE: OnceLock<EffectiveConfig> = OnceLock::new();

pub(crate) fn baseline() -> &'static EffectiveConfig {
    BASELINE.get_or_init(builtin)
}

/// Independent copy of the built-in defaults.
pub fn get_defaults() -> EffectiveConfig {
    baseline().clone()
}

fn builtin() -> EffectiveConfig {
    EffectiveConfig {
        connection: ConnectionConfig {
            initial_query: DEFAULT_INITIAL_QUERY.to_string(),
            uri: DEFAULT_URI.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            // No credential ships with the defaults
            password: String::new(),
            encryption_mode: EncryptionMode::Off,
            trust_mode: TrustMode::AllCertificates,
            extra: Extra::new(),
        },
        render: RenderConfig {
            node: NodeStyle {
                font: FontStyle {
                    size: 26.0,
                    stroke_width: 7.0,
                    extra: Extra::new(),
                },
                scaling: Extra::new(),
                extra: Extra::new(),
            },
            edge: EdgeStyle {
                arrow_to_enabled: false,
                length: 200.0,
                extra: Extra::new(),
            },
            layout: LayoutConfig {
                improved_layout: false,
                hierarchical: HierarchicalLayout {
                    enabled: false,
                    sort_method: SortMethod::Hubsize,
                    extra: Extra::new(),
                },
                extra: Extra::new(),
            },
            extra: Extra::new(),
        },
        physics: PhysicsConfig {
            enabled: None,
            timestep: None,
            adaptive_timestep: true,
            stabilization: Stabilization {
                iterations: 200,
                fit: true,
                extra: Extra::new(),
            },
            forces: None,
            extra: Extra::new(),
        },
        extra: Extra::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = get_defaults();
        assert_eq!(defaults.connection.uri, "bolt://localhost:7687");
        assert_eq!(defaults.connection.encryption_mode, EncryptionMode::Off);
        assert_eq!(defaults.connection.trust_mode, TrustMode::AllCertificates);
        assert_eq!(defaults.render.node.font.size, 26.0);
        assert_eq!(defaults.render.node.font.stroke_width, 7.0);
        assert!(defaults.render.node.scaling.is_empty());
        assert!(!defaults.render.edge.arrow_to_enabled);
        assert_eq!(defaults.render.edge.length, 200.0);
        assert!(defaults.physics.adaptive_timestep);
        assert_eq!(defaults.physics.stabilization.iterations, 200);
        assert!(defaults.physics.stabilization.fit);
    }

    #[test]
    fn test_advanced_fields_absent() {
        let defaults = get_defaults();
        assert!(defaults.physics.forces.is_none());
        assert!(defaults.physics.enabled.is_none());
        assert!(defaults.physics.timestep.is_none());
    }

    #[test]
    fn test_no_credential_shipped() {
        assert!(!get_defaults().connection.has_credentials());
    }

    #[test]
    fn test_query_kept_verbatim() {
        let query = get_defaults().connection.initial_query;
        assert!(query.starts_with("MATCH (n) WHERE exists(n.pagerank)"));
        assert!(query.contains("\n//WITH n,r,m"));
        assert!(query.ends_with("RETURN n, r, m;"));
    }

    #[test]
    fn test_copies_are_independent() {
        let mut first = get_defaults();
        first.render.node.font.size = 99.0;
        first.connection.password.push_str("changed");

        let second = get_defaults();
        assert_eq!(second.render.node.font.size, 26.0);
        assert!(second.connection.password.is_empty());
    }
}
