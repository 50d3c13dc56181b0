//! Concurrent access to the shared defaults

use graph_view_config::{get_defaults, resolve_config};
use serde_json::json;
use std::thread;

#[test]
fn concurrent_first_access_and_resolution() {
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                scope.spawn(move || {
                    let partial = json!({"render": {"edge": {"length": 100 + i}}});
                    let mut config = resolve_config(&partial).unwrap();
                    // Each thread owns its copy
                    config.render.node.font.size = f64::from(i);
                    config
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, config) in results.iter().enumerate() {
        assert_eq!(config.render.edge.length, 100.0 + i as f64);
        assert_eq!(config.render.node.font.size, i as f64);
    }
    assert_eq!(get_defaults().render.node.font.size, 26.0);
}
