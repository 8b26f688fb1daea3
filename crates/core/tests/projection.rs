mod common;

use bluescope_api::models::{DetailLevel, ExtractOptions, ExtractionMode};
use common::sample_project;

#[test]
fn test_basic_projection_is_empty_beyond_identity_for_all_assets() {
    let handle = sample_project();

    for view in handle.all_blueprints(DetailLevel::Basic) {
        assert!(view.functions.is_empty(), "{} had functions", view.path);
        assert!(view.variables.is_empty(), "{} had variables", view.path);
        assert!(view.description.is_empty(), "{} had a description", view.path);
        assert!(!view.name.is_empty());
        assert!(!view.path.is_empty());
    }
}

#[test]
fn test_medium_projection_is_lossy_for_all_assets() {
    let handle = sample_project();

    for view in handle.all_blueprints(DetailLevel::Medium) {
        for function in &view.functions {
            assert!(function.description.is_empty());
            for param in &function.params {
                assert!(param.default_value.is_empty());
            }
        }
        for variable in &view.variables {
            assert!(variable.default_value.is_empty());
            assert!(variable.category.is_empty());
        }
    }
}

#[test]
fn test_full_projection_of_enemy_scenario() {
    let handle = sample_project();
    let view = handle
        .blueprint_by_path(
            "/Game/Enemy",
            DetailLevel::Full,
            ExtractionMode::None,
            &ExtractOptions::default(),
        )
        .unwrap();

    assert_eq!(view.parent_class, "BaseCharacter");

    let take_damage = &view.functions[0];
    assert_eq!(take_damage.name, "TakeDamage");
    assert_eq!(take_damage.params.len(), 1);
    assert_eq!(take_damage.params[0].name, "Amount");
    assert_eq!(take_damage.params[0].param_type, "int");
    assert!(!take_damage.params[0].is_output);

    let health = &view.variables[0];
    assert_eq!(health.default_value, "100.0");
    assert_eq!(health.category, "Stats");
}

#[test]
fn test_full_projection_is_idempotent() {
    let handle = sample_project();
    let options = ExtractOptions::default();

    let first = handle
        .blueprint_by_path("/Game/Enemy", DetailLevel::Full, ExtractionMode::Graphs, &options)
        .unwrap();
    let second = handle
        .blueprint_by_path("/Game/Enemy", DetailLevel::Full, ExtractionMode::Graphs, &options)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_graph_pagination_never_exceeds_budget_or_dangles() {
    let handle = sample_project();
    let view = handle
        .blueprint_by_path(
            "/Game/Enemy",
            DetailLevel::Full,
            ExtractionMode::Graphs,
            &ExtractOptions {
                graph_filter: None,
                max_graphs: 0,
                max_nodes: 3,
            },
        )
        .unwrap();

    for graph in &view.graphs {
        assert!(graph.nodes.len() <= 3, "graph {} over budget", graph.name);
        let ids: std::collections::HashSet<_> =
            graph.nodes.iter().map(|n| n.node_id.as_str()).collect();
        for connection in &graph.connections {
            assert!(ids.contains(connection.source_node_id.as_str()));
            assert!(ids.contains(connection.target_node_id.as_str()));
        }
    }
}

#[test]
fn test_event_graph_bfs_respects_node_budget() {
    let handle = sample_project();
    let graph = handle.event_graph("/Game/Enemy", "BeginPlay", 5).unwrap();

    assert!(graph.nodes.len() <= 5);
    assert_eq!(graph.metadata.get("Paginated").unwrap(), "true");

    // Every emitted node is reachable from BeginPlay over the emitted
    // connections: walk the connection list from the event node.
    let begin = &graph.nodes[0];
    assert_eq!(begin.node_type, "Event");
    let mut reachable = std::collections::HashSet::from([begin.node_id.as_str()]);
    let mut grew = true;
    while grew {
        grew = false;
        for connection in &graph.connections {
            if reachable.contains(connection.source_node_id.as_str())
                && reachable.insert(connection.target_node_id.as_str())
            {
                grew = true;
            }
        }
    }
    for node in &graph.nodes {
        assert!(reachable.contains(node.node_id.as_str()), "{} unreachable", node.title);
    }
}

#[test]
fn test_events_mode_lists_only_event_nodes() {
    let handle = sample_project();
    let view = handle
        .blueprint_by_path(
            "/Game/Enemy",
            DetailLevel::Full,
            ExtractionMode::EventsOnly,
            &ExtractOptions::default(),
        )
        .unwrap();

    let events = &view.graphs[0];
    assert_eq!(events.name, "Events");
    assert_eq!(events.nodes.len(), 1);
    assert_eq!(events.nodes[0].title, "BeginPlay");
    assert_eq!(view.metadata.get("EventCount").unwrap(), "1");
}

#[test]
fn test_unknown_asset_path_is_a_clean_miss() {
    let handle = sample_project();
    assert!(handle
        .blueprint_by_path(
            "/Game/DoesNotExist",
            DetailLevel::Full,
            ExtractionMode::None,
            &ExtractOptions::default(),
        )
        .is_none());
    assert!(handle.event_nodes("/Game/DoesNotExist", None).is_none());
    assert!(handle.event_graph("/Game/Enemy", "NoSuchEvent", 0).is_none());
}
