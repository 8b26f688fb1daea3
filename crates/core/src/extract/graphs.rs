//! Bounded extraction of full graph payloads.

use std::collections::HashSet;

use bluescope_api::models::{ConnectionView, GraphType, GraphView, NodeView, PinView};

use crate::asset::{AssetGraph, AssetNode, AssetPin, BlueprintAsset, NodeKind, PinDirection};

/// Walk the asset's graphs into serializable [`GraphView`]s.
///
/// Function graphs come first, then the primary event graph; only the first
/// event graph is surfaced even when the asset has several. The name filter
/// (case-insensitive exact match) applies before the `max_graphs` cap; zero
/// for either limit means unlimited.
pub fn extract_graphs(
    asset: &BlueprintAsset,
    name_filter: Option<&str>,
    max_graphs: usize,
    max_nodes: usize,
) -> Vec<GraphView> {
    // Total counts all graphs on the asset, including event graphs beyond
    // the first that are never surfaced.
    let total_graphs = asset.function_graphs.len() + asset.event_graphs.len();

    let candidates = asset
        .function_graphs
        .iter()
        .map(|graph| (graph, GraphType::Function))
        .chain(
            asset
                .event_graphs
                .first()
                .map(|graph| (graph, GraphType::EventGraph)),
        );

    let mut graphs = Vec::new();
    for (graph, graph_type) in candidates {
        if let Some(filter) = name_filter {
            if !graph.name.eq_ignore_ascii_case(filter) {
                continue;
            }
        }
        if max_graphs > 0 && graphs.len() >= max_graphs {
            break;
        }
        graphs.push(extract_graph(
            graph,
            graph_type,
            total_graphs,
            max_graphs,
            max_nodes,
        ));
    }

    graphs
}

fn extract_graph(
    graph: &AssetGraph,
    graph_type: GraphType,
    total_graphs: usize,
    max_graphs: usize,
    max_nodes: usize,
) -> GraphView {
    let mut view = GraphView::new(&graph.name, graph_type);

    view.metadata
        .insert("TotalGraphs".into(), total_graphs.to_string());
    if max_graphs > 0 {
        view.metadata
            .insert("MaxGraphs".into(), max_graphs.to_string());
    }
    view.metadata
        .insert("TotalNodes".into(), graph.nodes.len().to_string());
    if max_nodes > 0 {
        view.metadata.insert("MaxNodes".into(), max_nodes.to_string());
    }

    for node in &graph.nodes {
        if max_nodes > 0 && view.nodes.len() >= max_nodes {
            view.metadata.insert("Paginated".into(), "true".into());
            view.metadata
                .insert("NodesShown".into(), view.nodes.len().to_string());
            break;
        }
        view.nodes
            .push(extract_node(node, graph_type, &mut view.connections));
    }

    // Truncation must not leave a connection pointing at a node that was
    // dropped; keep only wires with both endpoints present.
    let retained: HashSet<&str> = view.nodes.iter().map(|n| n.node_id.as_str()).collect();
    view.connections.retain(|c| {
        retained.contains(c.source_node_id.as_str()) && retained.contains(c.target_node_id.as_str())
    });

    view
}

/// Emit one node view, appending a [`ConnectionView`] for every link on
/// every pin. Orientation is normalized output→input, so a wire whose two
/// endpoints are both extracted is emitted twice with identical content —
/// deliberately preserved behavior of this extractor (the BFS walker does
/// not share it).
fn extract_node(
    node: &AssetNode,
    graph_type: GraphType,
    connections: &mut Vec<ConnectionView>,
) -> NodeView {
    let mut view = NodeView {
        node_id: node.id.to_string(),
        node_type: node.kind.type_name().to_string(),
        title: node.title.clone(),
        position_x: node.position.0,
        position_y: node.position.1,
        comment: node.comment.clone(),
        ..NodeView::default()
    };

    for pin in &node.pins {
        for link in &pin.links {
            let connection = if pin.direction == PinDirection::Output {
                ConnectionView {
                    source_node_id: node.id.to_string(),
                    source_pin_id: pin.id.to_string(),
                    target_node_id: link.node.to_string(),
                    target_pin_id: link.pin.to_string(),
                }
            } else {
                ConnectionView {
                    source_node_id: link.node.to_string(),
                    source_pin_id: link.pin.to_string(),
                    target_node_id: node.id.to_string(),
                    target_pin_id: pin.id.to_string(),
                }
            };
            connections.push(connection);
        }

        let pin_view = pin_view(pin);
        if pin.direction == PinDirection::Input {
            view.input_pins.push(pin_view);
        } else {
            view.output_pins.push(pin_view);
        }
    }

    match &node.kind {
        NodeKind::CallFunction { function, .. } => {
            view.properties
                .insert("FunctionName".into(), function.clone());
        }
        NodeKind::VariableGet { variable } | NodeKind::VariableSet { variable } => {
            view.properties
                .insert("VariableName".into(), variable.clone());
        }
        NodeKind::Event { event } if graph_type == GraphType::EventGraph => {
            view.properties.insert("EventName".into(), event.clone());
        }
        _ => {}
    }

    view
}

pub(crate) fn pin_view(pin: &AssetPin) -> PinView {
    PinView {
        pin_id: pin.id.to_string(),
        name: pin.name.clone(),
        is_execution: pin.pin_type.is_exec(),
        data_type: pin.pin_type.data_type().to_string(),
        is_connected: pin.is_connected(),
        default_value: pin.default_value.clone(),
        is_input: pin.direction == PinDirection::Input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetBuilder, PinType};

    /// Event graph with a three-node chain: BeginPlay -> Print -> Print2.
    fn chained_asset() -> BlueprintAsset {
        AssetBuilder::new("Chained", "/Game/Chained")
            .function_graph("Helper", 0, |g| {
                let entry = g.add_node(NodeKind::FunctionEntry, "Helper");
                g.add_pin(entry, "then", PinDirection::Output, PinType::Exec);
            })
            .event_graph("EventGraph", |g| {
                let event = g.add_node(
                    NodeKind::Event {
                        event: "BeginPlay".into(),
                    },
                    "Event BeginPlay",
                );
                let event_out = g.add_pin(event, "then", PinDirection::Output, PinType::Exec);
                let print = g.add_node(NodeKind::Other("PrintString".into()), "Print String");
                let (print_in, print_out) = g.exec_pins(print);
                let print2 = g.add_node(NodeKind::Other("PrintString".into()), "Print String");
                let (print2_in, _) = g.exec_pins(print2);
                g.connect((event, event_out), (print, print_in));
                g.connect((print, print_out), (print2, print2_in));
            })
            .build()
    }

    #[test]
    fn test_function_graphs_come_before_the_event_graph() {
        let graphs = extract_graphs(&chained_asset(), None, 0, 0);
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].graph_type, GraphType::Function);
        assert_eq!(graphs[0].name, "Helper");
        assert_eq!(graphs[1].graph_type, GraphType::EventGraph);
    }

    #[test]
    fn test_only_first_event_graph_is_surfaced() {
        let asset = AssetBuilder::new("Multi", "/Game/Multi")
            .event_graph("EventGraph", |_| {})
            .event_graph("EventGraph_1", |_| {})
            .build();
        let graphs = extract_graphs(&asset, None, 0, 0);
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].name, "EventGraph");
        assert_eq!(graphs[0].metadata.get("TotalGraphs").unwrap(), "2");
    }

    #[test]
    fn test_name_filter_is_case_insensitive_exact() {
        let graphs = extract_graphs(&chained_asset(), Some("helper"), 0, 0);
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].name, "Helper");

        let graphs = extract_graphs(&chained_asset(), Some("help"), 0, 0);
        assert!(graphs.is_empty());
    }

    #[test]
    fn test_max_graphs_caps_accepted_graphs() {
        let graphs = extract_graphs(&chained_asset(), None, 1, 0);
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].name, "Helper");
    }

    #[test]
    fn test_each_wire_is_emitted_from_both_endpoints() {
        let graphs = extract_graphs(&chained_asset(), Some("EventGraph"), 0, 0);
        let graph = &graphs[0];
        assert_eq!(graph.nodes.len(), 3);
        // Two wires, each discovered from its output and its input side.
        assert_eq!(graph.connections.len(), 4);
        // Both discoveries normalize to the same output->input orientation.
        let unique: std::collections::HashSet<_> = graph.connections.iter().collect();
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn test_truncation_drops_dangling_connections() {
        let graphs = extract_graphs(&chained_asset(), Some("EventGraph"), 0, 2);
        let graph = &graphs[0];
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.metadata.get("Paginated").unwrap(), "true");
        assert_eq!(graph.metadata.get("NodesShown").unwrap(), "2");

        let ids: std::collections::HashSet<_> =
            graph.nodes.iter().map(|n| n.node_id.as_str()).collect();
        for connection in &graph.connections {
            assert!(ids.contains(connection.source_node_id.as_str()));
            assert!(ids.contains(connection.target_node_id.as_str()));
        }
        // The event->print wire survives (both ends kept), print->print2 dies.
        assert_eq!(graph.connections.len(), 2);
    }

    #[test]
    fn test_node_property_augmentation() {
        let asset = AssetBuilder::new("Props", "/Game/Props")
            .event_graph("EventGraph", |g| {
                g.add_node(
                    NodeKind::Event {
                        event: "Tick".into(),
                    },
                    "Event Tick",
                );
                g.add_node(
                    NodeKind::CallFunction {
                        function: "TakeDamage".into(),
                        target: None,
                    },
                    "Take Damage",
                );
                g.add_node(
                    NodeKind::VariableGet {
                        variable: "Health".into(),
                    },
                    "Get Health",
                );
            })
            .build();

        let graphs = extract_graphs(&asset, None, 0, 0);
        let nodes = &graphs[0].nodes;
        assert_eq!(nodes[0].properties.get("EventName").unwrap(), "Tick");
        assert_eq!(
            nodes[1].properties.get("FunctionName").unwrap(),
            "TakeDamage"
        );
        assert_eq!(nodes[2].properties.get("VariableName").unwrap(), "Health");
    }
}
