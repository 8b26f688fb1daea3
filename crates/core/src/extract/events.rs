//! Event-node listing and execution-flow subgraph traversal.

use std::collections::{HashSet, VecDeque};

use bluescope_api::models::{ConnectionView, GraphType, GraphView, NodeView};

use crate::asset::{AssetGraph, AssetNode, BlueprintAsset, NodeId};

use super::graphs::pin_view;

/// Flat scan over all event graphs for event nodes, optionally restricted to
/// one event name (case-insensitive). No traversal of downstream nodes.
pub fn extract_event_nodes(asset: &BlueprintAsset, event_filter: Option<&str>) -> Vec<NodeView> {
    let mut nodes = Vec::new();

    for graph in &asset.event_graphs {
        for node in &graph.nodes {
            let Some(event) = node.event_name() else {
                continue;
            };
            if let Some(filter) = event_filter {
                if !event.eq_ignore_ascii_case(filter) {
                    continue;
                }
            }

            let mut view = base_node_view(node);
            view.title = event.to_string();
            view.properties
                .insert("GraphName".into(), graph.name.clone());
            view.properties.insert("EventName".into(), event.to_string());
            nodes.push(view);
        }
    }

    nodes
}

/// Breadth-first walk of the execution flow reachable from the named event.
///
/// Returns `None` when no event graph contains an event of that name — a
/// normal empty result, not an error. Only execution pins enqueue further
/// nodes; data pins are recorded on the emitted nodes but never followed.
/// The visited set makes cyclic wiring (loop nodes feeding back into
/// themselves) terminate.
pub fn event_graph(asset: &BlueprintAsset, event_name: &str, max_nodes: usize) -> Option<GraphView> {
    if event_name.is_empty() {
        return None;
    }

    for graph in &asset.event_graphs {
        let Some(start) = graph.nodes.iter().find(|node| {
            node.event_name()
                .is_some_and(|event| event.eq_ignore_ascii_case(event_name))
        }) else {
            continue;
        };

        return Some(walk_event_subgraph(graph, start, event_name, max_nodes));
    }

    None
}

fn walk_event_subgraph(
    graph: &AssetGraph,
    start: &AssetNode,
    event_name: &str,
    max_nodes: usize,
) -> GraphView {
    let mut view = GraphView::new(event_name, GraphType::Event);
    view.metadata.insert("GraphName".into(), graph.name.clone());

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(start.id);

    while !queue.is_empty() {
        // Budget check happens before the pop, so hitting the cap marks the
        // result paginated even when the rest of the queue is all revisits.
        if max_nodes > 0 && view.nodes.len() >= max_nodes {
            view.metadata.insert("Paginated".into(), "true".into());
            view.metadata
                .insert("NodesShown".into(), view.nodes.len().to_string());
            view.metadata
                .insert("MaxNodes".into(), max_nodes.to_string());
            break;
        }

        let Some(current_id) = queue.pop_front() else {
            break;
        };
        if !visited.insert(current_id) {
            continue;
        }
        let Some(node) = graph.node(current_id) else {
            continue;
        };

        let node_view = base_node_view(node);

        for pin in &node.pins {
            if !pin.pin_type.is_exec() {
                continue;
            }
            // Connections are oriented as visited: the current node is
            // always the source side, whichever direction the pin faces.
            for link in &pin.links {
                view.connections.push(ConnectionView {
                    source_node_id: node.id.to_string(),
                    source_pin_id: pin.id.to_string(),
                    target_node_id: link.node.to_string(),
                    target_pin_id: link.pin.to_string(),
                });
                queue.push_back(link.node);
            }
        }

        view.nodes.push(node_view);
    }

    // A budget cut can leave connections aimed at nodes that were never
    // emitted; drop them so every endpoint resolves within this view.
    let emitted: HashSet<&str> = view.nodes.iter().map(|n| n.node_id.as_str()).collect();
    view.connections.retain(|c| {
        emitted.contains(c.source_node_id.as_str()) && emitted.contains(c.target_node_id.as_str())
    });

    view
}

fn base_node_view(node: &AssetNode) -> NodeView {
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
        let pin_view = pin_view(pin);
        if pin_view.is_input {
            view.input_pins.push(pin_view);
        } else {
            view.output_pins.push(pin_view);
        }
    }

    view
}
