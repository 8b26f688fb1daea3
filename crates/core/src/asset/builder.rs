//! Fluent construction of [`BlueprintAsset`]s with arena-index ids.
//!
//! Node and pin ids are handed out from per-asset counters, so every id is
//! unique within the asset it belongs to and connections can be wired up by
//! id after both endpoints exist.

use super::graph::{
    AssetGraph, AssetNode, AssetPin, NodeId, NodeKind, PinDirection, PinId, PinLink, PinType,
};
use super::{BlueprintAsset, ClassRef, VariableDesc};

pub struct AssetBuilder {
    asset: BlueprintAsset,
    next_node: u32,
    next_pin: u32,
}

impl AssetBuilder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            asset: BlueprintAsset {
                name: name.into(),
                path: path.into(),
                parent_class: None,
                description: String::new(),
                variables: Vec::new(),
                function_graphs: Vec::new(),
                event_graphs: Vec::new(),
            },
            next_node: 0,
            next_pin: 0,
        }
    }

    pub fn parent(mut self, class: ClassRef) -> Self {
        self.asset.parent_class = Some(class);
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.asset.description = text.into();
        self
    }

    pub fn variable(mut self, variable: VariableDesc) -> Self {
        self.asset.variables.push(variable);
        self
    }

    pub fn function_graph(
        mut self,
        name: impl Into<String>,
        flags: u32,
        build: impl FnOnce(&mut GraphBuilder),
    ) -> Self {
        let mut graph = AssetGraph {
            name: name.into(),
            flags,
            nodes: Vec::new(),
        };
        let mut builder = GraphBuilder {
            graph: &mut graph,
            next_node: &mut self.next_node,
            next_pin: &mut self.next_pin,
        };
        build(&mut builder);
        self.asset.function_graphs.push(graph);
        self
    }

    pub fn event_graph(
        mut self,
        name: impl Into<String>,
        build: impl FnOnce(&mut GraphBuilder),
    ) -> Self {
        let mut graph = AssetGraph {
            name: name.into(),
            flags: 0,
            nodes: Vec::new(),
        };
        let mut builder = GraphBuilder {
            graph: &mut graph,
            next_node: &mut self.next_node,
            next_pin: &mut self.next_pin,
        };
        build(&mut builder);
        self.asset.event_graphs.push(graph);
        self
    }

    pub fn build(self) -> BlueprintAsset {
        self.asset
    }
}

/// Builder scope for one graph. Connections can only be wired between pins
/// created through the same scope, which keeps wires within their graph.
pub struct GraphBuilder<'a> {
    graph: &'a mut AssetGraph,
    next_node: &'a mut u32,
    next_pin: &'a mut u32,
}

impl GraphBuilder<'_> {
    pub fn add_node(&mut self, kind: NodeKind, title: impl Into<String>) -> NodeId {
        let id = NodeId(*self.next_node);
        *self.next_node += 1;
        self.graph.nodes.push(AssetNode {
            id,
            kind,
            title: title.into(),
            position: (0, 0),
            comment: String::new(),
            pins: Vec::new(),
        });
        id
    }

    pub fn set_position(&mut self, node: NodeId, x: i32, y: i32) {
        if let Some(n) = self.node_mut(node) {
            n.position = (x, y);
        }
    }

    pub fn set_comment(&mut self, node: NodeId, comment: impl Into<String>) {
        if let Some(n) = self.node_mut(node) {
            n.comment = comment.into();
        }
    }

    pub fn add_pin(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        direction: PinDirection,
        pin_type: PinType,
    ) -> PinId {
        let id = PinId(*self.next_pin);
        *self.next_pin += 1;
        if let Some(n) = self.node_mut(node) {
            n.pins.push(AssetPin {
                id,
                name: name.into(),
                direction,
                pin_type,
                links: Vec::new(),
                default_value: String::new(),
                default_object: None,
            });
        }
        id
    }

    /// Add the conventional execution pin pair: an "exec" input and a "then"
    /// output. Returns `(input, output)`.
    pub fn exec_pins(&mut self, node: NodeId) -> (PinId, PinId) {
        let input = self.add_pin(node, "exec", PinDirection::Input, PinType::Exec);
        let output = self.add_pin(node, "then", PinDirection::Output, PinType::Exec);
        (input, output)
    }

    pub fn set_pin_default(&mut self, node: NodeId, pin: PinId, value: impl Into<String>) {
        if let Some(p) = self.pin_mut(node, pin) {
            p.default_value = value.into();
        }
    }

    pub fn set_pin_default_object(&mut self, node: NodeId, pin: PinId, class: ClassRef) {
        if let Some(p) = self.pin_mut(node, pin) {
            p.default_object = Some(class);
        }
    }

    /// Wire two pins together. The link is recorded on both endpoints.
    pub fn connect(&mut self, from: (NodeId, PinId), to: (NodeId, PinId)) {
        if let Some(p) = self.pin_mut(from.0, from.1) {
            p.links.push(PinLink {
                node: to.0,
                pin: to.1,
            });
        }
        if let Some(p) = self.pin_mut(to.0, to.1) {
            p.links.push(PinLink {
                node: from.0,
                pin: from.1,
            });
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut AssetNode> {
        self.graph.nodes.iter_mut().find(|n| n.id == id)
    }

    fn pin_mut(&mut self, node: NodeId, pin: PinId) -> Option<&mut AssetPin> {
        self.node_mut(node)
            .and_then(|n| n.pins.iter_mut().find(|p| p.id == pin))
    }
}
