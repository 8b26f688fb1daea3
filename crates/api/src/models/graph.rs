use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of graph a [`GraphView`] was extracted from.
///
/// `EventsList` and `Event` name synthetic graphs: the flat event-node
/// listing and a BFS-walked event subgraph respectively.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum GraphType {
    Function,
    EventGraph,
    EventsList,
    Event,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct PinView {
    /// Session-stable identifier, unique within the owning asset.
    pub pin_id: String,
    pub name: String,
    /// Execution pins sequence control flow; data pins carry values.
    pub is_execution: bool,
    pub data_type: String,
    pub is_connected: bool,
    pub default_value: String,
    pub is_input: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct NodeView {
    /// Session-stable identifier, unique within the owning asset.
    pub node_id: String,
    pub node_type: String,
    pub title: String,
    pub position_x: i32,
    pub position_y: i32,
    pub comment: String,
    pub input_pins: Vec<PinView>,
    pub output_pins: Vec<PinView>,
    /// Node-kind specific extras (FunctionName, VariableName, EventName, ...).
    pub properties: IndexMap<String, String>,
}

/// One wire between two pins. Both endpoints always belong to nodes in the
/// same [`GraphView`]; connections never cross graphs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ConnectionView {
    pub source_node_id: String,
    pub source_pin_id: String,
    pub target_node_id: String,
    pub target_pin_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct GraphView {
    pub name: String,
    pub graph_type: GraphType,
    pub nodes: Vec<NodeView>,
    pub connections: Vec<ConnectionView>,
    /// Pagination and provenance markers (TotalNodes, Paginated, ...).
    pub metadata: IndexMap<String, String>,
}

impl GraphView {
    pub fn new(name: impl Into<String>, graph_type: GraphType) -> Self {
        Self {
            name: name.into(),
            graph_type,
            nodes: Vec::new(),
            connections: Vec::new(),
            metadata: IndexMap::new(),
        }
    }
}
