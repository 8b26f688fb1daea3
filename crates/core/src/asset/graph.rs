//! In-memory node/pin/edge model for one blueprint graph.
//!
//! Ids are arena indices handed out by the asset builder at construction
//! time. They are stable for the lifetime of the loaded asset and unique
//! within it, which is all the extraction layer needs for its serializable
//! node/pin identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClassRef;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinDirection {
    Input,
    Output,
}

/// Type tag of a pin. Execution pins sequence control flow; data pins carry
/// a value of the named type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PinType {
    Exec,
    Data(String),
}

impl PinType {
    pub fn is_exec(&self) -> bool {
        matches!(self, PinType::Exec)
    }

    pub fn data_type(&self) -> &str {
        match self {
            PinType::Exec => "exec",
            PinType::Data(ty) => ty,
        }
    }
}

/// Endpoint of a wire: the linked pin together with its owning node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinLink {
    pub node: NodeId,
    pub pin: PinId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetPin {
    pub id: PinId,
    pub name: String,
    pub direction: PinDirection,
    pub pin_type: PinType,
    /// Pins on other nodes of the same graph this pin is wired to. Links are
    /// recorded on both endpoints.
    #[serde(default)]
    pub links: Vec<PinLink>,
    #[serde(default)]
    pub default_value: String,
    /// Statically-known class default for unconnected class pins.
    #[serde(default)]
    pub default_object: Option<ClassRef>,
}

impl AssetPin {
    pub fn is_connected(&self) -> bool {
        !self.links.is_empty()
    }
}

/// Closed set of node subkinds the extractor distinguishes. Anything else is
/// carried as `Other` with its raw type name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum NodeKind {
    FunctionEntry,
    CallFunction {
        function: String,
        /// Class that owns the called function, when known.
        target: Option<ClassRef>,
    },
    VariableGet {
        variable: String,
    },
    VariableSet {
        variable: String,
    },
    Event {
        event: String,
    },
    SpawnActor,
    DynamicCast {
        target: ClassRef,
    },
    Other(String),
}

impl NodeKind {
    /// Display name of the node's structural type.
    pub fn type_name(&self) -> &str {
        match self {
            NodeKind::FunctionEntry => "FunctionEntry",
            NodeKind::CallFunction { .. } => "CallFunction",
            NodeKind::VariableGet { .. } => "VariableGet",
            NodeKind::VariableSet { .. } => "VariableSet",
            NodeKind::Event { .. } => "Event",
            NodeKind::SpawnActor => "SpawnActor",
            NodeKind::DynamicCast { .. } => "DynamicCast",
            NodeKind::Other(name) => name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub title: String,
    #[serde(default)]
    pub position: (i32, i32),
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub pins: Vec<AssetPin>,
}

impl AssetNode {
    pub fn event_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Event { event } => Some(event),
            _ => None,
        }
    }

    pub fn pin(&self, id: PinId) -> Option<&AssetPin> {
        self.pins.iter().find(|p| p.id == id)
    }

    /// Find a pin by name (case-insensitive) and direction.
    pub fn find_pin(&self, name: &str, direction: PinDirection) -> Option<&AssetPin> {
        self.pins
            .iter()
            .find(|p| p.direction == direction && p.name.eq_ignore_ascii_case(name))
    }
}

/// Function-graph flag: callable from other blueprints.
pub const FUNC_CALLABLE: u32 = 1 << 0;
/// Function-graph flag: pure (no side effects, no execution pins needed).
pub const FUNC_PURE: u32 = 1 << 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetGraph {
    pub name: String,
    /// `FUNC_*` bits; meaningful for function graphs only.
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub nodes: Vec<AssetNode>,
}

impl AssetGraph {
    pub fn node(&self, id: NodeId) -> Option<&AssetNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The function entry node, if the graph has one.
    pub fn entry_node(&self) -> Option<&AssetNode> {
        self.nodes
            .iter()
            .find(|n| matches!(n.kind, NodeKind::FunctionEntry))
    }
}
