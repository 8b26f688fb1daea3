use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How one blueprint relates to another.
///
/// `EventChain` and `DataFlow` are part of the vocabulary but no resolver
/// currently produces them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum ReferenceKind {
    Inheritance,
    FunctionCall,
    VariableType,
    DirectReference,
    IndirectReference,
    EventChain,
    DataFlow,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum ReferenceDirection {
    /// From this blueprint to the target.
    Outgoing,
    /// From the target to this blueprint.
    Incoming,
}

/// One edge in the cross-asset reference graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct ReferenceView {
    pub kind: ReferenceKind,
    pub direction: ReferenceDirection,
    pub target_path: String,
    pub target_name: String,
    /// Human-readable provenance ("Parent Class", "Function: TakeDamage", ...).
    pub context: String,
    pub is_indirect: bool,
    /// Paths the reference was discovered through. At most one entry: indirect
    /// resolution is a single extra hop, never a full transitive closure.
    pub reference_chain: Vec<String>,
    pub properties: IndexMap<String, String>,
}

impl ReferenceView {
    pub fn new(
        kind: ReferenceKind,
        direction: ReferenceDirection,
        target_path: impl Into<String>,
        target_name: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            direction,
            target_path: target_path.into(),
            target_name: target_name.into(),
            context: context.into(),
            is_indirect: false,
            reference_chain: Vec::new(),
            properties: IndexMap::new(),
        }
    }
}
