use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::graph::GraphView;
use super::reference::ReferenceView;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct ParamView {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub is_output: bool,
    pub default_value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct FunctionView {
    pub name: String,
    /// Event entry points (BeginPlay-style) rather than callable functions.
    pub is_event: bool,
    pub params: Vec<ParamView>,
    pub return_type: String,
    pub description: String,
    pub is_callable: bool,
    pub is_pure: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct VariableView {
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: String,
    pub default_value: String,
    pub is_exposed: bool,
    pub is_read_only: bool,
    pub is_replicated: bool,
    pub category: String,
}

/// Aggregate projection of one blueprint asset.
///
/// Constructed fresh per request at the requested detail level and never
/// mutated after it is handed to the serialization boundary. Which sections
/// are populated depends on the level and mode the projector was given.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct BlueprintView {
    pub name: String,
    pub path: String,
    pub parent_class: String,
    pub functions: Vec<FunctionView>,
    pub variables: Vec<VariableView>,
    pub graphs: Vec<GraphView>,
    pub references: Vec<ReferenceView>,
    pub description: String,
    pub metadata: IndexMap<String, String>,
}
