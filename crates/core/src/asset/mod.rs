//! Source-side asset model: the loaded, in-memory representation of one
//! blueprint the extraction engine walks. Nothing here owns a pointer to
//! another asset; cross-asset identity is always a path string.

pub mod builder;
pub mod graph;
pub mod store;

pub use builder::{AssetBuilder, GraphBuilder};
pub use graph::{
    AssetGraph, AssetNode, AssetPin, NodeId, NodeKind, PinDirection, PinId, PinLink, PinType,
    FUNC_CALLABLE, FUNC_PURE,
};
pub use store::{clean_parent_class_tag, AssetStore, AssetTag, InMemoryAssetStore};

use serde::{Deserialize, Serialize};

/// Reference to a class, asset-backed or native. `path` is `Some` exactly
/// when the class is generated by a blueprint asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
}

impl ClassRef {
    pub fn native(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    pub fn asset(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
        }
    }

    pub fn is_asset_backed(&self) -> bool {
        self.path.is_some()
    }
}

/// Variable flag: visible to other blueprints.
pub const VAR_EXPOSED: u32 = 1 << 0;
/// Variable flag: read-only in graphs.
pub const VAR_READ_ONLY: u32 = 1 << 1;
/// Variable flag: replicated over the network.
pub const VAR_REPLICATED: u32 = 1 << 2;

/// Structural type descriptor of a declared variable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum VarType {
    Primitive(String),
    Struct(String),
    Object(ClassRef),
    Class(ClassRef),
    Interface(ClassRef),
}

impl VarType {
    /// Render the descriptor to display text.
    pub fn display(&self) -> String {
        match self {
            VarType::Primitive(name) | VarType::Struct(name) => name.clone(),
            VarType::Object(class) => class.name.clone(),
            VarType::Class(class) => format!("Class<{}>", class.name),
            VarType::Interface(class) => format!("Interface<{}>", class.name),
        }
    }

    /// The referenced class for object/class/interface types.
    pub fn class_ref(&self) -> Option<&ClassRef> {
        match self {
            VarType::Object(class) | VarType::Class(class) | VarType::Interface(class) => {
                Some(class)
            }
            VarType::Primitive(_) | VarType::Struct(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VariableDesc {
    pub name: String,
    pub var_type: VarType,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub category: String,
    /// `VAR_*` bits.
    #[serde(default)]
    pub flags: u32,
}

/// One fully loaded blueprint asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlueprintAsset {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub parent_class: Option<ClassRef>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variables: Vec<VariableDesc>,
    #[serde(default)]
    pub function_graphs: Vec<AssetGraph>,
    #[serde(default)]
    pub event_graphs: Vec<AssetGraph>,
}

impl BlueprintAsset {
    /// Display name of the parent class, empty when the asset has none.
    pub fn parent_class_name(&self) -> &str {
        self.parent_class.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Identity of the class this asset generates. Other assets' parent tags
    /// record this value, which is what incoming-inheritance matching keys on.
    pub fn generated_class_path(&self) -> String {
        format!("{}.{}_C", self.path, self.name)
    }

    /// Function graphs followed by event graphs, in declaration order.
    pub fn all_graphs(&self) -> impl Iterator<Item = &AssetGraph> {
        self.function_graphs.iter().chain(self.event_graphs.iter())
    }
}
