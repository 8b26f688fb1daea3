//! Asset storage boundary.
//!
//! The extraction engine only ever sees this interface: a cheap registry
//! listing and an expensive full load. The in-memory implementation backs
//! tests, the demo project file, and anything else that can hand the engine
//! pre-built [`BlueprintAsset`]s.

use indexmap::IndexMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use super::BlueprintAsset;
use crate::error::Result;

/// Cheap registry row for one asset: what the store knows without loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTag {
    pub name: String,
    pub path: String,
    /// Raw recorded parent-class value, e.g.
    /// `Class'/Game/BaseCharacter.BaseCharacter_C'` or
    /// `Class'/Script/Engine.Character'`.
    pub parent_class_tag: Option<String>,
}

/// Storage capability the engine consumes.
///
/// `list_assets` must be cheap (registry tags only); `load` may be
/// expensive. A path that does not resolve is `None`, never an error.
pub trait AssetStore: Send + Sync {
    fn list_assets(&self) -> Vec<AssetTag>;
    fn load(&self, path: &str) -> Option<Arc<BlueprintAsset>>;
}

/// Thread-safe in-memory asset store, insertion-ordered for deterministic
/// listings.
pub struct InMemoryAssetStore {
    assets: RwLock<IndexMap<String, Arc<BlueprintAsset>>>,
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self {
            assets: RwLock::new(IndexMap::new()),
        }
    }

    /// Load a project file: a JSON array of assets.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let assets: Vec<BlueprintAsset> = serde_json::from_str(&content)?;
        let store = Self::new();
        for asset in assets {
            store.insert(asset);
        }
        Ok(store)
    }

    pub fn insert(&self, asset: BlueprintAsset) {
        let mut assets = self.assets.write().unwrap();
        assets.insert(asset.path.clone(), Arc::new(asset));
    }

    pub fn asset_count(&self) -> usize {
        let assets = self.assets.read().unwrap();
        assets.len()
    }
}

impl Default for InMemoryAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetStore for InMemoryAssetStore {
    fn list_assets(&self) -> Vec<AssetTag> {
        let assets = self.assets.read().unwrap();
        assets
            .values()
            .map(|asset| AssetTag {
                name: asset.name.clone(),
                path: asset.path.clone(),
                parent_class_tag: asset.parent_class.as_ref().map(|class| match &class.path {
                    Some(parent_path) => {
                        format!("Class'{}.{}_C'", parent_path, class.name)
                    }
                    None => format!("Class'/Script/Engine.{}'", class.name),
                }),
            })
            .collect()
    }

    fn load(&self, path: &str) -> Option<Arc<BlueprintAsset>> {
        let assets = self.assets.read().unwrap();
        assets.get(path).cloned()
    }
}

/// Recover a bare class name from a recorded parent-class tag.
///
/// Handles the `Class'…'` wrapper, module paths, and the `_C`
/// generated-class suffix. Returns an empty string when the tag carries
/// nothing usable.
pub fn clean_parent_class_tag(tag: &str) -> String {
    let inner = tag
        .strip_prefix("Class'")
        .unwrap_or(tag)
        .trim_end_matches('\'');
    let last_segment = inner.rsplit('.').next().unwrap_or(inner);
    last_segment.strip_suffix("_C").unwrap_or(last_segment).to_string()
}
