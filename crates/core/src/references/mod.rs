//! Cross-asset reference resolution.
//!
//! Four direct kinds are computed independently and concatenated, with no
//! deduplication across kinds. Indirect resolution expands each direct
//! outgoing reference exactly one further hop: the sub-extraction always
//! runs direct-only, so the chain can never grow past one entry.

pub mod cache;

pub use cache::ReferenceCache;

use std::sync::Arc;

use bluescope_api::models::{ReferenceDirection, ReferenceKind, ReferenceView};
use tracing::debug;

use crate::asset::{AssetStore, BlueprintAsset, NodeKind, PinDirection};

pub struct ReferenceResolver {
    store: Arc<dyn AssetStore>,
    cache: ReferenceCache,
}

impl ReferenceResolver {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self {
            store,
            cache: ReferenceCache::new(),
        }
    }

    pub fn cache(&self) -> &ReferenceCache {
        &self.cache
    }

    /// Cache-backed lookup by asset path. An unresolvable path yields an
    /// empty list.
    ///
    /// A cached entry that lacks indirect data when indirect is requested
    /// triggers a full re-extraction rather than an incremental top-up;
    /// conversely a direct-only request against a cache entry that has
    /// indirect data just filters the indirect entries out.
    pub fn references(&self, path: &str, include_indirect: bool) -> Vec<ReferenceView> {
        if let Some(cached) = self.cache.get(path) {
            let needs_reextract = include_indirect
                && !cached.is_empty()
                && cached.iter().all(|reference| !reference.is_indirect);

            if !needs_reextract {
                if !include_indirect {
                    return cached
                        .into_iter()
                        .filter(|reference| !reference.is_indirect)
                        .collect();
                }
                return cached;
            }
        }

        let Some(asset) = self.store.load(path) else {
            return Vec::new();
        };
        let references = self.extract_references(&asset, include_indirect);
        self.cache.insert(path.to_string(), references.clone());
        debug!(path, count = references.len(), "cached references");
        references
    }

    /// Uncached extraction for one loaded asset.
    pub fn extract_references(
        &self,
        asset: &BlueprintAsset,
        include_indirect: bool,
    ) -> Vec<ReferenceView> {
        let mut references = self.inheritance_references(asset);
        references.extend(self.function_call_references(asset));
        references.extend(self.variable_type_references(asset));
        references.extend(self.direct_references(asset));

        if include_indirect {
            let mut indirect = Vec::new();
            for reference in &references {
                if reference.direction != ReferenceDirection::Outgoing || reference.is_indirect {
                    continue;
                }
                let Some(target) = self.store.load(&reference.target_path) else {
                    continue;
                };
                // Direct-only sub-extraction caps the recursion at one hop.
                for mut second in self.extract_references(&target, false) {
                    if second.direction == ReferenceDirection::Outgoing {
                        second.is_indirect = true;
                        second.reference_chain.push(reference.target_path.clone());
                        indirect.push(second);
                    }
                }
            }
            references.extend(indirect);
        }

        references
    }

    fn inheritance_references(&self, asset: &BlueprintAsset) -> Vec<ReferenceView> {
        let mut references = Vec::new();

        if let Some(parent) = &asset.parent_class {
            if let Some(parent_path) = &parent.path {
                references.push(ReferenceView::new(
                    ReferenceKind::Inheritance,
                    ReferenceDirection::Outgoing,
                    parent_path,
                    &parent.name,
                    "Parent Class",
                ));
            }
        }

        let our_class = asset.generated_class_path();
        for tag in self.store.list_assets() {
            let is_child = tag
                .parent_class_tag
                .as_deref()
                .is_some_and(|recorded| recorded.contains(&our_class));
            if is_child {
                references.push(ReferenceView::new(
                    ReferenceKind::Inheritance,
                    ReferenceDirection::Incoming,
                    &tag.path,
                    &tag.name,
                    "Child Class",
                ));
            }
        }

        references
    }

    fn function_call_references(&self, asset: &BlueprintAsset) -> Vec<ReferenceView> {
        let mut references = Vec::new();

        for graph in asset.all_graphs() {
            for node in &graph.nodes {
                let NodeKind::CallFunction {
                    function,
                    target: Some(target),
                } = &node.kind
                else {
                    continue;
                };
                let Some(target_path) = &target.path else {
                    continue;
                };
                if target_path == &asset.path {
                    continue;
                }

                let mut reference = ReferenceView::new(
                    ReferenceKind::FunctionCall,
                    ReferenceDirection::Outgoing,
                    target_path,
                    &target.name,
                    format!("Function: {}", function),
                );
                reference
                    .properties
                    .insert("FunctionName".into(), function.clone());
                reference
                    .properties
                    .insert("SourceGraph".into(), graph.name.clone());
                references.push(reference);
            }
        }

        references
    }

    fn variable_type_references(&self, asset: &BlueprintAsset) -> Vec<ReferenceView> {
        let mut references = Vec::new();

        for variable in &asset.variables {
            let Some(class) = variable.var_type.class_ref() else {
                continue;
            };
            let Some(class_path) = &class.path else {
                continue;
            };
            if class_path == &asset.path {
                continue;
            }

            let mut reference = ReferenceView::new(
                ReferenceKind::VariableType,
                ReferenceDirection::Outgoing,
                class_path,
                &class.name,
                format!("Variable: {}", variable.name),
            );
            reference
                .properties
                .insert("VariableName".into(), variable.name.clone());
            references.push(reference);
        }

        references
    }

    fn direct_references(&self, asset: &BlueprintAsset) -> Vec<ReferenceView> {
        let mut references = Vec::new();

        for graph in asset.all_graphs() {
            for node in &graph.nodes {
                match &node.kind {
                    NodeKind::SpawnActor => {
                        let Some(class_pin) = node.find_pin("Class", PinDirection::Input) else {
                            continue;
                        };
                        // A wired class pin is only known at run time; skip.
                        if class_pin.is_connected() {
                            continue;
                        }
                        let Some(class) = &class_pin.default_object else {
                            continue;
                        };
                        let Some(class_path) = &class.path else {
                            continue;
                        };
                        if class_path == &asset.path {
                            continue;
                        }

                        let mut reference = ReferenceView::new(
                            ReferenceKind::DirectReference,
                            ReferenceDirection::Outgoing,
                            class_path,
                            &class.name,
                            "Spawn Actor",
                        );
                        reference
                            .properties
                            .insert("NodeType".into(), "SpawnActor".into());
                        reference
                            .properties
                            .insert("SourceGraph".into(), graph.name.clone());
                        references.push(reference);
                    }
                    NodeKind::DynamicCast { target } => {
                        let Some(class_path) = &target.path else {
                            continue;
                        };
                        if class_path == &asset.path {
                            continue;
                        }

                        let mut reference = ReferenceView::new(
                            ReferenceKind::DirectReference,
                            ReferenceDirection::Outgoing,
                            class_path,
                            &target.name,
                            "Dynamic Cast",
                        );
                        reference
                            .properties
                            .insert("NodeType".into(), "DynamicCast".into());
                        reference
                            .properties
                            .insert("SourceGraph".into(), graph.name.clone());
                        references.push(reference);
                    }
                    _ => {}
                }
            }
        }

        references
    }
}
