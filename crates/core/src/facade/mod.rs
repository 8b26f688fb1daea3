//! Engine handle - unified interface for all clients.
//!
//! Wraps the store and resolver behind one cloneable handle. The sync API
//! serves in-process callers and tests; the async service-trait impls are
//! thin shims for the HTTP boundary.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;

use bluescope_api::error::ApiResult;
use bluescope_api::models::{
    BlueprintView, DetailLevel, ExtractOptions, ExtractionMode, GraphView, NodeView, ReferenceView,
};
use bluescope_api::{CatalogService, ReferenceService, SearchService};

use crate::asset::AssetStore;
use crate::extract;
use crate::references::ReferenceResolver;
use crate::search;

#[derive(Clone)]
pub struct AnalyzerHandle {
    store: Arc<dyn AssetStore>,
    resolver: Arc<ReferenceResolver>,
}

impl AnalyzerHandle {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        let resolver = Arc::new(ReferenceResolver::new(store.clone()));
        Self { store, resolver }
    }

    pub fn store(&self) -> &Arc<dyn AssetStore> {
        &self.store
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    // ---- Sync API ----

    pub fn all_blueprints(&self, level: DetailLevel) -> Vec<BlueprintView> {
        extract::all_blueprints(self.store.as_ref(), level)
    }

    pub fn blueprint_by_path(
        &self,
        path: &str,
        level: DetailLevel,
        mode: ExtractionMode,
        options: &ExtractOptions,
    ) -> Option<BlueprintView> {
        extract::blueprint_by_path(self.store.as_ref(), &self.resolver, path, level, mode, options)
    }

    pub fn event_nodes(&self, path: &str, event_filter: Option<&str>) -> Option<Vec<NodeView>> {
        let asset = self.store.load(path)?;
        Some(extract::extract_event_nodes(&asset, event_filter))
    }

    pub fn event_graph(
        &self,
        path: &str,
        event_name: &str,
        max_nodes: usize,
    ) -> Option<GraphView> {
        let asset = self.store.load(path)?;
        extract::event_graph(&asset, event_name, max_nodes)
    }

    pub fn references(&self, path: &str, include_indirect: bool) -> Vec<ReferenceView> {
        self.resolver.references(path, include_indirect)
    }

    pub fn search_by_name(&self, query: &str, level: DetailLevel) -> Vec<BlueprintView> {
        search::search_by_name(self.store.as_ref(), &self.resolver, query, level)
    }

    pub fn search_by_parent_class(&self, query: &str, level: DetailLevel) -> Vec<BlueprintView> {
        search::search_by_parent_class(self.store.as_ref(), &self.resolver, query, level)
    }

    pub fn search_by_function(
        &self,
        name: &str,
        param_types: &[String],
        level: DetailLevel,
    ) -> Vec<BlueprintView> {
        search::search_by_function(self.store.as_ref(), &self.resolver, name, param_types, level)
    }

    pub fn search_by_variable(
        &self,
        name: &str,
        var_type: Option<&str>,
        level: DetailLevel,
    ) -> Vec<BlueprintView> {
        search::search_by_variable(self.store.as_ref(), &self.resolver, name, var_type, level)
    }

    pub fn search_with_parameters(
        &self,
        params: &IndexMap<String, String>,
        level: DetailLevel,
    ) -> Vec<BlueprintView> {
        search::search_with_parameters(self.store.as_ref(), &self.resolver, params, level)
    }
}

#[async_trait]
impl CatalogService for AnalyzerHandle {
    async fn all_blueprints(&self, level: DetailLevel) -> ApiResult<Vec<BlueprintView>> {
        Ok(AnalyzerHandle::all_blueprints(self, level))
    }

    async fn blueprint_by_path(
        &self,
        path: &str,
        level: DetailLevel,
        mode: ExtractionMode,
        options: ExtractOptions,
    ) -> ApiResult<Option<BlueprintView>> {
        Ok(AnalyzerHandle::blueprint_by_path(self, path, level, mode, &options))
    }

    async fn event_nodes(
        &self,
        path: &str,
        event_filter: Option<&str>,
    ) -> ApiResult<Option<Vec<NodeView>>> {
        Ok(AnalyzerHandle::event_nodes(self, path, event_filter))
    }

    async fn event_graph(
        &self,
        path: &str,
        event_name: &str,
        max_nodes: usize,
    ) -> ApiResult<Option<GraphView>> {
        Ok(AnalyzerHandle::event_graph(self, path, event_name, max_nodes))
    }
}

#[async_trait]
impl ReferenceService for AnalyzerHandle {
    async fn references(
        &self,
        path: &str,
        include_indirect: bool,
    ) -> ApiResult<Vec<ReferenceView>> {
        Ok(AnalyzerHandle::references(self, path, include_indirect))
    }
}

#[async_trait]
impl SearchService for AnalyzerHandle {
    async fn search_by_name(
        &self,
        query: &str,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>> {
        Ok(AnalyzerHandle::search_by_name(self, query, level))
    }

    async fn search_by_parent_class(
        &self,
        query: &str,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>> {
        Ok(AnalyzerHandle::search_by_parent_class(self, query, level))
    }

    async fn search_by_function(
        &self,
        name: &str,
        param_types: &[String],
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>> {
        Ok(AnalyzerHandle::search_by_function(self, name, param_types, level))
    }

    async fn search_by_variable(
        &self,
        name: &str,
        var_type: Option<&str>,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>> {
        Ok(AnalyzerHandle::search_by_variable(self, name, var_type, level))
    }

    async fn search_with_parameters(
        &self,
        params: &IndexMap<String, String>,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>> {
        Ok(AnalyzerHandle::search_with_parameters(self, params, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetBuilder, ClassRef, InMemoryAssetStore};

    fn handle() -> AnalyzerHandle {
        let store = Arc::new(InMemoryAssetStore::new());
        store.insert(
            AssetBuilder::new("Enemy", "/Game/Enemy")
                .parent(ClassRef::asset("BaseCharacter", "/Game/BaseCharacter"))
                .build(),
        );
        store.insert(AssetBuilder::new("BaseCharacter", "/Game/BaseCharacter").build());
        AnalyzerHandle::new(store)
    }

    #[tokio::test]
    async fn test_async_catalog_access() {
        let handle = handle();
        let views = CatalogService::all_blueprints(&handle, DetailLevel::Basic)
            .await
            .unwrap();
        assert_eq!(views.len(), 2);

        let missing = CatalogService::blueprint_by_path(
            &handle,
            "/Game/Missing",
            DetailLevel::Full,
            ExtractionMode::None,
            ExtractOptions::default(),
        )
        .await
        .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_queries() {
        use tokio::task::JoinSet;

        let handle = Arc::new(handle());
        let mut set = JoinSet::new();

        for _ in 0..10 {
            let h = Arc::clone(&handle);
            set.spawn(async move {
                for _ in 0..5 {
                    let refs = ReferenceService::references(h.as_ref(), "/Game/Enemy", true)
                        .await
                        .unwrap();
                    assert!(!refs.is_empty());
                }
            });
        }

        while let Some(result) = set.join_next().await {
            result.unwrap();
        }
    }
}
