use crate::error::ApiResult;
use crate::models::{
    BlueprintView, DetailLevel, ExtractOptions, ExtractionMode, GraphView, NodeView,
};
use async_trait::async_trait;

/// Projection service over the asset catalog.
///
/// All lookups identify assets by path string. A missing asset is a normal
/// `None`, never an error: the engine treats not-found as an empty result
/// and leaves status-code mapping to the boundary layer.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Project every asset in the store at the given level.
    async fn all_blueprints(&self, level: DetailLevel) -> ApiResult<Vec<BlueprintView>>;

    /// Project one asset, or `None` when the path does not resolve.
    async fn blueprint_by_path(
        &self,
        path: &str,
        level: DetailLevel,
        mode: ExtractionMode,
        options: ExtractOptions,
    ) -> ApiResult<Option<BlueprintView>>;

    /// Flat list of event nodes, optionally filtered to one event name.
    /// Outer `None` means the asset itself was not found.
    async fn event_nodes(
        &self,
        path: &str,
        event_filter: Option<&str>,
    ) -> ApiResult<Option<Vec<NodeView>>>;

    /// Execution-flow subgraph reachable from the named event node.
    /// `None` when either the asset or the event does not exist.
    async fn event_graph(
        &self,
        path: &str,
        event_name: &str,
        max_nodes: usize,
    ) -> ApiResult<Option<GraphView>>;
}
