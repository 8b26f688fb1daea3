use crate::error::ApiResult;
use crate::models::{BlueprintView, DetailLevel};
use async_trait::async_trait;
use indexmap::IndexMap;

/// Linear-scan search over the asset catalog.
///
/// All matching is case-insensitive substring containment. Results come
/// back projected at the requested detail level; when that level exceeds
/// what the scan itself needed, matches are re-projected in a second pass.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search_by_name(
        &self,
        query: &str,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>>;

    async fn search_by_parent_class(
        &self,
        query: &str,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>>;

    /// Match on function name, optionally narrowing by positional parameter
    /// types (each given type must be contained in the corresponding
    /// parameter's type).
    async fn search_by_function(
        &self,
        name: &str,
        param_types: &[String],
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>>;

    /// Match on variable name, optionally narrowing by type.
    async fn search_by_variable(
        &self,
        name: &str,
        var_type: Option<&str>,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>>;

    /// Apply the given filters sequentially (AND semantics). Recognized
    /// keys, case-insensitive: Name, ParentClass, Function, Variable, Path.
    async fn search_with_parameters(
        &self,
        params: &IndexMap<String, String>,
        level: DetailLevel,
    ) -> ApiResult<Vec<BlueprintView>>;
}
