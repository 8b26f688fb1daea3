use crate::error::ApiResult;
use crate::models::ReferenceView;
use async_trait::async_trait;

/// Cross-asset reference resolution.
#[async_trait]
pub trait ReferenceService: Send + Sync {
    /// All references to and from the asset at `path`. With
    /// `include_indirect` the direct outgoing targets are expanded one
    /// further hop; the result never chains deeper than that.
    ///
    /// An unresolvable path yields an empty list.
    async fn references(&self, path: &str, include_indirect: bool)
    -> ApiResult<Vec<ReferenceView>>;
}
