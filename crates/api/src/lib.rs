pub mod catalog;
pub mod error;
pub mod models;
pub mod references;
pub mod search;

// Re-export commonly used types
pub use catalog::CatalogService;
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use references::ReferenceService;
pub use search::SearchService;

/// Composite trait representing the full blueprint inspection API.
/// Clients can depend on this single trait instead of the individual ones.
pub trait BlueprintEngine: CatalogService + ReferenceService + SearchService {}

impl<T: CatalogService + ReferenceService + SearchService> BlueprintEngine for T {}
