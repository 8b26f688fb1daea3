pub mod asset;
pub mod error;
pub mod export;
pub mod extract;
pub mod facade;
pub mod logging;
pub mod references;
pub mod search;

pub use error::Result;
pub use facade::AnalyzerHandle;
