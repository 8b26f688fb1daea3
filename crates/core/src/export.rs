//! Bulk snapshot export: dump every asset's projection to a JSON file.

use std::path::Path;

use bluescope_api::models::DetailLevel;
use tracing::info;

use crate::asset::AssetStore;
use crate::error::Result;
use crate::extract;

/// Project every asset at `level` and write the result as pretty JSON.
/// Returns the number of blueprints written.
pub fn write_snapshot(store: &dyn AssetStore, level: DetailLevel, path: &Path) -> Result<usize> {
    let views = extract::all_blueprints(store, level);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &views)?;

    info!(count = views.len(), path = %path.display(), "exported blueprint snapshot");
    Ok(views.len())
}
