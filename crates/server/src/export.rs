//! Periodic snapshot export.

use std::path::PathBuf;
use std::time::Duration;

use bluescope_api::models::DetailLevel;
use bluescope_core::{export, AnalyzerHandle};
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Re-dump the full blueprint snapshot on a fixed interval until cancelled.
/// Intervals below one second are clamped up.
pub fn spawn_export_task(
    handle: AnalyzerHandle,
    path: PathBuf,
    interval_seconds: u64,
    level: DetailLevel,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    let interval_seconds = interval_seconds.max(1);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_seconds));
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    if let Err(error) =
                        export::write_snapshot(handle.store().as_ref(), level, &path)
                    {
                        warn!(%error, "blueprint snapshot export failed");
                    }
                }
            }
        }
    })
}
