mod docs;
mod error;
mod export;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use bluescope_api::models::DetailLevel;
use bluescope_core::asset::InMemoryAssetStore;
use bluescope_core::AnalyzerHandle;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project JSON file holding the blueprint assets
    #[arg(value_name = "PROJECT_FILE")]
    project: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Mirror logs to stderr in addition to the log file
    #[arg(long)]
    verbose: bool,

    /// Write a full snapshot of all blueprints to this file on a timer
    #[arg(long)]
    export_path: Option<PathBuf>,

    /// Seconds between snapshot exports (minimum 1)
    #[arg(long, default_value_t = 60)]
    export_interval: u64,

    /// Detail level for exported snapshots
    #[arg(long, default_value = "basic")]
    export_detail: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = bluescope_core::logging::init_logging("server", cli.verbose);

    let store = Arc::new(InMemoryAssetStore::from_json_file(&cli.project)?);
    info!(
        assets = store.asset_count(),
        project = %cli.project.display(),
        "project loaded"
    );
    let handle = AnalyzerHandle::new(store);

    let cancel = CancellationToken::new();

    let export_task = match &cli.export_path {
        Some(path) => {
            let (level, _) = DetailLevel::parse_request(&cli.export_detail)
                .ok_or_else(|| anyhow::anyhow!("unknown export detail: {}", cli.export_detail))?;
            Some(export::spawn_export_task(
                handle.clone(),
                path.clone(),
                cli.export_interval,
                level,
                cancel.clone(),
            ))
        }
        None => None,
    };

    let app = routes::router(handle);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", cli.port)).await?;
    info!("blueprint analyzer listening on 127.0.0.1:{}", cli.port);

    let shutdown = cancel.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            shutdown.cancel();
        })
        .await?;

    cancel.cancel();
    if let Some(task) = export_task {
        let _ = task.await;
    }

    Ok(())
}
