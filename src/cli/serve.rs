//! Serve command handler
//!
//! Imports the configured datasets into the point store, then starts the
//! HTTP server in foreground mode.

use crate::config::Config;
use crate::error::Result;
use crate::ingest;
use crate::server::{self, state::AppState};
use crate::service::GeoQueryService;
use crate::store::get_store;
use clap::Args;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Directory holding dataset files
    #[arg(long)]
    pub data_dir: Option<std::path::PathBuf>,

    /// Abort on the first malformed dataset line
    #[arg(long)]
    pub strict: bool,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load and optionally override config
    let mut config = Config::load()?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.ingest.data_dir = data_dir;
    }
    if args.strict {
        config.ingest.strict = true;
    }

    // One-shot ingestion pass before the server accepts queries
    let store = get_store(&config.store.backend);
    info!("Using {} point store", store.name());
    let mut regions = Vec::new();
    for dataset in &config.ingest.datasets {
        let path = config.dataset_path(dataset);
        let stats = ingest::import_file(&path, store.as_ref(), config.ingest.strict)?;
        if stats.imported > 0 {
            regions.push(dataset.clone());
        }
    }

    info!(
        "Starting georadius server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    // Run the server
    let service = GeoQueryService::new(store);
    let state = Arc::new(AppState::new(config, service, regions));
    server::run(state).await
}
