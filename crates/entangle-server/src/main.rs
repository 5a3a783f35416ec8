//! Entangle server binary entry point.
//!
//! # Configuration
//!
//! Defaults, then the YAML file given by `--config`, then `.env`, then
//! `ENTANGLE_*` environment variables. `RUST_LOG` sets the tracing filter and
//! `ENTANGLE_LOG_FORMAT=json` switches to JSON log lines.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use entangle_server::store::{MemoryStatusStore, StatusStore};
use entangle_server::telemetry::{format_from_env, init_tracing};
use entangle_server::{AppState, ServerConfig, create_router};

#[derive(Parser)]
#[command(name = "entangle-server")]
#[command(author, version, about = "HTTP API for small quantum circuit simulations")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "ENTANGLE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(format_from_env())?;

    let config = ServerConfig::load(cli.config.as_deref())?;
    let addr = config.bind_addr()?;

    let store = open_store(&config)?;
    let state = Arc::new(AppState::with_config(config).with_store(store.clone()));

    info!(
        backend = state.backend.name(),
        cors = %state.config.cors_origins,
        "Starting Entangle server"
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await?;
    info!("Server shut down");
    Ok(())
}

fn open_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn StatusStore>> {
    match config.sqlite_path.as_deref() {
        #[cfg(feature = "sqlite")]
        Some(path) => {
            let store = entangle_server::SqliteStatusStore::open(path)?;
            info!(path, "Opened SQLite status store");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "sqlite"))]
        Some(path) => {
            warn!(
                path,
                "sqlite_path is set but the `sqlite` feature is disabled; using in-memory store"
            );
            Ok(Arc::new(MemoryStatusStore::new()))
        }
        None => {
            info!("Using in-memory status store");
            Ok(Arc::new(MemoryStatusStore::new()))
        }
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT"),
        () = terminate => info!("Received SIGTERM"),
    }
}
