//! cordiad - Cordia website backend.
//!
//! JSON API for the organization site: contact form, news, research papers,
//! and the initiatives catalog, over a swappable data store.

use cordiad::config::{Config, StorageBackend};
use cordiad::store::Storage;
use cordiad::store::memory::MemStorage;
use cordiad::store::sqlite::SqliteStorage;
use cordiad::{http, metrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        bind = %config.server.bind,
        port = config.server.port,
        backend = ?config.storage.backend,
        "Starting cordiad"
    );

    // Construct the single store instance for the process lifetime.
    let store: Arc<dyn Storage> = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory store with fixture content");
            Arc::new(MemStorage::with_fixtures())
        }
        StorageBackend::Sqlite => {
            let db = SqliteStorage::new(&config.storage.path).await?;
            if config.storage.seed && db.seed_if_empty().await? {
                info!("Seeded empty database with fixture content");
            }
            Arc::new(db)
        }
    };

    // Prometheus metrics are optional.
    // Convention: metrics_port = 0 disables the HTTP endpoint (used by tests).
    let metrics_port = config.server.metrics_port.unwrap_or(9090);
    if metrics_port == 0 {
        info!("Metrics disabled");
    } else {
        metrics::init();
        info!("Metrics initialized");

        tokio::spawn(async move {
            http::run_metrics_server(metrics_port).await;
        });
        info!(port = metrics_port, "Prometheus HTTP server started");
    }

    http::serve(&config.server, store).await?;

    Ok(())
}
