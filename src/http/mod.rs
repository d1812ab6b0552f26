//! HTTP surface: JSON API routes plus the Prometheus metrics endpoint.

mod contacts;
mod initiatives;
mod news;
mod pagination;
mod research;

pub use pagination::Pagination;

use crate::config::ServerConfig;
use crate::store::Storage;
use axum::Router;
use axum::extract::{MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Shared router state: the single store instance, injected at startup.
pub type AppState = Arc<dyn Storage>;

/// Build the API router around the injected store.
pub fn router(store: AppState) -> Router {
    Router::new()
        .route("/api/contacts", post(contacts::submit))
        .route("/api/news", get(news::list))
        .route("/api/news/:id", get(news::get_by_id))
        .route("/api/research", get(research::list))
        .route("/api/research/:id", get(research::get_by_id))
        .route("/api/initiatives", get(initiatives::list))
        .route("/api/initiatives/:slug", get(initiatives::get_by_slug))
        .layer(middleware::from_fn(track_request))
        .with_state(store)
}

/// Record count and latency for every request, labeled by matched route.
async fn track_request(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = Instant::now();

    let response = next.run(req).await;

    crate::metrics::record_request(
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

/// Serve the API. Runs until the process is stopped.
pub async fn serve(config: &ServerConfig, store: AppState) -> anyhow::Result<()> {
    let app = router(store);

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Handler for GET /metrics - returns Prometheus metrics in text format.
async fn metrics_handler() -> String {
    crate::metrics::gather_metrics()
}

/// Run the HTTP server for Prometheus metrics.
///
/// Binds to `0.0.0.0:port` and serves the `/metrics` endpoint.
/// This is a long-running task that should be spawned in the background.
pub async fn run_metrics_server(port: u16) {
    let app = Router::new().route("/metrics", get(metrics_handler));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Prometheus HTTP server listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind HTTP server on {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("HTTP server error: {}", e);
    }
}
