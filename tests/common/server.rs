//! Test server management.

use cordiad::http;
use cordiad::store::Storage;
use cordiad::store::memory::MemStorage;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A test server instance bound to an ephemeral local port.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn the API over a fixture-seeded in-memory store.
    #[allow(dead_code)]
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with(Arc::new(MemStorage::with_fixtures())).await
    }

    /// Spawn the API over a caller-provided store.
    #[allow(dead_code)]
    pub async fn spawn_with(store: Arc<dyn Storage>) -> anyhow::Result<Self> {
        let app = http::router(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, handle })
    }

    /// Full URL for a request path against this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
