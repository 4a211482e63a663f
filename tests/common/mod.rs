//! Shared test helpers: an in-process random-word endpoint.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

/// Mock word server for testing.
pub struct MockWordServer {
    pub addr: SocketAddr,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockWordServer {
    /// Starts the server on a free local port.
    ///
    /// Routes:
    /// - `/word` → `["Lantern", "ignored"]`
    /// - `/empty` → `[]`
    /// - `/broken` → a non-JSON body
    /// - `/missing` → 404
    /// - `/phrase` → `["ice cream"]`
    /// - `/slow` → `["late"]` after two seconds
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/word", get(|| async { Json(vec!["Lantern", "ignored"]) }))
            .route("/empty", get(|| async { Json(Vec::<String>::new()) }))
            .route("/broken", get(|| async { "definitely not json" }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route("/phrase", get(|| async { Json(vec!["ice cream"]) }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    Json(vec!["late"])
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Bound listener has an address");
        let (shutdown, mut shutdown_rx) = tokio::sync::watch::channel(false);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self { addr, shutdown }
    }

    /// Full URL for a route on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for MockWordServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}
