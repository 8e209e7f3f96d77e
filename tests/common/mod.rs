//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{body::Bytes, extract::State, http::Request, routing::any, Router};
use tokio::net::TcpListener;

use ocsp_rewriter::config::GatewayConfig;
use ocsp_rewriter::{HttpServer, Shutdown};

/// A request as seen by the mock responder.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub uri: String,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub request_id: Option<String>,
    pub body: Vec<u8>,
}

pub type Captures = Arc<Mutex<Vec<Captured>>>;

/// Start a mock OCSP responder that records every request and answers 200
/// with body "ocsp-response".
pub async fn start_recording_backend() -> (SocketAddr, Captures) {
    let captures: Captures = Arc::default();

    async fn record(State(captures): State<Captures>, request: Request<axum::body::Body>) -> &'static str {
        let (parts, body) = request.into_parts();
        let body: Bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        captures.lock().unwrap().push(Captured {
            method: parts.method.to_string(),
            uri: parts.uri.to_string(),
            content_type: header("content-type"),
            content_length: header("content-length"),
            request_id: header("x-request-id"),
            body: body.to_vec(),
        });
        "ocsp-response"
    }

    let app = Router::new()
        .route("/", any(record))
        .route("/{*path}", any(record))
        .with_state(captures.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, captures)
}

/// Start the gateway in front of `upstream`, returning its address.
pub async fn start_gateway(mut config: GatewayConfig, upstream: SocketAddr) -> (SocketAddr, Shutdown) {
    config.upstream.address = upstream.to_string();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
