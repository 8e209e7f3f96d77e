//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the forwarding handler
//! - Wire up middleware (rewrite, limits, timeout, request ID, tracing)
//! - Bind server to listener
//! - Forward requests to the upstream OCSP responder

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{
        uri::{Authority, InvalidUri, PathAndQuery, Scheme},
        Request, StatusCode, Uri, Version,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Semaphore};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::headers::strip_hop_by_hop;
use crate::http::limits::concurrency_limit_middleware;
use crate::http::request::{request_id, UuidRequestId};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::rewrite::{OcspRewriteLayer, RewriteConfigError, Rewriter};

/// Errors building or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Rewrite(#[from] RewriteConfigError),

    #[error("invalid upstream address {address:?}: {source}")]
    Upstream {
        address: String,
        #[source]
        source: InvalidUri,
    },

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Authority,
    pub client: Client<HttpConnector, Body>,
}

/// HTTP server fronting a POST-only OCSP responder.
pub struct HttpServer {
    router: Router,
    upstream: Authority,
}

impl HttpServer {
    /// Build the server. Fails if the rewrite pattern or upstream address is invalid.
    pub fn new(config: GatewayConfig) -> Result<Self, ServerError> {
        let rewriter = Arc::new(Rewriter::new(&config.rewrite)?);
        let upstream: Authority =
            config
                .upstream
                .address
                .parse()
                .map_err(|source| ServerError::Upstream {
                    address: config.upstream.address.clone(),
                    source,
                })?;

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            upstream: upstream.clone(),
            client,
        };

        let router = Self::build_router(&config, state, rewriter);
        Ok(Self { router, upstream })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState, rewriter: Arc<Rewriter>) -> Router {
        let permits = Arc::new(Semaphore::new(config.listener.max_concurrent_requests));

        Router::new()
            .route("/{*path}", any(forward_handler))
            .route("/", any(forward_handler))
            .with_state(state)
            .layer(OcspRewriteLayer::new(rewriter))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn_with_state(
                permits,
                concurrency_limit_middleware,
            ))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.upstream,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for serving on a custom listener.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Send the (possibly rewritten) request to the upstream responder.
async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&request).to_string();

    let (mut parts, body) = request.into_parts();

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        path = %parts.uri.path(),
        "Forwarding request"
    );

    // Only scheme and authority change; path and query go through as-is.
    let mut uri_parts = parts.uri.clone().into_parts();
    uri_parts.scheme = Some(Scheme::HTTP);
    uri_parts.authority = Some(state.upstream.clone());
    if uri_parts.path_and_query.is_none() {
        uri_parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }
    parts.uri = match Uri::from_parts(uri_parts) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Cannot build upstream URI");
            return (StatusCode::BAD_REQUEST, "Invalid request target").into_response();
        }
    };
    parts.version = Version::HTTP_11;
    strip_hop_by_hop(&mut parts.headers);

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let status = response.status();
            metrics::record_upstream(status.as_u16(), start_time);
            tracing::debug!(request_id = %request_id, status = %status, "Upstream responded");

            let (mut parts, body) = response.into_parts();
            strip_hop_by_hop(&mut parts.headers);
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            metrics::record_upstream(StatusCode::BAD_GATEWAY.as_u16(), start_time);
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}
