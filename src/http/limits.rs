//! In-flight request limit.
//!
//! A semaphore caps requests being served at once at
//! `listener.max_concurrent_requests`. When the limit is reached new requests
//! wait for a slot instead of being refused.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Semaphore;

pub async fn concurrency_limit_middleware(
    State(permits): State<Arc<Semaphore>>,
    request: Request,
    next: Next,
) -> Response {
    // Held until the response is produced.
    let _permit = match permits.clone().acquire_owned().await {
        Ok(permit) => permit,
        Err(_) => {
            return (StatusCode::SERVICE_UNAVAILABLE, "Server shutting down").into_response();
        }
    };

    tracing::trace!(available = permits.available_permits(), "Request slot acquired");
    next.run(request).await
}
