//! Tower middleware wrapping a downstream service with the [`Rewriter`].
//!
//! The inner service is called exactly once for pass-through and rewritten
//! requests and never for rejected ones.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use crate::rewrite::rewriter::{Outcome, Rewriter};

/// Applies [`OcspRewrite`] to a service.
#[derive(Debug, Clone)]
pub struct OcspRewriteLayer {
    rewriter: Arc<Rewriter>,
}

impl OcspRewriteLayer {
    pub fn new(rewriter: Arc<Rewriter>) -> Self {
        Self { rewriter }
    }
}

impl<S> Layer<S> for OcspRewriteLayer {
    type Service = OcspRewrite<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OcspRewrite {
            inner,
            rewriter: self.rewriter.clone(),
        }
    }
}

/// Service converting OCSP GET requests before handing them to `inner`.
#[derive(Debug, Clone)]
pub struct OcspRewrite<S> {
    inner: S,
    rewriter: Arc<Rewriter>,
}

impl<S> Service<Request<Body>> for OcspRewrite<S>
where
    S: Service<Request<Body>>,
    S::Response: IntoResponse,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        match self.rewriter.rewrite(request) {
            Outcome::PassThrough(request) | Outcome::Rewritten(request) => {
                let future = self.inner.call(request);
                Box::pin(async move { future.await.map(IntoResponse::into_response) })
            }
            Outcome::Reject(err) => {
                let response = err.into_response();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}
