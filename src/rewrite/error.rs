//! Rewrite failures.
//!
//! `RewriteConfigError` is fatal at construction. `RewriteError` terminates a
//! single request and is turned into a plain-text response; the request is
//! never forwarded.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The rewriter could not be built from its configuration.
#[derive(Debug, Error)]
pub enum RewriteConfigError {
    #[error("invalid path pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A matched request that cannot be turned into an OCSP POST.
///
/// The `Display` text is the exact response body, minus the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error("Expecting GET or POST requests only")]
    MethodNotAllowed,

    #[error("Invalid request path")]
    InvalidPath,

    #[error("Invalid request data")]
    InvalidData(#[source] base64::DecodeError),
}

impl RewriteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RewriteError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RewriteError::InvalidPath | RewriteError::InvalidData(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Metric label for this rejection.
    pub fn reason(&self) -> &'static str {
        match self {
            RewriteError::MethodNotAllowed => "method_not_allowed",
            RewriteError::InvalidPath => "invalid_path",
            RewriteError::InvalidData(_) => "invalid_data",
        }
    }
}

impl IntoResponse for RewriteError {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(format!("{self}\n")));
        *response.status_mut() = self.status();

        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        response
    }
}
