//! OCSP GET to POST conversion.
//!
//! RFC6960 Appendix A.1 allows a request to be sent as
//! `GET {prefix}/{base64(DER OCSPRequest)}`. [`Rewriter::rewrite`] turns such a
//! request into `POST {prefix}` with the DER bytes as body, so a responder
//! that only speaks POST can serve both forms.
//!
//! # Flow
//! ```text
//! path ──classify──▶ NoMatch ─────────────────────────────▶ PassThrough
//!                  └▶ Literal | Pattern
//!                        method POST ─────────────────────▶ PassThrough
//!                        method other than GET ───────────▶ Reject(405)
//!                        path not UTF-8 once decoded ─────▶ Reject(400)
//!                        path != prefix + "/" + payload ──▶ Reject(400)
//!                        payload not base64 ──────────────▶ Reject(400)
//!                        otherwise ───────────────────────▶ Rewritten
//! ```
//!
//! Matching and payload extraction work on the percent-decoded path, so a
//! payload sent URL-encoded (`%2B`, `%2F`, `%3D`) is accepted.

use axum::{
    body::Body,
    http::{header, uri::Uri, HeaderValue, Method, Request},
};
use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::RewriteConfig;
use crate::observability::metrics;
use crate::rewrite::error::{RewriteConfigError, RewriteError};
use crate::rewrite::matcher::PathMatcher;

/// Media type of a DER-encoded OCSP request body.
pub const OCSP_REQUEST_CONTENT_TYPE: &str = "application/ocsp-request";

/// Standard alphabet with padding; non-zero trailing bits are tolerated.
const OCSP_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Escaped when a decoded prefix is written back as a request path.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// What to do with a request after rewriting.
#[derive(Debug)]
pub enum Outcome {
    /// Forward the request exactly as received.
    PassThrough(Request<Body>),
    /// Forward the converted POST request.
    Rewritten(Request<Body>),
    /// Answer with this error; do not forward.
    Reject(RewriteError),
}

impl Outcome {
    fn label(&self) -> &'static str {
        match self {
            Outcome::PassThrough(_) => "passthrough",
            Outcome::Rewritten(_) => "rewritten",
            Outcome::Reject(_) => "rejected",
        }
    }
}

/// Converts OCSP GET requests into POST requests.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Rewriter {
    name: String,
    matcher: PathMatcher,
}

impl Rewriter {
    /// Build a rewriter. Fails only if the configured pattern does not compile.
    pub fn new(config: &RewriteConfig) -> Result<Self, RewriteConfigError> {
        let matcher = PathMatcher::compile(config)?;
        if config.path_prefixes.is_empty() && config.path_pattern.is_none() {
            tracing::warn!(instance = %config.name, "No path prefixes or pattern configured; every request passes through");
        }
        for prefix in config.path_prefixes.iter().filter(|p| !p.starts_with('/')) {
            tracing::warn!(instance = %config.name, prefix = %prefix, "Path prefix does not start with '/'");
        }
        tracing::debug!(
            instance = %config.name,
            prefixes = ?config.path_prefixes,
            pattern = ?config.path_pattern,
            "OCSP rewriter configured"
        );
        Ok(Self {
            name: config.name.clone(),
            matcher,
        })
    }

    /// Decide what happens to `request`.
    pub fn rewrite(&self, request: Request<Body>) -> Outcome {
        let outcome = self.apply(request);
        metrics::record_rewrite(&self.name, outcome.label());
        if let Outcome::Reject(err) = &outcome {
            metrics::record_rejection(&self.name, err.reason());
        }
        outcome
    }

    fn apply(&self, request: Request<Body>) -> Outcome {
        let (path, decoded) = match percent_decode_str(request.uri().path()).decode_utf8() {
            Ok(path) => (path.into_owned(), true),
            Err(_) => (request.uri().path().to_owned(), false),
        };

        let matched = self.matcher.classify(&path);
        let kind = matched.kind();
        let Some(prefix) = matched.prefix().map(str::to_owned) else {
            return Outcome::PassThrough(request);
        };

        if request.method() == Method::POST {
            tracing::debug!(instance = %self.name, prefix = %prefix, "Already a POST, forwarding unchanged");
            return Outcome::PassThrough(request);
        }
        if request.method() != Method::GET {
            tracing::warn!(instance = %self.name, method = %request.method(), prefix = %prefix, "Rejecting OCSP request method");
            return Outcome::Reject(RewriteError::MethodNotAllowed);
        }

        if !decoded {
            tracing::warn!(instance = %self.name, path = %request.uri().path(), prefix = %prefix, "OCSP GET path is not UTF-8 once percent-decoded");
            return Outcome::Reject(RewriteError::InvalidPath);
        }

        let der = match payload_segment(&path, &prefix) {
            Some(payload) => match OCSP_BASE64.decode(payload) {
                Ok(der) => der,
                Err(e) => {
                    tracing::warn!(instance = %self.name, prefix = %prefix, error = %e, "OCSP GET payload is not base64");
                    return Outcome::Reject(RewriteError::InvalidData(e));
                }
            },
            None => {
                tracing::warn!(instance = %self.name, path = %request.uri().path(), prefix = %prefix, "OCSP GET path has no payload segment");
                return Outcome::Reject(RewriteError::InvalidPath);
            }
        };

        let (mut parts, _) = request.into_parts();
        parts.uri = match target_uri(&parts.uri, &prefix) {
            Ok(uri) => uri,
            Err(e) => {
                tracing::warn!(instance = %self.name, prefix = %prefix, error = %e, "Matched prefix is not a valid request target");
                return Outcome::Reject(RewriteError::InvalidPath);
            }
        };
        parts.method = Method::POST;
        parts.headers.remove(header::TRANSFER_ENCODING);
        parts.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(OCSP_REQUEST_CONTENT_TYPE),
        );
        parts
            .headers
            .insert(header::CONTENT_LENGTH, HeaderValue::from(der.len()));

        tracing::debug!(
            instance = %self.name,
            matched_by = kind,
            prefix = %prefix,
            der_len = der.len(),
            "Rewrote OCSP GET to POST"
        );

        Outcome::Rewritten(Request::from_parts(parts, Body::from(der)))
    }
}

/// The payload after `prefix/`, if the path has exactly that shape.
///
/// Slashes inside the payload belong to the base64 text.
fn payload_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix)?.strip_prefix('/')
}

/// `uri` with its path-and-query replaced by the re-escaped `prefix`. Scheme
/// and authority of an absolute-form target are kept; the query is dropped.
fn target_uri(uri: &Uri, prefix: &str) -> Result<Uri, axum::http::Error> {
    let mut builder = Uri::builder();
    if let Some(scheme) = uri.scheme() {
        builder = builder.scheme(scheme.clone());
    }
    if let Some(authority) = uri.authority() {
        builder = builder.authority(authority.clone());
    }
    builder
        .path_and_query(utf8_percent_encode(prefix, PATH).to_string())
        .build()
}
