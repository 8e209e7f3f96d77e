//! OCSP GET-to-POST rewriting.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → matcher.rs (literal prefixes, then fallback pattern)
//!     → rewriter.rs (method gate, payload decode, request rebuild)
//!     → layer.rs (forward to the next service or answer with the error)
//! ```
//!
//! # Design Decisions
//! - Matchers compiled at startup, immutable at runtime
//! - A bad pattern fails construction, never a request
//! - Requests are consumed and returned, not mutated through a shared handle

#[cfg(test)]
mod fixtures;

pub mod error;
pub mod layer;
pub mod matcher;
pub mod rewriter;

pub use error::{RewriteConfigError, RewriteError};
pub use layer::{OcspRewrite, OcspRewriteLayer};
pub use matcher::{classify, MatchResult, PathMatcher};
pub use rewriter::{Outcome, Rewriter, OCSP_REQUEST_CONTENT_TYPE};
