//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup)
//!     → limits.rs (concurrency slot)
//!     → request.rs (assign x-request-id)
//!     → rewrite layer (OCSP GET → POST, or reject)
//!     → server.rs forward_handler (headers.rs strips hop-by-hop)
//!     → upstream OCSP responder
//! ```

pub mod headers;
pub mod limits;
pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
