//! OCSP GET-to-POST rewriting gateway.
//!
//! RFC6960 lets clients send OCSP requests either as `POST` with a DER body or
//! as `GET` with the base64 DER in the path. This gateway sits in front of a
//! responder that only implements `POST` and converts the `GET` form on the
//! fly.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ limits ──▶ request id ──▶ rewrite ──▶ forward ──▶ OCSP responder
//!                                            │                       (POST only)
//!                                            └──▶ 400 / 405
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod rewrite;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use rewrite::{Outcome, Rewriter};
