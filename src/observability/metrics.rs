//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ocsp_rewrite_total` (counter): requests seen by the rewriter, by instance, outcome
//! - `ocsp_rewrite_rejected_total` (counter): rejected requests, by instance, reason
//! - `ocsp_upstream_requests_total` (counter): forwarded requests, by status
//! - `ocsp_upstream_duration_seconds` (histogram): upstream round-trip latency
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_rewrite(instance: &str, outcome: &'static str) {
    ::metrics::counter!(
        "ocsp_rewrite_total",
        "instance" => instance.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_rejection(instance: &str, reason: &'static str) {
    ::metrics::counter!(
        "ocsp_rewrite_rejected_total",
        "instance" => instance.to_string(),
        "reason" => reason
    )
    .increment(1);
}

pub fn record_upstream(status: u16, start: Instant) {
    ::metrics::counter!("ocsp_upstream_requests_total", "status" => status.to_string())
        .increment(1);
    ::metrics::histogram!("ocsp_upstream_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
