//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): successful resolutions by rule
//! - `router_rejections_total` (counter): `InvalidRequest` by method
//! - `router_requests_total` (counter): HTTP requests by method, status
//! - `router_request_duration_seconds` (histogram): latency by method
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - Prometheus exporter is opt-in via configuration

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Label for an HTTP method. Anything outside the common verbs is `other`,
/// so client-chosen method names cannot create new series.
pub fn method_label(method: &str) -> &'static str {
    const KNOWN: [&str; 7] = ["get", "post", "put", "delete", "head", "patch", "options"];
    KNOWN
        .iter()
        .find(|known| method.eq_ignore_ascii_case(known))
        .copied()
        .unwrap_or("other")
}

pub fn record_resolution(rule: &'static str) {
    ::metrics::counter!("router_resolutions_total", "rule" => rule).increment(1);
}

pub fn record_rejection(method: &'static str) {
    ::metrics::counter!("router_rejections_total", "method" => method).increment(1);
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method_label(method);
    ::metrics::counter!(
        "router_requests_total",
        "method" => method,
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("router_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
