//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed responses by method, status
//! - `relay_request_duration_seconds` (histogram): time spent forwarding
//! - `relay_upstream_attempts_total` (counter): attempts by outcome
//! - `relay_retries_total` (counter): backoff waits taken

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the final outcome of one forwarded request.
pub fn record_relay(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    ::metrics::counter!(
        "relay_requests_total",
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    ::metrics::histogram!(
        "relay_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one upstream attempt.
pub fn record_attempt(outcome: &'static str) {
    ::metrics::counter!("relay_upstream_attempts_total", "outcome" => outcome).increment(1);
}

pub fn record_retry() {
    ::metrics::counter!("relay_retries_total").increment(1);
}
