//! Metrics collection and exposition.
//!
//! # Metrics
//! - `admin_gate_decisions_total` (counter): gate outcomes by `outcome`
//! - `admin_gate_unmatched_total` (counter): requests no route matched

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its HTTP scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_gate_decision(outcome: &'static str) {
    counter!("admin_gate_decisions_total", "outcome" => outcome).increment(1);
}

pub fn record_unmatched() {
    counter!("admin_gate_unmatched_total").increment(1);
}
