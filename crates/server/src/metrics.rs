//! Prometheus metrics

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::ServerError;

static PROMETHEUS: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder. Call once at startup.
pub fn init_metrics() -> Result<(), ServerError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Internal(format!("Failed to install metrics recorder: {}", e)))?;

    metrics::describe_counter!(
        "cupidsecure_requests_total",
        "Requests served, labeled by endpoint"
    );
    metrics::describe_histogram!(
        "cupidsecure_analyze_duration_seconds",
        "Wall-clock duration of conversation analysis"
    );

    PROMETHEUS
        .set(handle)
        .map_err(|_| ServerError::Internal("Metrics recorder already installed".to_string()))
}

/// Count a served request
pub fn record_request(endpoint: &'static str) {
    metrics::counter!("cupidsecure_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record analysis duration
pub fn record_analyze_duration(seconds: f64) {
    metrics::histogram!("cupidsecure_analyze_duration_seconds").record(seconds);
}

/// Render the metrics exposition
pub async fn metrics_handler() -> impl IntoResponse {
    match PROMETHEUS.get() {
        Some(handle) => handle.render(),
        None => String::new(),
    }
}
