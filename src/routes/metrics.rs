use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Register descriptions for the counters the handlers emit.
pub fn describe() {
    metrics::describe_counter!("items_created_total", "Catalog items created");
    metrics::describe_counter!("look_jobs_created_total", "Look generation jobs queued");
    metrics::describe_counter!(
        "validation_failures_total",
        "Requests rejected for an invalid payload"
    );
    metrics::describe_counter!(
        "storage_errors_total",
        "Document store operations that failed"
    );
}

/// Prometheus metrics scrape endpoint.
pub async fn prometheus_metrics(
    axum::extract::State(handle): axum::extract::State<Arc<PrometheusHandle>>,
) -> impl IntoResponse {
    handle.render()
}
