//! Prometheus metrics for the room listing.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use metrics::Unit;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Installs the global Prometheus recorder and describes the room store's
/// metrics so they carry help text in the exposition.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    metrics::describe_counter!("rooms_list_total", "Room listings served");
    metrics::describe_histogram!(
        "rooms_list_duration_seconds",
        Unit::Seconds,
        "Time spent querying the rooms table"
    );

    Ok(handle)
}

/// GET /metrics — Prometheus text exposition.
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], handle.render())
}
