//! Prometheus metrics recorder and `/metrics` endpoint handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

use crate::state::AppState;

/// Install the Prometheus metrics recorder (global).
///
/// Returns the `PrometheusHandle` used to render the `/metrics` endpoint.
/// Must be called once at server startup before any metrics are recorded.
pub fn install_recorder() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install metrics recorder");
    info!("prometheus metrics recorder installed");
    handle
}

/// Render Prometheus text format from the installed recorder.
#[must_use]
pub fn render(handle: &PrometheusHandle) -> String {
    handle.render()
}

/// `GET /metrics` — Prometheus text, or 404 when no recorder is installed.
pub async fn metrics_endpoint(State(state): State<AppState>) -> Response {
    match state.metrics.as_ref() {
        Some(handle) => render(handle).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// Metric name constants to avoid typos across modules.

/// Streaming sessions opened total (counter).
pub const SSE_SESSIONS_OPENED_TOTAL: &str = "sse_sessions_opened_total";
/// Active streaming sessions (gauge).
pub const SSE_SESSIONS_ACTIVE: &str = "sse_sessions_active";
/// Frames written and flushed total (counter).
pub const SSE_FRAMES_SENT_TOTAL: &str = "sse_frames_sent_total";
/// Sessions terminated by an error (counter, labels: kind).
pub const SSE_SESSION_ERRORS_TOTAL: &str = "sse_session_errors_total";
/// Session duration seconds (histogram).
pub const SSE_SESSION_DURATION_SECONDS: &str = "sse_session_duration_seconds";
