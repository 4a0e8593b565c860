//! Static page routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use pulse_core::event::EventPayload;
use tracing::error;

use crate::state::AppState;

/// `GET /` — the landing page hosting the event-stream consumer.
pub async fn index(State(state): State<AppState>) -> Response {
    match state
        .renderer
        .render(&state.stream.index_template, &EventPayload::new())
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(template = %state.stream.index_template, error = %e, "failed to render landing page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
