//! # pulse-server
//!
//! Axum HTTP server and the periodic-push event streaming core.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `sse` | The streaming endpoint: session loop, framing, sinks, clock source |
//! | `pages` | Landing page route |
//! | `state` | Shared `AppState` (renderer, event source, stream config) |
//! | `metrics` | Prometheus recorder install and `/metrics` endpoint |
//!
//! ## Routes
//!
//! - `GET /` — landing page
//! - `GET /sse` — long-lived event stream, one session task per client
//! - `GET /metrics` — Prometheus text format

#![deny(unsafe_code)]

pub mod metrics;
pub mod pages;
pub mod sse;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the HTTP router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/sse", get(sse::handler::stream_events))
        .route("/metrics", get(metrics::metrics_endpoint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
