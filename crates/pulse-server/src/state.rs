//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use pulse_core::render::Renderer;
use pulse_core::source::EventSource;

/// Streaming configuration shared by all sessions.
#[derive(Clone, Debug)]
pub struct StreamConfig {
    /// Tick interval. Must be positive (settings validation upstream).
    pub interval: Duration,
    /// Template rendered for the landing page.
    pub index_template: String,
    /// Template rendered for each tick event.
    pub event_template: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            index_template: "index.html".to_string(),
            event_template: "event.html".to_string(),
        }
    }
}

/// State handed to every route handler.
///
/// The renderer and event source are read-only after construction and
/// shared across all concurrent sessions; no other state crosses session
/// boundaries.
#[derive(Clone)]
pub struct AppState {
    /// Template renderer.
    pub renderer: Arc<dyn Renderer>,
    /// Per-tick event producer.
    pub source: Arc<dyn EventSource>,
    /// Streaming configuration.
    pub stream: StreamConfig,
    /// Prometheus handle backing `/metrics`; absent when no recorder is
    /// installed (tests).
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Assemble state without a metrics recorder.
    pub fn new(
        renderer: Arc<dyn Renderer>,
        source: Arc<dyn EventSource>,
        stream: StreamConfig,
    ) -> Self {
        Self {
            renderer,
            source,
            stream,
            metrics: None,
        }
    }

    /// Attach the Prometheus handle serving `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
