//! The wall-clock event source.

use async_trait::async_trait;
use chrono::Local;
use serde_json::json;

use pulse_core::errors::BoxError;
use pulse_core::event::{SessionContext, TickEvent};
use pulse_core::source::EventSource;

/// Emits the local wall-clock time once per tick.
///
/// Event name `message`, payload `{"data": "HH:MM:SS"}` — the default
/// producer wired up by the binary. Stateless, shared across sessions.
pub struct ClockSource;

#[async_trait]
impl EventSource for ClockSource {
    async fn next_event(&self, _session: &SessionContext) -> Result<TickEvent, BoxError> {
        let now = Local::now().format("%H:%M:%S").to_string();
        Ok(TickEvent::new("message", json!({ "data": now })))
    }
}
