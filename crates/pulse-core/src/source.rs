//! The event-producer seam.
//!
//! The session loop depends only on [`EventSource`], so tests can drive it
//! with scripted producers instead of a live clock.

use async_trait::async_trait;

use crate::errors::BoxError;
use crate::event::{SessionContext, TickEvent};

/// Produces one event per tick for a streaming session.
///
/// Implementations are shared read-only across sessions (`Arc<dyn
/// EventSource>`); any per-call state lives behind interior mutability.
/// Returning an error terminates the calling session.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Produce the event for the current tick.
    async fn next_event(&self, session: &SessionContext) -> Result<TickEvent, BoxError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoSource;

    #[async_trait]
    impl EventSource for EchoSource {
        async fn next_event(&self, session: &SessionContext) -> Result<TickEvent, BoxError> {
            Ok(TickEvent::new(
                "message",
                json!({"data": session.sequence.to_string()}),
            ))
        }
    }

    #[tokio::test]
    async fn source_sees_session_context() {
        let source = EchoSource;
        let mut ctx = SessionContext::new("sess-1");
        ctx.sequence = 7;
        let event = source.next_event(&ctx).await.unwrap();
        assert_eq!(event.payload["data"], "7");
    }
}
