//! The per-connection streaming loop.
//!
//! One [`StreamSession`] per client, owned by one spawned task. The loop
//! waits on exactly two events — cancellation or the next tick — and is
//! strictly sequential: produce, validate, render, frame, write, flush,
//! then wait again. At most one frame is ever in flight per session, so
//! frames reach the transport in sequence order without locking.
//!
//! Any step failure terminates the session immediately; nothing for the
//! failing tick touches the wire (rendering happens into a buffer before
//! the first write). Client disconnect is a clean termination, not an
//! error.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use pulse_core::errors::SessionError;
use pulse_core::event::SessionContext;
use pulse_core::render::Renderer;
use pulse_core::source::EventSource;

use super::frame::Frame;
use super::sink::FrameSink;
use crate::metrics::SSE_FRAMES_SENT_TOTAL;

/// One active client connection's streaming state.
///
/// Created by the `/sse` route handler, consumed by [`run`](Self::run).
/// Never shared across connections.
pub struct StreamSession<S> {
    session_id: String,
    interval: Duration,
    template: String,
    source: Arc<dyn EventSource>,
    renderer: Arc<dyn Renderer>,
    sink: S,
    cancel: CancellationToken,
}

impl<S: FrameSink> StreamSession<S> {
    /// Assemble a session. `interval` must be positive (enforced upstream
    /// by settings validation).
    pub fn new(
        session_id: impl Into<String>,
        interval: Duration,
        template: impl Into<String>,
        source: Arc<dyn EventSource>,
        renderer: Arc<dyn Renderer>,
        sink: S,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            interval,
            template: template.into(),
            source,
            renderer,
            sink,
            cancel,
        }
    }

    /// Drive the session until the client disconnects or a step fails.
    ///
    /// Returns the number of frames written on clean disconnect. The
    /// ticker first fires one full interval after entry and is dropped on
    /// every exit path.
    pub async fn run(mut self) -> Result<u64, SessionError> {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        let mut ctx = SessionContext::new(self.session_id);

        loop {
            tokio::select! {
                () = self.cancel.cancelled() => {
                    return Ok(ctx.sequence);
                }
                _ = ticker.tick() => {
                    let event = self
                        .source
                        .next_event(&ctx)
                        .await
                        .map_err(SessionError::Source)?;
                    let payload = event.string_payload().ok_or(SessionError::PayloadShape)?;
                    let body = self.renderer.render(&self.template, &payload)?;
                    let frame = Frame {
                        id: ctx.sequence,
                        event: &event.name,
                        data: &body,
                    }
                    .encode();
                    self.sink.send(frame.into()).await?;
                    counter!(SSE_FRAMES_SENT_TOTAL).increment(1);
                    ctx.sequence += 1;
                }
            }
        }
    }
}
