//! Terminal failure modes for a streaming session.
//!
//! Every variant ends the session: a single producer, payload, render, or
//! write failure closes the stream rather than skipping the tick. Client
//! disconnect is not an error and never appears here — the session loop
//! reports it as a clean `Ok` return.

use crate::render::RenderError;

/// Boxed error type for producer failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a streaming session terminated abnormally.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The event producer returned a failure for the current tick.
    #[error("event source failed")]
    Source(#[source] BoxError),

    /// The produced payload is not a flat string-to-string object.
    #[error("event payload is not a flat string map")]
    PayloadShape,

    /// The renderer could not produce the event body.
    #[error("template render failed")]
    Render(#[from] RenderError),

    /// The frame could not be written to the client.
    #[error("frame write failed")]
    Write(#[from] std::io::Error),
}

impl SessionError {
    /// Stable label for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Source(_) => "source",
            Self::PayloadShape => "payload_shape",
            Self::Render(_) => "render",
            Self::Write(_) => "write",
        }
    }
}
