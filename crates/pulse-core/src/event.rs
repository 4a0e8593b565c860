//! Per-tick event types.
//!
//! A [`TickEvent`] is ephemeral: it exists for one produce-render-write
//! cycle and is never persisted. The producer hands back an open
//! [`serde_json::Value`] payload; the session loop narrows it to an
//! [`EventPayload`] (an ordered string-to-string mapping) before rendering.
//! Anything that is not a flat string map is a terminal session error —
//! no generic serialization fallback exists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered string-to-string payload handed to the renderer.
///
/// Both the event producer and the renderer agree on this shape; the
/// session loop enforces it once per tick.
pub type EventPayload = BTreeMap<String, String>;

/// One event produced for a single tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    /// Event name written to the wire `event:` field. Must not contain
    /// newlines (producer contract — the framer does not escape it).
    pub name: String,
    /// Raw payload as produced; validated by [`TickEvent::string_payload`].
    pub payload: Value,
}

impl TickEvent {
    /// Create an event from a name and raw payload.
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Narrow the raw payload to the required flat string map.
    ///
    /// Returns `None` when the payload is not a JSON object or any value
    /// is not a string. The session loop treats `None` as terminal.
    #[must_use]
    pub fn string_payload(&self) -> Option<EventPayload> {
        let obj = self.payload.as_object()?;
        let mut map = EventPayload::new();
        for (key, value) in obj {
            let _ = map.insert(key.clone(), value.as_str()?.to_string());
        }
        Some(map)
    }
}

/// Per-connection context handed to the event producer on each tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    /// Unique session id (UUID v7), assigned when the connection arrives.
    pub session_id: String,
    /// Sequence number the next successful frame will carry. Starts at 0
    /// and increments only after a frame is written and flushed.
    pub sequence: u64,
}

impl SessionContext {
    /// Create a fresh context with the sequence counter at 0.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            sequence: 0,
        }
    }
}
