//! Event-stream wire framing.
//!
//! One frame per event, three fields, blank-line terminated:
//!
//! ```text
//! id: <sequence>
//! event: <name>
//! data: <payload>
//!
//! ```
//!
//! The format is line-oriented, so newlines embedded in the payload would
//! split one logical event into several frames on the browser side. They
//! are stripped before framing — a lossy normalization that trades payload
//! fidelity for framing integrity.

use std::borrow::Cow;

/// One complete event-stream frame, composed in memory before writing.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Session sequence number.
    pub id: u64,
    /// Event name. Assumed newline-free (producer contract, not escaped).
    pub event: &'a str,
    /// Rendered payload; newlines are stripped during encoding.
    pub data: &'a str,
}

impl Frame<'_> {
    /// Serialize the frame to its wire form.
    #[must_use]
    pub fn encode(&self) -> String {
        let data = strip_newlines(self.data);
        format!("id: {}\nevent: {}\ndata: {}\n\n", self.id, self.event, data)
    }
}

/// Remove embedded newline characters from a payload.
///
/// Idempotent; borrows when there is nothing to strip.
#[must_use]
pub fn strip_newlines(data: &str) -> Cow<'_, str> {
    if data.contains('\n') {
        Cow::Owned(data.replace('\n', ""))
    } else {
        Cow::Borrowed(data)
    }
}
