//! The periodic-push streaming endpoint.
//!
//! ## Submodules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `frame` | Wire framing: `id:`/`event:`/`data:` lines, newline stripping |
//! | `sink` | Frame delivery contract and the response-body channel sink |
//! | `session` | Per-connection tick loop and lifecycle |
//! | `clock` | The wall-clock event source |
//! | `handler` | The `/sse` route: headers, task spawn, disconnect wiring |
//!
//! ## Data Flow
//!
//! `handler` spawns one `session` per connection. Each tick the session
//! asks the event source for an event, renders it, frames it, and pushes
//! it through the sink into the response body. The body's drop guard
//! cancels the session when the client disconnects.

pub mod clock;
pub mod frame;
pub mod handler;
pub mod session;
pub mod sink;
