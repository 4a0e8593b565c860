//! The `/sse` route: headers, session spawn, disconnect wiring.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use metrics::{counter, gauge, histogram};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use uuid::Uuid;

use crate::metrics::{
    SSE_SESSIONS_ACTIVE, SSE_SESSIONS_OPENED_TOTAL, SSE_SESSION_DURATION_SECONDS,
    SSE_SESSION_ERRORS_TOTAL,
};
use crate::state::AppState;

use super::session::StreamSession;
use super::sink::ChannelSink;

/// Open a streaming connection.
///
/// Sets the event-stream response headers, spawns the per-connection
/// session task, and hands back a body fed by that task. Dropping the
/// body — the client going away — fires the session's cancellation token
/// through a drop guard, so the loop observes disconnect at its next wait
/// point and exits cleanly.
pub async fn stream_events(State(state): State<AppState>) -> Response {
    let session_id = Uuid::now_v7().to_string();
    let (tx, mut rx) = mpsc::channel::<Bytes>(ChannelSink::CAPACITY);
    let cancel = CancellationToken::new();

    let session = StreamSession::new(
        session_id.clone(),
        state.stream.interval,
        state.stream.event_template.clone(),
        Arc::clone(&state.source),
        Arc::clone(&state.renderer),
        ChannelSink::new(tx),
        cancel.clone(),
    );
    let _task = tokio::spawn(run_session(session, session_id));

    let guard = cancel.drop_guard();
    let body = async_stream::stream! {
        let _guard = guard;
        while let Some(frame) = rx.recv().await {
            yield Ok::<Bytes, Infallible>(frame);
        }
    };

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Body::from_stream(body),
    )
        .into_response()
}

/// Run one session to completion and record its outcome.
///
/// This is the single log site per termination: errors at error level
/// with the failing step's kind, disconnects at debug.
async fn run_session(session: StreamSession<ChannelSink>, session_id: String) {
    counter!(SSE_SESSIONS_OPENED_TOTAL).increment(1);
    gauge!(SSE_SESSIONS_ACTIVE).increment(1.0);
    let started = Instant::now();

    match session.run().await {
        Ok(frames) => {
            debug!(session_id = %session_id, frames, "stream closed by client");
        }
        Err(e) => {
            counter!(SSE_SESSION_ERRORS_TOTAL, "kind" => e.kind()).increment(1);
            error!(session_id = %session_id, error = %e, kind = e.kind(), "stream session terminated");
        }
    }

    histogram!(SSE_SESSION_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
    gauge!(SSE_SESSIONS_ACTIVE).decrement(1.0);
}
