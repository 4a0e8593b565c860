//! Frame delivery to the client.

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

/// A response sink that delivers each frame toward the client immediately.
///
/// `send` returning `Ok` means the frame has been handed to the transport
/// and flushed — implementors must not buffer across frames. This makes
/// flush support a construction-time capability: a sink that cannot flush
/// incrementally has no way to implement the trait, so the session loop
/// carries no runtime capability check.
#[async_trait]
pub trait FrameSink: Send {
    /// Write one encoded frame and flush it.
    async fn send(&mut self, frame: Bytes) -> std::io::Result<()>;
}

/// Sink backed by the bounded channel feeding the HTTP response body.
///
/// Capacity 1 keeps at most one frame in flight: the session loop only
/// reaches its next tick once the body stream has picked up the previous
/// frame, so a slow client backpressures the loop instead of growing a
/// queue. Each channel message becomes one body chunk, which the server
/// flushes to the socket individually.
pub struct ChannelSink {
    tx: mpsc::Sender<Bytes>,
}

impl ChannelSink {
    /// Recommended channel capacity for [`ChannelSink::new`].
    pub const CAPACITY: usize = 1;

    /// Wrap the sending half of the response-body channel.
    #[must_use]
    pub fn new(tx: mpsc::Sender<Bytes>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl FrameSink for ChannelSink {
    async fn send(&mut self, frame: Bytes) -> std::io::Result<()> {
        self.tx.send(frame).await.map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "response body closed")
        })
    }
}
