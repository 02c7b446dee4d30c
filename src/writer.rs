//! Dedicated writer task for outbound frames.
//!
//! Connections hand encoded frames to a writer task over an mpsc channel
//! instead of sharing the socket's write half. The task batches whatever is
//! queued into a single vectored write.
//!
//! # Architecture
//!
//! ```text
//! send_buffer ─► mpsc::Sender<OutboundFrame> ─► Writer Task ─► TcpStream
//! ```
//!
//! Pending frames are counted so `try_send` can refuse work once the queue is
//! full instead of buffering without bound.

use std::io::IoSlice;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{ApiError, Result};
use crate::protocol::{frame_header_for, EncodedHeader, FrameHeader};

/// Default maximum pending frames before backpressure kicks in.
pub const DEFAULT_MAX_PENDING_FRAMES: usize = 256;

/// Default channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default backpressure timeout.
pub const DEFAULT_BACKPRESSURE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum frames to batch in a single write operation.
const MAX_BATCH_SIZE: usize = 64;

const BACKPRESSURE_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// A frame ready to be written to the socket.
#[derive(Debug)]
pub struct OutboundFrame {
    /// Pre-encoded plaintext header.
    pub header: EncodedHeader,
    /// Encoded message (empty for messages without fields).
    pub payload: Bytes,
}

impl OutboundFrame {
    /// Create a new outbound frame.
    #[inline]
    pub fn new(header: &FrameHeader, payload: Bytes) -> Self {
        Self {
            header: header.encode(),
            payload,
        }
    }

    /// Frame an encoded message, checking that it fits in a frame.
    pub fn for_message(message_type: u16, payload: Bytes) -> Result<Self> {
        let header = frame_header_for(message_type, payload.len())?;
        Ok(Self::new(&header, payload))
    }

    /// Total size of this frame (header + payload).
    #[inline]
    pub fn size(&self) -> usize {
        self.header.len() + self.payload.len()
    }
}

/// Configuration for the writer task.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Maximum pending frames before backpressure kicks in.
    pub max_pending_frames: usize,
    /// Channel capacity for frame queue.
    pub channel_capacity: usize,
    /// Timeout when waiting for backpressure to clear.
    pub backpressure_timeout: Duration,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            max_pending_frames: DEFAULT_MAX_PENDING_FRAMES,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            backpressure_timeout: DEFAULT_BACKPRESSURE_TIMEOUT,
        }
    }
}

/// Handle for sending frames to the writer task.
///
/// Cheap to clone.
#[derive(Clone)]
pub struct WriterHandle {
    tx: mpsc::Sender<OutboundFrame>,
    /// Frames queued or in flight, decremented once written.
    pending: Arc<AtomicUsize>,
    max_pending: usize,
    timeout: Duration,
}

impl WriterHandle {
    fn new(tx: mpsc::Sender<OutboundFrame>, pending: Arc<AtomicUsize>, config: &WriterConfig) -> Self {
        Self {
            tx,
            pending,
            max_pending: config.max_pending_frames,
            timeout: config.backpressure_timeout,
        }
    }

    /// Queue a frame without waiting.
    ///
    /// Returns `Err(BackpressureTimeout)` immediately if the queue is full and
    /// `Err(ConnectionClosed)` once the writer task has stopped.
    pub fn try_send(&self, frame: OutboundFrame) -> Result<()> {
        if self.is_backpressure_active() {
            return Err(ApiError::BackpressureTimeout);
        }

        self.pending.fetch_add(1, Ordering::AcqRel);
        self.tx.try_send(frame).map_err(|e| {
            self.pending.fetch_sub(1, Ordering::Release);
            match e {
                mpsc::error::TrySendError::Full(_) => ApiError::BackpressureTimeout,
                mpsc::error::TrySendError::Closed(_) => ApiError::ConnectionClosed,
            }
        })
    }

    /// Queue a frame, waiting up to the configured timeout for room.
    pub async fn send(&self, frame: OutboundFrame) -> Result<()> {
        let deadline = Instant::now() + self.timeout;
        while self.is_backpressure_active() {
            if Instant::now() >= deadline {
                return Err(ApiError::BackpressureTimeout);
            }
            tokio::time::sleep(BACKPRESSURE_POLL_INTERVAL).await;
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        let permit = tokio::time::timeout(remaining, self.tx.reserve())
            .await
            .map_err(|_| ApiError::BackpressureTimeout)?
            .map_err(|_| ApiError::ConnectionClosed)?;

        self.pending.fetch_add(1, Ordering::AcqRel);
        permit.send(frame);
        Ok(())
    }

    #[inline]
    pub fn is_backpressure_active(&self) -> bool {
        self.pending_count() >= self.max_pending
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// True once the writer task has exited.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Spawn the writer task over `writer` (the socket write half).
///
/// The returned `JoinHandle` resolves when every `WriterHandle` has been
/// dropped and the queue is drained, or on the first write error.
pub fn spawn_writer_task<W>(writer: W, config: WriterConfig) -> (WriterHandle, JoinHandle<Result<()>>)
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(config.channel_capacity);
    let pending = Arc::new(AtomicUsize::new(0));
    let handle = WriterHandle::new(tx, pending.clone(), &config);
    let task = tokio::spawn(writer_loop(rx, writer, pending));
    (handle, task)
}

/// Spawn the writer task with default configuration.
pub fn spawn_writer_task_default<W>(writer: W) -> (WriterHandle, JoinHandle<Result<()>>)
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    spawn_writer_task(writer, WriterConfig::default())
}

async fn writer_loop<W>(
    mut rx: mpsc::Receiver<OutboundFrame>,
    mut writer: W,
    pending: Arc<AtomicUsize>,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut batch = Vec::with_capacity(MAX_BATCH_SIZE);

    while let Some(first) = rx.recv().await {
        batch.push(first);
        while batch.len() < MAX_BATCH_SIZE {
            match rx.try_recv() {
                Ok(frame) => batch.push(frame),
                Err(_) => break,
            }
        }

        let result = write_batch(&mut writer, &batch).await;
        pending.fetch_sub(batch.len(), Ordering::Release);
        batch.clear();

        if let Err(e) = result {
            tracing::warn!("Writer task stopping after write error: {}", e);
            return Err(e);
        }
    }

    tracing::trace!("Writer channel closed");
    Ok(())
}

/// Write a batch of frames using scatter/gather I/O, resuming after partial writes.
async fn write_batch<W>(writer: &mut W, batch: &[OutboundFrame]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let total_size: usize = batch.iter().map(OutboundFrame::size).sum();
    let mut written = 0;

    while written < total_size {
        let slices = remaining_slices(batch, written);
        let n = writer.write_vectored(&slices).await?;
        if n == 0 {
            return Err(ApiError::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "write_vectored returned 0",
            )));
        }
        written += n;
    }

    writer.flush().await?;
    Ok(())
}

/// IoSlices covering everything after the first `skip_bytes` bytes of the batch.
fn remaining_slices(batch: &[OutboundFrame], skip_bytes: usize) -> Vec<IoSlice<'_>> {
    let mut slices = Vec::with_capacity(batch.len() * 2);
    let mut offset = 0;

    for frame in batch {
        for part in [&frame.header[..], &frame.payload[..]] {
            let end = offset + part.len();
            if !part.is_empty() && skip_bytes < end {
                slices.push(IoSlice::new(&part[skip_bytes.saturating_sub(offset)..]));
            }
            offset = end;
        }
    }

    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tokio::io::{duplex, AsyncReadExt};

    use crate::protocol::FrameBuffer;

    fn frame(message_type: u16, payload: &'static [u8]) -> OutboundFrame {
        OutboundFrame::for_message(message_type, Bytes::from_static(payload)).unwrap()
    }

    #[test]
    fn test_outbound_frame_size() {
        let f = frame(25, b"hello");
        assert_eq!(f.header.len(), 3);
        assert_eq!(f.size(), 8);

        let empty = frame(7, b"");
        assert_eq!(empty.size(), 3);
    }

    #[test]
    fn test_for_message_rejects_oversized_payload() {
        let payload = Bytes::from(vec![0u8; 70_000]);
        let result = OutboundFrame::for_message(1, payload);
        assert!(matches!(result, Err(ApiError::FrameTooLarge { .. })));
    }

    #[test]
    fn test_writer_config_default() {
        let config = WriterConfig::default();
        assert_eq!(config.max_pending_frames, DEFAULT_MAX_PENDING_FRAMES);
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert_eq!(config.backpressure_timeout, DEFAULT_BACKPRESSURE_TIMEOUT);
    }

    #[tokio::test]
    async fn test_try_send_reaches_socket() {
        let (client, mut server) = duplex(4096);
        let (handle, _task) = spawn_writer_task_default(client);

        handle.try_send(frame(8, b"")).unwrap();
        handle.try_send(frame(25, b"abc")).unwrap();

        let mut received = Vec::new();
        let mut buf = [0u8; 64];
        while received.len() < 9 {
            let n = server.read(&mut buf).await.unwrap();
            received.extend_from_slice(&buf[..n]);
        }

        let frames = FrameBuffer::new().push(&received).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].message_type(), 8);
        assert_eq!(frames[1].message_type(), 25);
        assert_eq!(frames[1].payload(), b"abc");
    }

    #[tokio::test]
    async fn test_send_waits_for_channel() {
        let (client, mut server) = duplex(4096);
        let (handle, _task) = spawn_writer_task_default(client);

        handle.send(frame(1, b"hi")).await.unwrap();

        let mut buf = [0u8; 16];
        let n = server.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], &[0x00, 0x02, 0x01, b'h', b'i']);
    }

    #[tokio::test]
    async fn test_try_send_at_capacity() {
        let (tx, _rx) = mpsc::channel::<OutboundFrame>(10);
        let config = WriterConfig {
            max_pending_frames: 2,
            ..Default::default()
        };
        let handle = WriterHandle::new(tx, Arc::new(AtomicUsize::new(2)), &config);

        assert!(handle.is_backpressure_active());
        let result = handle.try_send(frame(1, b""));
        assert!(matches!(result, Err(ApiError::BackpressureTimeout)));
    }

    #[tokio::test]
    async fn test_try_send_after_close() {
        let (tx, rx) = mpsc::channel::<OutboundFrame>(10);
        drop(rx);
        let handle = WriterHandle::new(tx, Arc::new(AtomicUsize::new(0)), &WriterConfig::default());

        assert!(handle.is_closed());
        let result = handle.try_send(frame(1, b""));
        assert!(matches!(result, Err(ApiError::ConnectionClosed)));
        assert_eq!(handle.pending_count(), 0);
    }

    #[test]
    fn test_remaining_slices_no_skip() {
        let batch = vec![frame(1, b"hello")];
        let slices = remaining_slices(&batch, 0);
        assert_eq!(slices.len(), 2);
    }

    #[test]
    fn test_remaining_slices_partial_header() {
        let batch = vec![frame(1, b"hello")];
        let slices = remaining_slices(&batch, 2);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].len(), 1);
        assert_eq!(slices[1].len(), 5);
    }

    #[test]
    fn test_remaining_slices_skips_empty_payload() {
        let batch = vec![frame(7, b""), frame(1, b"abc")];
        let slices = remaining_slices(&batch, 3);
        assert_eq!(slices.len(), 2);
        assert_eq!(&*slices[1], b"abc");
    }

    #[tokio::test]
    async fn test_write_batch_multiple() {
        let mut buf = Cursor::new(Vec::new());
        let batch: Vec<_> = (0..5).map(|i| frame(i, b"abc")).collect();

        write_batch(&mut buf, &batch).await.unwrap();

        assert_eq!(buf.into_inner().len(), 5 * 6);
    }

    #[tokio::test]
    async fn test_writer_shutdown_on_channel_close() {
        let (client, _server) = duplex(4096);
        let (handle, task) = spawn_writer_task_default(client);

        drop(handle);

        let result = task.await.unwrap();
        assert!(result.is_ok());
    }
}
