//! Frame struct with typed accessors.
//!
//! Represents one complete inbound message: header plus payload.
//! Uses `bytes::Bytes` for zero-copy payload sharing.
//!
//! # Example
//!
//! ```
//! use esphome_api::protocol::{Frame, FrameHeader};
//! use bytes::Bytes;
//!
//! let frame = Frame::new(FrameHeader::new(7, 0), Bytes::new());
//!
//! assert_eq!(frame.message_type(), 7);
//! assert!(frame.payload().is_empty());
//! ```

use bytes::Bytes;

use super::wire_format::FrameHeader;
use crate::error::{ApiError, Result};

/// A complete protocol frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Decoded header.
    pub header: FrameHeader,
    /// Payload bytes (zero-copy via `bytes::Bytes`).
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame from header and payload.
    pub fn new(header: FrameHeader, payload: Bytes) -> Self {
        Self { header, payload }
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    #[inline]
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    #[inline]
    pub fn message_type(&self) -> u16 {
        self.header.message_type
    }
}

/// Build a complete plaintext frame as a single byte vector.
///
/// # Example
///
/// ```
/// use esphome_api::protocol::build_frame;
///
/// let bytes = build_frame(8, &[]).unwrap();
/// assert_eq!(bytes, vec![0x00, 0x00, 0x08]);
/// ```
pub fn build_frame(message_type: u16, payload: &[u8]) -> Result<Vec<u8>> {
    let header = frame_header_for(message_type, payload.len())?.encode();
    let mut frame = Vec::with_capacity(header.len() + payload.len());
    frame.extend_from_slice(&header);
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Header for an outbound payload, rejecting payloads that do not fit in a frame.
pub fn frame_header_for(message_type: u16, payload_len: usize) -> Result<FrameHeader> {
    let payload_length = u16::try_from(payload_len).map_err(|_| ApiError::FrameTooLarge {
        size: payload_len,
        max: u16::MAX as usize,
    })?;
    Ok(FrameHeader::new(message_type, payload_length))
}
