//! Error types for esphome-api.

use thiserror::Error;

/// Main error type for codec, framing, connection and generator operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// I/O error during socket or file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (schema manifest only).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed protobuf payload (truncated varint, bad length, bad wire type).
    #[error("Decode error: {0}")]
    Decode(String),

    /// First byte of a frame is not the expected indicator.
    #[error("Bad indicator byte: {0:#04x}")]
    BadIndicator(u8),

    /// Frame header or envelope is malformed.
    #[error("Bad data packet: {0}")]
    BadDataPacket(String),

    /// Handshake frame longer than the handshake limit.
    #[error("Bad handshake packet length: {0}")]
    BadHandshakePacketLen(usize),

    /// Frame payload exceeds the configured maximum.
    #[error("Frame size {size} exceeds maximum {max}")]
    FrameTooLarge { size: usize, max: usize },

    /// No dispatch case exists for the message type.
    #[error("Unknown message type: {0}")]
    UnknownMessageType(u16),

    /// Connection closed unexpectedly.
    #[error("Connection closed")]
    ConnectionClosed,

    /// Backpressure timeout - write queue full.
    #[error("Backpressure timeout")]
    BackpressureTimeout,

    /// Noise cipher failed to encrypt or decrypt.
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Descriptor set is missing something the generator needs.
    #[error("Descriptor error: {0}")]
    Descriptor(String),

    /// `protoc` could not be run or exited with an error.
    #[error("protoc failed: {0}")]
    Protoc(String),
}

/// Result type alias using ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
