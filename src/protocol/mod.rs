//! Protocol module - frame header, framing buffers and frame types.
//!
//! This module implements the transport framing around encoded messages:
//! - plaintext header (indicator, payload length, message type)
//! - frame buffer for accumulating partial reads
//! - Noise envelope framing over a pluggable cipher

mod frame;
mod frame_buffer;
mod noise;
mod wire_format;

pub use frame::{build_frame, frame_header_for, Frame};
pub use frame_buffer::FrameBuffer;
pub use noise::{
    decode_noise_payload, encode_noise_frame, wrap_envelope, NoiseCipher, NoiseFrameBuffer,
    MAX_HANDSHAKE_FRAME_SIZE, NOISE_HEADER_SIZE,
};
pub use wire_format::{
    decode_header, encode_header, EncodedHeader, FrameHeader, DEFAULT_MAX_PAYLOAD_SIZE,
    INDICATOR_NOISE, INDICATOR_PLAINTEXT, MAX_HEADER_SIZE, MAX_HEADER_VARINT_LEN,
};
