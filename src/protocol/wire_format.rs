//! Plaintext frame header encoding and decoding.
//!
//! ```text
//! ┌───────────┬──────────────────┬──────────────────┬─────────┐
//! │ Indicator │ Payload length   │ Message type     │ Payload │
//! │ 0x00      │ varint, <= 65535 │ varint, <= 65535 │         │
//! └───────────┴──────────────────┴──────────────────┴─────────┘
//! ```
//!
//! Both varints fit in three bytes, so a header is at most 7 bytes.

use std::ops::Deref;

use crate::error::{ApiError, Result};
use crate::proto::{encode_varint, ProtoSize, ProtoVarInt};

/// First byte of every plaintext frame.
pub const INDICATOR_PLAINTEXT: u8 = 0x00;

/// First byte of every Noise frame.
pub const INDICATOR_NOISE: u8 = 0x01;

/// Longest varint accepted for length and type (covers `u16::MAX`).
pub const MAX_HEADER_VARINT_LEN: usize = 3;

/// Maximum plaintext header size in bytes.
pub const MAX_HEADER_SIZE: usize = 1 + 2 * MAX_HEADER_VARINT_LEN;

/// Default maximum payload size (64 KB - 1, the largest encodable length).
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = u16::MAX as usize;

/// Decoded plaintext frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Message type id (`ServiceMessage::MESSAGE_TYPE`).
    pub message_type: u16,
    /// Payload length in bytes.
    pub payload_length: u16,
}

/// Encoded header bytes, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedHeader {
    bytes: [u8; MAX_HEADER_SIZE],
    len: u8,
}

impl Deref for EncodedHeader {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl FrameHeader {
    pub fn new(message_type: u16, payload_length: u16) -> Self {
        Self {
            message_type,
            payload_length,
        }
    }

    /// Encoded header length in bytes.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        1 + ProtoSize::varint(u32::from(self.payload_length)) as usize
            + ProtoSize::varint(u32::from(self.message_type)) as usize
    }

    /// Encode the header.
    ///
    /// # Example
    ///
    /// ```
    /// use esphome_api::protocol::FrameHeader;
    ///
    /// let header = FrameHeader::new(1, 300);
    /// assert_eq!(&header.encode()[..], &[0x00, 0xAC, 0x02, 0x01]);
    /// ```
    pub fn encode(&self) -> EncodedHeader {
        let mut scratch = Vec::with_capacity(MAX_HEADER_SIZE);
        scratch.push(INDICATOR_PLAINTEXT);
        encode_varint(u64::from(self.payload_length), &mut scratch);
        encode_varint(u64::from(self.message_type), &mut scratch);

        let mut bytes = [0u8; MAX_HEADER_SIZE];
        bytes[..scratch.len()].copy_from_slice(&scratch);
        EncodedHeader {
            bytes,
            len: scratch.len() as u8,
        }
    }

    /// Decode a header from the start of `buf`.
    ///
    /// Returns `Ok(None)` if more bytes are needed, otherwise the header and
    /// the number of bytes it occupies.
    pub fn decode(buf: &[u8]) -> Result<Option<(Self, usize)>> {
        let Some(&indicator) = buf.first() else {
            return Ok(None);
        };
        if indicator != INDICATOR_PLAINTEXT {
            return Err(ApiError::BadIndicator(indicator));
        }

        let mut pos = 1;
        let Some(payload_length) = decode_header_varint(buf, &mut pos, "payload length")? else {
            return Ok(None);
        };
        let Some(message_type) = decode_header_varint(buf, &mut pos, "message type")? else {
            return Ok(None);
        };

        Ok(Some((Self::new(message_type, payload_length), pos)))
    }

    /// Check the payload length against a configured limit.
    pub fn validate(&self, max_payload_size: usize) -> Result<()> {
        let size = self.payload_length as usize;
        if size > max_payload_size {
            return Err(ApiError::FrameTooLarge {
                size,
                max: max_payload_size,
            });
        }
        Ok(())
    }
}

/// Parse one header varint, enforcing the `u16` range.
fn decode_header_varint(buf: &[u8], pos: &mut usize, what: &str) -> Result<Option<u16>> {
    let rest = &buf[*pos..];
    match ProtoVarInt::parse(rest) {
        Some((value, consumed)) if consumed <= MAX_HEADER_VARINT_LEN => {
            let value = u16::try_from(value.as_uint64()).map_err(|_| {
                ApiError::BadDataPacket(format!("{} {} exceeds 65535", what, value.as_uint64()))
            })?;
            *pos += consumed;
            Ok(Some(value))
        }
        Some(_) => Err(ApiError::BadDataPacket(format!("{} varint too long", what))),
        None if rest.len() >= MAX_HEADER_VARINT_LEN => {
            Err(ApiError::BadDataPacket(format!("{} varint too long", what)))
        }
        None => Ok(None),
    }
}

/// Encode a header (standalone function).
#[inline]
pub fn encode_header(header: &FrameHeader) -> EncodedHeader {
    header.encode()
}

/// Decode a header (standalone function).
#[inline]
pub fn decode_header(buf: &[u8]) -> Result<Option<(FrameHeader, usize)>> {
    FrameHeader::decode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_encode_decode_roundtrip() {
        let original = FrameHeader::new(25, 12);
        let encoded = original.encode();
        let (decoded, consumed) = FrameHeader::decode(&encoded).unwrap().unwrap();
        assert_eq!(original, decoded);
        assert_eq!(consumed, encoded.len());
        assert_eq!(consumed, original.encoded_len());
    }

    #[test]
    fn test_length_precedes_type() {
        let header = FrameHeader::new(7, 0);
        assert_eq!(&header.encode()[..], &[0x00, 0x00, 0x07]);
    }

    #[test]
    fn test_max_values() {
        let header = FrameHeader::new(u16::MAX, u16::MAX);
        let encoded = header.encode();
        assert_eq!(encoded.len(), MAX_HEADER_SIZE);
        let (decoded, _) = FrameHeader::decode(&encoded).unwrap().unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_decode_needs_more_bytes() {
        assert!(FrameHeader::decode(&[]).unwrap().is_none());
        assert!(FrameHeader::decode(&[0x00]).unwrap().is_none());
        assert!(FrameHeader::decode(&[0x00, 0x80]).unwrap().is_none());
        assert!(FrameHeader::decode(&[0x00, 0x05]).unwrap().is_none());
    }

    #[test]
    fn test_bad_indicator() {
        let err = FrameHeader::decode(&[0x01, 0x00, 0x01]).unwrap_err();
        assert!(matches!(err, ApiError::BadIndicator(0x01)));
    }

    #[test]
    fn test_length_over_u16_rejected() {
        // 65536 = [0x80, 0x80, 0x04]
        let err = FrameHeader::decode(&[0x00, 0x80, 0x80, 0x04, 0x01]).unwrap_err();
        assert!(matches!(err, ApiError::BadDataPacket(_)));
    }

    #[test]
    fn test_overlong_varint_rejected() {
        let err = FrameHeader::decode(&[0x00, 0x01, 0x80, 0x80, 0x80]).unwrap_err();
        assert!(err.to_string().contains("message type"));
    }

    #[test]
    fn test_validate_payload_too_large() {
        let header = FrameHeader::new(1, 1000);
        let result = header.validate(100);
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
        assert!(header.validate(DEFAULT_MAX_PAYLOAD_SIZE).is_ok());
    }

    #[test]
    fn test_standalone_functions() {
        let header = FrameHeader::new(2, 9);
        let encoded = encode_header(&header);
        let (decoded, _) = decode_header(&encoded).unwrap().unwrap();
        assert_eq!(header, decoded);
    }
}
