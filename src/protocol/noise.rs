//! Noise envelope framing.
//!
//! ```text
//! ┌───────────┬────────────────────┬──────────────────────────────────────┐
//! │ Indicator │ Ciphertext length  │ Ciphertext                           │
//! │ 0x01      │ u16 BE             │                                      │
//! └───────────┴────────────────────┴──────────────────────────────────────┘
//!
//! decrypted: [message type u16 BE][data length u16 BE][data]
//! ```
//!
//! The cipher is supplied through [`NoiseCipher`]; this module only frames.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::wire_format::{FrameHeader, INDICATOR_NOISE};
use super::Frame;
use crate::error::{ApiError, Result};

/// Envelope header: indicator + 16-bit length.
pub const NOISE_HEADER_SIZE: usize = 3;

/// Handshake frames may not exceed this many bytes.
pub const MAX_HANDSHAKE_FRAME_SIZE: usize = 128;

/// Transport cipher state established by a completed Noise handshake.
pub trait NoiseCipher {
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>>;

    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Wrap an already encrypted (or handshake) payload in the envelope.
pub fn wrap_envelope(payload: &[u8]) -> Result<Vec<u8>> {
    let len = u16::try_from(payload.len()).map_err(|_| ApiError::FrameTooLarge {
        size: payload.len(),
        max: u16::MAX as usize,
    })?;
    let mut out = Vec::with_capacity(NOISE_HEADER_SIZE + payload.len());
    out.put_u8(INDICATOR_NOISE);
    out.put_u16(len);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Encrypt a message and wrap it in the envelope.
pub fn encode_noise_frame<C: NoiseCipher + ?Sized>(
    cipher: &mut C,
    message_type: u16,
    data: &[u8],
) -> Result<Vec<u8>> {
    let data_len = u16::try_from(data.len()).map_err(|_| ApiError::FrameTooLarge {
        size: data.len(),
        max: u16::MAX as usize,
    })?;
    let mut plaintext = Vec::with_capacity(4 + data.len());
    plaintext.put_u16(message_type);
    plaintext.put_u16(data_len);
    plaintext.extend_from_slice(data);

    let ciphertext = cipher.encrypt(&plaintext)?;
    wrap_envelope(&ciphertext)
}

/// Split a decrypted envelope payload into a frame.
pub fn decode_noise_payload(plaintext: &[u8]) -> Result<Frame> {
    if plaintext.len() < 4 {
        return Err(ApiError::BadDataPacket(format!(
            "decrypted payload of {} bytes is shorter than its header",
            plaintext.len()
        )));
    }
    let mut header = &plaintext[..4];
    let message_type = header.get_u16();
    let data_len = header.get_u16();
    if data_len as usize > plaintext.len() - 4 {
        return Err(ApiError::BadDataPacket(format!(
            "data length {} exceeds decrypted payload {}",
            data_len,
            plaintext.len() - 4
        )));
    }

    let data = Bytes::copy_from_slice(&plaintext[4..4 + data_len as usize]);
    Ok(Frame::new(FrameHeader::new(message_type, data_len), data))
}

/// Accumulates envelope bytes and yields complete envelope payloads.
pub struct NoiseFrameBuffer {
    buffer: BytesMut,
    handshake_done: bool,
}

impl NoiseFrameBuffer {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
            handshake_done: false,
        }
    }

    /// Lift the handshake size limit once transport keys are in place.
    pub fn set_handshake_done(&mut self) {
        self.handshake_done = true;
    }

    /// Push socket bytes; returns every complete envelope payload (still encrypted).
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Bytes>> {
        self.buffer.extend_from_slice(data);

        let mut payloads = Vec::new();
        while self.buffer.len() >= NOISE_HEADER_SIZE {
            if self.buffer[0] != INDICATOR_NOISE {
                return Err(ApiError::BadIndicator(self.buffer[0]));
            }
            let len = u16::from_be_bytes([self.buffer[1], self.buffer[2]]) as usize;
            if !self.handshake_done && len > MAX_HANDSHAKE_FRAME_SIZE {
                return Err(ApiError::BadHandshakePacketLen(len));
            }
            if self.buffer.len() < NOISE_HEADER_SIZE + len {
                break;
            }
            self.buffer.advance(NOISE_HEADER_SIZE);
            payloads.push(self.buffer.split_to(len).freeze());
        }

        Ok(payloads)
    }

    /// Push socket bytes and decrypt every complete envelope into a frame.
    pub fn push_decrypt<C: NoiseCipher + ?Sized>(
        &mut self,
        cipher: &mut C,
        data: &[u8],
    ) -> Result<Vec<Frame>> {
        self.push(data)?
            .iter()
            .map(|payload| decode_noise_payload(&cipher.decrypt(payload)?))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for NoiseFrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// XOR "cipher" with a trailing checksum byte, enough to exercise framing.
    struct XorCipher(u8);

    impl NoiseCipher for XorCipher {
        fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
            let mut out: Vec<u8> = plaintext.iter().map(|b| b ^ self.0).collect();
            out.push(plaintext.iter().fold(0u8, |acc, b| acc.wrapping_add(*b)));
            Ok(out)
        }

        fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
            let (body, tag) = ciphertext
                .split_last()
                .map(|(tag, body)| (body, *tag))
                .ok_or_else(|| ApiError::Cipher("empty ciphertext".into()))?;
            let plain: Vec<u8> = body.iter().map(|b| b ^ self.0).collect();
            if plain.iter().fold(0u8, |acc, b| acc.wrapping_add(*b)) != tag {
                return Err(ApiError::Cipher("tag mismatch".into()));
            }
            Ok(plain)
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let mut cipher = XorCipher(0x5A);
        let bytes = encode_noise_frame(&mut cipher, 25, b"payload").unwrap();
        assert_eq!(bytes[0], INDICATOR_NOISE);
        assert_eq!(
            u16::from_be_bytes([bytes[1], bytes[2]]) as usize,
            bytes.len() - 3
        );

        let mut buffer = NoiseFrameBuffer::new();
        buffer.set_handshake_done();
        let frames = buffer.push_decrypt(&mut cipher, &bytes).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].message_type(), 25);
        assert_eq!(frames[0].payload(), b"payload");
    }

    #[test]
    fn test_fragmented_envelope() {
        let mut cipher = XorCipher(0x11);
        let bytes = encode_noise_frame(&mut cipher, 7, b"").unwrap();

        let mut buffer = NoiseFrameBuffer::new();
        assert!(buffer.push(&bytes[..2]).unwrap().is_empty());
        let payloads = buffer.push(&bytes[2..]).unwrap();
        assert_eq!(payloads.len(), 1);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_handshake_frame_limit() {
        let envelope = wrap_envelope(&[0u8; 129]).unwrap();
        let mut buffer = NoiseFrameBuffer::new();
        let err = buffer.push(&envelope).unwrap_err();
        assert!(matches!(err, ApiError::BadHandshakePacketLen(129)));

        let mut buffer = NoiseFrameBuffer::new();
        buffer.set_handshake_done();
        assert_eq!(buffer.push(&envelope).unwrap().len(), 1);
    }

    #[test]
    fn test_plaintext_indicator_rejected() {
        let mut buffer = NoiseFrameBuffer::new();
        let err = buffer.push(&[0x00, 0x00, 0x01]).unwrap_err();
        assert!(matches!(err, ApiError::BadIndicator(0x00)));
    }

    #[test]
    fn test_short_decrypted_payload() {
        let err = decode_noise_payload(&[0x00, 0x01, 0x00]).unwrap_err();
        assert!(matches!(err, ApiError::BadDataPacket(_)));
    }

    #[test]
    fn test_data_length_overrun() {
        let err = decode_noise_payload(&[0x00, 0x01, 0x00, 0x05, 0xAA]).unwrap_err();
        assert!(err.to_string().contains("exceeds decrypted payload"));
    }

    #[test]
    fn test_decrypt_failure_propagates() {
        let mut cipher = XorCipher(0x01);
        let mut bytes = encode_noise_frame(&mut cipher, 1, b"abc").unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;

        let mut buffer = NoiseFrameBuffer::new();
        let err = buffer.push_decrypt(&mut cipher, &bytes).unwrap_err();
        assert!(matches!(err, ApiError::Cipher(_)));
    }
}
