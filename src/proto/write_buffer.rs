//! Append-only encode buffer.
//!
//! Each `encode_*` method writes `tag + payload` for one field. Singular fields
//! equal to their default are skipped unless `force` is set; repeated fields
//! always pass `force = true` so no element is ever dropped.

use bytes::{BufMut, Bytes, BytesMut};

use super::varint::{encode_varint, encode_zigzag32, encode_zigzag64};
use super::wire::{field_tag, WireType};
use super::{ProtoEnum, ProtoMessage};

/// Buffer a message is encoded into before it is handed to the transport.
#[derive(Debug, Default)]
pub struct ProtoWriteBuffer {
    buffer: BytesMut,
}

impl ProtoWriteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with room for `reserve_size` bytes.
    pub fn with_capacity(reserve_size: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(reserve_size),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Freeze the encoded bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    #[inline]
    pub fn write(&mut self, byte: u8) {
        self.buffer.put_u8(byte);
    }

    #[inline]
    pub fn encode_raw(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    #[inline]
    pub fn encode_varint_raw(&mut self, value: u64) {
        encode_varint(value, &mut self.buffer);
    }

    #[inline]
    pub fn encode_field_raw(&mut self, field_id: u32, wire_type: WireType) {
        self.encode_varint_raw(u64::from(field_tag(field_id, wire_type)));
    }

    pub fn encode_string(&mut self, field_id: u32, value: &str, force: bool) {
        self.encode_bytes(field_id, value.as_bytes(), force);
    }

    pub fn encode_bytes(&mut self, field_id: u32, value: &[u8], force: bool) {
        if value.is_empty() && !force {
            return;
        }
        self.encode_field_raw(field_id, WireType::LengthDelimited);
        self.encode_varint_raw(value.len() as u64);
        self.encode_raw(value);
    }

    pub fn encode_uint32(&mut self, field_id: u32, value: u32, force: bool) {
        self.encode_uint64(field_id, u64::from(value), force);
    }

    pub fn encode_uint64(&mut self, field_id: u32, value: u64, force: bool) {
        if value == 0 && !force {
            return;
        }
        self.encode_field_raw(field_id, WireType::Varint);
        self.encode_varint_raw(value);
    }

    pub fn encode_bool(&mut self, field_id: u32, value: bool, force: bool) {
        if !value && !force {
            return;
        }
        self.encode_field_raw(field_id, WireType::Varint);
        self.write(u8::from(value));
    }

    pub fn encode_fixed32(&mut self, field_id: u32, value: u32, force: bool) {
        if value == 0 && !force {
            return;
        }
        self.encode_field_raw(field_id, WireType::Fixed32);
        self.buffer.put_u32_le(value);
    }

    pub fn encode_fixed64(&mut self, field_id: u32, value: u64, force: bool) {
        if value == 0 && !force {
            return;
        }
        self.encode_field_raw(field_id, WireType::Fixed64);
        self.buffer.put_u64_le(value);
    }

    pub fn encode_sfixed32(&mut self, field_id: u32, value: i32, force: bool) {
        self.encode_fixed32(field_id, value as u32, force);
    }

    pub fn encode_sfixed64(&mut self, field_id: u32, value: i64, force: bool) {
        self.encode_fixed64(field_id, value as u64, force);
    }

    /// Both zeros compare equal to the default and are elided; NaN is written.
    pub fn encode_float(&mut self, field_id: u32, value: f32, force: bool) {
        if value == 0.0 && !force {
            return;
        }
        self.encode_fixed32(field_id, value.to_bits(), true);
    }

    pub fn encode_double(&mut self, field_id: u32, value: f64, force: bool) {
        if value == 0.0 && !force {
            return;
        }
        self.encode_fixed64(field_id, value.to_bits(), true);
    }

    /// Negative values are sign-extended to a 10-byte varint.
    pub fn encode_int32(&mut self, field_id: u32, value: i32, force: bool) {
        self.encode_int64(field_id, i64::from(value), force);
    }

    pub fn encode_int64(&mut self, field_id: u32, value: i64, force: bool) {
        self.encode_uint64(field_id, value as u64, force);
    }

    pub fn encode_sint32(&mut self, field_id: u32, value: i32, force: bool) {
        self.encode_uint32(field_id, encode_zigzag32(value), force);
    }

    pub fn encode_sint64(&mut self, field_id: u32, value: i64, force: bool) {
        self.encode_uint64(field_id, encode_zigzag64(value), force);
    }

    pub fn encode_enum<E: ProtoEnum>(&mut self, field_id: u32, value: E, force: bool) {
        self.encode_uint32(field_id, value.as_u32(), force);
    }

    /// Encode a nested message as a length-delimited field.
    ///
    /// The body size is computed first so the length prefix can be written
    /// without back-patching.
    pub fn encode_message<M: ProtoMessage + ?Sized>(&mut self, field_id: u32, value: &M, force: bool) {
        let mut nested_size = 0;
        value.calculate_size(&mut nested_size);
        if nested_size == 0 && !force {
            return;
        }
        self.encode_field_raw(field_id, WireType::LengthDelimited);
        self.encode_varint_raw(u64::from(nested_size));
        let start = self.len();
        value.encode(self);
        debug_assert_eq!(
            self.len() - start,
            nested_size as usize,
            "calculate_size disagrees with encode"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint32_elided_when_zero() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_uint32(1, 0, false);
        assert!(buffer.is_empty());

        buffer.encode_uint32(1, 0, true);
        assert_eq!(buffer.as_slice(), &[0x08, 0x00]);
    }

    #[test]
    fn test_string_field() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_string(2, "hi", false);
        assert_eq!(buffer.as_slice(), &[0x12, 0x02, b'h', b'i']);
    }

    #[test]
    fn test_forced_false_bool_writes_zero() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_bool(6, false, true);
        buffer.encode_bool(6, true, true);
        assert_eq!(buffer.as_slice(), &[0x30, 0x00, 0x30, 0x01]);
    }

    #[test]
    fn test_forced_zero_float_written() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_float(8, 0.0, false);
        assert!(buffer.is_empty());
        buffer.encode_float(8, 0.0, true);
        assert_eq!(buffer.as_slice(), &[0x45, 0, 0, 0, 0]);
    }

    #[test]
    fn test_negative_zero_float_elided() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_float(8, -0.0, false);
        buffer.encode_double(9, -0.0, false);
        assert!(buffer.is_empty());
        buffer.encode_float(8, -0.0, true);
        assert_eq!(buffer.as_slice(), &[0x45, 0, 0, 0, 0x80]);
    }

    #[test]
    fn test_fixed32_little_endian() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_fixed32(2, 0x1234_5678, false);
        assert_eq!(buffer.as_slice(), &[0x15, 0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_negative_int32_ten_bytes() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_int32(1, -1, false);
        assert_eq!(buffer.len(), 11);
        assert_eq!(buffer.as_slice()[10], 0x01);
    }

    #[test]
    fn test_sint32_zigzag() {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_sint32(5, -3, false);
        assert_eq!(buffer.as_slice(), &[0x28, 0x05]);
    }

    #[test]
    fn test_with_capacity_reserves() {
        let buffer = ProtoWriteBuffer::with_capacity(128);
        assert!(buffer.is_empty());
        assert!(buffer.buffer.capacity() >= 128);
    }
}
