//! Protobuf runtime targeted by the generated message code.
//!
//! - [`ProtoDecode`]: field-number dispatch hooks plus the decode loop
//! - [`ProtoMessage`]: encode, exact size calculation and debug dump
//! - [`ServiceMessage`]: compile-time message type and buffer size estimate
//! - [`ProtoEnum`]: enum storage that keeps unknown wire values
//! - dump helpers ([`dump_field`], [`YesNo`], [`Quoted`], [`Hex`]) for `dump_to`
//!
//! Unknown fields are consumed and skipped. Malformed input (truncated
//! varints, lengths past the end of the buffer, unsupported wire types) is a
//! decode error.

mod dump;
mod fields;
mod size;
mod varint;
mod wire;
mod write_buffer;

pub use dump::{dump_field, dump_message, Hex, Quoted, YesNo};
pub use fields::{Proto32Bit, Proto64Bit, ProtoLengthDelimited};
pub use size::{calculate_field_id_size, ProtoSize};
pub use varint::{
    decode_zigzag32, decode_zigzag64, encode_varint, encode_zigzag32, encode_zigzag64,
    ProtoVarInt, MAX_VARINT_LEN,
};
pub use wire::{field_tag, WireType};
pub use write_buffer::ProtoWriteBuffer;

use bytes::Bytes;

use crate::error::{ApiError, Result};

/// Receives decoded fields, one call per field on the wire.
///
/// Each hook returns `false` (or `Ok(false)`) when the field number is not
/// part of the message; the field is then skipped.
pub trait ProtoDecode {
    fn decode_varint(&mut self, _field_id: u32, _value: ProtoVarInt) -> bool {
        false
    }

    /// Fallible because a nested message may fail to decode.
    fn decode_length(&mut self, _field_id: u32, _value: ProtoLengthDelimited<'_>) -> Result<bool> {
        Ok(false)
    }

    fn decode_32bit(&mut self, _field_id: u32, _value: Proto32Bit) -> bool {
        false
    }

    fn decode_64bit(&mut self, _field_id: u32, _value: Proto64Bit) -> bool {
        false
    }

    /// Decode every field in `buffer` into `self`.
    fn decode(&mut self, buffer: &[u8]) -> Result<()> {
        decode_fields(self, buffer)
    }
}

/// A message that can be encoded, sized and dumped.
pub trait ProtoMessage: ProtoDecode {
    fn encode(&self, buffer: &mut ProtoWriteBuffer);

    /// Add the exact encoded size of this message to `total_size`.
    fn calculate_size(&self, total_size: &mut u32);

    fn dump_to(&self, out: &mut String);

    fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_to(&mut out);
        out
    }

    fn encoded_len(&self) -> usize {
        let mut size = 0;
        self.calculate_size(&mut size);
        size as usize
    }

    /// Encode into a buffer reserved to the exact size.
    fn encode_to_bytes(&self) -> Bytes {
        let mut buffer = ProtoWriteBuffer::with_capacity(self.encoded_len());
        self.encode(&mut buffer);
        buffer.into_bytes()
    }
}

/// A message with a dispatch id.
pub trait ServiceMessage: ProtoMessage + Default {
    /// Message type id carried in the frame header.
    const MESSAGE_TYPE: u16;
    /// Pre-allocation hint: sum of every field's estimated size.
    const ESTIMATED_SIZE: u16;
    /// snake_case message name.
    const MESSAGE_NAME: &'static str;
    /// Whether dumps of this message may be logged.
    const LOG: bool = true;
}

/// Enum storage generated for protobuf enums.
pub trait ProtoEnum: Copy + Default {
    fn from_u32(value: u32) -> Self;

    fn as_u32(self) -> u32;

    /// Value name, or `"UNKNOWN"` for values outside the schema.
    fn as_str(self) -> &'static str;
}

/// Walk the fields of an encoded message and hand each one to `msg`.
pub fn decode_fields<M: ProtoDecode + ?Sized>(msg: &mut M, buffer: &[u8]) -> Result<()> {
    let mut pos = 0;

    while pos < buffer.len() {
        let (tag, consumed) = ProtoVarInt::parse(&buffer[pos..])
            .ok_or_else(|| ApiError::Decode(format!("invalid field start at offset {}", pos)))?;
        pos += consumed;

        let tag = tag.as_uint32();
        let field_id = tag >> 3;
        let wire_type = WireType::from_tag(tag).ok_or_else(|| {
            ApiError::Decode(format!(
                "invalid wire type {} for field {}",
                tag & 0b111,
                field_id
            ))
        })?;

        let known = match wire_type {
            WireType::Varint => {
                let (value, consumed) = ProtoVarInt::parse(&buffer[pos..]).ok_or_else(|| {
                    ApiError::Decode(format!("invalid varint for field {}", field_id))
                })?;
                pos += consumed;
                msg.decode_varint(field_id, value)
            }
            WireType::LengthDelimited => {
                let (len, consumed) = ProtoVarInt::parse(&buffer[pos..]).ok_or_else(|| {
                    ApiError::Decode(format!("invalid length for field {}", field_id))
                })?;
                pos += consumed;
                let len = len.as_uint64();
                let remaining = (buffer.len() - pos) as u64;
                if len > remaining {
                    return Err(ApiError::Decode(format!(
                        "length {} for field {} exceeds remaining {} bytes",
                        len, field_id, remaining
                    )));
                }
                let end = pos + len as usize;
                let value = ProtoLengthDelimited::new(&buffer[pos..end]);
                pos = end;
                msg.decode_length(field_id, value)?
            }
            WireType::Fixed32 => {
                let bytes: [u8; 4] = buffer
                    .get(pos..pos + 4)
                    .and_then(|b| b.try_into().ok())
                    .ok_or_else(|| {
                        ApiError::Decode(format!("truncated 32-bit field {}", field_id))
                    })?;
                pos += 4;
                msg.decode_32bit(field_id, Proto32Bit::new(u32::from_le_bytes(bytes)))
            }
            WireType::Fixed64 => {
                let bytes: [u8; 8] = buffer
                    .get(pos..pos + 8)
                    .and_then(|b| b.try_into().ok())
                    .ok_or_else(|| {
                        ApiError::Decode(format!("truncated 64-bit field {}", field_id))
                    })?;
                pos += 8;
                msg.decode_64bit(field_id, Proto64Bit::new(u64::from_le_bytes(bytes)))
            }
        };

        if !known {
            tracing::trace!(
                "Skipping unknown field {} with wire type {:?}",
                field_id,
                wire_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-written message with every scalar kind, shaped like generated code.
    #[derive(Debug, Default, PartialEq)]
    struct AllTypes {
        double_: f64,
        float_: f32,
        int64_: i64,
        uint64_: u64,
        int32_: i32,
        fixed64_: u64,
        fixed32_: u32,
        bool_: bool,
        string_: String,
        bytes_: Vec<u8>,
        uint32_: u32,
        sfixed32_: i32,
        sfixed64_: i64,
        sint32_: i32,
        sint64_: i64,
        values: Vec<u32>,
    }

    impl ProtoDecode for AllTypes {
        fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
            match field_id {
                3 => self.int64_ = value.as_int64(),
                4 => self.uint64_ = value.as_uint64(),
                5 => self.int32_ = value.as_int32(),
                8 => self.bool_ = value.as_bool(),
                13 => self.uint32_ = value.as_uint32(),
                17 => self.sint32_ = value.as_sint32(),
                18 => self.sint64_ = value.as_sint64(),
                19 => self.values.push(value.as_uint32()),
                _ => return false,
            }
            true
        }

        fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
            match field_id {
                9 => self.string_ = value.as_string(),
                12 => self.bytes_ = value.as_bytes(),
                _ => return Ok(false),
            }
            Ok(true)
        }

        fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
            match field_id {
                2 => self.float_ = value.as_float(),
                7 => self.fixed32_ = value.as_fixed32(),
                15 => self.sfixed32_ = value.as_sfixed32(),
                _ => return false,
            }
            true
        }

        fn decode_64bit(&mut self, field_id: u32, value: Proto64Bit) -> bool {
            match field_id {
                1 => self.double_ = value.as_double(),
                6 => self.fixed64_ = value.as_fixed64(),
                16 => self.sfixed64_ = value.as_sfixed64(),
                _ => return false,
            }
            true
        }
    }

    impl ProtoMessage for AllTypes {
        fn encode(&self, buffer: &mut ProtoWriteBuffer) {
            buffer.encode_double(1, self.double_, false);
            buffer.encode_float(2, self.float_, false);
            buffer.encode_int64(3, self.int64_, false);
            buffer.encode_uint64(4, self.uint64_, false);
            buffer.encode_int32(5, self.int32_, false);
            buffer.encode_fixed64(6, self.fixed64_, false);
            buffer.encode_fixed32(7, self.fixed32_, false);
            buffer.encode_bool(8, self.bool_, false);
            buffer.encode_string(9, &self.string_, false);
            buffer.encode_bytes(12, &self.bytes_, false);
            buffer.encode_uint32(13, self.uint32_, false);
            buffer.encode_sfixed32(15, self.sfixed32_, false);
            buffer.encode_sfixed64(16, self.sfixed64_, false);
            buffer.encode_sint32(17, self.sint32_, false);
            buffer.encode_sint64(18, self.sint64_, false);
            for it in &self.values {
                buffer.encode_uint32(19, *it, true);
            }
        }

        fn calculate_size(&self, total_size: &mut u32) {
            ProtoSize::add_double_field(total_size, 1, self.double_, false);
            ProtoSize::add_float_field(total_size, 1, self.float_, false);
            ProtoSize::add_int64_field(total_size, 1, self.int64_, false);
            ProtoSize::add_uint64_field(total_size, 1, self.uint64_, false);
            ProtoSize::add_int32_field(total_size, 1, self.int32_, false);
            ProtoSize::add_fixed64_field(total_size, 1, self.fixed64_, false);
            ProtoSize::add_fixed32_field(total_size, 1, self.fixed32_, false);
            ProtoSize::add_bool_field(total_size, 1, self.bool_, false);
            ProtoSize::add_string_field(total_size, 1, &self.string_, false);
            ProtoSize::add_bytes_field(total_size, 1, &self.bytes_, false);
            ProtoSize::add_uint32_field(total_size, 1, self.uint32_, false);
            ProtoSize::add_sfixed32_field(total_size, 1, self.sfixed32_, false);
            ProtoSize::add_sfixed64_field(total_size, 2, self.sfixed64_, false);
            ProtoSize::add_sint32_field(total_size, 2, self.sint32_, false);
            ProtoSize::add_sint64_field(total_size, 2, self.sint64_, false);
            for it in &self.values {
                ProtoSize::add_uint32_field(total_size, 2, *it, true);
            }
        }

        fn dump_to(&self, out: &mut String) {
            out.push_str("AllTypes {}");
        }
    }

    fn roundtrip(msg: &AllTypes) -> AllTypes {
        let bytes = msg.encode_to_bytes();
        assert_eq!(bytes.len(), msg.encoded_len(), "size/encode mismatch");
        let mut decoded = AllTypes::default();
        decoded.decode(&bytes).unwrap();
        decoded
    }

    #[test]
    fn test_roundtrip_extremes() {
        let msg = AllTypes {
            double_: -1.0e300,
            float_: 3.25,
            int64_: i64::MIN,
            uint64_: u64::MAX,
            int32_: i32::MIN,
            fixed64_: u64::MAX,
            fixed32_: u32::MAX,
            bool_: true,
            string_: "living room".to_string(),
            bytes_: vec![0x00, 0xFF, 0x10],
            uint32_: u32::MAX,
            sfixed32_: i32::MIN,
            sfixed64_: i64::MIN,
            sint32_: i32::MIN,
            sint64_: i64::MIN,
            values: vec![1, 2, 3],
        };
        assert_eq!(roundtrip(&msg), msg);
    }

    #[test]
    fn test_roundtrip_small_values() {
        let msg = AllTypes {
            double_: 0.5,
            float_: -0.25,
            int64_: -1,
            uint64_: 1,
            int32_: -1,
            fixed64_: 1,
            fixed32_: 1,
            bool_: true,
            string_: "x".to_string(),
            bytes_: vec![0],
            uint32_: 1,
            sfixed32_: -1,
            sfixed64_: -1,
            sint32_: -1,
            sint64_: 1,
            values: vec![],
        };
        let decoded = roundtrip(&msg);
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_negative_zero_float_not_sent() {
        let msg = AllTypes {
            float_: -0.0,
            double_: -0.0,
            ..Default::default()
        };
        assert_eq!(msg.encoded_len(), 0);
        assert!(msg.encode_to_bytes().is_empty());
    }

    #[test]
    fn test_default_message_encodes_empty() {
        let msg = AllTypes::default();
        assert_eq!(msg.encoded_len(), 0);
        assert!(msg.encode_to_bytes().is_empty());
        assert_eq!(roundtrip(&msg), msg);
    }

    #[test]
    fn test_repeated_zero_elements_kept() {
        let msg = AllTypes {
            values: vec![0, 5, 0, 3],
            ..Default::default()
        };
        let bytes = msg.encode_to_bytes();
        // 19 << 3 = 152 needs a two-byte tag: [0x98, 0x01]
        assert_eq!(
            &bytes[..],
            &[0x98, 0x01, 0x00, 0x98, 0x01, 0x05, 0x98, 0x01, 0x00, 0x98, 0x01, 0x03]
        );
        assert_eq!(roundtrip(&msg).values, vec![0, 5, 0, 3]);
    }

    #[test]
    fn test_unknown_fields_skipped() {
        let msg = AllTypes {
            uint32_: 42,
            string_: "abc".to_string(),
            ..Default::default()
        };
        let mut buffer = ProtoWriteBuffer::new();
        msg.encode(&mut buffer);
        buffer.encode_uint32(100, 7, false);
        buffer.encode_string(101, "ignored", false);
        buffer.encode_fixed32(102, 9, false);
        buffer.encode_fixed64(103, 9, false);

        let mut decoded = AllTypes::default();
        decoded.decode(buffer.as_slice()).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_truncated_length_is_error() {
        // field 9, length 5, only 2 bytes present
        let err = AllTypes::default().decode(&[0x4A, 0x05, b'a', b'b']).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_invalid_wire_type_is_error() {
        // field 1, wire type 3 (start group)
        let err = AllTypes::default().decode(&[0x0B]).unwrap_err();
        assert!(err.to_string().contains("invalid wire type"));
    }

    #[test]
    fn test_truncated_fixed32_is_error() {
        let err = AllTypes::default().decode(&[0x15, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_truncated_varint_is_error() {
        assert!(AllTypes::default().decode(&[0x68, 0x80]).is_err());
    }
}
