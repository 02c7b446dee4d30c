//! LEB128 varints and zigzag encoding.

use bytes::BufMut;

use super::ProtoEnum;

/// Maximum encoded length of a 64-bit varint.
pub const MAX_VARINT_LEN: usize = 10;

/// A decoded varint, reinterpreted by the accessor matching the field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtoVarInt(u64);

impl ProtoVarInt {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a varint from the start of `buf`.
    ///
    /// Returns the value and the number of bytes consumed, or `None` if no
    /// terminating byte appears within the buffer or within 10 bytes.
    pub fn parse(buf: &[u8]) -> Option<(Self, usize)> {
        let mut result: u64 = 0;
        for (i, &byte) in buf.iter().take(MAX_VARINT_LEN).enumerate() {
            result |= u64::from(byte & 0x7F) << (i * 7);
            if byte & 0x80 == 0 {
                return Some((Self(result), i + 1));
            }
        }
        None
    }

    #[inline]
    pub const fn as_uint64(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn as_uint32(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn as_int64(self) -> i64 {
        self.0 as i64
    }

    /// Negative values arrive sign-extended to 64 bits; truncation recovers them.
    #[inline]
    pub const fn as_int32(self) -> i32 {
        self.0 as i32
    }

    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn as_sint32(self) -> i32 {
        decode_zigzag32(self.0 as u32)
    }

    #[inline]
    pub const fn as_sint64(self) -> i64 {
        decode_zigzag64(self.0)
    }

    #[inline]
    pub fn as_enum<E: ProtoEnum>(self) -> E {
        E::from_u32(self.as_uint32())
    }
}

/// Append `value` as a varint.
#[inline]
pub fn encode_varint<B: BufMut>(mut value: u64, out: &mut B) {
    while value >= 0x80 {
        out.put_u8((value as u8) | 0x80);
        value >>= 7;
    }
    out.put_u8(value as u8);
}

#[inline]
pub const fn encode_zigzag32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

#[inline]
pub const fn decode_zigzag32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

#[inline]
pub const fn encode_zigzag64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline]
pub const fn decode_zigzag64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_varint(value, &mut out);
        out
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(1), vec![0x01]);
        assert_eq!(encode(127), vec![0x7F]);
    }

    #[test]
    fn test_multi_byte() {
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xAC, 0x02]);
        assert_eq!(encode(16384), vec![0x80, 0x80, 0x01]);
        assert_eq!(encode(u64::MAX).len(), MAX_VARINT_LEN);
    }

    #[test]
    fn test_parse_roundtrip_boundaries() {
        for value in [0u64, 127, 128, 16383, 16384, u32::MAX as u64, u64::MAX] {
            let bytes = encode(value);
            let (parsed, consumed) = ProtoVarInt::parse(&bytes).unwrap();
            assert_eq!(parsed.as_uint64(), value);
            assert_eq!(consumed, bytes.len());
        }
    }

    #[test]
    fn test_parse_incomplete() {
        assert!(ProtoVarInt::parse(&[]).is_none());
        assert!(ProtoVarInt::parse(&[0x80]).is_none());
        assert!(ProtoVarInt::parse(&[0xFF, 0xFF]).is_none());
    }

    #[test]
    fn test_parse_overlong() {
        let bytes = [0xFFu8; 11];
        assert!(ProtoVarInt::parse(&bytes).is_none());
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let (value, consumed) = ProtoVarInt::parse(&[0xAC, 0x02, 0x55]).unwrap();
        assert_eq!(value.as_uint32(), 300);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn test_negative_int32_sign_extended() {
        let bytes = encode(-5i64 as u64);
        assert_eq!(bytes.len(), 10);
        let (value, _) = ProtoVarInt::parse(&bytes).unwrap();
        assert_eq!(value.as_int32(), -5);
        assert_eq!(value.as_int64(), -5);
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(encode_zigzag32(0), 0);
        assert_eq!(encode_zigzag32(-1), 1);
        assert_eq!(encode_zigzag32(1), 2);
        assert_eq!(encode_zigzag32(-2), 3);
        assert_eq!(encode_zigzag32(i32::MIN), u32::MAX);
        for v in [0, 1, -1, 1000, -1000, i32::MAX, i32::MIN] {
            assert_eq!(decode_zigzag32(encode_zigzag32(v)), v);
        }
        for v in [0i64, 1, -1, i64::MAX, i64::MIN] {
            assert_eq!(decode_zigzag64(encode_zigzag64(v)), v);
        }
    }

    #[test]
    fn test_as_bool() {
        assert!(!ProtoVarInt::new(0).as_bool());
        assert!(ProtoVarInt::new(1).as_bool());
        assert!(ProtoVarInt::new(2).as_bool());
    }
}
