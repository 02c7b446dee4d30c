//! Borrowed views over length-delimited and fixed-width field payloads.

use super::ProtoDecode;
use crate::error::Result;

/// Payload of a length-delimited field, borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtoLengthDelimited<'a> {
    value: &'a [u8],
}

impl<'a> ProtoLengthDelimited<'a> {
    #[inline]
    pub const fn new(value: &'a [u8]) -> Self {
        Self { value }
    }

    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(self.value).into_owned()
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        self.value.to_vec()
    }

    #[inline]
    pub const fn as_slice(&self) -> &'a [u8] {
        self.value
    }

    /// Decode the payload as a nested message.
    pub fn as_message<M: ProtoDecode + Default>(&self) -> Result<M> {
        let mut msg = M::default();
        msg.decode(self.value)?;
        Ok(msg)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Payload of a 32-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proto32Bit(u32);

impl Proto32Bit {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_fixed32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn as_sfixed32(self) -> i32 {
        self.0 as i32
    }

    #[inline]
    pub fn as_float(self) -> f32 {
        f32::from_bits(self.0)
    }
}

/// Payload of a 64-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proto64Bit(u64);

impl Proto64Bit {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_fixed64(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn as_sfixed64(self) -> i64 {
        self.0 as i64
    }

    #[inline]
    pub fn as_double(self) -> f64 {
        f64::from_bits(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_string_lossy() {
        let value = ProtoLengthDelimited::new(b"kitchen");
        assert_eq!(value.as_string(), "kitchen");

        let invalid = ProtoLengthDelimited::new(&[0x61, 0xFF, 0x62]);
        assert_eq!(invalid.as_string(), "a\u{FFFD}b");
    }

    #[test]
    fn test_fixed_accessors() {
        assert_eq!(Proto32Bit::new(0xFFFF_FFFF).as_sfixed32(), -1);
        assert_eq!(Proto32Bit::new(1.5f32.to_bits()).as_float(), 1.5);
        assert_eq!(Proto64Bit::new(u64::MAX).as_sfixed64(), -1);
        assert_eq!(Proto64Bit::new((-2.25f64).to_bits()).as_double(), -2.25);
    }
}
