//! Protobuf wire types and field tags.
//!
//! A field tag is the varint encoding of `(field_number << 3) | wire_type`.

/// Wire types used by the API. Groups (3, 4) are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// LEB128 varint payload.
    Varint = 0,
    /// 8 little-endian bytes.
    Fixed64 = 1,
    /// Varint length followed by raw bytes.
    LengthDelimited = 2,
    /// 4 little-endian bytes.
    Fixed32 = 5,
}

impl WireType {
    /// Map the low three bits of a tag to a wire type.
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag & 0b111 {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }

    /// Numeric value as it appears in the tag.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Name of the decode hook handling this wire type.
    pub const fn decode_method(self) -> &'static str {
        match self {
            WireType::Varint => "decode_varint",
            WireType::Fixed64 => "decode_64bit",
            WireType::LengthDelimited => "decode_length",
            WireType::Fixed32 => "decode_32bit",
        }
    }
}

/// Build the tag value for a field.
#[inline]
pub const fn field_tag(field_number: u32, wire_type: WireType) -> u32 {
    (field_number << 3) | wire_type.as_u32()
}
