//! Field type registry.
//!
//! One [`TypeInfo`] per protobuf scalar kind. Everything the emitters need to
//! know about a type (storage, wire type, decode accessor, runtime method
//! names, size estimate, dump style) lives here, so adding a type is a single
//! match arm.

use crate::error::{ApiError, Result};
use crate::proto::WireType;

/// `FieldDescriptorProto.Type` without the unsupported `TYPE_GROUP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Double,
    Float,
    Int64,
    UInt64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Message,
    Bytes,
    UInt32,
    Enum,
    SFixed32,
    SFixed64,
    SInt32,
    SInt64,
}

impl FieldType {
    pub const ALL: [FieldType; 17] = [
        FieldType::Double,
        FieldType::Float,
        FieldType::Int64,
        FieldType::UInt64,
        FieldType::Int32,
        FieldType::Fixed64,
        FieldType::Fixed32,
        FieldType::Bool,
        FieldType::String,
        FieldType::Message,
        FieldType::Bytes,
        FieldType::UInt32,
        FieldType::Enum,
        FieldType::SFixed32,
        FieldType::SFixed64,
        FieldType::SInt32,
        FieldType::SInt64,
    ];

    /// Map the descriptor's numeric type.
    pub fn from_descriptor(value: i32) -> Result<Self> {
        let ty = match value {
            1 => FieldType::Double,
            2 => FieldType::Float,
            3 => FieldType::Int64,
            4 => FieldType::UInt64,
            5 => FieldType::Int32,
            6 => FieldType::Fixed64,
            7 => FieldType::Fixed32,
            8 => FieldType::Bool,
            9 => FieldType::String,
            10 => {
                return Err(ApiError::Descriptor(
                    "group fields are not supported".into(),
                ))
            }
            11 => FieldType::Message,
            12 => FieldType::Bytes,
            13 => FieldType::UInt32,
            14 => FieldType::Enum,
            15 => FieldType::SFixed32,
            16 => FieldType::SFixed64,
            17 => FieldType::SInt32,
            18 => FieldType::SInt64,
            other => {
                return Err(ApiError::Descriptor(format!(
                    "unknown field type {}",
                    other
                )))
            }
        };
        Ok(ty)
    }

    #[inline]
    pub const fn info(self) -> TypeInfo {
        type_info(self)
    }
}

/// How a value is rendered by the generated `dump_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpStyle {
    /// `{}`
    Display,
    /// `'{}'`
    Quoted,
    /// `YES` / `NO`
    YesNo,
    /// enum value name
    EnumName,
    /// `{:02X?}`
    Hex,
    /// nested `dump_to`
    Nested,
}

/// Static description of one field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    /// Storage type; empty for message and enum, whose storage is named by the field.
    pub rust_type: &'static str,
    pub wire_type: WireType,
    /// Accessor on the wire value, e.g. `as_uint32()`.
    pub decode: &'static str,
    /// `ProtoWriteBuffer` method.
    pub encode_fn: &'static str,
    /// `ProtoSize` method.
    pub size_fn: &'static str,
    /// Typical payload bytes, excluding the tag.
    pub estimated_payload: u32,
    /// Passed to encode/size by reference rather than by value.
    pub by_ref: bool,
    pub dump: DumpStyle,
}

const fn scalar(
    rust_type: &'static str,
    wire_type: WireType,
    decode: &'static str,
    encode_fn: &'static str,
    size_fn: &'static str,
    estimated_payload: u32,
) -> TypeInfo {
    TypeInfo {
        rust_type,
        wire_type,
        decode,
        encode_fn,
        size_fn,
        estimated_payload,
        by_ref: false,
        dump: DumpStyle::Display,
    }
}

pub const fn type_info(ty: FieldType) -> TypeInfo {
    use WireType::*;

    match ty {
        FieldType::Double => scalar("f64", Fixed64, "as_double()", "encode_double", "add_double_field", 8),
        FieldType::Float => scalar("f32", Fixed32, "as_float()", "encode_float", "add_float_field", 4),
        FieldType::Int64 => scalar("i64", Varint, "as_int64()", "encode_int64", "add_int64_field", 3),
        FieldType::UInt64 => scalar("u64", Varint, "as_uint64()", "encode_uint64", "add_uint64_field", 3),
        FieldType::Int32 => scalar("i32", Varint, "as_int32()", "encode_int32", "add_int32_field", 3),
        FieldType::Fixed64 => scalar("u64", Fixed64, "as_fixed64()", "encode_fixed64", "add_fixed64_field", 8),
        FieldType::Fixed32 => scalar("u32", Fixed32, "as_fixed32()", "encode_fixed32", "add_fixed32_field", 4),
        FieldType::Bool => TypeInfo {
            dump: DumpStyle::YesNo,
            ..scalar("bool", Varint, "as_bool()", "encode_bool", "add_bool_field", 1)
        },
        FieldType::String => TypeInfo {
            by_ref: true,
            dump: DumpStyle::Quoted,
            ..scalar("String", LengthDelimited, "as_string()", "encode_string", "add_string_field", 8)
        },
        FieldType::Message => TypeInfo {
            by_ref: true,
            dump: DumpStyle::Nested,
            ..scalar("", LengthDelimited, "as_message()?", "encode_message", "add_message_object", 16)
        },
        FieldType::Bytes => TypeInfo {
            by_ref: true,
            dump: DumpStyle::Hex,
            ..scalar("Vec<u8>", LengthDelimited, "as_bytes()", "encode_bytes", "add_bytes_field", 8)
        },
        FieldType::UInt32 => scalar("u32", Varint, "as_uint32()", "encode_uint32", "add_uint32_field", 3),
        FieldType::Enum => TypeInfo {
            dump: DumpStyle::EnumName,
            ..scalar("", Varint, "as_enum()", "encode_enum", "add_enum_field", 1)
        },
        FieldType::SFixed32 => scalar("i32", Fixed32, "as_sfixed32()", "encode_sfixed32", "add_sfixed32_field", 4),
        FieldType::SFixed64 => scalar("i64", Fixed64, "as_sfixed64()", "encode_sfixed64", "add_sfixed64_field", 8),
        FieldType::SInt32 => scalar("i32", Varint, "as_sint32()", "encode_sint32", "add_sint32_field", 3),
        FieldType::SInt64 => scalar("i64", Varint, "as_sint64()", "encode_sint64", "add_sint64_field", 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_is_registered() {
        for ty in FieldType::ALL {
            let info = ty.info();
            assert!(info.encode_fn.starts_with("encode_"), "{:?}", ty);
            assert!(info.size_fn.starts_with("add_"), "{:?}", ty);
            assert!(info.estimated_payload > 0, "{:?}", ty);
            let named_by_field = matches!(ty, FieldType::Message | FieldType::Enum);
            assert_eq!(info.rust_type.is_empty(), named_by_field, "{:?}", ty);
        }
    }

    #[test]
    fn test_descriptor_numbers_roundtrip() {
        let numbers: Vec<i32> = (1..=18).filter(|n| *n != 10).collect();
        for (n, ty) in numbers.iter().zip(FieldType::ALL) {
            assert_eq!(FieldType::from_descriptor(*n).unwrap(), ty);
        }
    }

    #[test]
    fn test_group_rejected() {
        let err = FieldType::from_descriptor(10).unwrap_err();
        assert!(err.to_string().contains("group"));
        assert!(FieldType::from_descriptor(19).is_err());
    }

    #[test]
    fn test_wire_types() {
        assert_eq!(FieldType::Double.info().wire_type, WireType::Fixed64);
        assert_eq!(FieldType::Float.info().wire_type, WireType::Fixed32);
        assert_eq!(FieldType::SInt32.info().wire_type, WireType::Varint);
        assert_eq!(FieldType::Bytes.info().wire_type, WireType::LengthDelimited);
        assert_eq!(FieldType::Enum.info().wire_type, WireType::Varint);
    }
}
