//! Exact encoded-size calculation.
//!
//! Every `add_*_field` function mirrors the matching `ProtoWriteBuffer::encode_*`
//! call: the same elision rule, the same `force` handling. `field_id_size` is the
//! precomputed byte length of the field's tag.

use super::varint::{encode_zigzag32, encode_zigzag64};
use super::wire::{field_tag, WireType};
use super::{ProtoEnum, ProtoMessage};

/// Namespace for size helpers.
pub struct ProtoSize;

impl ProtoSize {
    /// Bytes needed to encode a 32-bit varint.
    #[inline]
    pub const fn varint(value: u32) -> u32 {
        if value < 1 << 7 {
            1
        } else if value < 1 << 14 {
            2
        } else if value < 1 << 21 {
            3
        } else if value < 1 << 28 {
            4
        } else {
            5
        }
    }

    /// Bytes needed to encode a 64-bit varint.
    #[inline]
    pub const fn varint64(value: u64) -> u32 {
        if value < 1 << 32 {
            return Self::varint(value as u32);
        }
        if value < 1 << 35 {
            5
        } else if value < 1 << 42 {
            6
        } else if value < 1 << 49 {
            7
        } else if value < 1 << 56 {
            8
        } else if value < 1 << 63 {
            9
        } else {
            10
        }
    }

    /// Negative values take the full sign-extended 10 bytes.
    #[inline]
    pub const fn varint_i32(value: i32) -> u32 {
        if value < 0 {
            10
        } else {
            Self::varint(value as u32)
        }
    }

    /// Bytes needed for the tag of a field.
    #[inline]
    pub const fn field(field_number: u32, wire_type: WireType) -> u32 {
        Self::varint64(((field_number as u64) << 3) | wire_type.as_u32() as u64)
    }

    pub fn add_int32_field(total_size: &mut u32, field_id_size: u32, value: i32, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint_i32(value);
    }

    pub fn add_uint32_field(total_size: &mut u32, field_id_size: u32, value: u32, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint(value);
    }

    pub fn add_int64_field(total_size: &mut u32, field_id_size: u32, value: i64, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint64(value as u64);
    }

    pub fn add_uint64_field(total_size: &mut u32, field_id_size: u32, value: u64, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint64(value);
    }

    pub fn add_sint32_field(total_size: &mut u32, field_id_size: u32, value: i32, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint(encode_zigzag32(value));
    }

    pub fn add_sint64_field(total_size: &mut u32, field_id_size: u32, value: i64, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint64(encode_zigzag64(value));
    }

    pub fn add_bool_field(total_size: &mut u32, field_id_size: u32, value: bool, force: bool) {
        if !value && !force {
            return;
        }
        *total_size += field_id_size + 1;
    }

    pub fn add_enum_field<E: ProtoEnum>(
        total_size: &mut u32,
        field_id_size: u32,
        value: E,
        force: bool,
    ) {
        Self::add_uint32_field(total_size, field_id_size, value.as_u32(), force);
    }

    pub fn add_fixed32_field(total_size: &mut u32, field_id_size: u32, value: u32, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + 4;
    }

    pub fn add_sfixed32_field(total_size: &mut u32, field_id_size: u32, value: i32, force: bool) {
        Self::add_fixed32_field(total_size, field_id_size, value as u32, force);
    }

    pub fn add_float_field(total_size: &mut u32, field_id_size: u32, value: f32, force: bool) {
        if value == 0.0 && !force {
            return;
        }
        *total_size += field_id_size + 4;
    }

    pub fn add_fixed64_field(total_size: &mut u32, field_id_size: u32, value: u64, force: bool) {
        if value == 0 && !force {
            return;
        }
        *total_size += field_id_size + 8;
    }

    pub fn add_sfixed64_field(total_size: &mut u32, field_id_size: u32, value: i64, force: bool) {
        Self::add_fixed64_field(total_size, field_id_size, value as u64, force);
    }

    pub fn add_double_field(total_size: &mut u32, field_id_size: u32, value: f64, force: bool) {
        if value == 0.0 && !force {
            return;
        }
        *total_size += field_id_size + 8;
    }

    pub fn add_string_field(total_size: &mut u32, field_id_size: u32, value: &str, force: bool) {
        Self::add_bytes_field(total_size, field_id_size, value.as_bytes(), force);
    }

    pub fn add_bytes_field(total_size: &mut u32, field_id_size: u32, value: &[u8], force: bool) {
        let len = value.len() as u32;
        if len == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint(len) + len;
    }

    /// Size of a nested message whose body size is already known.
    pub fn add_message_field(
        total_size: &mut u32,
        field_id_size: u32,
        nested_size: u32,
        force: bool,
    ) {
        if nested_size == 0 && !force {
            return;
        }
        *total_size += field_id_size + Self::varint(nested_size) + nested_size;
    }

    pub fn add_message_object<M: ProtoMessage + ?Sized>(
        total_size: &mut u32,
        field_id_size: u32,
        value: &M,
        force: bool,
    ) {
        let mut nested_size = 0;
        value.calculate_size(&mut nested_size);
        Self::add_message_field(total_size, field_id_size, nested_size, force);
    }
}

/// Tag length of a field, as the generator bakes it into `calculate_size`.
#[inline]
pub const fn calculate_field_id_size(field_number: u32, wire_type: WireType) -> u32 {
    if field_number <= (u32::MAX >> 3) {
        ProtoSize::varint(field_tag(field_number, wire_type))
    } else {
        ProtoSize::field(field_number, wire_type)
    }
}
