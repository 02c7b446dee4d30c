//! Per-field code plan.
//!
//! A [`FieldPlan`] resolves one `FieldDescriptorProto` against the type
//! registry and renders the snippets a message emitter stitches together.
//! Encode and size calculation come from the same [`FieldPlan::wire_call`],
//! so the two can only disagree if the runtime does.

use super::code::{rust_ident, short_type_name};
use super::descriptor::FieldDescriptorProto;
use super::types::{DumpStyle, FieldType, TypeInfo};
use crate::error::{ApiError, Result};
use crate::proto::calculate_field_id_size;

/// Largest field number protobuf allows.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Which half of the encode/size pair to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Encode,
    Size,
}

#[derive(Debug, Clone)]
pub struct FieldPlan {
    /// Name as written in the proto file.
    pub name: String,
    /// Rust identifier of the struct field.
    pub ident: String,
    pub number: u32,
    pub field_type: FieldType,
    pub info: TypeInfo,
    pub repeated: bool,
    /// Referenced message or enum name.
    pub type_name: Option<String>,
    /// Stored in the embedded base struct rather than the message itself.
    pub in_base: bool,
}

impl FieldPlan {
    pub fn new(field: &FieldDescriptorProto, in_base: bool) -> Result<Self> {
        let field_type = FieldType::from_descriptor(field.r#type)
            .map_err(|e| ApiError::Descriptor(format!("field {}: {}", field.name, e)))?;
        let number = u32::try_from(field.number)
            .ok()
            .filter(|n| (1..=MAX_FIELD_NUMBER).contains(n))
            .ok_or_else(|| {
                ApiError::Descriptor(format!(
                    "field {} has invalid number {}",
                    field.name, field.number
                ))
            })?;

        let type_name = match field_type {
            FieldType::Message | FieldType::Enum => {
                if field.type_name.is_empty() {
                    return Err(ApiError::Descriptor(format!(
                        "field {} has no type name",
                        field.name
                    )));
                }
                Some(short_type_name(&field.type_name).to_string())
            }
            _ => None,
        };

        Ok(Self {
            ident: rust_ident(&field.name),
            name: field.name.clone(),
            number,
            field_type,
            info: field_type.info(),
            repeated: field.is_repeated(),
            type_name,
            in_base,
        })
    }

    /// Type of one element.
    pub fn value_type(&self) -> String {
        match (self.field_type, &self.type_name) {
            (FieldType::Enum, Some(name)) => format!("enums::{}", name),
            (FieldType::Message, Some(name)) => name.clone(),
            _ => self.info.rust_type.to_string(),
        }
    }

    /// Type of the struct field.
    pub fn storage_type(&self) -> String {
        if self.repeated {
            format!("Vec<{}>", self.value_type())
        } else {
            self.value_type()
        }
    }

    pub fn field_id_size(&self) -> u32 {
        calculate_field_id_size(self.number, self.info.wire_type)
    }

    /// Contribution to `ESTIMATED_SIZE`: tag plus typical payload, twice for
    /// repeated fields.
    pub fn estimated_size(&self) -> u32 {
        let single = self.field_id_size() + self.info.estimated_payload;
        if self.repeated {
            single * 2
        } else {
            single
        }
    }

    /// Place expression for the stored value inside `&self` methods.
    pub fn access(&self) -> String {
        if self.in_base {
            format!("self.base.{}", self.ident)
        } else {
            format!("self.{}", self.ident)
        }
    }

    /// Lines encoding (or sizing) this field.
    ///
    /// Singular fields are elided at their default; repeated elements are
    /// always written.
    pub fn wire_call(&self, target: Target) -> Vec<String> {
        let call = |arg: &str, force: bool| match target {
            Target::Encode => format!(
                "buffer.{}({}, {}, {});",
                self.info.encode_fn, self.number, arg, force
            ),
            Target::Size => format!(
                "ProtoSize::{}(total_size, {}, {}, {});",
                self.info.size_fn,
                self.field_id_size(),
                arg,
                force
            ),
        };

        if self.repeated {
            let element = if self.info.by_ref { "it" } else { "*it" };
            vec![
                format!("for it in &{} {{", self.access()),
                format!("    {}", call(element, true)),
                "}".to_string(),
            ]
        } else {
            let arg = if self.info.by_ref {
                format!("&{}", self.access())
            } else {
                self.access()
            };
            vec![call(&arg, false)]
        }
    }

    /// Match arm for the decode hook of this field's wire type.
    pub fn decode_arm(&self) -> String {
        if self.repeated {
            format!(
                "{} => {}.push(value.{}),",
                self.number,
                self.access(),
                self.info.decode
            )
        } else {
            format!(
                "{} => {} = value.{},",
                self.number,
                self.access(),
                self.info.decode
            )
        }
    }

    /// Lines appending this field to a dump.
    pub fn dump_lines(&self) -> Vec<String> {
        if self.repeated {
            vec![
                format!("for it in &{} {{", self.access()),
                format!("    {}", self.dump_value("it", true)),
                "}".to_string(),
            ]
        } else {
            vec![self.dump_value(&self.access(), false)]
        }
    }

    fn dump_value(&self, value: &str, element: bool) -> String {
        let name = &self.name;
        let by_ref = |v: &str| {
            if element {
                v.to_string()
            } else {
                format!("&{}", v)
            }
        };
        let by_val = |v: &str| {
            if element {
                format!("*{}", v)
            } else {
                v.to_string()
            }
        };
        match self.info.dump {
            DumpStyle::Display => format!("dump_field(out, \"{}\", {});", name, value),
            DumpStyle::Quoted => format!("dump_field(out, \"{}\", Quoted({}));", name, by_ref(value)),
            DumpStyle::YesNo => format!("dump_field(out, \"{}\", YesNo({}));", name, by_val(value)),
            DumpStyle::EnumName => format!("dump_field(out, \"{}\", {}.as_str());", name, value),
            DumpStyle::Hex => format!("dump_field(out, \"{}\", Hex({}));", name, by_ref(value)),
            DumpStyle::Nested => format!("dump_message(out, \"{}\", {});", name, by_ref(value)),
        }
    }
}
