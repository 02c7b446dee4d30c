//! Enum emitter.
//!
//! Enums become `u32` newtypes with one associated constant per value, so a
//! value this schema does not know survives decode and re-encode.

use std::collections::HashSet;

use super::code::CodeBuf;
use super::descriptor::EnumDescriptorProto;

/// Emit the `enums` module.
pub fn emit_enums(buf: &mut CodeBuf, runtime: &str, enums: &[EnumDescriptorProto]) {
    buf.open("pub mod enums {");
    buf.line(format!("use {}::proto::ProtoEnum;", runtime));
    for desc in enums {
        buf.blank();
        emit_enum(buf, desc);
    }
    buf.close("}");
}

fn emit_enum(buf: &mut CodeBuf, desc: &EnumDescriptorProto) {
    let name = &desc.name;

    buf.line("#[repr(transparent)]");
    buf.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]");
    buf.line(format!("pub struct {}(pub u32);", name));
    buf.blank();

    buf.open(format!("impl {} {{", name));
    for value in &desc.value {
        buf.line(format!(
            "pub const {}: Self = Self({});",
            value.name, value.number as u32
        ));
    }
    buf.close("}");
    buf.blank();

    buf.open(format!("impl ProtoEnum for {} {{", name));
    buf.open("fn from_u32(value: u32) -> Self {");
    buf.line("Self(value)");
    buf.close("}");
    buf.blank();
    buf.open("fn as_u32(self) -> u32 {");
    buf.line("self.0");
    buf.close("}");
    buf.blank();
    buf.open("fn as_str(self) -> &'static str {");
    buf.open("match self {");
    // Aliases share a number; the first name wins.
    let mut seen = HashSet::new();
    for value in desc.value.iter().filter(|v| seen.insert(v.number)) {
        buf.line(format!("Self::{} => \"{}\",", value.name, value.name));
    }
    buf.line("_ => \"UNKNOWN\",");
    buf.close("}");
    buf.close("}");
    buf.close("}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::descriptor::EnumValueDescriptorProto;

    fn entity_category() -> EnumDescriptorProto {
        EnumDescriptorProto {
            name: "EntityCategory".into(),
            value: vec![
                EnumValueDescriptorProto {
                    name: "ENTITY_CATEGORY_NONE".into(),
                    number: 0,
                },
                EnumValueDescriptorProto {
                    name: "ENTITY_CATEGORY_CONFIG".into(),
                    number: 1,
                },
                EnumValueDescriptorProto {
                    name: "ENTITY_CATEGORY_SETTINGS".into(),
                    number: 1,
                },
            ],
        }
    }

    #[test]
    fn test_emit_enum() {
        let mut buf = CodeBuf::new();
        emit_enums(&mut buf, "crate", &[entity_category()]);
        let out = buf.finish();

        assert!(out.contains("use crate::proto::ProtoEnum;"));
        assert!(out.contains("pub struct EntityCategory(pub u32);"));
        assert!(out.contains("pub const ENTITY_CATEGORY_CONFIG: Self = Self(1);"));
        assert!(out.contains("Self::ENTITY_CATEGORY_NONE => \"ENTITY_CATEGORY_NONE\","));
        assert!(out.contains("_ => \"UNKNOWN\","));
        // alias constant exists but does not get its own match arm
        assert!(out.contains("pub const ENTITY_CATEGORY_SETTINGS: Self = Self(1);"));
        assert!(!out.contains("Self::ENTITY_CATEGORY_SETTINGS =>"));
    }

    #[test]
    fn test_negative_value_wraps() {
        let desc = EnumDescriptorProto {
            name: "Signed".into(),
            value: vec![EnumValueDescriptorProto {
                name: "SIGNED_MINUS_ONE".into(),
                number: -1,
            }],
        };
        let mut buf = CodeBuf::new();
        emit_enums(&mut buf, "crate", &[desc]);
        assert!(buf.finish().contains("Self(4294967295)"));
    }
}
