//! Message emitter: `api_pb2.rs`.
//!
//! Per message this writes the struct, its `ServiceMessage` constants (when
//! the message has an id), the decode hooks, and `encode`/`calculate_size`/
//! `dump_to`. Messages in a base-class group embed the shared struct as
//! `base` and still encode the shared fields under their own numbers.

use super::code::{camel_to_snake, cfg_attr, CodeBuf, FILE_HEADER};
use super::context::{BaseClass, GenContext};
use super::descriptor::DescriptorProto;
use super::enums::emit_enums;
use super::field::{FieldPlan, Target};
use super::types::FieldType;
use crate::error::{ApiError, Result};
use crate::proto::WireType;

/// Sum of the per-field estimates, the send buffer pre-allocation hint.
pub fn estimated_size(fields: &[FieldPlan]) -> u32 {
    fields.iter().map(FieldPlan::estimated_size).sum()
}

/// Render the complete messages file.
pub fn emit_messages_file(ctx: &GenContext<'_>) -> Result<String> {
    let runtime = ctx.runtime();
    let mut buf = CodeBuf::new();
    buf.raw(FILE_HEADER);
    buf.blank();
    buf.line("#![allow(unused_imports)]");
    buf.blank();
    buf.line(format!("use {}::error::Result;", runtime));
    buf.line(format!("use {}::proto::{{", runtime));
    buf.line("    dump_field, dump_message, Hex, Proto32Bit, Proto64Bit, ProtoDecode, ProtoEnum,");
    buf.line("    ProtoLengthDelimited, ProtoMessage, ProtoSize, ProtoVarInt, ProtoWriteBuffer, Quoted,");
    buf.line("    ServiceMessage, YesNo,");
    buf.line("};");
    buf.blank();

    emit_enums(&mut buf, runtime, &ctx.file.enum_type);

    for group in &ctx.base_classes {
        buf.blank();
        emit_base_class(&mut buf, group)?;
    }

    for msg in &ctx.file.message_type {
        buf.blank();
        emit_message(&mut buf, ctx, msg)?;
    }

    Ok(buf.finish())
}

fn emit_base_class(buf: &mut CodeBuf, group: &BaseClass<'_>) -> Result<()> {
    buf.line(format!(
        "/// Fields shared by every message declaring `base_class = \"{}\"`.",
        group.name
    ));
    buf.line("#[derive(Debug, Clone, Default, PartialEq)]");
    buf.open(format!("pub struct {} {{", group.name));
    for field in &group.common {
        let plan = FieldPlan::new(field, false)?;
        buf.line(format!("pub {}: {},", plan.ident, plan.storage_type()));
    }
    buf.close("}");
    Ok(())
}

fn emit_message(buf: &mut CodeBuf, ctx: &GenContext<'_>, msg: &DescriptorProto) -> Result<()> {
    let name = &msg.name;
    let cfg = cfg_attr(msg.ifdef());
    let base = ctx.base_class_of(msg);
    let fields = ctx.field_plans(msg)?;

    let attr = |buf: &mut CodeBuf| {
        if let Some(cfg) = &cfg {
            buf.line(cfg);
        }
    };

    // struct
    attr(buf);
    buf.line("#[derive(Debug, Clone, Default, PartialEq)]");
    let own: Vec<&FieldPlan> = fields.iter().filter(|f| !f.in_base).collect();
    if base.is_none() && own.is_empty() {
        buf.line(format!("pub struct {} {{}}", name));
    } else {
        buf.open(format!("pub struct {} {{", name));
        if let Some(group) = base {
            buf.line(format!("pub base: {},", group.name));
        }
        for field in own {
            buf.line(format!("pub {}: {},", field.ident, field.storage_type()));
        }
        buf.close("}");
    }

    if let Some(group) = base {
        buf.blank();
        attr(buf);
        buf.open(format!("impl AsRef<{}> for {} {{", group.name, name));
        buf.open(format!("fn as_ref(&self) -> &{} {{", group.name));
        buf.line("&self.base");
        buf.close("}");
        buf.close("}");
        buf.blank();
        attr(buf);
        buf.open(format!("impl AsMut<{}> for {} {{", group.name, name));
        buf.open(format!("fn as_mut(&mut self) -> &mut {} {{", group.name));
        buf.line("&mut self.base");
        buf.close("}");
        buf.close("}");
    }

    // dispatch constants
    if let Some(id) = msg.message_id()? {
        let estimate = estimated_size(&fields);
        let estimate = u16::try_from(estimate).map_err(|_| {
            ApiError::Descriptor(format!("estimated size {} of {} exceeds u16", estimate, name))
        })?;

        buf.blank();
        attr(buf);
        buf.open(format!("impl ServiceMessage for {} {{", name));
        buf.line(format!("const MESSAGE_TYPE: u16 = {};", id));
        buf.line(format!("const ESTIMATED_SIZE: u16 = {};", estimate));
        buf.line(format!(
            "const MESSAGE_NAME: &'static str = \"{}\";",
            camel_to_snake(name)
        ));
        if !msg.log() {
            buf.line("const LOG: bool = false;");
        }
        buf.close("}");
    }

    // decode
    buf.blank();
    attr(buf);
    emit_decode(buf, name, &fields);

    // encode, size, dump
    buf.blank();
    attr(buf);
    buf.open(format!("impl ProtoMessage for {} {{", name));
    emit_body(buf, "fn encode(&self, buffer: &mut ProtoWriteBuffer)", &fields, |f| {
        f.wire_call(Target::Encode)
    });
    buf.blank();
    emit_body(buf, "fn calculate_size(&self, total_size: &mut u32)", &fields, |f| {
        f.wire_call(Target::Size)
    });
    buf.blank();
    emit_dump(buf, name, &fields);
    buf.close("}");

    Ok(())
}

/// Hook signatures and their fallthrough, in the order the hooks are emitted.
const DECODE_HOOKS: [(WireType, &str, &str, &str); 4] = [
    (
        WireType::Varint,
        "fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {",
        "_ => return false,",
        "true",
    ),
    (
        WireType::LengthDelimited,
        "fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {",
        "_ => return Ok(false),",
        "Ok(true)",
    ),
    (
        WireType::Fixed32,
        "fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {",
        "_ => return false,",
        "true",
    ),
    (
        WireType::Fixed64,
        "fn decode_64bit(&mut self, field_id: u32, value: Proto64Bit) -> bool {",
        "_ => return false,",
        "true",
    ),
];

fn emit_decode(buf: &mut CodeBuf, name: &str, fields: &[FieldPlan]) {
    if fields.is_empty() {
        buf.line(format!("impl ProtoDecode for {} {{}}", name));
        return;
    }

    buf.open(format!("impl ProtoDecode for {} {{", name));
    let mut first = true;
    for (wire_type, signature, fallthrough, tail) in DECODE_HOOKS {
        let arms: Vec<String> = fields
            .iter()
            .filter(|f| f.info.wire_type == wire_type)
            .map(FieldPlan::decode_arm)
            .collect();
        if arms.is_empty() {
            continue;
        }
        if !first {
            buf.blank();
        }
        first = false;

        buf.open(signature);
        buf.open("match field_id {");
        buf.lines(&arms);
        buf.line(fallthrough);
        buf.close("}");
        buf.line(tail);
        buf.close("}");
    }
    buf.close("}");
}

fn emit_body<F>(buf: &mut CodeBuf, signature: &str, fields: &[FieldPlan], render: F)
where
    F: Fn(&FieldPlan) -> Vec<String>,
{
    if fields.is_empty() {
        // Unused parameters get a leading underscore.
        let signature = signature
            .replace("buffer:", "_buffer:")
            .replace("total_size:", "_total_size:");
        buf.line(format!("{} {{}}", signature));
        return;
    }
    buf.open(format!("{} {{", signature));
    for field in fields {
        buf.lines(render(field));
    }
    buf.close("}");
}

fn emit_dump(buf: &mut CodeBuf, name: &str, fields: &[FieldPlan]) {
    buf.open("fn dump_to(&self, out: &mut String) {");
    if fields.is_empty() {
        buf.line(format!("out.push_str(\"{} {{}}\");", name));
    } else {
        buf.line(format!("out.push_str(\"{} {{\\n\");", name));
        for field in fields {
            buf.lines(field.dump_lines());
        }
        buf.line("out.push('}');");
    }
    buf.close("}");
}

/// Names of message types referenced by fields, for dependency checks.
pub fn referenced_messages(fields: &[FieldPlan]) -> impl Iterator<Item = &str> {
    fields
        .iter()
        .filter(|f| f.field_type == FieldType::Message)
        .filter_map(|f| f.type_name.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::descriptor::{
        FieldDescriptorProto, FileDescriptorProto, MessageOptions, LABEL_REPEATED,
    };
    use crate::codegen::GeneratorConfig;

    fn field(name: &str, number: i32, ty: i32) -> FieldDescriptorProto {
        FieldDescriptorProto {
            name: name.into(),
            number,
            label: 1,
            r#type: ty,
            type_name: String::new(),
        }
    }

    fn file() -> FileDescriptorProto {
        let mut hello = DescriptorProto {
            name: "HelloRequest".into(),
            field: vec![field("client_info", 1, 9), field("api_version_major", 2, 13)],
            options: MessageOptions {
                id: Some(1),
                source: Some(2),
                ..Default::default()
            },
        };
        hello.field.push(field("api_version_minor", 3, 13));

        let ping = DescriptorProto {
            name: "PingRequest".into(),
            field: vec![],
            options: MessageOptions {
                id: Some(7),
                ..Default::default()
            },
        };

        let logs = DescriptorProto {
            name: "SubscribeLogsResponse".into(),
            field: vec![field("message", 3, 12)],
            options: MessageOptions {
                id: Some(29),
                log: Some(false),
                ..Default::default()
            },
        };

        let mut array = field("int_array", 7, 17);
        array.label = LABEL_REPEATED;
        let argument = DescriptorProto {
            name: "ExecuteServiceArgument".into(),
            field: vec![field("float_", 3, 2), array],
            options: MessageOptions::default(),
        };

        let select = DescriptorProto {
            name: "SelectCommandRequest".into(),
            field: vec![field("key", 1, 7)],
            options: MessageOptions {
                id: Some(54),
                ifdef: Some("USE_SELECT".into()),
                ..Default::default()
            },
        };

        FileDescriptorProto {
            name: "api.proto".into(),
            message_type: vec![hello, ping, logs, argument, select],
            ..Default::default()
        }
    }

    fn render() -> String {
        let file = file();
        let config = GeneratorConfig::default();
        let ctx = GenContext::new(&file, &config);
        emit_messages_file(&ctx).unwrap()
    }

    #[test]
    fn test_header_and_imports() {
        let out = render();
        assert!(out.starts_with(FILE_HEADER));
        assert!(out.contains("use crate::error::Result;"));
        assert!(out.contains("pub mod enums {"));
    }

    #[test]
    fn test_service_message_constants() {
        let out = render();
        assert!(out.contains("impl ServiceMessage for HelloRequest {"));
        assert!(out.contains("const MESSAGE_TYPE: u16 = 1;"));
        // 9 + 4 + 4
        assert!(out.contains("const ESTIMATED_SIZE: u16 = 17;"));
        assert!(out.contains("const MESSAGE_NAME: &'static str = \"hello_request\";"));
        assert!(!out.contains("impl ServiceMessage for ExecuteServiceArgument"));
    }

    #[test]
    fn test_log_option() {
        let out = render();
        let logs = out.split("impl ServiceMessage for SubscribeLogsResponse").nth(1).unwrap();
        let logs = logs.split("}").next().unwrap();
        assert!(logs.contains("const LOG: bool = false;"));
        assert_eq!(out.matches("const LOG: bool = false;").count(), 1);
    }

    #[test]
    fn test_decode_hooks_by_wire_type() {
        let out = render();
        assert!(out.contains("2 => self.api_version_major = value.as_uint32(),"));
        assert!(out.contains("1 => self.client_info = value.as_string(),"));
        assert!(out.contains("3 => self.float_ = value.as_float(),"));
        assert!(out.contains("7 => self.int_array.push(value.as_sint32()),"));
        assert!(out.contains("_ => return Ok(false),"));
        assert!(out.contains("impl ProtoDecode for PingRequest {}"));
    }

    #[test]
    fn test_empty_message() {
        let out = render();
        assert!(out.contains("pub struct PingRequest {}"));
        assert!(out.contains("fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}"));
        assert!(out.contains("fn calculate_size(&self, _total_size: &mut u32) {}"));
        assert!(out.contains("out.push_str(\"PingRequest {}\");"));
    }

    #[test]
    fn test_encode_and_size_bodies() {
        let out = render();
        assert!(out.contains("buffer.encode_string(1, &self.client_info, false);"));
        assert!(out.contains("ProtoSize::add_string_field(total_size, 1, &self.client_info, false);"));
        assert!(out.contains("    buffer.encode_sint32(7, *it, true);"));
        assert!(out.contains("buffer.encode_bytes(3, &self.message, false);"));
    }

    #[test]
    fn test_dump_body() {
        let out = render();
        assert!(out.contains("out.push_str(\"HelloRequest {\\n\");"));
        assert!(out.contains("dump_field(out, \"client_info\", Quoted(&self.client_info));"));
        assert!(out.contains("out.push('}');"));
    }

    #[test]
    fn test_ifdef_becomes_cfg() {
        let out = render();
        let cfg_count = out.matches("#[cfg(feature = \"select\")]").count();
        // struct, ServiceMessage, ProtoDecode, ProtoMessage
        assert_eq!(cfg_count, 4);
        assert!(out.contains("#[cfg(feature = \"select\")]\n#[derive(Debug, Clone, Default, PartialEq)]\npub struct SelectCommandRequest {"));
    }

    #[test]
    fn test_base_class_embedding() {
        let mut file = file();
        for (name, id, state_type) in [("BinarySensorStateResponse", 21, 8), ("SensorStateResponse", 25, 2)] {
            file.message_type.push(DescriptorProto {
                name: name.into(),
                field: vec![field("key", 1, 7), field("state", 2, state_type), field("missing_state", 3, 8)],
                options: MessageOptions {
                    id: Some(id),
                    base_class: Some("StateResponseProtoMessage".into()),
                    ..Default::default()
                },
            });
        }
        let config = GeneratorConfig::default();
        let ctx = GenContext::new(&file, &config);
        let out = emit_messages_file(&ctx).unwrap();

        assert!(out.contains("pub struct StateResponseProtoMessage {\n    pub key: u32,\n    pub missing_state: bool,\n}"));
        assert!(out.contains("pub struct SensorStateResponse {\n    pub base: StateResponseProtoMessage,\n    pub state: f32,\n}"));
        assert!(out.contains("impl AsRef<StateResponseProtoMessage> for SensorStateResponse {"));
        assert!(out.contains("buffer.encode_fixed32(1, self.base.key, false);"));
        assert!(out.contains("3 => self.base.missing_state = value.as_bool(),"));
    }

    #[test]
    fn test_referenced_messages() {
        let mut args = field("args", 2, 11);
        args.type_name = ".ExecuteServiceArgument".into();
        let plans = vec![FieldPlan::new(&args, false).unwrap()];
        let names: Vec<&str> = referenced_messages(&plans).collect();
        assert_eq!(names, vec!["ExecuteServiceArgument"]);
    }
}
