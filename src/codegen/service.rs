//! Service emitter: `api_pb2_service.rs`.
//!
//! Two traits come out of this:
//! - `ApiServerConnectionBase`: one `on_*` hook per inbound message and
//!   `read_message`, which decodes a frame by message type and calls the hook.
//! - `ApiServerConnection`: one handler per rpc. A blanket impl wires the
//!   hooks to the handlers, checking connection setup and authentication
//!   first and sending the handler's response.

use super::code::{camel_to_snake, cfg_attr, rust_ident, short_type_name, CodeBuf, FILE_HEADER};
use super::context::GenContext;
use super::descriptor::{DescriptorProto, MethodDescriptorProto};
use crate::error::{ApiError, Result};

pub const BASE_TRAIT: &str = "ApiServerConnectionBase";
pub const SERVICE_TRAIT: &str = "ApiServerConnection";

/// Log target of generated dispatch code.
pub const LOG_TARGET: &str = "api.service";

/// Output type name meaning "no response".
const VOID: &str = "void";

/// An inbound message with its dispatch id.
struct Inbound<'a> {
    id: u16,
    msg: &'a DescriptorProto,
}

impl Inbound<'_> {
    fn hook(&self) -> String {
        format!("on_{}", camel_to_snake(&self.msg.name))
    }
}

/// An rpc resolved against its input message.
struct Rpc<'a> {
    method: &'a MethodDescriptorProto,
    input: &'a str,
    output: Option<&'a str>,
    ifdef: Option<&'a str>,
}

impl Rpc<'_> {
    fn handler(&self) -> String {
        rust_ident(&self.method.name)
    }

    fn hook(&self) -> String {
        format!("on_{}", camel_to_snake(self.input))
    }
}

fn inbound_messages<'a>(ctx: &GenContext<'a>) -> Result<Vec<Inbound<'a>>> {
    let mut inbound = Vec::new();
    for msg in &ctx.file.message_type {
        let Some(id) = msg.message_id()? else {
            continue;
        };
        if msg.source().is_inbound() {
            inbound.push(Inbound { id, msg });
        }
    }
    inbound.sort_by_key(|i| i.id);
    if let Some(pair) = inbound.windows(2).find(|w| w[0].id == w[1].id) {
        return Err(ApiError::Descriptor(format!(
            "{} and {} share message id {}",
            pair[0].msg.name, pair[1].msg.name, pair[0].id
        )));
    }
    Ok(inbound)
}

fn rpcs<'a>(ctx: &GenContext<'a>, inbound: &[Inbound<'a>]) -> Result<Vec<Rpc<'a>>> {
    let Some(service) = ctx.file.service.first() else {
        return Ok(Vec::new());
    };

    service
        .method
        .iter()
        .map(|method| {
            let input = short_type_name(&method.input_type);
            if !inbound.iter().any(|i| i.msg.name == input) {
                return Err(ApiError::Descriptor(format!(
                    "rpc {} takes {}, which is not an inbound message with an id",
                    method.name, input
                )));
            }
            let output = short_type_name(&method.output_type);
            let output = (output != VOID).then_some(output);
            if let Some(output) = output {
                let known = ctx
                    .message(output)
                    .map(|msg| msg.message_id())
                    .transpose()?
                    .flatten()
                    .is_some();
                if !known {
                    return Err(ApiError::Descriptor(format!(
                        "rpc {} returns {}, which has no message id",
                        method.name, output
                    )));
                }
            }
            Ok(Rpc {
                method,
                input,
                output,
                ifdef: ctx.ifdef_of(input),
            })
        })
        .collect()
}

/// Render the complete service file.
pub fn emit_service_file(ctx: &GenContext<'_>) -> Result<String> {
    let runtime = ctx.runtime();
    let inbound = inbound_messages(ctx)?;
    let rpcs = rpcs(ctx, &inbound)?;

    let mut buf = CodeBuf::new();
    buf.raw(FILE_HEADER);
    buf.blank();
    buf.line("#![allow(unused_imports)]");
    buf.blank();
    buf.line(format!("use {}::error::{{ApiError, Result}};", runtime));
    buf.line(format!("use {}::proto::{{ProtoDecode, ProtoMessage}};", runtime));
    buf.line(format!("use {}::service::ProtoService;", runtime));
    buf.blank();
    buf.line("use super::api_pb2::*;");
    buf.blank();

    emit_base_trait(&mut buf, &inbound);
    buf.blank();
    emit_service_trait(&mut buf, &inbound, &rpcs);
    buf.blank();
    emit_blanket_impl(&mut buf, &inbound, &rpcs);

    Ok(buf.finish())
}

fn emit_base_trait(buf: &mut CodeBuf, inbound: &[Inbound<'_>]) {
    buf.line("/// Receive side of a connection: one hook per inbound message.");
    buf.open(format!("pub trait {}: ProtoService {{", BASE_TRAIT));
    for msg in inbound {
        if let Some(cfg) = cfg_attr(msg.msg.ifdef()) {
            buf.line(cfg);
        }
        buf.line(format!(
            "fn {}(&mut self, _value: &{}) {{}}",
            msg.hook(),
            msg.msg.name
        ));
        buf.blank();
    }

    buf.line("/// Decode `msg_data` as message `msg_type` and call its hook.");
    buf.open("fn read_message(&mut self, msg_type: u16, msg_data: &[u8]) -> Result<()> {");
    buf.open("match msg_type {");
    for msg in inbound {
        if let Some(cfg) = cfg_attr(msg.msg.ifdef()) {
            buf.line(cfg);
        }
        buf.open(format!("{} => {{", msg.id));
        buf.line(format!("let mut msg = {}::default();", msg.msg.name));
        buf.line("msg.decode(msg_data)?;");
        if msg.msg.log() {
            buf.line(format!(
                "tracing::trace!(target: \"{}\", \"{}: {{}}\", msg.dump());",
                LOG_TARGET,
                msg.hook()
            ));
        }
        buf.line(format!("self.{}(&msg);", msg.hook()));
        buf.close("}");
    }
    buf.line("_ => return Err(ApiError::UnknownMessageType(msg_type)),");
    buf.close("}");
    buf.line("Ok(())");
    buf.close("}");
    buf.close("}");
}

fn emit_service_trait(buf: &mut CodeBuf, inbound: &[Inbound<'_>], rpcs: &[Rpc<'_>]) {
    buf.line("/// Request handlers. Implementors get the dispatch hooks through the");
    buf.line(format!("/// blanket `{}` impl.", BASE_TRAIT));
    buf.open(format!("pub trait {}: ProtoService {{", SERVICE_TRAIT));
    for rpc in rpcs {
        if let Some(cfg) = cfg_attr(rpc.ifdef) {
            buf.line(cfg);
        }
        match rpc.output {
            Some(output) => buf.line(format!(
                "fn {}(&mut self, msg: &{}) -> {};",
                rpc.handler(),
                rpc.input,
                output
            )),
            None => buf.line(format!("fn {}(&mut self, msg: &{});", rpc.handler(), rpc.input)),
        }
        buf.blank();
    }

    for msg in unhandled(inbound, rpcs) {
        if let Some(cfg) = cfg_attr(msg.msg.ifdef()) {
            buf.line(cfg);
        }
        buf.line(format!(
            "fn {}(&mut self, _value: &{}) {{}}",
            msg.hook(),
            msg.msg.name
        ));
        buf.blank();
    }
    buf.close("}");
}

fn emit_blanket_impl(buf: &mut CodeBuf, inbound: &[Inbound<'_>], rpcs: &[Rpc<'_>]) {
    buf.open(format!("impl<T: {}> {} for T {{", SERVICE_TRAIT, BASE_TRAIT));
    let mut first = true;
    for rpc in rpcs {
        if !first {
            buf.blank();
        }
        first = false;

        if let Some(cfg) = cfg_attr(rpc.ifdef) {
            buf.line(cfg);
        }
        buf.open(format!("fn {}(&mut self, msg: &{}) {{", rpc.hook(), rpc.input));
        if rpc.method.needs_setup_connection() {
            buf.open("if !self.is_connection_setup() {");
            buf.line("self.on_no_setup_connection();");
            buf.line("return;");
            buf.close("}");
        }
        if rpc.method.needs_authentication() {
            buf.open("if !self.is_authenticated() {");
            buf.line("self.on_unauthenticated_access();");
            buf.line("return;");
            buf.close("}");
        }
        match rpc.output {
            Some(output) => {
                buf.line(format!("let ret = self.{}(msg);", rpc.handler()));
                buf.open("if let Err(err) = self.send_message(&ret) {");
                buf.line(format!(
                    "tracing::warn!(target: \"{}\", \"Failed to send {}: {{}}\", err);",
                    LOG_TARGET,
                    camel_to_snake(output)
                ));
                buf.line("self.on_fatal_error();");
                buf.close("}");
            }
            None => buf.line(format!("self.{}(msg);", rpc.handler())),
        }
        buf.close("}");
    }

    for msg in unhandled(inbound, rpcs) {
        if !first {
            buf.blank();
        }
        first = false;

        if let Some(cfg) = cfg_attr(msg.msg.ifdef()) {
            buf.line(cfg);
        }
        buf.open(format!("fn {}(&mut self, value: &{}) {{", msg.hook(), msg.msg.name));
        buf.line(format!("{}::{}(self, value);", SERVICE_TRAIT, msg.hook()));
        buf.close("}");
    }
    buf.close("}");
}

/// Inbound messages no rpc consumes.
fn unhandled<'a, 'b>(
    inbound: &'b [Inbound<'a>],
    rpcs: &'b [Rpc<'a>],
) -> impl Iterator<Item = &'b Inbound<'a>> {
    inbound
        .iter()
        .filter(move |msg| !rpcs.iter().any(|rpc| rpc.input == msg.msg.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::descriptor::{
        FileDescriptorProto, MessageOptions, MethodOptions, ServiceDescriptorProto,
    };
    use crate::codegen::GeneratorConfig;

    fn message(name: &str, id: u32, source: u32) -> DescriptorProto {
        DescriptorProto {
            name: name.into(),
            field: vec![],
            options: MessageOptions {
                id: Some(id),
                source: Some(source),
                ..Default::default()
            },
        }
    }

    fn method(name: &str, input: &str, output: &str, setup: Option<bool>, auth: Option<bool>) -> MethodDescriptorProto {
        MethodDescriptorProto {
            name: name.into(),
            input_type: format!(".{}", input),
            output_type: format!(".{}", output),
            options: MethodOptions {
                needs_setup_connection: setup,
                needs_authentication: auth,
            },
        }
    }

    fn file() -> FileDescriptorProto {
        let mut select = message("SelectCommandRequest", 54, 2);
        select.options.ifdef = Some("USE_SELECT".into());
        let mut logs = message("SubscribeLogsRequest", 28, 2);
        logs.options.log = Some(false);

        FileDescriptorProto {
            name: "api.proto".into(),
            message_type: vec![
                message("HelloRequest", 1, 2),
                message("HelloResponse", 2, 1),
                message("PingRequest", 7, 0),
                message("PingResponse", 8, 0),
                message("DeviceInfoRequest", 9, 2),
                message("DeviceInfoResponse", 10, 1),
                logs,
                select,
            ],
            service: vec![ServiceDescriptorProto {
                name: "APIConnection".into(),
                method: vec![
                    method("hello", "HelloRequest", "HelloResponse", Some(false), Some(false)),
                    method("ping", "PingRequest", "PingResponse", Some(false), Some(false)),
                    method("device_info", "DeviceInfoRequest", "DeviceInfoResponse", None, Some(false)),
                    method("subscribe_logs", "SubscribeLogsRequest", "void", None, None),
                    method("select_command", "SelectCommandRequest", "void", None, None),
                ],
            }],
            ..Default::default()
        }
    }

    fn render(file: &FileDescriptorProto) -> Result<String> {
        let config = GeneratorConfig::default();
        let ctx = GenContext::new(file, &config);
        emit_service_file(&ctx)
    }

    #[test]
    fn test_dispatch_cases_sorted_and_inbound_only() {
        let out = render(&file()).unwrap();
        let hello = out.find("1 => {").unwrap();
        let ping = out.find("7 => {").unwrap();
        let resp = out.find("8 => {").unwrap();
        let logs = out.find("28 => {").unwrap();
        assert!(hello < ping && ping < resp && resp < logs);
        // server-only messages get no case and no hook
        assert!(!out.contains("2 => {"));
        assert!(!out.contains("on_hello_response"));
        assert!(out.contains("_ => return Err(ApiError::UnknownMessageType(msg_type)),"));
    }

    #[test]
    fn test_log_option_suppresses_trace() {
        let out = render(&file()).unwrap();
        assert!(out.contains("\"on_hello_request: {}\", msg.dump()"));
        assert!(!out.contains("\"on_subscribe_logs_request: {}\""));
        assert!(out.contains("self.on_subscribe_logs_request(&msg);"));
    }

    #[test]
    fn test_gating_follows_method_options() {
        let out = render(&file()).unwrap();

        let hello = out.split("fn on_hello_request(&mut self, msg: &HelloRequest) {").nth(1).unwrap();
        let hello = &hello[..hello.find("\n    }\n").unwrap()];
        assert!(!hello.contains("is_connection_setup"));
        assert!(!hello.contains("is_authenticated"));
        assert!(hello.contains("let ret = self.hello(msg);"));
        assert!(hello.contains("self.on_fatal_error();"));

        let info = out.split("fn on_device_info_request(&mut self, msg: &DeviceInfoRequest) {").nth(1).unwrap();
        let info = &info[..info.find("\n    }\n").unwrap()];
        assert!(info.contains("if !self.is_connection_setup() {"));
        assert!(!info.contains("is_authenticated"));

        let logs = out.split("fn on_subscribe_logs_request(&mut self, msg: &SubscribeLogsRequest) {").nth(1).unwrap();
        let logs = &logs[..logs.find("\n    }\n").unwrap()];
        assert!(logs.contains("self.on_no_setup_connection();"));
        assert!(logs.contains("self.on_unauthenticated_access();"));
        assert!(logs.contains("self.subscribe_logs(msg);"));
        assert!(!logs.contains("send_message"));
    }

    #[test]
    fn test_handler_signatures() {
        let out = render(&file()).unwrap();
        assert!(out.contains("fn hello(&mut self, msg: &HelloRequest) -> HelloResponse;"));
        assert!(out.contains("fn subscribe_logs(&mut self, msg: &SubscribeLogsRequest);"));
        assert!(out.contains("#[cfg(feature = \"select\")]\n    fn select_command(&mut self, msg: &SelectCommandRequest);"));
    }

    #[test]
    fn test_unhandled_inbound_forwarded() {
        let out = render(&file()).unwrap();
        assert!(out.contains("fn on_ping_response(&mut self, value: &PingResponse) {"));
        assert!(out.contains("ApiServerConnection::on_ping_response(self, value);"));
    }

    #[test]
    fn test_ifdef_on_case_hook_and_rpc() {
        let out = render(&file()).unwrap();
        assert_eq!(out.matches("#[cfg(feature = \"select\")]").count(), 4);
    }

    #[test]
    fn test_runtime_path() {
        let file = file();
        let config = GeneratorConfig {
            runtime_path: "esphome_api".into(),
            ..Default::default()
        };
        let ctx = GenContext::new(&file, &config);
        let out = emit_service_file(&ctx).unwrap();
        assert!(out.contains("use esphome_api::service::ProtoService;"));
    }

    #[test]
    fn test_rpc_with_server_only_input_rejected() {
        let mut file = file();
        file.service[0]
            .method
            .push(method("bogus", "HelloResponse", "void", None, None));
        let err = render(&file).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut file = file();
        file.message_type.push(message("Clash", 7, 2));
        assert!(matches!(render(&file), Err(ApiError::Descriptor(_))));
    }
}
