//! `google.protobuf.FileDescriptorSet`, decoded with the crate's own runtime.
//!
//! Only the parts the generator reads are kept. The API options are
//! extensions of `MessageOptions`/`MethodOptions`, so they show up here as
//! ordinary fields with the extension numbers declared in
//! `proto/api_options.proto`.

use crate::error::{ApiError, Result};
use crate::proto::{ProtoDecode, ProtoLengthDelimited, ProtoVarInt};

/// `option (source)` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Both,
    Server,
    Client,
}

impl Source {
    pub fn from_u32(value: u32) -> Self {
        match value {
            1 => Source::Server,
            2 => Source::Client,
            _ => Source::Both,
        }
    }

    /// Whether the device receives this message.
    pub fn is_inbound(self) -> bool {
        matches!(self, Source::Both | Source::Client)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDescriptorSet {
    pub file: Vec<FileDescriptorProto>,
}

impl FileDescriptorSet {
    /// Decode the output of `protoc -o`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut set = Self::default();
        set.decode(bytes)?;
        Ok(set)
    }

    /// The file the generator works on: the last one, since `protoc` lists
    /// imports before the files that import them.
    pub fn main_file(&self) -> Result<&FileDescriptorProto> {
        self.file
            .last()
            .ok_or_else(|| ApiError::Descriptor("descriptor set contains no files".into()))
    }
}

impl ProtoDecode for FileDescriptorSet {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.file.push(value.as_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDescriptorProto {
    pub name: String,
    pub package: String,
    pub dependency: Vec<String>,
    pub message_type: Vec<DescriptorProto>,
    pub enum_type: Vec<EnumDescriptorProto>,
    pub service: Vec<ServiceDescriptorProto>,
}

impl ProtoDecode for FileDescriptorProto {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            2 => self.package = value.as_string(),
            3 => self.dependency.push(value.as_string()),
            4 => self.message_type.push(value.as_message()?),
            5 => self.enum_type.push(value.as_message()?),
            6 => self.service.push(value.as_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorProto {
    pub name: String,
    pub field: Vec<FieldDescriptorProto>,
    pub options: MessageOptions,
}

impl DescriptorProto {
    /// Dispatch id, `None` for messages that are only ever nested.
    pub fn message_id(&self) -> Result<Option<u16>> {
        self.options
            .id
            .map(|id| {
                u16::try_from(id).map_err(|_| {
                    ApiError::Descriptor(format!("message id {} of {} exceeds u16", id, self.name))
                })
            })
            .transpose()
    }

    pub fn source(&self) -> Source {
        self.options.source.map(Source::from_u32).unwrap_or_default()
    }

    pub fn ifdef(&self) -> Option<&str> {
        self.options.ifdef.as_deref()
    }

    pub fn log(&self) -> bool {
        self.options.log.unwrap_or(true)
    }

    pub fn no_delay(&self) -> bool {
        self.options.no_delay.unwrap_or(false)
    }

    pub fn base_class(&self) -> Option<&str> {
        self.options.base_class.as_deref()
    }
}

impl ProtoDecode for DescriptorProto {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            2 => self.field.push(value.as_message()?),
            7 => self.options = value.as_message()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// `MessageOptions` extensions; `None` means the option was not set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOptions {
    pub id: Option<u32>,
    pub source: Option<u32>,
    pub ifdef: Option<String>,
    pub log: Option<bool>,
    pub no_delay: Option<bool>,
    pub base_class: Option<String>,
}

impl ProtoDecode for MessageOptions {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1036 => self.id = Some(value.as_uint32()),
            1037 => self.source = Some(value.as_uint32()),
            1039 => self.log = Some(value.as_bool()),
            1040 => self.no_delay = Some(value.as_bool()),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1038 => self.ifdef = Some(value.as_string()),
            1041 => self.base_class = Some(value.as_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// `LABEL_REPEATED`.
pub const LABEL_REPEATED: i32 = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDescriptorProto {
    pub name: String,
    pub number: i32,
    pub label: i32,
    pub r#type: i32,
    pub type_name: String,
}

impl FieldDescriptorProto {
    pub fn is_repeated(&self) -> bool {
        self.label == LABEL_REPEATED
    }
}

impl ProtoDecode for FieldDescriptorProto {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            3 => self.number = value.as_int32(),
            4 => self.label = value.as_int32(),
            5 => self.r#type = value.as_int32(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            6 => self.type_name = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumDescriptorProto {
    pub name: String,
    pub value: Vec<EnumValueDescriptorProto>,
}

impl ProtoDecode for EnumDescriptorProto {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            2 => self.value.push(value.as_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumValueDescriptorProto {
    pub name: String,
    pub number: i32,
}

impl ProtoDecode for EnumValueDescriptorProto {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            2 => self.number = value.as_int32(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDescriptorProto {
    pub name: String,
    pub method: Vec<MethodDescriptorProto>,
}

impl ProtoDecode for ServiceDescriptorProto {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            2 => self.method.push(value.as_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodDescriptorProto {
    pub name: String,
    pub input_type: String,
    pub output_type: String,
    pub options: MethodOptions,
}

impl MethodDescriptorProto {
    pub fn needs_setup_connection(&self) -> bool {
        self.options.needs_setup_connection.unwrap_or(true)
    }

    pub fn needs_authentication(&self) -> bool {
        self.options.needs_authentication.unwrap_or(true)
    }
}

impl ProtoDecode for MethodDescriptorProto {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            2 => self.input_type = value.as_string(),
            3 => self.output_type = value.as_string(),
            4 => self.options = value.as_message()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodOptions {
    pub needs_setup_connection: Option<bool>,
    pub needs_authentication: Option<bool>,
}

impl ProtoDecode for MethodOptions {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1038 => self.needs_setup_connection = Some(value.as_bool()),
            1039 => self.needs_authentication = Some(value.as_bool()),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::ProtoWriteBuffer;

    fn field_bytes(name: &str, number: u64, label: u64, ty: u64, type_name: &str) -> Vec<u8> {
        let mut buffer = ProtoWriteBuffer::new();
        buffer.encode_string(1, name, false);
        buffer.encode_uint64(3, number, false);
        buffer.encode_uint64(4, label, false);
        buffer.encode_uint64(5, ty, false);
        buffer.encode_string(6, type_name, false);
        buffer.as_slice().to_vec()
    }

    #[test]
    fn test_decode_message_with_options() {
        let mut options = ProtoWriteBuffer::new();
        options.encode_uint32(1036, 12, false);
        options.encode_uint32(1037, 1, false);
        options.encode_string(1038, "USE_BINARY_SENSOR", false);
        options.encode_bool(1039, false, true);
        options.encode_string(1041, "InfoResponseProtoMessage", false);

        let mut message = ProtoWriteBuffer::new();
        message.encode_string(1, "ListEntitiesBinarySensorResponse", false);
        message.encode_bytes(2, &field_bytes("object_id", 1, 1, 9, ""), false);
        message.encode_bytes(2, &field_bytes("key", 2, 1, 7, ""), false);
        message.encode_bytes(7, options.as_slice(), false);

        let mut file = ProtoWriteBuffer::new();
        file.encode_string(1, "api.proto", false);
        file.encode_bytes(4, message.as_slice(), false);

        let mut set = ProtoWriteBuffer::new();
        set.encode_bytes(1, file.as_slice(), false);

        let set = FileDescriptorSet::from_bytes(set.as_slice()).unwrap();
        let file = set.main_file().unwrap();
        assert_eq!(file.name, "api.proto");

        let message = &file.message_type[0];
        assert_eq!(message.field.len(), 2);
        assert_eq!(message.field[1].number, 2);
        assert_eq!(message.field[1].r#type, 7);
        assert_eq!(message.message_id().unwrap(), Some(12));
        assert_eq!(message.source(), Source::Server);
        assert_eq!(message.ifdef(), Some("USE_BINARY_SENSOR"));
        assert!(!message.log());
        assert!(!message.no_delay());
        assert_eq!(message.base_class(), Some("InfoResponseProtoMessage"));
    }

    #[test]
    fn test_option_defaults() {
        let message = DescriptorProto::default();
        assert_eq!(message.message_id().unwrap(), None);
        assert_eq!(message.source(), Source::Both);
        assert!(message.log());

        let method = MethodDescriptorProto::default();
        assert!(method.needs_setup_connection());
        assert!(method.needs_authentication());
    }

    #[test]
    fn test_decode_method_options() {
        let mut options = ProtoWriteBuffer::new();
        options.encode_bool(1038, false, true);

        let mut method = ProtoWriteBuffer::new();
        method.encode_string(1, "hello", false);
        method.encode_string(2, ".HelloRequest", false);
        method.encode_string(3, ".HelloResponse", false);
        method.encode_bytes(4, options.as_slice(), false);

        let mut decoded = MethodDescriptorProto::default();
        decoded.decode(method.as_slice()).unwrap();
        assert_eq!(decoded.input_type, ".HelloRequest");
        assert!(!decoded.needs_setup_connection());
        assert!(decoded.needs_authentication());
    }

    #[test]
    fn test_message_id_out_of_range() {
        let message = DescriptorProto {
            name: "Huge".into(),
            options: MessageOptions {
                id: Some(70_000),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(message.message_id(), Err(ApiError::Descriptor(_))));
    }

    #[test]
    fn test_empty_set_has_no_main_file() {
        assert!(FileDescriptorSet::default().main_file().is_err());
    }

    #[test]
    fn test_source_inbound() {
        assert!(Source::Both.is_inbound());
        assert!(Source::Client.is_inbound());
        assert!(!Source::Server.is_inbound());
    }
}
