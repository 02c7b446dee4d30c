// This file was automatically generated with a tool.
// See src/bin/api_protobuf.rs

#![allow(unused_imports)]

use crate::error::Result;
use crate::proto::{
    dump_field, dump_message, Hex, Proto32Bit, Proto64Bit, ProtoDecode, ProtoEnum,
    ProtoLengthDelimited, ProtoMessage, ProtoSize, ProtoVarInt, ProtoWriteBuffer, Quoted,
    ServiceMessage, YesNo,
};

pub mod enums {
    use crate::proto::ProtoEnum;

    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EntityCategory(pub u32);

    impl EntityCategory {
        pub const ENTITY_CATEGORY_NONE: Self = Self(0);
        pub const ENTITY_CATEGORY_CONFIG: Self = Self(1);
        pub const ENTITY_CATEGORY_DIAGNOSTIC: Self = Self(2);
    }

    impl ProtoEnum for EntityCategory {
        fn from_u32(value: u32) -> Self {
            Self(value)
        }

        fn as_u32(self) -> u32 {
            self.0
        }

        fn as_str(self) -> &'static str {
            match self {
                Self::ENTITY_CATEGORY_NONE => "ENTITY_CATEGORY_NONE",
                Self::ENTITY_CATEGORY_CONFIG => "ENTITY_CATEGORY_CONFIG",
                Self::ENTITY_CATEGORY_DIAGNOSTIC => "ENTITY_CATEGORY_DIAGNOSTIC",
                _ => "UNKNOWN",
            }
        }
    }

    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SensorStateClass(pub u32);

    impl SensorStateClass {
        pub const STATE_CLASS_NONE: Self = Self(0);
        pub const STATE_CLASS_MEASUREMENT: Self = Self(1);
        pub const STATE_CLASS_TOTAL_INCREASING: Self = Self(2);
        pub const STATE_CLASS_TOTAL: Self = Self(3);
    }

    impl ProtoEnum for SensorStateClass {
        fn from_u32(value: u32) -> Self {
            Self(value)
        }

        fn as_u32(self) -> u32 {
            self.0
        }

        fn as_str(self) -> &'static str {
            match self {
                Self::STATE_CLASS_NONE => "STATE_CLASS_NONE",
                Self::STATE_CLASS_MEASUREMENT => "STATE_CLASS_MEASUREMENT",
                Self::STATE_CLASS_TOTAL_INCREASING => "STATE_CLASS_TOTAL_INCREASING",
                Self::STATE_CLASS_TOTAL => "STATE_CLASS_TOTAL",
                _ => "UNKNOWN",
            }
        }
    }

    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LogLevel(pub u32);

    impl LogLevel {
        pub const LOG_LEVEL_NONE: Self = Self(0);
        pub const LOG_LEVEL_ERROR: Self = Self(1);
        pub const LOG_LEVEL_WARN: Self = Self(2);
        pub const LOG_LEVEL_INFO: Self = Self(3);
        pub const LOG_LEVEL_CONFIG: Self = Self(4);
        pub const LOG_LEVEL_DEBUG: Self = Self(5);
        pub const LOG_LEVEL_VERBOSE: Self = Self(6);
        pub const LOG_LEVEL_VERY_VERBOSE: Self = Self(7);
    }

    impl ProtoEnum for LogLevel {
        fn from_u32(value: u32) -> Self {
            Self(value)
        }

        fn as_u32(self) -> u32 {
            self.0
        }

        fn as_str(self) -> &'static str {
            match self {
                Self::LOG_LEVEL_NONE => "LOG_LEVEL_NONE",
                Self::LOG_LEVEL_ERROR => "LOG_LEVEL_ERROR",
                Self::LOG_LEVEL_WARN => "LOG_LEVEL_WARN",
                Self::LOG_LEVEL_INFO => "LOG_LEVEL_INFO",
                Self::LOG_LEVEL_CONFIG => "LOG_LEVEL_CONFIG",
                Self::LOG_LEVEL_DEBUG => "LOG_LEVEL_DEBUG",
                Self::LOG_LEVEL_VERBOSE => "LOG_LEVEL_VERBOSE",
                Self::LOG_LEVEL_VERY_VERBOSE => "LOG_LEVEL_VERY_VERBOSE",
                _ => "UNKNOWN",
            }
        }
    }

    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ServiceArgType(pub u32);

    impl ServiceArgType {
        pub const SERVICE_ARG_TYPE_BOOL: Self = Self(0);
        pub const SERVICE_ARG_TYPE_INT: Self = Self(1);
        pub const SERVICE_ARG_TYPE_FLOAT: Self = Self(2);
        pub const SERVICE_ARG_TYPE_STRING: Self = Self(3);
        pub const SERVICE_ARG_TYPE_BOOL_ARRAY: Self = Self(4);
        pub const SERVICE_ARG_TYPE_INT_ARRAY: Self = Self(5);
        pub const SERVICE_ARG_TYPE_FLOAT_ARRAY: Self = Self(6);
        pub const SERVICE_ARG_TYPE_STRING_ARRAY: Self = Self(7);
    }

    impl ProtoEnum for ServiceArgType {
        fn from_u32(value: u32) -> Self {
            Self(value)
        }

        fn as_u32(self) -> u32 {
            self.0
        }

        fn as_str(self) -> &'static str {
            match self {
                Self::SERVICE_ARG_TYPE_BOOL => "SERVICE_ARG_TYPE_BOOL",
                Self::SERVICE_ARG_TYPE_INT => "SERVICE_ARG_TYPE_INT",
                Self::SERVICE_ARG_TYPE_FLOAT => "SERVICE_ARG_TYPE_FLOAT",
                Self::SERVICE_ARG_TYPE_STRING => "SERVICE_ARG_TYPE_STRING",
                Self::SERVICE_ARG_TYPE_BOOL_ARRAY => "SERVICE_ARG_TYPE_BOOL_ARRAY",
                Self::SERVICE_ARG_TYPE_INT_ARRAY => "SERVICE_ARG_TYPE_INT_ARRAY",
                Self::SERVICE_ARG_TYPE_FLOAT_ARRAY => "SERVICE_ARG_TYPE_FLOAT_ARRAY",
                Self::SERVICE_ARG_TYPE_STRING_ARRAY => "SERVICE_ARG_TYPE_STRING_ARRAY",
                _ => "UNKNOWN",
            }
        }
    }
}

/// Fields shared by every message declaring `base_class = "InfoResponseProtoMessage"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoResponseProtoMessage {
    pub object_id: String,
    pub key: u32,
    pub name: String,
    pub unique_id: String,
    pub disabled_by_default: bool,
    pub icon: String,
    pub entity_category: enums::EntityCategory,
}

/// Fields shared by every message declaring `base_class = "StateResponseProtoMessage"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateResponseProtoMessage {
    pub key: u32,
    pub missing_state: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelloRequest {
    pub client_info: String,
    pub api_version_major: u32,
    pub api_version_minor: u32,
}

impl ServiceMessage for HelloRequest {
    const MESSAGE_TYPE: u16 = 1;
    const ESTIMATED_SIZE: u16 = 17;
    const MESSAGE_NAME: &'static str = "hello_request";
}

impl ProtoDecode for HelloRequest {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            2 => self.api_version_major = value.as_uint32(),
            3 => self.api_version_minor = value.as_uint32(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.client_info = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProtoMessage for HelloRequest {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_string(1, &self.client_info, false);
        buffer.encode_uint32(2, self.api_version_major, false);
        buffer.encode_uint32(3, self.api_version_minor, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_string_field(total_size, 1, &self.client_info, false);
        ProtoSize::add_uint32_field(total_size, 1, self.api_version_major, false);
        ProtoSize::add_uint32_field(total_size, 1, self.api_version_minor, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("HelloRequest {\n");
        dump_field(out, "client_info", Quoted(&self.client_info));
        dump_field(out, "api_version_major", self.api_version_major);
        dump_field(out, "api_version_minor", self.api_version_minor);
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelloResponse {
    pub api_version_major: u32,
    pub api_version_minor: u32,
    pub server_info: String,
    pub name: String,
}

impl ServiceMessage for HelloResponse {
    const MESSAGE_TYPE: u16 = 2;
    const ESTIMATED_SIZE: u16 = 26;
    const MESSAGE_NAME: &'static str = "hello_response";
}

impl ProtoDecode for HelloResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1 => self.api_version_major = value.as_uint32(),
            2 => self.api_version_minor = value.as_uint32(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            3 => self.server_info = value.as_string(),
            4 => self.name = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProtoMessage for HelloResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_uint32(1, self.api_version_major, false);
        buffer.encode_uint32(2, self.api_version_minor, false);
        buffer.encode_string(3, &self.server_info, false);
        buffer.encode_string(4, &self.name, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_uint32_field(total_size, 1, self.api_version_major, false);
        ProtoSize::add_uint32_field(total_size, 1, self.api_version_minor, false);
        ProtoSize::add_string_field(total_size, 1, &self.server_info, false);
        ProtoSize::add_string_field(total_size, 1, &self.name, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("HelloResponse {\n");
        dump_field(out, "api_version_major", self.api_version_major);
        dump_field(out, "api_version_minor", self.api_version_minor);
        dump_field(out, "server_info", Quoted(&self.server_info));
        dump_field(out, "name", Quoted(&self.name));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectRequest {
    pub password: String,
}

impl ServiceMessage for ConnectRequest {
    const MESSAGE_TYPE: u16 = 3;
    const ESTIMATED_SIZE: u16 = 9;
    const MESSAGE_NAME: &'static str = "connect_request";
}

impl ProtoDecode for ConnectRequest {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.password = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProtoMessage for ConnectRequest {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_string(1, &self.password, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_string_field(total_size, 1, &self.password, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ConnectRequest {\n");
        dump_field(out, "password", Quoted(&self.password));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectResponse {
    pub invalid_password: bool,
}

impl ServiceMessage for ConnectResponse {
    const MESSAGE_TYPE: u16 = 4;
    const ESTIMATED_SIZE: u16 = 2;
    const MESSAGE_NAME: &'static str = "connect_response";
}

impl ProtoDecode for ConnectResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1 => self.invalid_password = value.as_bool(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for ConnectResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_bool(1, self.invalid_password, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_bool_field(total_size, 1, self.invalid_password, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ConnectResponse {\n");
        dump_field(out, "invalid_password", YesNo(self.invalid_password));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisconnectRequest {}

impl ServiceMessage for DisconnectRequest {
    const MESSAGE_TYPE: u16 = 5;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "disconnect_request";
}

impl ProtoDecode for DisconnectRequest {}

impl ProtoMessage for DisconnectRequest {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("DisconnectRequest {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisconnectResponse {}

impl ServiceMessage for DisconnectResponse {
    const MESSAGE_TYPE: u16 = 6;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "disconnect_response";
}

impl ProtoDecode for DisconnectResponse {}

impl ProtoMessage for DisconnectResponse {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("DisconnectResponse {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PingRequest {}

impl ServiceMessage for PingRequest {
    const MESSAGE_TYPE: u16 = 7;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "ping_request";
}

impl ProtoDecode for PingRequest {}

impl ProtoMessage for PingRequest {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("PingRequest {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PingResponse {}

impl ServiceMessage for PingResponse {
    const MESSAGE_TYPE: u16 = 8;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "ping_response";
}

impl ProtoDecode for PingResponse {}

impl ProtoMessage for PingResponse {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("PingResponse {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfoRequest {}

impl ServiceMessage for DeviceInfoRequest {
    const MESSAGE_TYPE: u16 = 9;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "device_info_request";
}

impl ProtoDecode for DeviceInfoRequest {}

impl ProtoMessage for DeviceInfoRequest {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("DeviceInfoRequest {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfoResponse {
    pub uses_password: bool,
    pub name: String,
    pub mac_address: String,
    pub esphome_version: String,
    pub compilation_time: String,
    pub model: String,
    pub has_deep_sleep: bool,
    pub project_name: String,
    pub project_version: String,
    pub webserver_port: u32,
    pub manufacturer: String,
    pub friendly_name: String,
}

impl ServiceMessage for DeviceInfoResponse {
    const MESSAGE_TYPE: u16 = 10;
    const ESTIMATED_SIZE: u16 = 89;
    const MESSAGE_NAME: &'static str = "device_info_response";
}

impl ProtoDecode for DeviceInfoResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1 => self.uses_password = value.as_bool(),
            7 => self.has_deep_sleep = value.as_bool(),
            10 => self.webserver_port = value.as_uint32(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            2 => self.name = value.as_string(),
            3 => self.mac_address = value.as_string(),
            4 => self.esphome_version = value.as_string(),
            5 => self.compilation_time = value.as_string(),
            6 => self.model = value.as_string(),
            8 => self.project_name = value.as_string(),
            9 => self.project_version = value.as_string(),
            12 => self.manufacturer = value.as_string(),
            13 => self.friendly_name = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProtoMessage for DeviceInfoResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_bool(1, self.uses_password, false);
        buffer.encode_string(2, &self.name, false);
        buffer.encode_string(3, &self.mac_address, false);
        buffer.encode_string(4, &self.esphome_version, false);
        buffer.encode_string(5, &self.compilation_time, false);
        buffer.encode_string(6, &self.model, false);
        buffer.encode_bool(7, self.has_deep_sleep, false);
        buffer.encode_string(8, &self.project_name, false);
        buffer.encode_string(9, &self.project_version, false);
        buffer.encode_uint32(10, self.webserver_port, false);
        buffer.encode_string(12, &self.manufacturer, false);
        buffer.encode_string(13, &self.friendly_name, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_bool_field(total_size, 1, self.uses_password, false);
        ProtoSize::add_string_field(total_size, 1, &self.name, false);
        ProtoSize::add_string_field(total_size, 1, &self.mac_address, false);
        ProtoSize::add_string_field(total_size, 1, &self.esphome_version, false);
        ProtoSize::add_string_field(total_size, 1, &self.compilation_time, false);
        ProtoSize::add_string_field(total_size, 1, &self.model, false);
        ProtoSize::add_bool_field(total_size, 1, self.has_deep_sleep, false);
        ProtoSize::add_string_field(total_size, 1, &self.project_name, false);
        ProtoSize::add_string_field(total_size, 1, &self.project_version, false);
        ProtoSize::add_uint32_field(total_size, 1, self.webserver_port, false);
        ProtoSize::add_string_field(total_size, 1, &self.manufacturer, false);
        ProtoSize::add_string_field(total_size, 1, &self.friendly_name, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("DeviceInfoResponse {\n");
        dump_field(out, "uses_password", YesNo(self.uses_password));
        dump_field(out, "name", Quoted(&self.name));
        dump_field(out, "mac_address", Quoted(&self.mac_address));
        dump_field(out, "esphome_version", Quoted(&self.esphome_version));
        dump_field(out, "compilation_time", Quoted(&self.compilation_time));
        dump_field(out, "model", Quoted(&self.model));
        dump_field(out, "has_deep_sleep", YesNo(self.has_deep_sleep));
        dump_field(out, "project_name", Quoted(&self.project_name));
        dump_field(out, "project_version", Quoted(&self.project_version));
        dump_field(out, "webserver_port", self.webserver_port);
        dump_field(out, "manufacturer", Quoted(&self.manufacturer));
        dump_field(out, "friendly_name", Quoted(&self.friendly_name));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntitiesRequest {}

impl ServiceMessage for ListEntitiesRequest {
    const MESSAGE_TYPE: u16 = 11;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "list_entities_request";
}

impl ProtoDecode for ListEntitiesRequest {}

impl ProtoMessage for ListEntitiesRequest {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("ListEntitiesRequest {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntitiesDoneResponse {}

impl ServiceMessage for ListEntitiesDoneResponse {
    const MESSAGE_TYPE: u16 = 19;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "list_entities_done_response";
}

impl ProtoDecode for ListEntitiesDoneResponse {}

impl ProtoMessage for ListEntitiesDoneResponse {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("ListEntitiesDoneResponse {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeStatesRequest {}

impl ServiceMessage for SubscribeStatesRequest {
    const MESSAGE_TYPE: u16 = 20;
    const ESTIMATED_SIZE: u16 = 0;
    const MESSAGE_NAME: &'static str = "subscribe_states_request";
}

impl ProtoDecode for SubscribeStatesRequest {}

impl ProtoMessage for SubscribeStatesRequest {
    fn encode(&self, _buffer: &mut ProtoWriteBuffer) {}

    fn calculate_size(&self, _total_size: &mut u32) {}

    fn dump_to(&self, out: &mut String) {
        out.push_str("SubscribeStatesRequest {}");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntitiesBinarySensorResponse {
    pub base: InfoResponseProtoMessage,
    pub device_class: String,
    pub is_status_binary_sensor: bool,
}

impl AsRef<InfoResponseProtoMessage> for ListEntitiesBinarySensorResponse {
    fn as_ref(&self) -> &InfoResponseProtoMessage {
        &self.base
    }
}

impl AsMut<InfoResponseProtoMessage> for ListEntitiesBinarySensorResponse {
    fn as_mut(&mut self) -> &mut InfoResponseProtoMessage {
        &mut self.base
    }
}

impl ServiceMessage for ListEntitiesBinarySensorResponse {
    const MESSAGE_TYPE: u16 = 12;
    const ESTIMATED_SIZE: u16 = 56;
    const MESSAGE_NAME: &'static str = "list_entities_binary_sensor_response";
}

impl ProtoDecode for ListEntitiesBinarySensorResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            6 => self.is_status_binary_sensor = value.as_bool(),
            7 => self.base.disabled_by_default = value.as_bool(),
            9 => self.base.entity_category = value.as_enum(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.base.object_id = value.as_string(),
            3 => self.base.name = value.as_string(),
            4 => self.base.unique_id = value.as_string(),
            5 => self.device_class = value.as_string(),
            8 => self.base.icon = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            2 => self.base.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for ListEntitiesBinarySensorResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_string(1, &self.base.object_id, false);
        buffer.encode_fixed32(2, self.base.key, false);
        buffer.encode_string(3, &self.base.name, false);
        buffer.encode_string(4, &self.base.unique_id, false);
        buffer.encode_string(5, &self.device_class, false);
        buffer.encode_bool(6, self.is_status_binary_sensor, false);
        buffer.encode_bool(7, self.base.disabled_by_default, false);
        buffer.encode_string(8, &self.base.icon, false);
        buffer.encode_enum(9, self.base.entity_category, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_string_field(total_size, 1, &self.base.object_id, false);
        ProtoSize::add_fixed32_field(total_size, 1, self.base.key, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.name, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.unique_id, false);
        ProtoSize::add_string_field(total_size, 1, &self.device_class, false);
        ProtoSize::add_bool_field(total_size, 1, self.is_status_binary_sensor, false);
        ProtoSize::add_bool_field(total_size, 1, self.base.disabled_by_default, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.icon, false);
        ProtoSize::add_enum_field(total_size, 1, self.base.entity_category, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ListEntitiesBinarySensorResponse {\n");
        dump_field(out, "object_id", Quoted(&self.base.object_id));
        dump_field(out, "key", self.base.key);
        dump_field(out, "name", Quoted(&self.base.name));
        dump_field(out, "unique_id", Quoted(&self.base.unique_id));
        dump_field(out, "device_class", Quoted(&self.device_class));
        dump_field(
            out,
            "is_status_binary_sensor",
            YesNo(self.is_status_binary_sensor),
        );
        dump_field(
            out,
            "disabled_by_default",
            YesNo(self.base.disabled_by_default),
        );
        dump_field(out, "icon", Quoted(&self.base.icon));
        dump_field(out, "entity_category", self.base.entity_category.as_str());
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinarySensorStateResponse {
    pub base: StateResponseProtoMessage,
    pub state: bool,
}

impl AsRef<StateResponseProtoMessage> for BinarySensorStateResponse {
    fn as_ref(&self) -> &StateResponseProtoMessage {
        &self.base
    }
}

impl AsMut<StateResponseProtoMessage> for BinarySensorStateResponse {
    fn as_mut(&mut self) -> &mut StateResponseProtoMessage {
        &mut self.base
    }
}

impl ServiceMessage for BinarySensorStateResponse {
    const MESSAGE_TYPE: u16 = 21;
    const ESTIMATED_SIZE: u16 = 9;
    const MESSAGE_NAME: &'static str = "binary_sensor_state_response";
}

impl ProtoDecode for BinarySensorStateResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            2 => self.state = value.as_bool(),
            3 => self.base.missing_state = value.as_bool(),
            _ => return false,
        }
        true
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            1 => self.base.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for BinarySensorStateResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_fixed32(1, self.base.key, false);
        buffer.encode_bool(2, self.state, false);
        buffer.encode_bool(3, self.base.missing_state, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_fixed32_field(total_size, 1, self.base.key, false);
        ProtoSize::add_bool_field(total_size, 1, self.state, false);
        ProtoSize::add_bool_field(total_size, 1, self.base.missing_state, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("BinarySensorStateResponse {\n");
        dump_field(out, "key", self.base.key);
        dump_field(out, "state", YesNo(self.state));
        dump_field(out, "missing_state", YesNo(self.base.missing_state));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntitiesSensorResponse {
    pub base: InfoResponseProtoMessage,
    pub unit_of_measurement: String,
    pub accuracy_decimals: i32,
    pub force_update: bool,
    pub device_class: String,
    pub state_class: enums::SensorStateClass,
}

impl AsRef<InfoResponseProtoMessage> for ListEntitiesSensorResponse {
    fn as_ref(&self) -> &InfoResponseProtoMessage {
        &self.base
    }
}

impl AsMut<InfoResponseProtoMessage> for ListEntitiesSensorResponse {
    fn as_mut(&mut self) -> &mut InfoResponseProtoMessage {
        &mut self.base
    }
}

impl ServiceMessage for ListEntitiesSensorResponse {
    const MESSAGE_TYPE: u16 = 16;
    const ESTIMATED_SIZE: u16 = 71;
    const MESSAGE_NAME: &'static str = "list_entities_sensor_response";
}

impl ProtoDecode for ListEntitiesSensorResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            7 => self.accuracy_decimals = value.as_int32(),
            8 => self.force_update = value.as_bool(),
            10 => self.state_class = value.as_enum(),
            12 => self.base.disabled_by_default = value.as_bool(),
            13 => self.base.entity_category = value.as_enum(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.base.object_id = value.as_string(),
            3 => self.base.name = value.as_string(),
            4 => self.base.unique_id = value.as_string(),
            5 => self.base.icon = value.as_string(),
            6 => self.unit_of_measurement = value.as_string(),
            9 => self.device_class = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            2 => self.base.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for ListEntitiesSensorResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_string(1, &self.base.object_id, false);
        buffer.encode_fixed32(2, self.base.key, false);
        buffer.encode_string(3, &self.base.name, false);
        buffer.encode_string(4, &self.base.unique_id, false);
        buffer.encode_string(5, &self.base.icon, false);
        buffer.encode_string(6, &self.unit_of_measurement, false);
        buffer.encode_int32(7, self.accuracy_decimals, false);
        buffer.encode_bool(8, self.force_update, false);
        buffer.encode_string(9, &self.device_class, false);
        buffer.encode_enum(10, self.state_class, false);
        buffer.encode_bool(12, self.base.disabled_by_default, false);
        buffer.encode_enum(13, self.base.entity_category, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_string_field(total_size, 1, &self.base.object_id, false);
        ProtoSize::add_fixed32_field(total_size, 1, self.base.key, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.name, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.unique_id, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.icon, false);
        ProtoSize::add_string_field(total_size, 1, &self.unit_of_measurement, false);
        ProtoSize::add_int32_field(total_size, 1, self.accuracy_decimals, false);
        ProtoSize::add_bool_field(total_size, 1, self.force_update, false);
        ProtoSize::add_string_field(total_size, 1, &self.device_class, false);
        ProtoSize::add_enum_field(total_size, 1, self.state_class, false);
        ProtoSize::add_bool_field(total_size, 1, self.base.disabled_by_default, false);
        ProtoSize::add_enum_field(total_size, 1, self.base.entity_category, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ListEntitiesSensorResponse {\n");
        dump_field(out, "object_id", Quoted(&self.base.object_id));
        dump_field(out, "key", self.base.key);
        dump_field(out, "name", Quoted(&self.base.name));
        dump_field(out, "unique_id", Quoted(&self.base.unique_id));
        dump_field(out, "icon", Quoted(&self.base.icon));
        dump_field(
            out,
            "unit_of_measurement",
            Quoted(&self.unit_of_measurement),
        );
        dump_field(out, "accuracy_decimals", self.accuracy_decimals);
        dump_field(out, "force_update", YesNo(self.force_update));
        dump_field(out, "device_class", Quoted(&self.device_class));
        dump_field(out, "state_class", self.state_class.as_str());
        dump_field(
            out,
            "disabled_by_default",
            YesNo(self.base.disabled_by_default),
        );
        dump_field(out, "entity_category", self.base.entity_category.as_str());
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorStateResponse {
    pub base: StateResponseProtoMessage,
    pub state: f32,
}

impl AsRef<StateResponseProtoMessage> for SensorStateResponse {
    fn as_ref(&self) -> &StateResponseProtoMessage {
        &self.base
    }
}

impl AsMut<StateResponseProtoMessage> for SensorStateResponse {
    fn as_mut(&mut self) -> &mut StateResponseProtoMessage {
        &mut self.base
    }
}

impl ServiceMessage for SensorStateResponse {
    const MESSAGE_TYPE: u16 = 25;
    const ESTIMATED_SIZE: u16 = 12;
    const MESSAGE_NAME: &'static str = "sensor_state_response";
}

impl ProtoDecode for SensorStateResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            3 => self.base.missing_state = value.as_bool(),
            _ => return false,
        }
        true
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            1 => self.base.key = value.as_fixed32(),
            2 => self.state = value.as_float(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for SensorStateResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_fixed32(1, self.base.key, false);
        buffer.encode_float(2, self.state, false);
        buffer.encode_bool(3, self.base.missing_state, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_fixed32_field(total_size, 1, self.base.key, false);
        ProtoSize::add_float_field(total_size, 1, self.state, false);
        ProtoSize::add_bool_field(total_size, 1, self.base.missing_state, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("SensorStateResponse {\n");
        dump_field(out, "key", self.base.key);
        dump_field(out, "state", self.state);
        dump_field(out, "missing_state", YesNo(self.base.missing_state));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchCommandRequest {
    pub key: u32,
    pub state: bool,
}

impl ServiceMessage for SwitchCommandRequest {
    const MESSAGE_TYPE: u16 = 33;
    const ESTIMATED_SIZE: u16 = 7;
    const MESSAGE_NAME: &'static str = "switch_command_request";
}

impl ProtoDecode for SwitchCommandRequest {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            2 => self.state = value.as_bool(),
            _ => return false,
        }
        true
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            1 => self.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for SwitchCommandRequest {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_fixed32(1, self.key, false);
        buffer.encode_bool(2, self.state, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_fixed32_field(total_size, 1, self.key, false);
        ProtoSize::add_bool_field(total_size, 1, self.state, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("SwitchCommandRequest {\n");
        dump_field(out, "key", self.key);
        dump_field(out, "state", YesNo(self.state));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeLogsRequest {
    pub level: enums::LogLevel,
    pub dump_config: bool,
}

impl ServiceMessage for SubscribeLogsRequest {
    const MESSAGE_TYPE: u16 = 28;
    const ESTIMATED_SIZE: u16 = 4;
    const MESSAGE_NAME: &'static str = "subscribe_logs_request";
}

impl ProtoDecode for SubscribeLogsRequest {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1 => self.level = value.as_enum(),
            2 => self.dump_config = value.as_bool(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for SubscribeLogsRequest {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_enum(1, self.level, false);
        buffer.encode_bool(2, self.dump_config, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_enum_field(total_size, 1, self.level, false);
        ProtoSize::add_bool_field(total_size, 1, self.dump_config, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("SubscribeLogsRequest {\n");
        dump_field(out, "level", self.level.as_str());
        dump_field(out, "dump_config", YesNo(self.dump_config));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeLogsResponse {
    pub level: enums::LogLevel,
    pub message: Vec<u8>,
    pub send_failed: bool,
}

impl ServiceMessage for SubscribeLogsResponse {
    const MESSAGE_TYPE: u16 = 29;
    const ESTIMATED_SIZE: u16 = 13;
    const MESSAGE_NAME: &'static str = "subscribe_logs_response";
    const LOG: bool = false;
}

impl ProtoDecode for SubscribeLogsResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1 => self.level = value.as_enum(),
            4 => self.send_failed = value.as_bool(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            3 => self.message = value.as_bytes(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ProtoMessage for SubscribeLogsResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_enum(1, self.level, false);
        buffer.encode_bytes(3, &self.message, false);
        buffer.encode_bool(4, self.send_failed, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_enum_field(total_size, 1, self.level, false);
        ProtoSize::add_bytes_field(total_size, 1, &self.message, false);
        ProtoSize::add_bool_field(total_size, 1, self.send_failed, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("SubscribeLogsResponse {\n");
        dump_field(out, "level", self.level.as_str());
        dump_field(out, "message", Hex(&self.message));
        dump_field(out, "send_failed", YesNo(self.send_failed));
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntitiesServicesArgument {
    pub name: String,
    pub r#type: enums::ServiceArgType,
}

impl ProtoDecode for ListEntitiesServicesArgument {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            2 => self.r#type = value.as_enum(),
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

impl ProtoMessage for ListEntitiesServicesArgument {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_string(1, &self.name, false);
        buffer.encode_enum(2, self.r#type, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_string_field(total_size, 1, &self.name, false);
        ProtoSize::add_enum_field(total_size, 1, self.r#type, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ListEntitiesServicesArgument {\n");
        dump_field(out, "name", Quoted(&self.name));
        dump_field(out, "type", self.r#type.as_str());
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntitiesServicesResponse {
    pub name: String,
    pub key: u32,
    pub args: Vec<ListEntitiesServicesArgument>,
}

impl ServiceMessage for ListEntitiesServicesResponse {
    const MESSAGE_TYPE: u16 = 41;
    const ESTIMATED_SIZE: u16 = 48;
    const MESSAGE_NAME: &'static str = "list_entities_services_response";
}

impl ProtoDecode for ListEntitiesServicesResponse {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.name = value.as_string(),
            3 => self.args.push(value.as_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            2 => self.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for ListEntitiesServicesResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_string(1, &self.name, false);
        buffer.encode_fixed32(2, self.key, false);
        for it in &self.args {
            buffer.encode_message(3, it, true);
        }
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_string_field(total_size, 1, &self.name, false);
        ProtoSize::add_fixed32_field(total_size, 1, self.key, false);
        for it in &self.args {
            ProtoSize::add_message_object(total_size, 1, it, true);
        }
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ListEntitiesServicesResponse {\n");
        dump_field(out, "name", Quoted(&self.name));
        dump_field(out, "key", self.key);
        for it in &self.args {
            dump_message(out, "args", it);
        }
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecuteServiceArgument {
    pub bool_: bool,
    pub legacy_int: i32,
    pub float_: f32,
    pub string_: String,
    pub int_: i32,
    pub bool_array: Vec<bool>,
    pub int_array: Vec<i32>,
    pub float_array: Vec<f32>,
    pub string_array: Vec<String>,
}

impl ProtoDecode for ExecuteServiceArgument {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            1 => self.bool_ = value.as_bool(),
            2 => self.legacy_int = value.as_int32(),
            5 => self.int_ = value.as_sint32(),
            6 => self.bool_array.push(value.as_bool()),
            7 => self.int_array.push(value.as_sint32()),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            4 => self.string_ = value.as_string(),
            9 => self.string_array.push(value.as_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            3 => self.float_ = value.as_float(),
            8 => self.float_array.push(value.as_float()),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for ExecuteServiceArgument {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_bool(1, self.bool_, false);
        buffer.encode_int32(2, self.legacy_int, false);
        buffer.encode_float(3, self.float_, false);
        buffer.encode_string(4, &self.string_, false);
        buffer.encode_sint32(5, self.int_, false);
        for it in &self.bool_array {
            buffer.encode_bool(6, *it, true);
        }
        for it in &self.int_array {
            buffer.encode_sint32(7, *it, true);
        }
        for it in &self.float_array {
            buffer.encode_float(8, *it, true);
        }
        for it in &self.string_array {
            buffer.encode_string(9, it, true);
        }
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_bool_field(total_size, 1, self.bool_, false);
        ProtoSize::add_int32_field(total_size, 1, self.legacy_int, false);
        ProtoSize::add_float_field(total_size, 1, self.float_, false);
        ProtoSize::add_string_field(total_size, 1, &self.string_, false);
        ProtoSize::add_sint32_field(total_size, 1, self.int_, false);
        for it in &self.bool_array {
            ProtoSize::add_bool_field(total_size, 1, *it, true);
        }
        for it in &self.int_array {
            ProtoSize::add_sint32_field(total_size, 1, *it, true);
        }
        for it in &self.float_array {
            ProtoSize::add_float_field(total_size, 1, *it, true);
        }
        for it in &self.string_array {
            ProtoSize::add_string_field(total_size, 1, it, true);
        }
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ExecuteServiceArgument {\n");
        dump_field(out, "bool_", YesNo(self.bool_));
        dump_field(out, "legacy_int", self.legacy_int);
        dump_field(out, "float_", self.float_);
        dump_field(out, "string_", Quoted(&self.string_));
        dump_field(out, "int_", self.int_);
        for it in &self.bool_array {
            dump_field(out, "bool_array", YesNo(*it));
        }
        for it in &self.int_array {
            dump_field(out, "int_array", it);
        }
        for it in &self.float_array {
            dump_field(out, "float_array", it);
        }
        for it in &self.string_array {
            dump_field(out, "string_array", Quoted(it));
        }
        out.push('}');
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecuteServiceRequest {
    pub key: u32,
    pub args: Vec<ExecuteServiceArgument>,
}

impl ServiceMessage for ExecuteServiceRequest {
    const MESSAGE_TYPE: u16 = 42;
    const ESTIMATED_SIZE: u16 = 39;
    const MESSAGE_NAME: &'static str = "execute_service_request";
}

impl ProtoDecode for ExecuteServiceRequest {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            2 => self.args.push(value.as_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            1 => self.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

impl ProtoMessage for ExecuteServiceRequest {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_fixed32(1, self.key, false);
        for it in &self.args {
            buffer.encode_message(2, it, true);
        }
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_fixed32_field(total_size, 1, self.key, false);
        for it in &self.args {
            ProtoSize::add_message_object(total_size, 1, it, true);
        }
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ExecuteServiceRequest {\n");
        dump_field(out, "key", self.key);
        for it in &self.args {
            dump_message(out, "args", it);
        }
        out.push('}');
    }
}

#[cfg(feature = "select")]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntitiesSelectResponse {
    pub base: InfoResponseProtoMessage,
    pub options: Vec<String>,
}

#[cfg(feature = "select")]
impl AsRef<InfoResponseProtoMessage> for ListEntitiesSelectResponse {
    fn as_ref(&self) -> &InfoResponseProtoMessage {
        &self.base
    }
}

#[cfg(feature = "select")]
impl AsMut<InfoResponseProtoMessage> for ListEntitiesSelectResponse {
    fn as_mut(&mut self) -> &mut InfoResponseProtoMessage {
        &mut self.base
    }
}

#[cfg(feature = "select")]
impl ServiceMessage for ListEntitiesSelectResponse {
    const MESSAGE_TYPE: u16 = 52;
    const ESTIMATED_SIZE: u16 = 63;
    const MESSAGE_NAME: &'static str = "list_entities_select_response";
}

#[cfg(feature = "select")]
impl ProtoDecode for ListEntitiesSelectResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            7 => self.base.disabled_by_default = value.as_bool(),
            8 => self.base.entity_category = value.as_enum(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            1 => self.base.object_id = value.as_string(),
            3 => self.base.name = value.as_string(),
            4 => self.base.unique_id = value.as_string(),
            5 => self.base.icon = value.as_string(),
            6 => self.options.push(value.as_string()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            2 => self.base.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

#[cfg(feature = "select")]
impl ProtoMessage for ListEntitiesSelectResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_string(1, &self.base.object_id, false);
        buffer.encode_fixed32(2, self.base.key, false);
        buffer.encode_string(3, &self.base.name, false);
        buffer.encode_string(4, &self.base.unique_id, false);
        buffer.encode_string(5, &self.base.icon, false);
        for it in &self.options {
            buffer.encode_string(6, it, true);
        }
        buffer.encode_bool(7, self.base.disabled_by_default, false);
        buffer.encode_enum(8, self.base.entity_category, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_string_field(total_size, 1, &self.base.object_id, false);
        ProtoSize::add_fixed32_field(total_size, 1, self.base.key, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.name, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.unique_id, false);
        ProtoSize::add_string_field(total_size, 1, &self.base.icon, false);
        for it in &self.options {
            ProtoSize::add_string_field(total_size, 1, it, true);
        }
        ProtoSize::add_bool_field(total_size, 1, self.base.disabled_by_default, false);
        ProtoSize::add_enum_field(total_size, 1, self.base.entity_category, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("ListEntitiesSelectResponse {\n");
        dump_field(out, "object_id", Quoted(&self.base.object_id));
        dump_field(out, "key", self.base.key);
        dump_field(out, "name", Quoted(&self.base.name));
        dump_field(out, "unique_id", Quoted(&self.base.unique_id));
        dump_field(out, "icon", Quoted(&self.base.icon));
        for it in &self.options {
            dump_field(out, "options", Quoted(it));
        }
        dump_field(
            out,
            "disabled_by_default",
            YesNo(self.base.disabled_by_default),
        );
        dump_field(out, "entity_category", self.base.entity_category.as_str());
        out.push('}');
    }
}

#[cfg(feature = "select")]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectStateResponse {
    pub base: StateResponseProtoMessage,
    pub state: String,
}

#[cfg(feature = "select")]
impl AsRef<StateResponseProtoMessage> for SelectStateResponse {
    fn as_ref(&self) -> &StateResponseProtoMessage {
        &self.base
    }
}

#[cfg(feature = "select")]
impl AsMut<StateResponseProtoMessage> for SelectStateResponse {
    fn as_mut(&mut self) -> &mut StateResponseProtoMessage {
        &mut self.base
    }
}

#[cfg(feature = "select")]
impl ServiceMessage for SelectStateResponse {
    const MESSAGE_TYPE: u16 = 53;
    const ESTIMATED_SIZE: u16 = 16;
    const MESSAGE_NAME: &'static str = "select_state_response";
}

#[cfg(feature = "select")]
impl ProtoDecode for SelectStateResponse {
    fn decode_varint(&mut self, field_id: u32, value: ProtoVarInt) -> bool {
        match field_id {
            3 => self.base.missing_state = value.as_bool(),
            _ => return false,
        }
        true
    }

    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            2 => self.state = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            1 => self.base.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

#[cfg(feature = "select")]
impl ProtoMessage for SelectStateResponse {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_fixed32(1, self.base.key, false);
        buffer.encode_string(2, &self.state, false);
        buffer.encode_bool(3, self.base.missing_state, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_fixed32_field(total_size, 1, self.base.key, false);
        ProtoSize::add_string_field(total_size, 1, &self.state, false);
        ProtoSize::add_bool_field(total_size, 1, self.base.missing_state, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("SelectStateResponse {\n");
        dump_field(out, "key", self.base.key);
        dump_field(out, "state", Quoted(&self.state));
        dump_field(out, "missing_state", YesNo(self.base.missing_state));
        out.push('}');
    }
}

#[cfg(feature = "select")]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectCommandRequest {
    pub key: u32,
    pub state: String,
}

#[cfg(feature = "select")]
impl ServiceMessage for SelectCommandRequest {
    const MESSAGE_TYPE: u16 = 54;
    const ESTIMATED_SIZE: u16 = 14;
    const MESSAGE_NAME: &'static str = "select_command_request";
}

#[cfg(feature = "select")]
impl ProtoDecode for SelectCommandRequest {
    fn decode_length(&mut self, field_id: u32, value: ProtoLengthDelimited<'_>) -> Result<bool> {
        match field_id {
            2 => self.state = value.as_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn decode_32bit(&mut self, field_id: u32, value: Proto32Bit) -> bool {
        match field_id {
            1 => self.key = value.as_fixed32(),
            _ => return false,
        }
        true
    }
}

#[cfg(feature = "select")]
impl ProtoMessage for SelectCommandRequest {
    fn encode(&self, buffer: &mut ProtoWriteBuffer) {
        buffer.encode_fixed32(1, self.key, false);
        buffer.encode_string(2, &self.state, false);
    }

    fn calculate_size(&self, total_size: &mut u32) {
        ProtoSize::add_fixed32_field(total_size, 1, self.key, false);
        ProtoSize::add_string_field(total_size, 1, &self.state, false);
    }

    fn dump_to(&self, out: &mut String) {
        out.push_str("SelectCommandRequest {\n");
        dump_field(out, "key", self.key);
        dump_field(out, "state", Quoted(&self.state));
        out.push('}');
    }
}
