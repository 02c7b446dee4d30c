// This file was automatically generated with a tool.
// See src/bin/api_protobuf.rs

#![allow(unused_imports)]

use crate::error::{ApiError, Result};
use crate::proto::{ProtoDecode, ProtoMessage};
use crate::service::ProtoService;

use super::api_pb2::*;

/// Receive side of a connection: one hook per inbound message.
pub trait ApiServerConnectionBase: ProtoService {
    fn on_hello_request(&mut self, _value: &HelloRequest) {}

    fn on_connect_request(&mut self, _value: &ConnectRequest) {}

    fn on_disconnect_request(&mut self, _value: &DisconnectRequest) {}

    fn on_disconnect_response(&mut self, _value: &DisconnectResponse) {}

    fn on_ping_request(&mut self, _value: &PingRequest) {}

    fn on_ping_response(&mut self, _value: &PingResponse) {}

    fn on_device_info_request(&mut self, _value: &DeviceInfoRequest) {}

    fn on_list_entities_request(&mut self, _value: &ListEntitiesRequest) {}

    fn on_subscribe_states_request(&mut self, _value: &SubscribeStatesRequest) {}

    fn on_subscribe_logs_request(&mut self, _value: &SubscribeLogsRequest) {}

    fn on_switch_command_request(&mut self, _value: &SwitchCommandRequest) {}

    fn on_execute_service_request(&mut self, _value: &ExecuteServiceRequest) {}

    #[cfg(feature = "select")]
    fn on_select_command_request(&mut self, _value: &SelectCommandRequest) {}

    /// Decode `msg_data` as message `msg_type` and call its hook.
    fn read_message(&mut self, msg_type: u16, msg_data: &[u8]) -> Result<()> {
        match msg_type {
            1 => {
                let mut msg = HelloRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_hello_request: {}", msg.dump());
                self.on_hello_request(&msg);
            }
            3 => {
                let mut msg = ConnectRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_connect_request: {}", msg.dump());
                self.on_connect_request(&msg);
            }
            5 => {
                let mut msg = DisconnectRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_disconnect_request: {}", msg.dump());
                self.on_disconnect_request(&msg);
            }
            6 => {
                let mut msg = DisconnectResponse::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_disconnect_response: {}", msg.dump());
                self.on_disconnect_response(&msg);
            }
            7 => {
                let mut msg = PingRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_ping_request: {}", msg.dump());
                self.on_ping_request(&msg);
            }
            8 => {
                let mut msg = PingResponse::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_ping_response: {}", msg.dump());
                self.on_ping_response(&msg);
            }
            9 => {
                let mut msg = DeviceInfoRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_device_info_request: {}", msg.dump());
                self.on_device_info_request(&msg);
            }
            11 => {
                let mut msg = ListEntitiesRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_list_entities_request: {}", msg.dump());
                self.on_list_entities_request(&msg);
            }
            20 => {
                let mut msg = SubscribeStatesRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_subscribe_states_request: {}", msg.dump());
                self.on_subscribe_states_request(&msg);
            }
            28 => {
                let mut msg = SubscribeLogsRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_subscribe_logs_request: {}", msg.dump());
                self.on_subscribe_logs_request(&msg);
            }
            33 => {
                let mut msg = SwitchCommandRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_switch_command_request: {}", msg.dump());
                self.on_switch_command_request(&msg);
            }
            42 => {
                let mut msg = ExecuteServiceRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_execute_service_request: {}", msg.dump());
                self.on_execute_service_request(&msg);
            }
            #[cfg(feature = "select")]
            54 => {
                let mut msg = SelectCommandRequest::default();
                msg.decode(msg_data)?;
                tracing::trace!(target: "api.service", "on_select_command_request: {}", msg.dump());
                self.on_select_command_request(&msg);
            }
            _ => return Err(ApiError::UnknownMessageType(msg_type)),
        }
        Ok(())
    }
}

/// Request handlers. Implementors get the dispatch hooks through the
/// blanket `ApiServerConnectionBase` impl.
pub trait ApiServerConnection: ProtoService {
    fn hello(&mut self, msg: &HelloRequest) -> HelloResponse;

    fn connect(&mut self, msg: &ConnectRequest) -> ConnectResponse;

    fn disconnect(&mut self, msg: &DisconnectRequest) -> DisconnectResponse;

    fn ping(&mut self, msg: &PingRequest) -> PingResponse;

    fn device_info(&mut self, msg: &DeviceInfoRequest) -> DeviceInfoResponse;

    fn list_entities(&mut self, msg: &ListEntitiesRequest);

    fn subscribe_states(&mut self, msg: &SubscribeStatesRequest);

    fn subscribe_logs(&mut self, msg: &SubscribeLogsRequest);

    fn switch_command(&mut self, msg: &SwitchCommandRequest);

    #[cfg(feature = "select")]
    fn select_command(&mut self, msg: &SelectCommandRequest);

    fn execute_service(&mut self, msg: &ExecuteServiceRequest);

    fn on_disconnect_response(&mut self, _value: &DisconnectResponse) {}

    fn on_ping_response(&mut self, _value: &PingResponse) {}
}

impl<T: ApiServerConnection> ApiServerConnectionBase for T {
    fn on_hello_request(&mut self, msg: &HelloRequest) {
        let ret = self.hello(msg);
        if let Err(err) = self.send_message(&ret) {
            tracing::warn!(target: "api.service", "Failed to send hello_response: {}", err);
            self.on_fatal_error();
        }
    }

    fn on_connect_request(&mut self, msg: &ConnectRequest) {
        let ret = self.connect(msg);
        if let Err(err) = self.send_message(&ret) {
            tracing::warn!(target: "api.service", "Failed to send connect_response: {}", err);
            self.on_fatal_error();
        }
    }

    fn on_disconnect_request(&mut self, msg: &DisconnectRequest) {
        let ret = self.disconnect(msg);
        if let Err(err) = self.send_message(&ret) {
            tracing::warn!(target: "api.service", "Failed to send disconnect_response: {}", err);
            self.on_fatal_error();
        }
    }

    fn on_ping_request(&mut self, msg: &PingRequest) {
        let ret = self.ping(msg);
        if let Err(err) = self.send_message(&ret) {
            tracing::warn!(target: "api.service", "Failed to send ping_response: {}", err);
            self.on_fatal_error();
        }
    }

    fn on_device_info_request(&mut self, msg: &DeviceInfoRequest) {
        if !self.is_connection_setup() {
            self.on_no_setup_connection();
            return;
        }
        let ret = self.device_info(msg);
        if let Err(err) = self.send_message(&ret) {
            tracing::warn!(target: "api.service", "Failed to send device_info_response: {}", err);
            self.on_fatal_error();
        }
    }

    fn on_list_entities_request(&mut self, msg: &ListEntitiesRequest) {
        if !self.is_connection_setup() {
            self.on_no_setup_connection();
            return;
        }
        if !self.is_authenticated() {
            self.on_unauthenticated_access();
            return;
        }
        self.list_entities(msg);
    }

    fn on_subscribe_states_request(&mut self, msg: &SubscribeStatesRequest) {
        if !self.is_connection_setup() {
            self.on_no_setup_connection();
            return;
        }
        if !self.is_authenticated() {
            self.on_unauthenticated_access();
            return;
        }
        self.subscribe_states(msg);
    }

    fn on_subscribe_logs_request(&mut self, msg: &SubscribeLogsRequest) {
        if !self.is_connection_setup() {
            self.on_no_setup_connection();
            return;
        }
        if !self.is_authenticated() {
            self.on_unauthenticated_access();
            return;
        }
        self.subscribe_logs(msg);
    }

    fn on_switch_command_request(&mut self, msg: &SwitchCommandRequest) {
        if !self.is_connection_setup() {
            self.on_no_setup_connection();
            return;
        }
        if !self.is_authenticated() {
            self.on_unauthenticated_access();
            return;
        }
        self.switch_command(msg);
    }

    #[cfg(feature = "select")]
    fn on_select_command_request(&mut self, msg: &SelectCommandRequest) {
        if !self.is_connection_setup() {
            self.on_no_setup_connection();
            return;
        }
        if !self.is_authenticated() {
            self.on_unauthenticated_access();
            return;
        }
        self.select_command(msg);
    }

    fn on_execute_service_request(&mut self, msg: &ExecuteServiceRequest) {
        if !self.is_connection_setup() {
            self.on_no_setup_connection();
            return;
        }
        if !self.is_authenticated() {
            self.on_unauthenticated_access();
            return;
        }
        self.execute_service(msg);
    }

    fn on_disconnect_response(&mut self, value: &DisconnectResponse) {
        ApiServerConnection::on_disconnect_response(self, value);
    }

    fn on_ping_response(&mut self, value: &PingResponse) {
        ApiServerConnection::on_ping_response(self, value);
    }
}
