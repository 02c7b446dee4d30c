//! Device-side API connection.
//!
//! [`ApiConnection`] implements the generated [`ApiServerConnection`] handler
//! trait and therefore receives its dispatch hooks through the blanket
//! [`ApiServerConnectionBase`] impl. [`ApiConnection::serve`] reads frames
//! from the socket and hands them to `read_message`; replies travel through
//! the writer task.
//!
//! Entity commands are not acted on here. They are forwarded to the device
//! logic as [`EntityCommand`] values over an mpsc channel.

use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::api::enums::LogLevel;
use crate::api::*;
use crate::error::{ApiError, Result};
use crate::proto::ProtoWriteBuffer;
use crate::protocol::{FrameBuffer, DEFAULT_MAX_PAYLOAD_SIZE};
use crate::service::{ConnectionState, ProtoService};
use crate::writer::{OutboundFrame, WriterHandle};

/// API version announced in `HelloResponse`.
pub const API_VERSION_MAJOR: u32 = 1;
pub const API_VERSION_MINOR: u32 = 10;

const READ_BUFFER_SIZE: usize = 4 * 1024;

/// Identity and credentials a device reports to clients.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub name: String,
    pub friendly_name: String,
    pub server_info: String,
    pub mac_address: String,
    pub model: String,
    pub manufacturer: String,
    pub esphome_version: String,
    pub compilation_time: String,
    pub project_name: String,
    pub project_version: String,
    pub webserver_port: u32,
    pub has_deep_sleep: bool,
    /// `None` accepts every `ConnectRequest`.
    pub password: Option<String>,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            name: "esphome".to_string(),
            friendly_name: String::new(),
            server_info: concat!("esphome-api ", env!("CARGO_PKG_VERSION")).to_string(),
            mac_address: String::new(),
            model: String::new(),
            manufacturer: String::new(),
            esphome_version: env!("CARGO_PKG_VERSION").to_string(),
            compilation_time: String::new(),
            project_name: String::new(),
            project_version: String::new(),
            webserver_port: 0,
            has_deep_sleep: false,
            password: None,
        }
    }
}

/// An entity announced in reply to `ListEntitiesRequest`.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityInfo {
    BinarySensor(ListEntitiesBinarySensorResponse),
    Sensor(ListEntitiesSensorResponse),
    #[cfg(feature = "select")]
    Select(ListEntitiesSelectResponse),
    Service(ListEntitiesServicesResponse),
}

impl EntityInfo {
    pub fn key(&self) -> u32 {
        match self {
            EntityInfo::BinarySensor(info) => info.base.key,
            EntityInfo::Sensor(info) => info.base.key,
            #[cfg(feature = "select")]
            EntityInfo::Select(info) => info.base.key,
            EntityInfo::Service(info) => info.key,
        }
    }

    fn send<S: ProtoService>(&self, conn: &mut S) -> Result<()> {
        match self {
            EntityInfo::BinarySensor(info) => conn.send_message(info),
            EntityInfo::Sensor(info) => conn.send_message(info),
            #[cfg(feature = "select")]
            EntityInfo::Select(info) => conn.send_message(info),
            EntityInfo::Service(info) => conn.send_message(info),
        }
    }
}

/// A client request the device logic has to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityCommand {
    Switch(SwitchCommandRequest),
    #[cfg(feature = "select")]
    Select(SelectCommandRequest),
    ExecuteService(ExecuteServiceRequest),
}

/// What the client asked to be streamed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subscriptions {
    pub states: bool,
    /// Log level requested by `SubscribeLogsRequest`, if any.
    pub logs: Option<LogLevel>,
    pub dump_config: bool,
}

/// Requests refused by the setup/authentication gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateStats {
    pub no_setup: u32,
    pub unauthenticated: u32,
}

/// One client connection on the device side.
pub struct ApiConnection {
    device: Arc<DeviceInfo>,
    entities: Arc<Vec<EntityInfo>>,
    writer: WriterHandle,
    commands: Option<mpsc::Sender<EntityCommand>>,
    state: ConnectionState,
    client_info: String,
    subscriptions: Subscriptions,
    gate_stats: GateStats,
    max_payload_size: usize,
    /// Set once a disconnect was requested or acknowledged.
    pending_close: bool,
}

impl ApiConnection {
    pub fn new(device: Arc<DeviceInfo>, writer: WriterHandle) -> Self {
        Self {
            device,
            entities: Arc::new(Vec::new()),
            writer,
            commands: None,
            state: ConnectionState::default(),
            client_info: String::new(),
            subscriptions: Subscriptions::default(),
            gate_stats: GateStats::default(),
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            pending_close: false,
        }
    }

    /// Entities announced on `ListEntitiesRequest`.
    pub fn with_entities(mut self, entities: Arc<Vec<EntityInfo>>) -> Self {
        self.entities = entities;
        self
    }

    /// Channel receiving forwarded entity commands.
    pub fn with_commands(mut self, commands: mpsc::Sender<EntityCommand>) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.max_payload_size = max_payload_size;
        self
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// `client_info` from the client's `HelloRequest`.
    pub fn client_info(&self) -> &str {
        &self.client_info
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn gate_stats(&self) -> GateStats {
        self.gate_stats
    }

    /// Read frames from `reader` and dispatch them until the client
    /// disconnects, a fatal error occurs, or the stream ends.
    ///
    /// A malformed frame, an undecodable payload or an unknown message type
    /// tears the connection down and is returned as the error.
    pub async fn serve<R: AsyncRead + Unpin>(&mut self, mut reader: R) -> Result<()> {
        let mut frame_buffer = FrameBuffer::with_max_payload(self.max_payload_size);
        let mut buf = vec![0u8; READ_BUFFER_SIZE];

        loop {
            let n = match reader.read(&mut buf).await {
                Ok(0) => {
                    debug!("{}: connection closed by peer", self.peer_name());
                    self.state = ConnectionState::Disconnected;
                    return Ok(());
                }
                Ok(n) => n,
                Err(e) => {
                    self.on_fatal_error();
                    return Err(ApiError::Io(e));
                }
            };

            let frames = match frame_buffer.push(&buf[..n]) {
                Ok(frames) => frames,
                Err(e) => {
                    warn!("{}: bad frame: {}", self.peer_name(), e);
                    self.on_fatal_error();
                    return Err(e);
                }
            };

            for frame in frames {
                if let Err(e) = self.read_message(frame.message_type(), frame.payload()) {
                    warn!(
                        "{}: failed to handle message type {}: {}",
                        self.peer_name(),
                        frame.message_type(),
                        e
                    );
                    self.on_fatal_error();
                    return Err(e);
                }
                if self.state.is_closed() {
                    return Err(ApiError::ConnectionClosed);
                }
                if self.pending_close {
                    debug!("{}: disconnected", self.peer_name());
                    self.state = ConnectionState::Disconnected;
                    return Ok(());
                }
            }
        }
    }

    fn peer_name(&self) -> &str {
        if self.client_info.is_empty() {
            "client"
        } else {
            &self.client_info
        }
    }

    fn send_entities(&mut self) -> Result<()> {
        let entities = Arc::clone(&self.entities);
        for entity in entities.iter() {
            entity.send(self)?;
        }
        self.send_message(&ListEntitiesDoneResponse {})
    }

    fn forward(&mut self, command: EntityCommand) {
        let Some(commands) = &self.commands else {
            debug!("No command receiver, dropping {:?}", command);
            return;
        };
        if let Err(e) = commands.try_send(command) {
            warn!("{}: dropping entity command: {}", self.peer_name(), e);
        }
    }
}

impl ProtoService for ApiConnection {
    fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    fn is_connection_setup(&self) -> bool {
        self.state.is_connection_setup()
    }

    fn on_fatal_error(&mut self) {
        warn!("{}: fatal error, closing connection", self.peer_name());
        self.state = ConnectionState::Disconnected;
    }

    fn on_unauthenticated_access(&mut self) {
        self.gate_stats.unauthenticated += 1;
        debug!("{} requested access without authentication", self.peer_name());
    }

    fn on_no_setup_connection(&mut self) {
        self.gate_stats.no_setup += 1;
        debug!("{} requested access without full connection", self.peer_name());
    }

    fn send_buffer(&mut self, buffer: ProtoWriteBuffer, message_type: u16) -> Result<()> {
        let frame = OutboundFrame::for_message(message_type, buffer.into_bytes())?;
        self.writer.try_send(frame)
    }
}

impl ApiServerConnection for ApiConnection {
    fn hello(&mut self, msg: &HelloRequest) -> HelloResponse {
        self.client_info = msg.client_info.clone();
        info!(
            "{} connected (api {}.{})",
            self.peer_name(),
            msg.api_version_major,
            msg.api_version_minor
        );
        if self.state == ConnectionState::Handshake {
            self.state = ConnectionState::Connected;
        }

        HelloResponse {
            api_version_major: API_VERSION_MAJOR,
            api_version_minor: API_VERSION_MINOR,
            server_info: self.device.server_info.clone(),
            name: self.device.name.clone(),
        }
    }

    fn connect(&mut self, msg: &ConnectRequest) -> ConnectResponse {
        let accepted = match &self.device.password {
            Some(password) => *password == msg.password,
            None => true,
        };
        if accepted {
            debug!("{}: authenticated", self.peer_name());
            self.state = ConnectionState::Authenticated;
        } else {
            warn!("{}: invalid password", self.peer_name());
        }

        ConnectResponse {
            invalid_password: !accepted,
        }
    }

    fn disconnect(&mut self, _msg: &DisconnectRequest) -> DisconnectResponse {
        debug!("{} requested disconnect", self.peer_name());
        self.pending_close = true;
        DisconnectResponse {}
    }

    fn ping(&mut self, _msg: &PingRequest) -> PingResponse {
        PingResponse {}
    }

    fn device_info(&mut self, _msg: &DeviceInfoRequest) -> DeviceInfoResponse {
        let device = &self.device;
        DeviceInfoResponse {
            uses_password: device.password.is_some(),
            name: device.name.clone(),
            mac_address: device.mac_address.clone(),
            esphome_version: device.esphome_version.clone(),
            compilation_time: device.compilation_time.clone(),
            model: device.model.clone(),
            has_deep_sleep: device.has_deep_sleep,
            project_name: device.project_name.clone(),
            project_version: device.project_version.clone(),
            webserver_port: device.webserver_port,
            manufacturer: device.manufacturer.clone(),
            friendly_name: device.friendly_name.clone(),
        }
    }

    fn list_entities(&mut self, _msg: &ListEntitiesRequest) {
        if let Err(e) = self.send_entities() {
            warn!("{}: failed to list entities: {}", self.peer_name(), e);
            self.on_fatal_error();
        }
    }

    fn subscribe_states(&mut self, _msg: &SubscribeStatesRequest) {
        trace!("{} subscribed to states", self.peer_name());
        self.subscriptions.states = true;
    }

    fn subscribe_logs(&mut self, msg: &SubscribeLogsRequest) {
        trace!("{} subscribed to logs at {:?}", self.peer_name(), msg.level);
        self.subscriptions.logs = Some(msg.level);
        self.subscriptions.dump_config = msg.dump_config;
    }

    fn switch_command(&mut self, msg: &SwitchCommandRequest) {
        self.forward(EntityCommand::Switch(msg.clone()));
    }

    #[cfg(feature = "select")]
    fn select_command(&mut self, msg: &SelectCommandRequest) {
        self.forward(EntityCommand::Select(msg.clone()));
    }

    fn execute_service(&mut self, msg: &ExecuteServiceRequest) {
        self.forward(EntityCommand::ExecuteService(msg.clone()));
    }

    fn on_disconnect_response(&mut self, _value: &DisconnectResponse) {
        debug!("{} acknowledged disconnect", self.peer_name());
        self.pending_close = true;
    }
}
