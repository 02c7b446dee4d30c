//! TCP listener accepting API clients.
//!
//! The [`ApiServerBuilder`] collects the device identity, the entities to
//! announce and the writer settings. [`ApiServer::run`] accepts clients and
//! runs one [`ApiConnection`] per socket, each with its own writer task.
//!
//! # Example
//!
//! ```ignore
//! use esphome_api::ApiServer;
//!
//! #[tokio::main]
//! async fn main() -> esphome_api::Result<()> {
//!     let (commands_tx, mut commands) = tokio::sync::mpsc::channel(16);
//!     let server = ApiServer::builder()
//!         .name("living-room")
//!         .password("hunter2")
//!         .commands(commands_tx)
//!         .bind()
//!         .await?;
//!
//!     tokio::spawn(async move {
//!         while let Some(command) = commands.recv().await {
//!             println!("{:?}", command);
//!         }
//!     });
//!     server.run().await
//! }
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info, warn};

use crate::connection::{ApiConnection, DeviceInfo, EntityCommand, EntityInfo};
use crate::error::Result;
use crate::protocol::DEFAULT_MAX_PAYLOAD_SIZE;
use crate::writer::{spawn_writer_task, WriterConfig};

/// Port ESPHome devices listen on.
pub const DEFAULT_PORT: u16 = 6053;

/// Default maximum simultaneous clients.
pub const DEFAULT_MAX_CONNECTIONS: usize = 8;

#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub device: DeviceInfo,
    /// Clients beyond this limit are refused at accept time.
    pub max_connections: usize,
    /// Largest inbound payload accepted before the connection is closed.
    pub max_payload_size: usize,
    pub writer: WriterConfig,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            device: DeviceInfo::default(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            writer: WriterConfig::default(),
        }
    }
}

/// Builder for an [`ApiServer`].
pub struct ApiServerBuilder {
    config: ApiServerConfig,
    entities: Vec<EntityInfo>,
    commands: Option<mpsc::Sender<EntityCommand>>,
}

impl ApiServerBuilder {
    pub fn new() -> Self {
        Self::from_config(ApiServerConfig::default())
    }

    pub fn from_config(config: ApiServerConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
            commands: None,
        }
    }

    pub fn bind_addr(mut self, addr: IpAddr) -> Self {
        self.config.bind_addr = addr;
        self
    }

    /// Listening port. Default: 6053; 0 picks a free port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Replace the whole device description.
    pub fn device(mut self, device: DeviceInfo) -> Self {
        self.config.device = device;
        self
    }

    /// Device name reported in `HelloResponse` and `DeviceInfoResponse`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.device.name = name.into();
        self
    }

    /// Require this password in `ConnectRequest`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.device.password = Some(password.into());
        self
    }

    pub fn max_connections(mut self, limit: usize) -> Self {
        self.config.max_connections = limit;
        self
    }

    pub fn max_payload_size(mut self, size: usize) -> Self {
        self.config.max_payload_size = size;
        self
    }

    /// Set the maximum pending frames per connection before sends are refused.
    ///
    /// Default: 256
    pub fn max_pending_frames(mut self, limit: usize) -> Self {
        self.config.writer.max_pending_frames = limit;
        self
    }

    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.config.writer.channel_capacity = capacity;
        self
    }

    pub fn backpressure_timeout(mut self, timeout: Duration) -> Self {
        self.config.writer.backpressure_timeout = timeout;
        self
    }

    /// Announce an entity on `ListEntitiesRequest`.
    pub fn entity(mut self, entity: EntityInfo) -> Self {
        self.entities.push(entity);
        self
    }

    /// Receive entity commands from every connection on this channel.
    pub fn commands(mut self, commands: mpsc::Sender<EntityCommand>) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Bind the listener.
    pub async fn bind(self) -> Result<ApiServer> {
        let addr = SocketAddr::new(self.config.bind_addr, self.config.port);
        let listener = TcpListener::bind(addr).await?;
        info!("API server listening on {}", listener.local_addr()?);

        Ok(ApiServer {
            listener,
            device: Arc::new(self.config.device.clone()),
            entities: Arc::new(self.entities),
            commands: self.commands,
            semaphore: Arc::new(Semaphore::new(self.config.max_connections)),
            config: self.config,
        })
    }
}

impl Default for ApiServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound API server.
pub struct ApiServer {
    listener: TcpListener,
    config: ApiServerConfig,
    device: Arc<DeviceInfo>,
    entities: Arc<Vec<EntityInfo>>,
    commands: Option<mpsc::Sender<EntityCommand>>,
    semaphore: Arc<Semaphore>,
}

impl ApiServer {
    pub fn builder() -> ApiServerBuilder {
        ApiServerBuilder::new()
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn config(&self) -> &ApiServerConfig {
        &self.config
    }

    /// Accept clients until the listener fails.
    pub async fn run(self) -> Result<()> {
        loop {
            let (stream, peer) = self.listener.accept().await?;

            let permit = match self.semaphore.clone().try_acquire_owned() {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Connection limit reached, refusing {}", peer);
                    continue;
                }
            };
            if let Err(e) = stream.set_nodelay(true) {
                debug!("{}: set_nodelay failed: {}", peer, e);
            }

            let parts = self.parts();
            let writer_config = self.config.writer.clone();
            tokio::spawn(async move {
                // Permit is held until this task completes
                let _permit = permit;
                debug!("Accepted {}", peer);
                if let Err(e) = serve_stream(parts, stream, writer_config).await {
                    debug!("{}: connection ended: {}", peer, e);
                }
            });
        }
    }

    fn parts(&self) -> ConnectionParts {
        ConnectionParts {
            device: self.device.clone(),
            entities: self.entities.clone(),
            commands: self.commands.clone(),
            max_payload_size: self.config.max_payload_size,
        }
    }
}

/// Everything a connection needs besides its socket.
#[derive(Clone)]
pub struct ConnectionParts {
    pub device: Arc<DeviceInfo>,
    pub entities: Arc<Vec<EntityInfo>>,
    pub commands: Option<mpsc::Sender<EntityCommand>>,
    pub max_payload_size: usize,
}

/// Run one connection over any bidirectional stream until it closes, then
/// wait for queued replies to be written.
pub async fn serve_stream<S>(parts: ConnectionParts, stream: S, writer_config: WriterConfig) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    let (reader, write_half) = tokio::io::split(stream);
    let (writer, writer_task) = spawn_writer_task(write_half, writer_config);

    let mut connection = ApiConnection::new(parts.device, writer)
        .with_entities(parts.entities)
        .with_max_payload_size(parts.max_payload_size);
    if let Some(commands) = parts.commands {
        connection = connection.with_commands(commands);
    }

    let result = connection.serve(reader).await;
    // Dropping the connection drops the last writer handle.
    drop(connection);
    match writer_task.await {
        Ok(Err(e)) => warn!("Writer task failed: {}", e),
        Err(e) => warn!("Writer task panicked: {}", e),
        Ok(Ok(())) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiServerConfig::default();
        assert_eq!(config.port, 6053);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.device.password.is_none());
    }

    #[test]
    fn test_builder_settings() {
        let builder = ApiServerBuilder::new()
            .port(0)
            .name("garage")
            .password("pw")
            .max_connections(2)
            .max_pending_frames(16);
        assert_eq!(builder.config.port, 0);
        assert_eq!(builder.config.device.name, "garage");
        assert_eq!(builder.config.device.password.as_deref(), Some("pw"));
        assert_eq!(builder.config.max_connections, 2);
        assert_eq!(builder.config.writer.max_pending_frames, 16);
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let server = ApiServer::builder()
            .bind_addr(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .port(0)
            .bind()
            .await
            .unwrap();
        assert_ne!(server.local_addr().unwrap().port(), 0);
    }
}
