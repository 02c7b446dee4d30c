//! Device example - a minimal ESPHome node.
//!
//! This example demonstrates:
//! - Configuring an `ApiServer` with the builder pattern
//! - Announcing entities to clients on `ListEntitiesRequest`
//! - Receiving entity commands on a channel
//!
//! # Running
//!
//! ```text
//! cargo run --example device
//! ```
//!
//! Then add the device to Home Assistant, or connect with aioesphomeapi:
//!
//! ```python
//! from aioesphomeapi import APIClient
//!
//! client = APIClient("127.0.0.1", 6053, "hunter2")
//! await client.connect(login=True)
//! print(await client.device_info())
//! print(await client.list_entities_services())
//! ```

use esphome_api::api::{
    InfoResponseProtoMessage, ListEntitiesBinarySensorResponse, ListEntitiesSensorResponse,
};
use esphome_api::{ApiServer, EntityCommand, EntityInfo};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

fn info(object_id: &str, key: u32, name: &str) -> InfoResponseProtoMessage {
    InfoResponseProtoMessage {
        object_id: object_id.into(),
        key,
        name: name.into(),
        unique_id: format!("desk-lamp-{}", object_id),
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> esphome_api::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (commands_tx, mut commands) = mpsc::channel(16);

    let server = ApiServer::builder()
        .name("desk-lamp")
        .password("hunter2")
        .entity(EntityInfo::BinarySensor(ListEntitiesBinarySensorResponse {
            base: info("motion", 1, "Motion"),
            device_class: "motion".into(),
            ..Default::default()
        }))
        .entity(EntityInfo::Sensor(ListEntitiesSensorResponse {
            base: info("temperature", 2, "Temperature"),
            unit_of_measurement: "°C".into(),
            accuracy_decimals: 1,
            ..Default::default()
        }))
        .commands(commands_tx)
        .bind()
        .await?;

    // Handle commands from every connected client
    tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                EntityCommand::Switch(request) => {
                    println!("switch {} -> {}", request.key, request.state);
                }
                other => println!("{:?}", other),
            }
        }
    });

    server.run().await
}
