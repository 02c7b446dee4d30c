//! # esphome-api
//!
//! ESPHome native API in Rust: a protobuf runtime, the message types and
//! dispatch traits generated from `proto/api.proto`, transport framing, and a
//! device-side server.
//!
//! ## Architecture
//!
//! - **Generator** (`codegen`, `api_protobuf` binary): reads a compiled
//!   descriptor set and emits `src/api/api_pb2.rs` and
//!   `src/api/api_pb2_service.rs`
//! - **Runtime** (`proto`): varint and length-delimited encoding, exact size
//!   calculation and the traits generated code implements
//! - **Transport** (`protocol`, `writer`): plaintext and Noise framing, a
//!   batching writer task
//! - **Service** (`service`, `connection`, `server`): setup and
//!   authentication gating in front of the request handlers
//!
//! ## Example
//!
//! `demos/device.rs` runs a device with a password, two entities and a
//! command channel: `cargo run --example device`.

pub mod api;
pub mod codegen;
pub mod connection;
pub mod error;
pub mod proto;
pub mod protocol;
pub mod server;
pub mod service;
pub mod writer;

pub use connection::{ApiConnection, DeviceInfo, EntityCommand, EntityInfo};
pub use error::{ApiError, Result};
pub use server::{ApiServer, ApiServerBuilder, ApiServerConfig};
pub use service::{ConnectionState, ProtoService};
