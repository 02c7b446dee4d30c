//! Message types and dispatch traits generated from `proto/api.proto`.
//!
//! Regenerate with `cargo run --bin api_protobuf -- proto/api.proto`.

mod api_pb2;
mod api_pb2_service;

pub use api_pb2::*;
pub use api_pb2_service::{ApiServerConnection, ApiServerConnectionBase};
