//! Code generator for the API message types and service dispatch.
//!
//! Reads a compiled `FileDescriptorSet` and emits:
//! - `api_pb2.rs`: enums, base-class structs and message types with their
//!   decode, encode, size and dump implementations
//! - `api_pb2_service.rs`: the receive hooks, `read_message` dispatch and the
//!   gated request handler trait
//! - optionally `api_schema.json`, a manifest of ids, sizes and methods
//!
//! # Example
//!
//! ```no_run
//! use esphome_api::codegen::{self, descriptor::FileDescriptorSet, GeneratorConfig};
//! use std::path::Path;
//!
//! let bytes = codegen::protoc::compile_descriptor_set(Path::new("proto/api.proto"), &[])?;
//! let set = FileDescriptorSet::from_bytes(&bytes)?;
//! let files = codegen::generate(&set, &GeneratorConfig::default())?;
//! codegen::write_outputs(Path::new("src/api"), &files)?;
//! # Ok::<(), esphome_api::ApiError>(())
//! ```

pub mod code;
pub mod context;
pub mod descriptor;
pub mod enums;
pub mod field;
pub mod manifest;
pub mod message;
pub mod protoc;
pub mod service;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use context::GenContext;

use crate::error::{ApiError, Result};
use descriptor::FileDescriptorSet;

pub const MESSAGES_FILE: &str = "api_pb2.rs";
pub const SERVICE_FILE: &str = "api_pb2_service.rs";
pub const MANIFEST_FILE: &str = "api_schema.json";

/// Generator settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path under which `error`, `proto` and `service` are reachable from the
    /// generated files.
    pub runtime_path: String,
    /// Also emit the JSON manifest.
    pub emit_manifest: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: "crate".to_string(),
            emit_manifest: false,
        }
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub filename: String,
    pub content: String,
}

/// Generate every output file for the main file of `set`.
pub fn generate(set: &FileDescriptorSet, config: &GeneratorConfig) -> Result<Vec<OutputFile>> {
    let file = set.main_file()?;
    let ctx = GenContext::new(file, config);
    check_references(&ctx)?;

    debug!(
        "Generating {} messages, {} enums from {}",
        file.message_type.len(),
        file.enum_type.len(),
        file.name
    );

    let mut files = vec![
        OutputFile {
            filename: MESSAGES_FILE.to_string(),
            content: message::emit_messages_file(&ctx)?,
        },
        OutputFile {
            filename: SERVICE_FILE.to_string(),
            content: service::emit_service_file(&ctx)?,
        },
    ];

    if config.emit_manifest {
        files.push(OutputFile {
            filename: MANIFEST_FILE.to_string(),
            content: manifest::build_manifest(&ctx)?.to_json()?,
        });
    }

    Ok(files)
}

/// Every message-typed field must name a message of the same file.
fn check_references(ctx: &GenContext<'_>) -> Result<()> {
    for msg in &ctx.file.message_type {
        let plans = ctx.field_plans(msg)?;
        let missing =
            message::referenced_messages(&plans).find(|name| ctx.message(name).is_none());
        if let Some(missing) = missing {
            return Err(ApiError::Descriptor(format!(
                "{} references unknown message {}",
                msg.name, missing
            )));
        }
    }
    Ok(())
}

/// Write `files` into `dir`, creating it if needed. Returns the written paths.
pub fn write_outputs(dir: &Path, files: &[OutputFile]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    files
        .iter()
        .map(|file| {
            let path = dir.join(&file.filename);
            std::fs::write(&path, &file.content)?;
            info!("Wrote {}", path.display());
            Ok(path)
        })
        .collect()
}
