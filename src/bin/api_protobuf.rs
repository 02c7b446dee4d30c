//! Generate the API message types and dispatch traits from a `.proto` file.
//!
//! ```text
//! api_protobuf proto/api.proto --out-dir src/api --manifest
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use esphome_api::codegen::{self, descriptor::FileDescriptorSet, protoc, GeneratorConfig};
use esphome_api::Result;

#[derive(Parser, Debug)]
#[command(name = "api_protobuf", version, about = "Generate Rust API code from api.proto")]
struct Cli {
    /// Proto file to compile.
    #[arg(default_value = "proto/api.proto")]
    proto: PathBuf,

    /// Additional include directories passed to protoc.
    #[arg(short = 'I', long = "include")]
    includes: Vec<PathBuf>,

    /// Directory receiving the generated files.
    #[arg(long, default_value = "src/api")]
    out_dir: PathBuf,

    /// Rust path of the runtime modules as seen from the generated code.
    #[arg(long, default_value = "crate")]
    runtime_path: String,

    /// Read this serialized FileDescriptorSet instead of running protoc.
    #[arg(long)]
    descriptor_set: Option<PathBuf>,

    /// Also write api_schema.json.
    #[arg(long)]
    manifest: bool,

    /// Skip rustfmt.
    #[arg(long)]
    no_format: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bytes = match &cli.descriptor_set {
        Some(path) => std::fs::read(path)?,
        None => protoc::compile_descriptor_set(&cli.proto, &cli.includes)?,
    };
    let set = FileDescriptorSet::from_bytes(&bytes)?;

    let config = GeneratorConfig {
        runtime_path: cli.runtime_path.clone(),
        emit_manifest: cli.manifest,
    };
    let files = codegen::generate(&set, &config)?;
    let written = codegen::write_outputs(&cli.out_dir, &files)?;

    if !cli.no_format {
        let sources: Vec<PathBuf> = written
            .iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .cloned()
            .collect();
        protoc::format_files(&sources);
    }

    info!("Generated {} files in {}", written.len(), cli.out_dir.display());
    Ok(())
}
