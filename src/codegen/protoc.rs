//! External tools: `protoc` to produce the descriptor set, `rustfmt` to tidy
//! the emitted files.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{ApiError, Result};

/// Run `protoc` on `proto` and return the serialized `FileDescriptorSet`.
///
/// The directory containing `proto` is always on the include path, ahead of
/// `includes`. The descriptor is written to a temporary directory that is
/// removed on return.
pub fn compile_descriptor_set(proto: &Path, includes: &[PathBuf]) -> Result<Vec<u8>> {
    compile_with(Path::new("protoc"), proto, includes)
}

pub(crate) fn compile_with(protoc: &Path, proto: &Path, includes: &[PathBuf]) -> Result<Vec<u8>> {
    let tmp = tempfile::tempdir()?;
    let out = tmp.path().join("descriptor.pb");

    let mut cmd = Command::new(protoc);
    if let Some(dir) = proto.parent().filter(|d| !d.as_os_str().is_empty()) {
        cmd.arg("-I").arg(dir);
    }
    for include in includes {
        cmd.arg("-I").arg(include);
    }
    cmd.arg("-o").arg(&out).arg(proto);

    debug!("Running {:?}", cmd);
    let output = cmd
        .output()
        .map_err(|e| ApiError::Protoc(format!("failed to run {}: {}", protoc.display(), e)))?;
    if !output.status.success() {
        return Err(ApiError::Protoc(format!(
            "{} exited with {}: {}",
            protoc.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(std::fs::read(&out)?)
}

/// Format `paths` with `rustfmt`; a missing or failing `rustfmt` is only logged.
///
/// Returns whether formatting ran successfully.
pub fn format_files(paths: &[PathBuf]) -> bool {
    if paths.is_empty() {
        return true;
    }
    match Command::new("rustfmt").arg("--edition").arg("2021").args(paths).output() {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            warn!(
                "rustfmt failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            false
        }
        Err(err) => {
            warn!("rustfmt not available, leaving output unformatted: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_protoc_is_error() {
        let err = compile_with(
            Path::new("/nonexistent/protoc-binary"),
            Path::new("proto/api.proto"),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Protoc(_)));
        assert!(err.to_string().contains("failed to run"));
    }

    #[test]
    fn test_format_nothing() {
        assert!(format_files(&[]));
    }
}
