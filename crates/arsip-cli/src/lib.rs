use anyhow::Context;
use arsip_core::{ArchiveError, FileMetadata, LogLevel};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;

/// Asked before a record is removed for good
pub const DELETE_PROMPT: &str = "Apakah Anda yakin ingin menghapus arsip ini secara permanen?";

/// MIME type guessed from the file extension, `application/octet-stream`
/// when the extension is unknown.
pub fn guess_file_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Read name and size from the filesystem. `file_type` overrides the guess.
pub async fn file_metadata(path: &Path, file_type: Option<String>) -> anyhow::Result<FileMetadata> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if !meta.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let file_type = file_type.unwrap_or_else(|| guess_file_type(path));

    Ok(FileMetadata::new(file_name, file_type, meta.len())?)
}

/// Ask a yes/no question; anything but `y`/`yes` (or end of input) is no.
pub fn confirm<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// JSON body printed when a command fails
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorReport {
    pub error: String,
    pub code: &'static str,
    pub recoverable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn archive_error(err: &anyhow::Error) -> Option<&ArchiveError> {
    err.chain().find_map(|e| e.downcast_ref::<ArchiveError>())
}

/// Build the report for a failed command. The full cause chain is only
/// included outside production.
pub fn error_report(err: &anyhow::Error, production: bool) -> ErrorReport {
    let details = (!production).then(|| format!("{:#}", err));
    match archive_error(err) {
        Some(archive) => ErrorReport {
            error: archive.to_string(),
            code: archive.error_code(),
            recoverable: archive.is_recoverable(),
            details,
        },
        None => ErrorReport {
            error: err.to_string(),
            code: "INTERNAL_ERROR",
            recoverable: false,
            details,
        },
    }
}

pub fn log_error(err: &anyhow::Error) {
    let (level, code) = match archive_error(err) {
        Some(archive) => (archive.log_level(), archive.error_code()),
        None => (LogLevel::Error, "INTERNAL_ERROR"),
    };
    match level {
        LogLevel::Debug => tracing::debug!(error = %format!("{:#}", err), code, "Command failed"),
        LogLevel::Warn => tracing::warn!(error = %format!("{:#}", err), code, "Command failed"),
        LogLevel::Error => tracing::error!(error = %format!("{:#}", err), code, "Command failed"),
    }
}

/// Initialize tracing for CLI binaries. Logs go to stderr so stdout stays JSON.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
