//! File logging bootstrap.
//!
//! The interactive screen owns stdout and stderr, so events go to a plain
//! log file next to the database. Writes are synchronous; there is no
//! background writer thread.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "diary";
const LOG_FILE_SUFFIX: &str = "log";

/// Install the global subscriber writing to `<log_dir>/diary.log`.
///
/// # Errors
/// - `level` is not one of trace|debug|info|warn|error
/// - `log_dir` cannot be created or the file cannot be opened
/// - a global subscriber is already installed
pub fn init_logging(level: &str, log_dir: &Path) -> anyhow::Result<()> {
    let level = normalize_level(level)?;

    std::fs::create_dir_all(log_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create log directory {}: {}",
            log_dir.display(),
            e
        )
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)
        .map_err(|e| anyhow::anyhow!("Failed to open log file: {}", e))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(level)?)
        .with(fmt::layer().with_writer(appender).with_ansi(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(
        version = diary_core::VERSION,
        level,
        log_dir = %log_dir.display(),
        "logging initialized"
    );
    Ok(())
}

fn normalize_level(level: &str) -> anyhow::Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(anyhow::anyhow!(
            "Unsupported log level \"{}\" (use trace|debug|info|warn|error)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn test_invalid_level_fails_before_touching_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_dir = dir.path().join("logs");
        assert!(init_logging("loud", &log_dir).is_err());
        assert!(!log_dir.exists());
    }
}
