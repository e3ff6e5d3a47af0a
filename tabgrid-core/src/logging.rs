//! src/logging.rs
//! ============================================================================
//! # Logging: Rolling JSONL File Output
//!
//! File-based structured logging so the log stream never fights the terminal
//! UI for stdout. Events go to a daily-rolling `.jsonl` file through a
//! non-blocking writer; the returned [`WorkerGuard`] must stay alive for the
//! lifetime of the program or buffered events are dropped on exit.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: String,
    pub log_level: String,
    pub max_log_files: usize,
    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            log_file_prefix: "tabgrid".to_string(),
            log_level: "info".to_string(),
            max_log_files: 10,
            rotation: LogRotation::Daily,
        }
    }
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init(config: &LoggerConfig) -> Result<WorkerGuard> {
    validate_log_directory(&config.log_dir)?;
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {}", config.log_dir.display()))?;

    let rotation = match config.rotation {
        LogRotation::Never => Rotation::NEVER,
        LogRotation::Daily => Rotation::DAILY,
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&config.log_file_prefix)
        .filename_suffix("jsonl")
        .max_log_files(config.max_log_files)
        .build(&config.log_dir)
        .context("failed to create file appender")?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::from_default_env().add_directive(
        Directive::from_str(&config.log_level).context("invalid log level in config")?,
    );

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(json_layer)
        .try_init()
        .context("failed to install global tracing subscriber")?;

    Ok(guard)
}

fn validate_log_directory(path: &Path) -> Result<()> {
    if path.components().count() == 0 {
        anyhow::bail!("log directory path is empty");
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            anyhow::bail!("log directory path contains parent directory references");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_parent_directory_components() {
        assert!(validate_log_directory(Path::new("../logs")).is_err());
        assert!(validate_log_directory(Path::new("logs/../../etc")).is_err());
        assert!(validate_log_directory(Path::new("")).is_err());
        assert!(validate_log_directory(Path::new("./logs")).is_ok());
    }
}
