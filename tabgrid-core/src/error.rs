//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Record Grid
//!
//! Defines the error enum used across the crate. Variants carry enough context
//! for diagnostics, and fallible modules return `Result<T, AppError>`.
//!
//! The table component itself is deliberately non-fatal: missing props, unknown
//! field paths and out-of-range pages degrade to safe defaults rather than
//! surfacing here. `AppError` covers the surrounding concerns of the viewer
//! binary (I/O, config, record sources, the terminal).

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all record-grid operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialization or deserialization error (JSON).
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Record source errors (bad file, not an array, missing identifiers).
    #[error("Record source {path:?}: {reason}")]
    RecordSource { path: PathBuf, reason: String },

    /// A column or filter referenced a field the spec does not declare.
    #[error("Unknown column or filter field: {0}")]
    UnknownField(String),

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a record source error.
    pub fn record_source<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::RecordSource {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
