//! src/config.rs
//! ============================================================================
//! # Config: Viewer Configuration Loader and Saver
//!
//! User-editable settings for the viewer binary, loaded and saved as TOML from
//! the cross-platform config path via the
//! [`directories`](https://docs.rs/directories) crate. Missing files fall back
//! to defaults and a default file is written for the next run.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.save().await?;
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::AppError;
use crate::model::column::{HeaderStyle, RowHeight};
use crate::model::table_model::PAGE_SIZE_OPTIONS;

/// Main configuration struct for the viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Initial page size; snapped to the nearest allowed option on load.
    pub page_size: usize,

    pub striped: bool,

    #[serde(default)]
    pub header_style: HeaderStyle,

    #[serde(default)]
    pub row_height: RowHeight,

    pub show_help_on_start: bool,

    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            striped: true,
            header_style: HeaderStyle::default(),
            row_height: RowHeight::default(),
            show_help_on_start: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads config from the XDG-compliant app config dir, or returns
    /// defaults (writing them out for the next run).
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text =
                TokioFs::read_to_string(&path)
                    .await
                    .map_err(|source| AppError::ConfigIo {
                        path: path.clone(),
                        source,
                    })?;
            let mut config: Self = toml::from_str(&text)?;
            config.normalize();

            Ok(config)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;

            Ok(default_config)
        }
    }

    /// Saves config as TOML at the XDG-compliant app config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|source| AppError::ConfigIo {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| AppError::Other(format!("config serialization failed: {e}")))?;
        TokioFs::write(&path, toml_str)
            .await
            .map_err(|source| AppError::ConfigIo { path, source })?;

        Ok(())
    }

    /// The canonical config file path via `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "example", "TabGrid")
            .ok_or_else(|| AppError::Other("could not determine config dir".to_string()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Snap out-of-set values to the allowed page-size options.
    fn normalize(&mut self) {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            let snapped = PAGE_SIZE_OPTIONS
                .iter()
                .copied()
                .min_by_key(|size| size.abs_diff(self.page_size))
                .unwrap_or(10);
            info!(
                requested = self.page_size,
                snapped, "page_size not in the allowed set, snapping"
            );
            self.page_size = snapped;
        }
    }
}
