//! Configuration for VoxSketch
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into sections:
//! - View settings (zoom step and limits)
//! - History settings (undo depth)
//! - Drawing defaults (stroke color for hand-drawn shapes)
//! - Export settings (PNG size and background)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use voxsketch_core::constants;

use crate::error::{SettingsError, SettingsResult};

/// Name of the application directory inside the platform config directory
const APP_DIR: &str = "voxsketch";

/// Default config file name
const CONFIG_FILE: &str = "config.toml";

/// Zoom behavior of the canvas view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Multiplicative zoom change per wheel notch
    pub zoom_step: f64,
    /// Lower zoom bound
    pub min_zoom: f64,
    /// Upper zoom bound
    pub max_zoom: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom_step: constants::ZOOM_STEP,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
        }
    }
}

/// Undo history limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undo snapshots kept
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: constants::DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Defaults for shapes drawn with the pointer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DrawingSettings {
    /// Color recorded on hand-drawn shapes; `None` leaves the field absent
    pub default_color: Option<String>,
}

/// PNG export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub width: u32,
    pub height: u32,
    /// Background color (`#rrggbb` or palette name)
    pub background: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_EXPORT_WIDTH,
            height: constants::DEFAULT_EXPORT_HEIGHT,
            background: "#ffffff".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recently opened design files, most recent first
    pub recent_files: Vec<PathBuf>,
    pub view: ViewSettings,
    pub history: HistorySettings,
    pub drawing: DrawingSettings,
    pub export: ExportSettings,
}

impl Config {
    /// Maximum number of entries kept in `recent_files`
    pub const MAX_RECENT_FILES: usize = 10;

    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(SettingsError::UnknownFormat(path.to_path_buf())),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => return Err(SettingsError::UnknownFormat(path.to_path_buf())),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let view = &self.view;
        if !(view.min_zoom > 0.0 && view.min_zoom.is_finite()) {
            return Err(SettingsError::invalid("view.min_zoom", "must be > 0"));
        }
        if !(view.max_zoom > view.min_zoom && view.max_zoom.is_finite()) {
            return Err(SettingsError::invalid(
                "view.max_zoom",
                "must be greater than view.min_zoom",
            ));
        }
        if !(view.zoom_step > 1.0 && view.zoom_step.is_finite()) {
            return Err(SettingsError::invalid("view.zoom_step", "must be > 1"));
        }

        if self.history.max_depth == 0 {
            return Err(SettingsError::invalid("history.max_depth", "must be > 0"));
        }

        if self.export.width == 0 || self.export.height == 0 {
            return Err(SettingsError::invalid(
                "export",
                "image dimensions must be > 0",
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(Self::MAX_RECENT_FILES);
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
