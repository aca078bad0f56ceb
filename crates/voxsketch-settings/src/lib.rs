//! VoxSketch Settings Crate
//!
//! Handles application configuration and its persistence on disk.

pub mod config;
pub mod error;

pub use config::{Config, DrawingSettings, ExportSettings, HistorySettings, ViewSettings};
pub use error::{SettingsError, SettingsResult};
