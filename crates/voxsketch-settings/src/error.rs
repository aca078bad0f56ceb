//! Settings errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// A value failed `Config::validate`
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: String, reason: String },

    /// The file extension is neither `.toml` nor `.json`
    #[error("cannot tell config format of {}: expected .toml or .json", .0.display())]
    UnknownFormat(PathBuf),

    #[error("no platform config directory")]
    NoConfigDir,

    #[error("config file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("could not encode TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        SettingsError::Invalid {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
