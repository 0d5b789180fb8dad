//! Error types for the settings crate.

use fingerbox_core::BoxError;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading or saving a box configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The box described by the file cannot be built.
    #[error("Invalid box: {0}")]
    Box(#[from] BoxError),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
