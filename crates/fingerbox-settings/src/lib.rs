//! Fingerbox Settings Crate
//!
//! Loads and saves box configurations as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, BoxConfig, ExportSettings};
pub use error::{SettingsError, SettingsResult};
