//! Box configuration files
//!
//! A configuration holds one [`BoxSpec`] plus export preferences and is
//! stored as JSON or TOML, picked by file extension.

use crate::error::{SettingsError, SettingsResult};
use fingerbox_joinery::{BoxSpec, DEFAULT_SPACING};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name under the platform config directory.
pub const APP_DIR: &str = "fingerbox";

/// Default file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "box.toml";

/// Sheet export preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Gap between parts on the cutting sheet, caller units
    pub spacing: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BoxConfig {
    pub spec: BoxSpec,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl BoxConfig {
    pub fn new(spec: BoxSpec) -> Self {
        Self {
            spec,
            export: ExportSettings::default(),
        }
    }

    /// Load and validate a config file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded box config");
        Ok(config)
    }

    /// Validate, then write the config (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!(path = %path.display(), "saved box config");
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.spec.validate()?;

        if !self.export.spacing.is_finite() || self.export.spacing < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "export.spacing".to_string(),
                reason: format!("must be a non-negative number, got {}", self.export.spacing),
            });
        }

        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Where the config lives when no path is given.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    path
}
