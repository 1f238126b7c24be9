//! Persisted defaults for the command-line front end.
//!
//! Stored as TOML in `~/.wavmark/config.toml`. A missing file means
//! defaults; command-line flags take precedence over anything here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::Mode;

/// Log level used when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Front-end defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WatermarkConfig {
    /// Mode used by `embed` and `extract` when `--mode` is omitted.
    pub default_mode: Mode,

    /// `tracing` filter directive, e.g. `"warn"` or `"wavmark=debug"`.
    pub log_level: String,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl WatermarkConfig {
    /// Loads the configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: WatermarkConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }
}

/// Returns `~/.wavmark`.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".wavmark"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = WatermarkConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, WatermarkConfig::default());
        assert_eq!(config.default_mode, Mode::SelfDescribing);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = WatermarkConfig {
            default_mode: Mode::ExternallyKeyed,
            log_level: "debug".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = WatermarkConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_mode = \"externally-keyed\"\n").unwrap();

        let config = WatermarkConfig::load_from(&path).unwrap();
        assert_eq!(config.default_mode, Mode::ExternallyKeyed);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_bad_mode_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_mode = \"loud\"\n").unwrap();

        let err = WatermarkConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError(_)));
    }
}
