//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub device: DeviceConfig,
    pub ui: UiConfig,
}

/// Capture device preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Report the capture device as LiDAR-capable. Affects displayed
    /// text and icons only, never the scan flow.
    pub simulate_lidar: bool,
    /// Camera facing used when the scan screen opens ("back" or "front").
    pub default_facing: String,
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the medical safety notices on the home and scan screens.
    pub show_safety_notices: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl AppConfig {
    /// Get config file path in the platform config directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("org", "CervCare", "cervcare")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.device.default_facing != "back" && self.device.default_facing != "front" {
            return Err(ConfigError::Validation(
                "Camera facing must be 'back' or 'front'".to_string(),
            ));
        }
        if self.ui.window_width < 600.0 || self.ui.window_width > 8000.0 {
            return Err(ConfigError::Validation(
                "Window width must be between 600 and 8000".to_string(),
            ));
        }
        if self.ui.window_height < 400.0 || self.ui.window_height > 8000.0 {
            return Err(ConfigError::Validation(
                "Window height must be between 400 and 8000".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl DeviceConfig {
    /// Parsed camera facing. Falls back to the back camera; validation
    /// rejects anything else before this is reached.
    pub fn facing(&self) -> crate::camera::Facing {
        match self.default_facing.as_str() {
            "front" => crate::camera::Facing::Front,
            _ => crate::camera::Facing::Back,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            simulate_lidar: false,
            default_facing: "back".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_safety_notices: true,
            window_width: 1100.0,
            window_height: 800.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_facing() {
        let mut config = AppConfig::default();
        config.device.default_facing = "sideways".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_window_bounds() {
        let mut config = AppConfig::default();

        config.ui.window_width = 100.0;
        assert!(config.validate().is_err());

        config.ui.window_width = 1100.0;
        config.ui.window_height = 0.0;
        assert!(config.validate().is_err());

        config.ui.window_height = 800.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_facing_parse() {
        let mut device = DeviceConfig::default();
        assert_eq!(device.facing(), crate::camera::Facing::Back);

        device.default_facing = "front".to_string();
        assert_eq!(device.facing(), crate::camera::Facing::Front);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.device.default_facing, config.device.default_facing);
    }
}
