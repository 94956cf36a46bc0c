//! Configuration management module
//!
//! Handles loading, saving, and validation of app settings and
//! demo session defaults.

use crate::{RepsetError, Result, APP_NAME, CONFIG_FILE, LOG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::plan::DAYS_PER_WEEK;

/// Application configuration covering UI defaults and the demo session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weekday index (0 = Monday) preselected in the calendar strip
    pub default_day: usize,
    /// Rep target a new session starts with
    pub total_reps: u32,
    /// Whether camera access is treated as granted
    pub camera_permission: bool,
    /// Log file location, defaults to the data directory when unset
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_day: 3, // Thursday
            total_reps: 8,
            camera_permission: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.default_day >= DAYS_PER_WEEK {
            return Err(RepsetError::ConfigError(format!(
                "Day index out of range: {} (max: {})",
                self.default_day,
                DAYS_PER_WEEK - 1
            )));
        }

        if self.total_reps == 0 {
            return Err(RepsetError::ConfigError(
                "Rep target must be greater than 0".to_string(),
            ));
        }

        const MAX_REPS: u32 = 999;
        if self.total_reps > MAX_REPS {
            return Err(RepsetError::ConfigError(format!(
                "Rep target too large: {} (max: {})",
                self.total_reps, MAX_REPS
            )));
        }

        Ok(())
    }

    /// Set the preselected weekday index
    pub fn with_default_day(mut self, day: usize) -> Self {
        self.default_day = day;
        self
    }

    /// Set the rep target for new sessions
    pub fn with_total_reps(mut self, reps: u32) -> Self {
        self.total_reps = reps;
        self
    }

    /// Set whether camera access is granted
    pub fn with_camera_permission(mut self, granted: bool) -> Self {
        self.camera_permission = granted;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            RepsetError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            RepsetError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RepsetError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            RepsetError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(&config_path, content).map_err(|e| {
            RepsetError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/repset/repset.toml or falls back to $HOME/.config/repset/repset.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            RepsetError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the log file location, preferring the configured override
    pub fn effective_log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir().ok_or_else(|| {
            RepsetError::ConfigError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(LOG_FILE))
    }
}
