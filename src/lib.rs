//! REPSET - Rep & Set Trainer
//!
//! A terminal workout companion with a weekly planner, an AI-coach chat
//! screen and a full-screen live session view with simulated camera preview.

use std::fmt;

// Public re-exports
pub mod app;
pub mod camera;
pub mod chat;
pub mod config;
pub mod plan;
pub mod session;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum RepsetError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Camera permission was not granted
    PermissionDenied(String),
    /// Logging setup error
    LoggingError(String),
}

impl fmt::Display for RepsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepsetError::IoError(err) => write!(f, "I/O error: {}", err),
            RepsetError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RepsetError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            RepsetError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            RepsetError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for RepsetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepsetError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RepsetError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                RepsetError::PermissionDenied(format!("Access denied: {}", err))
            }
            _ => RepsetError::IoError(err),
        }
    }
}

impl From<toml::de::Error> for RepsetError {
    fn from(err: toml::de::Error) -> Self {
        RepsetError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for RepsetError {
    fn from(err: toml::ser::Error) -> Self {
        RepsetError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for repset operations
pub type Result<T> = std::result::Result<T, RepsetError>;

// Common types and constants
pub const APP_NAME: &str = "repset";
pub const CONFIG_FILE: &str = "repset.toml";
pub const LOG_FILE: &str = "repset.log";
