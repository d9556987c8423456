//! Error types for the settings crate.
//!
//! This module provides structured error types for loading post-processor
//! profile files. Option resolution itself fails with
//! [`ConfigError`](plasmapost_core::ConfigError).

use plasmapost_core::ConfigError;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading a post-processor profile.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The profile file extension is not supported.
    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A profile value was rejected by the option resolver.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported profile format: yaml");
    }

    #[test]
    fn test_error_conversion() {
        let cfg_err = ConfigError::invalid_argument("--precision", "not a number");
        let err: SettingsError = cfg_err.into();
        assert!(matches!(err, SettingsError::Config(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::IoError(_)));
    }
}
