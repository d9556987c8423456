//! Error handling for plasmapost
//!
//! Provides the error taxonomy shared by every crate in the workspace:
//! - Configuration errors (malformed post-processor options)
//! - Translation errors (input objects the engine cannot process)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Raised while resolving post-processor options into a configuration.
/// Resolution is all-or-nothing, so any of these aborts the whole run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An option was malformed, unknown, or carried an unparsable value
    #[error("Invalid argument '{option}': {reason}")]
    InvalidArgument {
        /// The option that failed.
        option: String,
        /// The reason the option was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Create an invalid argument error
    pub fn invalid_argument(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

/// Translation error type
///
/// Raised by the translation engine before any output is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// An input object carries no motion path data
    #[error("The object {name} is not a path. Please select only path and Compounds.")]
    NotAPathObject {
        /// The internal name of the offending object.
        name: String,
    },
}

/// Main error type for plasmapost
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Translation error
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a translation error
    pub fn is_translate_error(&self) -> bool {
        matches!(self, Error::Translate(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
