//! Plasmapost Settings Crate
//!
//! Resolves post-processor options into an immutable configuration.
//! Options come from a flat option string, a saved profile file, or both.

pub mod config;
pub mod error;
pub mod options;
pub mod profile;

pub use config::{
    PostConfig, PostOption, DEFAULT_PIERCE_DELAY, DEFAULT_POSTAMBLE, DEFAULT_PREAMBLE,
    DEFAULT_PRECISION, MAX_PRECISION,
};
pub use error::{SettingsError, SettingsResult};
pub use options::{parse_option_string, split_option_string};
pub use profile::PostProfile;
