//! Post-processor profiles
//!
//! A profile stores a machine's preferred options in a TOML or JSON file.
//! Profiles are converted into [`PostOption`]s and resolved by the same code
//! path as option strings, so both are validated identically.

use crate::config::{PostConfig, PostOption};
use crate::error::{SettingsError, SettingsResult};
use plasmapost_core::MeasurementSystem;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Saved post-processor options; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostProfile {
    pub no_header: bool,
    pub no_comments: bool,
    pub line_numbers: bool,
    pub no_show_editor: bool,
    pub precision: Option<usize>,
    pub preamble: Option<String>,
    pub postamble: Option<String>,
    pub units: Option<MeasurementSystem>,
    pub pierce_delay: Option<f64>,
}

impl PostProfile {
    /// Load a profile from file (JSON or TOML)
    ///
    /// Values the resolver would reject fail here as [`SettingsError::Config`].
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let profile: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        PostConfig::resolve(profile.clone().into_options())?;

        tracing::debug!("Loaded post-processor profile from {}", path.display());
        Ok(profile)
    }

    /// Convert into options for [`PostConfig::resolve`](crate::PostConfig::resolve)
    pub fn into_options(self) -> Vec<PostOption> {
        let mut options = Vec::new();
        if self.no_header {
            options.push(PostOption::SuppressHeader);
        }
        if self.no_comments {
            options.push(PostOption::SuppressComments);
        }
        if self.line_numbers {
            options.push(PostOption::LineNumbers);
        }
        if self.no_show_editor {
            options.push(PostOption::NoShowEditor);
        }
        if let Some(precision) = self.precision {
            options.push(PostOption::Precision(precision.to_string()));
        }
        if let Some(preamble) = self.preamble {
            options.push(PostOption::Preamble(preamble));
        }
        if let Some(postamble) = self.postamble {
            options.push(PostOption::Postamble(postamble));
        }
        if self.units == Some(MeasurementSystem::Imperial) {
            options.push(PostOption::Imperial);
        }
        if let Some(delay) = self.pierce_delay {
            options.push(PostOption::PierceDelay(delay.to_string()));
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_has_no_options() {
        assert!(PostProfile::default().into_options().is_empty());
    }

    #[test]
    fn test_profile_from_toml_str() {
        let profile: PostProfile = toml::from_str(
            r#"
            line_numbers = true
            precision = 2
            units = "imperial"
            pierce_delay = 0.8
            "#,
        )
        .unwrap();

        let config = PostConfig::resolve(profile.into_options()).unwrap();
        assert!(config.emit_line_numbers());
        assert_eq!(config.precision(), 2);
        assert_eq!(config.measurement_system(), MeasurementSystem::Imperial);
        assert_eq!(config.pierce_delay(), 0.8);
    }

    #[test]
    fn test_negative_delay_rejected_by_resolver() {
        let profile = PostProfile {
            pierce_delay: Some(-1.0),
            ..Default::default()
        };
        assert!(PostConfig::resolve(profile.into_options()).is_err());
    }
}
