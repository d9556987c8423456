//! Post-processor configuration
//!
//! A [`PostConfig`] is resolved once per export run from a set of
//! [`PostOption`]s and is never mutated afterwards. Resolution starts from
//! the defaults and is all-or-nothing: if any option fails to apply, the
//! caller only sees the error.

use chrono::{DateTime, Local};
use plasmapost_core::units::{get_unit_label, FeedRateUnits, MeasurementSystem};
use plasmapost_core::ConfigError;
use serde::{Deserialize, Serialize};

/// Commands issued before the first operation
pub const DEFAULT_PREAMBLE: &str = "G90 G54 G40 G49 G80\nG21\n(Setup for plasma cutting)\n";

/// Commands issued after the last operation
pub const DEFAULT_POSTAMBLE: &str = "M8 (Torch OFF)\nG0 X0 Y0 (Return home)\nM30 (Program end)\n";

/// Default number of fractional digits
pub const DEFAULT_PRECISION: usize = 3;

/// Largest accepted number of fractional digits
pub const MAX_PRECISION: usize = 17;

/// Default pierce delay in seconds
pub const DEFAULT_PIERCE_DELAY: f64 = 0.5;

/// A recognized post-processor option
///
/// Numeric options carry their raw text so that parsing failures surface
/// from [`PostConfig::resolve`] as `InvalidArgument`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostOption {
    /// Suppress the three header comment lines
    SuppressHeader,
    /// Suppress structural comments
    SuppressComments,
    /// Prefix lines with `N` numbers
    LineNumbers,
    /// Do not offer the output for preview
    NoShowEditor,
    /// Number of fractional digits
    Precision(String),
    /// Replacement preamble text
    Preamble(String),
    /// Replacement postamble text
    Postamble(String),
    /// Emit inches and inches per minute
    Imperial,
    /// Dwell after torch ignition, in seconds
    PierceDelay(String),
}

impl PostOption {
    /// Flag spelling used in option strings and error messages
    pub fn flag(&self) -> &'static str {
        match self {
            Self::SuppressHeader => "--no-header",
            Self::SuppressComments => "--no-comments",
            Self::LineNumbers => "--line-numbers",
            Self::NoShowEditor => "--no-show-editor",
            Self::Precision(_) => "--precision",
            Self::Preamble(_) => "--preamble",
            Self::Postamble(_) => "--postamble",
            Self::Imperial => "--inches",
            Self::PierceDelay(_) => "--pierce-delay",
        }
    }
}

/// Resolved, immutable post-processor configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PostConfig {
    emit_header: bool,
    emit_comments: bool,
    emit_line_numbers: bool,
    show_editor: bool,
    precision: usize,
    preamble: String,
    postamble: String,
    measurement_system: MeasurementSystem,
    pierce_delay: f64,
    timestamp: Option<DateTime<Local>>,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            emit_header: true,
            emit_comments: true,
            emit_line_numbers: false,
            show_editor: true,
            precision: DEFAULT_PRECISION,
            preamble: DEFAULT_PREAMBLE.to_string(),
            postamble: DEFAULT_POSTAMBLE.to_string(),
            measurement_system: MeasurementSystem::Metric,
            pierce_delay: DEFAULT_PIERCE_DELAY,
            timestamp: None,
        }
    }
}

impl PostConfig {
    /// Resolve a configuration from recognized options
    ///
    /// Options apply in order, so a later option of the same kind wins.
    pub fn resolve<I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = PostOption>,
    {
        let mut config = Self::default();
        for option in options {
            config.apply(option)?;
        }
        tracing::debug!(
            precision = config.precision,
            units = %config.measurement_system,
            pierce_delay = config.pierce_delay,
            "Resolved post-processor configuration"
        );
        Ok(config)
    }

    /// Resolve a configuration from a flat option string
    pub fn from_option_string(args: &str) -> Result<Self, ConfigError> {
        Self::resolve(crate::options::parse_option_string(args)?)
    }

    /// Attach the export timestamp shown in the program header
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn apply(&mut self, option: PostOption) -> Result<(), ConfigError> {
        let flag = option.flag();
        match option {
            PostOption::SuppressHeader => self.emit_header = false,
            PostOption::SuppressComments => self.emit_comments = false,
            PostOption::LineNumbers => self.emit_line_numbers = true,
            PostOption::NoShowEditor => self.show_editor = false,
            PostOption::Precision(raw) => {
                if !raw.trim().is_empty() {
                    let precision = raw
                        .trim()
                        .parse::<usize>()
                        .map_err(|e| ConfigError::invalid_argument(flag, format!("'{}': {}", raw, e)))?;
                    if precision > MAX_PRECISION {
                        return Err(ConfigError::invalid_argument(
                            flag,
                            format!("'{}': must be at most {}", raw, MAX_PRECISION),
                        ));
                    }
                    self.precision = precision;
                }
            }
            PostOption::Preamble(text) => {
                if !text.is_empty() {
                    self.preamble = text;
                }
            }
            PostOption::Postamble(text) => {
                if !text.is_empty() {
                    self.postamble = text;
                }
            }
            PostOption::Imperial => self.measurement_system = MeasurementSystem::Imperial,
            PostOption::PierceDelay(raw) => {
                if !raw.trim().is_empty() {
                    let delay = raw
                        .trim()
                        .parse::<f64>()
                        .map_err(|e| ConfigError::invalid_argument(flag, format!("'{}': {}", raw, e)))?;
                    if !delay.is_finite() || delay < 0.0 {
                        return Err(ConfigError::invalid_argument(
                            flag,
                            format!("'{}': must be a non-negative number of seconds", raw),
                        ));
                    }
                    self.pierce_delay = delay;
                }
            }
        }
        Ok(())
    }

    /// Whether the three header comment lines are emitted
    pub fn emit_header(&self) -> bool {
        self.emit_header
    }

    /// Whether structural comments are emitted
    pub fn emit_comments(&self) -> bool {
        self.emit_comments
    }

    /// Whether lines are prefixed with `N` numbers
    pub fn emit_line_numbers(&self) -> bool {
        self.emit_line_numbers
    }

    /// Whether the caller may offer the output for preview
    pub fn show_editor(&self) -> bool {
        self.show_editor
    }

    /// Number of fractional digits for every emitted value
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Preamble text
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Postamble text
    pub fn postamble(&self) -> &str {
        &self.postamble
    }

    /// Active measurement system
    pub fn measurement_system(&self) -> MeasurementSystem {
        self.measurement_system
    }

    /// Pierce delay in seconds
    pub fn pierce_delay(&self) -> f64 {
        self.pierce_delay
    }

    /// Export timestamp, if one was attached
    pub fn timestamp(&self) -> Option<&DateTime<Local>> {
        self.timestamp.as_ref()
    }

    /// Length unit label ("mm" or "in")
    pub fn length_unit(&self) -> &'static str {
        get_unit_label(self.measurement_system)
    }

    /// Feed rate units for `F` words
    pub fn feed_rate_units(&self) -> FeedRateUnits {
        self.measurement_system.feed_rate_units()
    }

    /// Unit mode directive (`G21` or `G20`)
    pub fn units_directive(&self) -> &'static str {
        self.measurement_system.units_directive()
    }
}
