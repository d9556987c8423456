//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems.
//! Command values arrive in the CAM model's base units: millimeters for
//! lengths and millimeters per second for velocities. Everything emitted is
//! derived from a single [`MeasurementSystem`], so the length unit, the feed
//! rate unit and the unit mode directive always agree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters in one inch
pub const MM_PER_INCH: f64 = 25.4;

/// Seconds in one minute
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl MeasurementSystem {
    /// Feed rate units used for every `F` word in this system
    pub fn feed_rate_units(self) -> FeedRateUnits {
        match self {
            Self::Metric => FeedRateUnits::MmPerMin,
            Self::Imperial => FeedRateUnits::InPerMin,
        }
    }

    /// Unit mode directive (`G21` for millimeters, `G20` for inches)
    pub fn units_directive(self) -> &'static str {
        match self {
            Self::Metric => "G21",
            Self::Imperial => "G20",
        }
    }

    /// Long unit name used in the program header
    pub fn header_name(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "inches",
        }
    }

    /// Convert a length in millimeters into this system's length unit
    pub fn length_from_mm(self, value_mm: f64) -> f64 {
        match self {
            Self::Metric => value_mm,
            Self::Imperial => value_mm / MM_PER_INCH,
        }
    }

    /// Convert a velocity in mm/s into this system's feed rate unit
    pub fn feed_rate_from_mm_per_sec(self, value: f64) -> f64 {
        self.feed_rate_units().from_mm_per_sec(value)
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "inches" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Feed rate units selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedRateUnits {
    /// Millimeters per minute
    MmPerMin,
    /// Inches per minute
    InPerMin,
}

impl Default for FeedRateUnits {
    fn default() -> Self {
        Self::MmPerMin
    }
}

impl FeedRateUnits {
    /// Convert a velocity in mm/s into these units
    pub fn from_mm_per_sec(self, value: f64) -> f64 {
        match self {
            Self::MmPerMin => value * SECONDS_PER_MINUTE,
            Self::InPerMin => value * SECONDS_PER_MINUTE / MM_PER_INCH,
        }
    }
}

impl fmt::Display for FeedRateUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MmPerMin => write!(f, "mm/min"),
            Self::InPerMin => write!(f, "in/min"),
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_metric_conversion() {
        assert!(approx(MeasurementSystem::Metric.length_from_mm(10.5), 10.5));
        assert!(approx(
            MeasurementSystem::Metric.feed_rate_from_mm_per_sec(500.0),
            30000.0
        ));
    }

    #[test]
    fn test_imperial_conversion() {
        // 1 inch = 25.4 mm
        assert!(approx(MeasurementSystem::Imperial.length_from_mm(25.4), 1.0));
        assert!(approx(MeasurementSystem::Imperial.length_from_mm(12.7), 0.5));

        // 25.4 mm/s = 1 in/s = 60 in/min
        assert!(approx(
            MeasurementSystem::Imperial.feed_rate_from_mm_per_sec(25.4),
            60.0
        ));
    }

    #[test]
    fn test_system_tokens_agree() {
        let metric = MeasurementSystem::Metric;
        assert_eq!(metric.units_directive(), "G21");
        assert_eq!(metric.feed_rate_units().to_string(), "mm/min");
        assert_eq!(get_unit_label(metric), "mm");

        let imperial = MeasurementSystem::Imperial;
        assert_eq!(imperial.units_directive(), "G20");
        assert_eq!(imperial.feed_rate_units().to_string(), "in/min");
        assert_eq!(get_unit_label(imperial), "in");
        assert_eq!(imperial.header_name(), "inches");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Imperial".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Imperial
        );
        assert_eq!(
            "mm".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Metric
        );
        assert!("furlongs".parse::<MeasurementSystem>().is_err());
    }

    #[test]
    fn test_negative_and_zero_values() {
        assert!(approx(MeasurementSystem::Imperial.length_from_mm(-25.4), -1.0));
        assert!(approx(MeasurementSystem::Metric.feed_rate_from_mm_per_sec(0.0), 0.0));
    }
}
