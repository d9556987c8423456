//! # Plasmapost Core
//!
//! Core types and utilities shared by the plasmapost crates.
//! Provides the input data model handed over by the CAM model,
//! measurement system handling, and the error taxonomy.

pub mod data;
pub mod error;
pub mod units;

pub use data::{Command, Job, MotionObject, Parameters};

pub use error::{ConfigError, Error, Result, TranslateError};

pub use units::{FeedRateUnits, MeasurementSystem, MM_PER_INCH};
