//! Data models for post-processor input
//!
//! This module provides:
//! - Motion commands (name plus ordered parameter words)
//! - Motion objects (one machining operation with activity flags)
//! - Jobs (the ordered object list handed over by the CAM model)

pub mod command;
pub mod motion_object;

pub use command::{Command, Parameters};
pub use motion_object::{Job, MotionObject};
