//! Motion objects and jobs

use super::command::Command;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_active() -> bool {
    true
}

/// One machining operation as exported by the CAM model
///
/// The optional fields are resolved when the object is built or
/// deserialized: `base_active` is `None` when the operation has no base
/// object, and `path` is `None` when the object has no motion path at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionObject {
    /// Internal object name
    pub name: String,
    /// User-visible label
    pub label: String,
    /// Activity flag of the operation itself
    #[serde(default = "default_active")]
    pub active: bool,
    /// Activity flag of the base object, if there is one
    #[serde(default)]
    pub base_active: Option<bool>,
    /// Ordered motion commands
    #[serde(default)]
    pub path: Option<Vec<Command>>,
}

impl MotionObject {
    /// Create an active object with an empty path
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            active: true,
            base_active: None,
            path: Some(Vec::new()),
        }
    }

    /// Replace the motion path
    pub fn with_commands(mut self, commands: Vec<Command>) -> Self {
        self.path = Some(commands);
        self
    }

    /// Drop the motion path entirely
    pub fn without_path(mut self) -> Self {
        self.path = None;
        self
    }

    /// Set the object's own activity flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the base object's activity flag
    pub fn with_base_active(mut self, active: bool) -> Self {
        self.base_active = Some(active);
        self
    }

    /// False when the object or its base object is switched off
    pub fn is_active(&self) -> bool {
        self.active && self.base_active != Some(false)
    }

    /// The motion path, if the object carries one
    pub fn commands(&self) -> Option<&[Command]> {
        self.path.as_deref()
    }
}

/// Ordered list of motion objects to post-process
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Objects in program order
    pub objects: Vec<MotionObject>,
}

impl Job {
    /// Create a job from objects
    pub fn new(objects: Vec<MotionObject>) -> Self {
        Self { objects }
    }

    /// Parse a job from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a job from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
