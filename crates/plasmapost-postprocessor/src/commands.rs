//! Command classification
//!
//! Decides which emission rule applies to a command name. Names outside
//! every known set are [`CommandKind::Other`] and still go through the
//! generic parameter rule.

/// Marker contained in the names of vendor/user defined commands
pub const CUSTOM_COMMAND_TAG: &str = "CustomCommand";

/// Plasma directives passed through with their parameters
pub const SPECIAL_PLASMA_COMMANDS: [&str; 2] = ["M100", "M101"];

/// Commands that have no meaning on a plasma table
pub const IGNORED_COMMANDS: [&str; 7] = ["M3", "M4", "M5", "G17", "G18", "G19", "G43"];

/// Feed moves that need the torch burning
pub const CUTTING_COMMANDS: [&str; 3] = ["G1", "G2", "G3"];

/// Rapid traverse
pub const RAPID_COMMAND: &str = "G0";

/// Parameter letters emitted for motion commands, in output order
pub const TRACKED_PARAMETERS: [&str; 5] = ["X", "Y", "F", "I", "J"];

/// Feed rate parameter letter
pub const FEED_PARAMETER: &str = "F";

/// Emission rule for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Carried through as a comment
    Custom,
    /// `M100` / `M101`
    SpecialPlasma,
    /// Dropped silently
    Ignored,
    /// `G1`, `G2`, `G3`
    Cutting,
    /// `G0`
    Rapid,
    /// Anything else
    Other,
}

impl CommandKind {
    /// Classify a command by name
    pub fn classify(name: &str) -> Self {
        if name.contains(CUSTOM_COMMAND_TAG) {
            Self::Custom
        } else if SPECIAL_PLASMA_COMMANDS.contains(&name) {
            Self::SpecialPlasma
        } else if IGNORED_COMMANDS.contains(&name) {
            Self::Ignored
        } else if CUTTING_COMMANDS.contains(&name) {
            Self::Cutting
        } else if name == RAPID_COMMAND {
            Self::Rapid
        } else {
            Self::Other
        }
    }
}
