//! Torch state tracking
//!
//! One [`EngineState`] lives for a whole translation run. The torch state is
//! carried from one motion object to the next and is only closed once, after
//! the last object.

use crate::commands::{CommandKind, TRACKED_PARAMETERS};
use indexmap::IndexMap;
use plasmapost_core::Command;

/// Torch ignition directive
pub const TORCH_ON: &str = "M7 (Torch ON)";

/// Torch shutdown directive
pub const TORCH_OFF: &str = "M8 (Torch OFF)";

/// Dwell directive word
pub const DWELL: &str = "G4";

/// State change required before a command's own line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorchTransition {
    /// Fire the torch and wait for the pierce delay
    Ignite,
    /// Shut the torch off
    Extinguish,
}

/// Mutable state threaded through one translation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    torch_engaged: bool,
    last_known_position: IndexMap<String, f64>,
}

impl EngineState {
    /// Fresh state: torch off, no known position
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the torch is currently firing
    pub fn torch_engaged(&self) -> bool {
        self.torch_engaged
    }

    /// Transition a command of `kind` requires, if any
    pub fn transition_for(&self, kind: CommandKind) -> Option<TorchTransition> {
        match kind {
            CommandKind::Cutting if !self.torch_engaged => Some(TorchTransition::Ignite),
            CommandKind::Rapid if self.torch_engaged => Some(TorchTransition::Extinguish),
            _ => None,
        }
    }

    /// Record a transition as applied
    pub fn apply(&mut self, transition: TorchTransition) {
        self.torch_engaged = transition == TorchTransition::Ignite;
        tracing::debug!(?transition, "Torch state changed");
    }

    /// Remember the raw value of every tracked letter present on `command`
    pub fn record_position(&mut self, command: &Command) {
        for letter in TRACKED_PARAMETERS {
            if let Some(value) = command.param(letter) {
                self.last_known_position.insert(letter.to_string(), value);
            }
        }
    }

    /// Last raw value seen for each tracked letter
    pub fn last_known_position(&self) -> &IndexMap<String, f64> {
        &self.last_known_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignite_only_when_off() {
        let mut state = EngineState::new();
        assert_eq!(
            state.transition_for(CommandKind::Cutting),
            Some(TorchTransition::Ignite)
        );
        assert_eq!(state.transition_for(CommandKind::Rapid), None);

        state.apply(TorchTransition::Ignite);
        assert!(state.torch_engaged());
        assert_eq!(state.transition_for(CommandKind::Cutting), None);
        assert_eq!(
            state.transition_for(CommandKind::Rapid),
            Some(TorchTransition::Extinguish)
        );

        state.apply(TorchTransition::Extinguish);
        assert!(!state.torch_engaged());
    }

    #[test]
    fn test_other_kinds_never_transition() {
        let mut state = EngineState::new();
        for kind in [
            CommandKind::Custom,
            CommandKind::SpecialPlasma,
            CommandKind::Ignored,
            CommandKind::Other,
        ] {
            assert_eq!(state.transition_for(kind), None);
        }
        state.apply(TorchTransition::Ignite);
        assert_eq!(state.transition_for(CommandKind::Other), None);
    }

    #[test]
    fn test_record_position() {
        let mut state = EngineState::new();
        state.record_position(&Command::with_params("G0", [("X", 1.0), ("Y", 2.0), ("Z", 3.0)]));
        state.record_position(&Command::with_params("G1", [("X", 4.0), ("F", 10.0)]));

        let position = state.last_known_position();
        assert_eq!(position.get("X"), Some(&4.0));
        assert_eq!(position.get("Y"), Some(&2.0));
        assert_eq!(position.get("F"), Some(&10.0));
        assert_eq!(position.get("Z"), None);
    }
}
