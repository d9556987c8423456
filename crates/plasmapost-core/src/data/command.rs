//! Motion command type

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameter words of a command, keyed by letter, in insertion order
pub type Parameters = IndexMap<String, f64>;

/// A single abstract motion command
///
/// Values are in the CAM model's base units: millimeters for `X`, `Y`, `I`
/// and `J`, millimeters per second for `F`. Custom commands may carry
/// arbitrary keys; their order is preserved exactly as inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name (e.g. "G0", "G1", "M100")
    pub name: String,
    /// Parameter words
    #[serde(default)]
    pub parameters: Parameters,
}

impl Command {
    /// Create a command without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
        }
    }

    /// Add a parameter word, keeping insertion order
    pub fn with_param(mut self, key: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    /// Create a command from a list of parameter words
    pub fn with_params<K, I>(name: impl Into<String>, params: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            name: name.into(),
            parameters: params.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Look up a parameter value by letter
    pub fn param(&self, key: &str) -> Option<f64> {
        self.parameters.get(key).copied()
    }

    /// Whether the command carries any parameter words
    pub fn has_params(&self) -> bool {
        !self.parameters.is_empty()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (key, value) in &self.parameters {
            write!(f, " {}{}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let cmd = Command::new("CustomCommandFoo")
            .with_param("Z", 1.0)
            .with_param("A", 2.0)
            .with_param("M", 3.0);
        let keys: Vec<&str> = cmd.parameters.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_param_lookup() {
        let cmd = Command::with_params("G1", [("X", 10.0), ("F", 500.0)]);
        assert_eq!(cmd.param("X"), Some(10.0));
        assert_eq!(cmd.param("Y"), None);
        assert!(cmd.has_params());
        assert!(!Command::new("M30").has_params());
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let cmd: Command =
            serde_json::from_str(r#"{"name":"M100","parameters":{"Q":1.5,"P":2.0}}"#).unwrap();
        let keys: Vec<&str> = cmd.parameters.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Q", "P"]);

        let bare: Command = serde_json::from_str(r#"{"name":"G17"}"#).unwrap();
        assert!(bare.parameters.is_empty());
    }

    #[test]
    fn test_display() {
        let cmd = Command::with_params("G0", [("X", 1.5), ("Y", 2.0)]);
        assert_eq!(cmd.to_string(), "G0 X1.5 Y2");
    }
}
