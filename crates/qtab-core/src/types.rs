//! Common types used throughout qtab

use serde::{Deserialize, Serialize};

/// Reward value observed from the environment
pub type Reward = f64;

/// Identity of the player an agent learns for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<char> for PlayerId {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

/// Operating mode of an agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Exploration allowed
    #[default]
    Training,
    /// Greedy play, exploration rate pinned to zero
    Evaluation,
}

impl Mode {
    pub fn is_training(self) -> bool {
        matches!(self, Mode::Training)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Training => write!(f, "training"),
            Mode::Evaluation => write!(f, "evaluation"),
        }
    }
}

impl From<bool> for Mode {
    fn from(training: bool) -> Self {
        if training {
            Mode::Training
        } else {
            Mode::Evaluation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display() {
        let id = PlayerId::from('X');
        assert_eq!(id.to_string(), "X");
        assert_eq!(id.as_str(), "X");
        assert_eq!(PlayerId::new("O"), PlayerId::from("O"));
    }

    #[test]
    fn test_mode_default_is_training() {
        assert_eq!(Mode::default(), Mode::Training);
        assert!(Mode::default().is_training());
    }

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(Mode::from(true), Mode::Training);
        assert_eq!(Mode::from(false), Mode::Evaluation);
        assert!(!Mode::Evaluation.is_training());
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&Mode::Evaluation).unwrap();
        assert_eq!(json, "\"evaluation\"");
        let parsed: Mode = serde_json::from_str("\"training\"").unwrap();
        assert_eq!(parsed, Mode::Training);
    }
}
