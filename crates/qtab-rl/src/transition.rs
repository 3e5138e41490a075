//! Observed transitions fed to the learner

use serde::{Deserialize, Serialize};

use qtab_core::Reward;

/// A single transition (s, a, r, s', legal actions in s')
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<S, A> {
    pub state: S,
    pub action: A,
    pub reward: Reward,
    pub next_state: S,
    /// Empty when `next_state` is terminal
    pub next_actions: Vec<A>,
}

impl<S, A> Transition<S, A> {
    /// Create a new transition
    pub fn new(state: S, action: A, reward: Reward, next_state: S, next_actions: Vec<A>) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
            next_actions,
        }
    }

    /// Whether the successor state offers no further actions
    pub fn is_terminal(&self) -> bool {
        self.next_actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_creation() {
        let t = Transition::new("s1", 4u8, 1.0, "s2", vec![0, 1]);
        assert_eq!(t.reward, 1.0);
        assert_eq!(t.action, 4);
        assert!(!t.is_terminal());
    }

    #[test]
    fn test_terminal_transition() {
        let t: Transition<&str, u8> = Transition::new("s1", 4, -1.0, "s2", vec![]);
        assert!(t.is_terminal());
    }

    #[test]
    fn test_transition_serialization() {
        let t = Transition::new("s1".to_string(), 2u8, 0.5, "s2".to_string(), vec![3, 5]);
        let json = serde_json::to_string(&t).unwrap();
        let parsed: Transition<String, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);
    }
}
