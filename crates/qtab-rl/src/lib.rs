//! qtab RL - Tabular Q-learning for discrete games
//!
//! This crate provides a value-table agent that learns action values for
//! finite-state, finite-action games through temporal difference updates.
//! The environment loop is supplied by the caller: it reports states,
//! legal actions, rewards, and successor states to the agent.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod learner;
pub mod persistence;
pub mod random;
pub mod table;
pub mod transition;

pub use agent::{AgentStats, QLearningAgent};
pub use learner::Learner;
pub use random::{RandomSource, StdRandomSource};
pub use table::ValueTable;
pub use transition::Transition;

pub use qtab_core::{AgentConfig, Mode, PlayerId, QTabError, Result, Reward};
