//! Q-learning agent over a value table
//!
//! The agent owns a [`ValueTable`] and updates it with the off-policy
//! temporal difference rule
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! Actions are picked epsilon-greedily while training and greedily in
//! evaluation mode.

use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use qtab_core::{AgentConfig, Mode, PlayerId, Reward};

use crate::learner::Learner;
use crate::random::{RandomSource, StdRandomSource};
use crate::table::ValueTable;
use crate::transition::Transition;

/// Learning statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentStats {
    /// Distinct states appearing in the table
    pub states_learned: usize,
    /// Stored (state, action) entries
    pub total_q_values: usize,
    /// Mean of all stored values, 0 for an empty table
    pub avg_q_value: f64,
}

/// Tabular Q-learning agent for a single player
#[derive(Debug, Clone)]
pub struct QLearningAgent<S, A, R = StdRandomSource>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    player: PlayerId,
    pub(crate) table: ValueTable<S, A>,
    learning_rate: f64,
    discount_factor: f64,
    exploration_rate: f64,
    mode: Mode,
    rng: R,
}

impl<S, A> QLearningAgent<S, A, StdRandomSource>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    /// Create an agent with an entropy-seeded random source
    pub fn new(player: impl Into<PlayerId>, config: AgentConfig) -> Self {
        Self::with_random_source(player, config, StdRandomSource::from_entropy())
    }

    /// Create an agent whose exploration is reproducible
    pub fn seeded(player: impl Into<PlayerId>, config: AgentConfig, seed: u64) -> Self {
        Self::with_random_source(player, config, StdRandomSource::seeded(seed))
    }
}

impl<S, A, R> QLearningAgent<S, A, R>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    R: RandomSource,
{
    /// Create an agent drawing randomness from `rng`
    pub fn with_random_source(player: impl Into<PlayerId>, config: AgentConfig, rng: R) -> Self {
        let player = player.into();
        warn_out_of_range(&config);
        info!(
            "Q-learning agent for player {} created (alpha={}, gamma={}, epsilon={})",
            player, config.learning_rate, config.discount_factor, config.exploration_rate
        );

        Self {
            player,
            table: ValueTable::new(),
            learning_rate: config.learning_rate,
            discount_factor: config.discount_factor,
            exploration_rate: config.exploration_rate,
            mode: Mode::Training,
            rng,
        }
    }

    /// Current estimate for the pair; unseen pairs are recorded at 0.0
    pub fn value(&mut self, state: &S, action: &A) -> f64 {
        self.table.get_or_insert(state, action)
    }

    /// Current estimate for the pair without recording it
    pub fn peek_value(&self, state: &S, action: &A) -> Option<f64> {
        self.table.get(state, action)
    }

    /// Epsilon-greedy action selection
    ///
    /// Returns `None` only when `available_actions` is empty. Ties go to
    /// the action listed first.
    pub fn choose_action(&mut self, state: &S, available_actions: &[A]) -> Option<A> {
        if available_actions.is_empty() {
            return None;
        }

        if self.mode.is_training() && self.rng.uniform() < self.exploration_rate {
            let index = self.rng.pick(available_actions.len());
            debug!("Exploring: picked action {} of {}", index, available_actions.len());
            return Some(available_actions[index].clone());
        }

        let mut best_action = None;
        let mut best_value = f64::NEG_INFINITY;
        for action in available_actions {
            let value = self.table.get_or_insert(state, action);
            if value > best_value {
                best_value = value;
                best_action = Some(action);
            }
        }

        // Only reachable when every value is NaN or -inf
        let action = match best_action {
            Some(action) => action,
            None => &available_actions[self.rng.pick(available_actions.len())],
        };

        Some(action.clone())
    }

    /// Q-learning update for one observed step
    ///
    /// An empty `next_actions` marks `next_state` as terminal, so no
    /// future value is bootstrapped from it.
    pub fn update(
        &mut self,
        state: &S,
        action: &A,
        reward: Reward,
        next_state: &S,
        next_actions: &[A],
    ) {
        let current_q = self.table.get_or_insert(state, action);

        let max_next_q = if next_actions.is_empty() {
            0.0
        } else {
            next_actions
                .iter()
                .map(|next_action| self.table.get_or_insert(next_state, next_action))
                .fold(f64::NEG_INFINITY, f64::max)
        };

        let td_error = reward + self.discount_factor * max_next_q - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        trace!("TD error {:.4}, Q {:.4} -> {:.4}", td_error, current_q, new_q);

        self.table.set(state.clone(), action.clone(), new_q);
    }

    /// Learn from a recorded transition
    pub fn learn(&mut self, transition: &Transition<S, A>) {
        self.update(
            &transition.state,
            &transition.action,
            transition.reward,
            &transition.next_state,
            &transition.next_actions,
        );
    }

    /// Switch between training and evaluation
    ///
    /// Entering evaluation sets the exploration rate to 0. Returning to
    /// training leaves it at 0 until it is set again explicitly.
    pub fn set_training(&mut self, training: bool) {
        self.mode = Mode::from(training);
        if !training {
            self.exploration_rate = 0.0;
        }
        debug!(
            "Player {} switched to {} mode (epsilon={})",
            self.player, self.mode, self.exploration_rate
        );
    }

    /// Get statistics
    pub fn stats(&self) -> AgentStats {
        AgentStats {
            states_learned: self.table.state_count(),
            total_q_values: self.table.len(),
            avg_q_value: self.table.mean(),
        }
    }
}

impl<S, A, R> QLearningAgent<S, A, R>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_training(&self) -> bool {
        self.mode.is_training()
    }

    pub fn table(&self) -> &ValueTable<S, A> {
        &self.table
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// Current hyperparameters
    pub fn config(&self) -> AgentConfig {
        AgentConfig::new(
            self.learning_rate,
            self.discount_factor,
            self.exploration_rate,
        )
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
        warn_out_of_range(&self.config());
    }

    pub fn set_discount_factor(&mut self, discount_factor: f64) {
        self.discount_factor = discount_factor;
        warn_out_of_range(&self.config());
    }

    pub fn set_exploration_rate(&mut self, exploration_rate: f64) {
        self.exploration_rate = exploration_rate;
        warn_out_of_range(&self.config());
    }

    /// Get hyperparameters as JSON
    pub fn params(&self) -> serde_json::Value {
        serde_json::json!({
            "learning_rate": self.learning_rate,
            "discount_factor": self.discount_factor,
            "exploration_rate": self.exploration_rate,
            "mode": self.mode,
            "q_table_size": self.table.len()
        })
    }

    /// Set hyperparameters from JSON, ignoring fields that are absent or not numbers
    pub fn set_params(&mut self, params: &serde_json::Value) {
        if let Some(lr) = params["learning_rate"].as_f64() {
            self.learning_rate = lr;
        }
        if let Some(df) = params["discount_factor"].as_f64() {
            self.discount_factor = df;
        }
        if let Some(eps) = params["exploration_rate"].as_f64() {
            self.exploration_rate = eps;
        }
        warn_out_of_range(&self.config());
    }
}

impl<S, A, R> Learner<S, A> for QLearningAgent<S, A, R>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    R: RandomSource,
{
    fn name(&self) -> &str {
        "q_learning"
    }

    fn choose_action(&mut self, state: &S, available_actions: &[A]) -> Option<A> {
        QLearningAgent::choose_action(self, state, available_actions)
    }

    fn update(&mut self, state: &S, action: &A, reward: Reward, next_state: &S, next_actions: &[A]) {
        QLearningAgent::update(self, state, action, reward, next_state, next_actions);
    }

    fn set_training(&mut self, training: bool) {
        QLearningAgent::set_training(self, training);
    }

    fn stats(&self) -> AgentStats {
        QLearningAgent::stats(self)
    }
}

fn warn_out_of_range(config: &AgentConfig) {
    for name in config.out_of_range() {
        warn!("Hyperparameter {} is outside its usual range: {:?}", name, config);
    }
}
