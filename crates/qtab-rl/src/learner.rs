//! Learner trait driven by environment loops

use qtab_core::Reward;

use crate::agent::AgentStats;
use crate::transition::Transition;

/// Trait for tabular learners that an environment loop can drive
pub trait Learner<S, A> {
    /// Algorithm name
    fn name(&self) -> &str;

    /// Pick an action among `available_actions`, `None` when there are none
    fn choose_action(&mut self, state: &S, available_actions: &[A]) -> Option<A>;

    /// Learn from a single observed step
    fn update(&mut self, state: &S, action: &A, reward: Reward, next_state: &S, next_actions: &[A]);

    /// Switch between training and evaluation
    fn set_training(&mut self, training: bool);

    /// Summary of what has been learned so far
    fn stats(&self) -> AgentStats;

    /// Learn from a recorded transition
    fn learn(&mut self, transition: &Transition<S, A>) {
        self.update(
            &transition.state,
            &transition.action,
            transition.reward,
            &transition.next_state,
            &transition.next_actions,
        );
    }
}
