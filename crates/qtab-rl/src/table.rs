//! Value table keyed by (state, action) pairs

use std::collections::HashMap;
use std::hash::Hash;

/// Sparse mapping from (state, action) to a value estimate
///
/// Entries are grouped per state, so a state is only ever present with at
/// least one action. Entries are only ever added or overwritten. The whole
/// table can be replaced at once, but individual keys are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable<S, A>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    values: HashMap<S, HashMap<A, f64>>,
}

impl<S, A> ValueTable<S, A>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Value for the pair without touching the table
    pub fn get(&self, state: &S, action: &A) -> Option<f64> {
        self.values
            .get(state)
            .and_then(|actions| actions.get(action))
            .copied()
    }

    /// Store a value, overwriting any previous estimate
    pub fn set(&mut self, state: S, action: A, value: f64) {
        self.values.entry(state).or_default().insert(action, value);
    }

    pub fn contains(&self, state: &S, action: &A) -> bool {
        self.get(state, action).is_some()
    }

    /// Number of stored (state, action) entries
    pub fn len(&self) -> usize {
        self.values.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct states appearing in any key
    pub fn state_count(&self) -> usize {
        self.values.len()
    }

    /// Arithmetic mean of all stored values, 0.0 when empty
    pub fn mean(&self) -> f64 {
        let len = self.len();
        if len == 0 {
            return 0.0;
        }
        self.iter().map(|(_, _, value)| value).sum::<f64>() / len as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, f64)> {
        self.values.iter().flat_map(|(state, actions)| {
            actions
                .iter()
                .map(move |(action, value)| (state, action, *value))
        })
    }
}

impl<S, A> ValueTable<S, A>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    /// Value for the pair, recording 0.0 when the pair is unseen
    ///
    /// Keys are only cloned when a new entry has to be created.
    pub fn get_or_insert(&mut self, state: &S, action: &A) -> f64 {
        if let Some(actions) = self.values.get_mut(state) {
            if let Some(value) = actions.get(action) {
                return *value;
            }
            actions.insert(action.clone(), 0.0);
        } else {
            self.values
                .insert(state.clone(), HashMap::from([(action.clone(), 0.0)]));
        }
        0.0
    }
}

impl<S, A> Default for ValueTable<S, A>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> FromIterator<((S, A), f64)> for ValueTable<S, A>
where
    S: Eq + Hash,
    A: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = ((S, A), f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for ((state, action), value) in iter {
            table.set(state, action, value);
        }
        table
    }
}
