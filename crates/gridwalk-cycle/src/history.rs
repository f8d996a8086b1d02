//! Cycle detection by remembering every state.
//!
//! Uses more memory than Floyd's method but sees each state exactly once,
//! and keeps them in insertion order so any step of the trajectory can be
//! read back after detection without calling `step` again.

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use crate::cycle::Cycle;

/// Ordered record of the states of one trajectory.
///
/// Each state maps to the step index at which it first appeared, which is
/// also its insertion index.
#[derive(Clone, Debug)]
pub struct History<S: Hash + Eq> {
    seen: IndexMap<S, u64>,
}

impl<S: Hash + Eq> History<S> {
    /// An empty history.
    pub fn new() -> Self {
        Self {
            seen: IndexMap::new(),
        }
    }

    /// Record the next state of the trajectory.
    ///
    /// Returns the cycle the first time `state` repeats an earlier one.
    /// A repeated state is not stored again, so once a cycle is reported
    /// further observations keep reporting it.
    pub fn observe(&mut self, state: S) -> Option<Cycle> {
        let next = self.seen.len() as u64;
        match self.seen.get(&state) {
            Some(&first) => Some(Cycle {
                mu: first,
                lam: next - first,
            }),
            None => {
                self.seen.insert(state, next);
                None
            }
        }
    }

    /// The step index at which `state` first appeared.
    pub fn first_seen(&self, state: &S) -> Option<u64> {
        self.seen.get(state).copied()
    }

    /// The state recorded at step `t`.
    pub fn get(&self, t: u64) -> Option<&S> {
        let index = usize::try_from(t).ok()?;
        self.seen.get_index(index).map(|(s, _)| s)
    }

    /// The state at step `t` of a trajectory whose cycle is `cycle`.
    ///
    /// Returns `None` if the history does not cover `cycle.reduce(t)`.
    pub fn state_at(&self, cycle: Cycle, t: u64) -> Option<&S> {
        self.get(cycle.reduce(t))
    }

    /// Recorded states with their step indices, in order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &S)> + '_ {
        self.seen.iter().map(|(s, &t)| (t, s))
    }

    /// Number of distinct states recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<S: Hash + Eq> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk the trajectory from `initial`, recording states until one repeats.
///
/// Returns the cycle and the full history (exactly `mu + lam` states).
/// Same termination contract as [`detect`](crate::detect).
pub fn detect_by_history<S, F>(initial: S, step: F) -> (Cycle, History<S>)
where
    S: Hash + Eq,
    F: Fn(&S) -> S,
{
    let mut history = History::new();
    let mut state = initial;
    loop {
        let next = step(&state);
        if let Some(cycle) = history.observe(state) {
            debug!(mu = cycle.mu, lam = cycle.lam, "cycle detected by history");
            return (cycle, history);
        }
        state = next;
    }
}
