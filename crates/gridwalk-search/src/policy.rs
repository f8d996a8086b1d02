//! Search configuration and validation.
//!
//! [`SearchPolicy`] bounds how much work a single invocation may do.
//! [`RunLimits`] configures the straight-run constraints of
//! [`RunLimited`](crate::RunLimited). Both are plain data with a
//! `validate()` method; construction never fails.

use gridwalk_core::SearchError;

// ── RunLimits ──────────────────────────────────────────────────────

/// Straight-run constraints for run-limited neighbour generation.
///
/// A mover must travel at least `min` cells in a heading before it may
/// turn, and at most `max` cells before it must turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunLimits {
    /// Minimum run before turning (and before the first stop). At least 1.
    pub min: u32,
    /// Maximum straight run. At least `min`.
    pub max: u32,
}

impl RunLimits {
    /// Turn whenever you like, but never more than three cells straight.
    pub const CRUCIBLE: RunLimits = RunLimits { min: 1, max: 3 };

    /// At least four cells before turning, at most ten straight.
    pub const ULTRA_CRUCIBLE: RunLimits = RunLimits { min: 4, max: 10 };

    /// Check `1 <= min <= max`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.min == 0 || self.min > self.max {
            return Err(SearchError::InvalidRunLimits {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for RunLimits {
    fn default() -> Self {
        Self::CRUCIBLE
    }
}

// ── SearchPolicy ───────────────────────────────────────────────────

/// Work bounds for a single search invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Maximum number of states finalized before giving up. `None` =
    /// unbounded. When hit, the search reports
    /// [`SearchOutcome::BudgetExhausted`](crate::SearchOutcome::BudgetExhausted).
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// No limit on expansions.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stop after `n` expansions.
    pub fn with_max_expansions(n: u64) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }

    /// Whether `expansions` has reached the budget.
    pub(crate) fn exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|limit| expansions >= limit)
    }
}
