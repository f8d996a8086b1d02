//! Neighbour generation: the customization point of the search.
//!
//! A [`NeighbourRule`] turns one state into its successors and the cost of
//! reaching each. The stock rules both use the [`Run`] descriptor and both
//! forbid immediate U-turns:
//!
//! - [`Unconstrained`]: any non-reversing heading, one cell at a time
//! - [`RunLimited`]: straight runs bounded by [`RunLimits`]; a turn jumps
//!   `min` cells at once, paying for every cell it crosses

use crate::policy::RunLimits;
use crate::state::{Run, SearchState};
use gridwalk_core::{Direction, SearchError};
use gridwalk_grid::CostGrid;
use smallvec::SmallVec;

/// Successor buffer: `(state, step_cost)` pairs.
///
/// Inline capacity covers both stock rules without heap allocation.
pub type Neighbours<R> = SmallVec<[(SearchState<R>, u64); 4]>;

/// Generates the successors of a search state.
///
/// Implementations must be deterministic and must only push states whose
/// position lies inside `grid`. Step costs are non-negative by type.
///
/// Closures of the form `Fn(&SearchState<R>, &CostGrid, &mut Neighbours<R>)`
/// implement this trait.
pub trait NeighbourRule<R> {
    /// Append the successors of `state` to `out`.
    fn expand(&self, state: &SearchState<R>, grid: &CostGrid, out: &mut Neighbours<R>);
}

impl<R, F> NeighbourRule<R> for F
where
    F: Fn(&SearchState<R>, &CostGrid, &mut Neighbours<R>),
{
    fn expand(&self, state: &SearchState<R>, grid: &CostGrid, out: &mut Neighbours<R>) {
        self(state, grid, out)
    }
}

// ── Unconstrained ──────────────────────────────────────────────────

/// Move one cell in any heading except straight back.
///
/// The run length saturates at 1, so the state space is at most five
/// states per cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unconstrained;

impl NeighbourRule<Run> for Unconstrained {
    fn expand(&self, state: &SearchState<Run>, grid: &CostGrid, out: &mut Neighbours<Run>) {
        for dir in Direction::ALL {
            if state.run.reverses(dir) {
                continue;
            }
            if let Some(next) = grid.step(state.pos, dir, 1) {
                out.push((SearchState::new(next, Run::new(dir, 1)), u64::from(grid[next])));
            }
        }
    }
}

// ── RunLimited ─────────────────────────────────────────────────────

/// Straight runs bounded below and above.
///
/// From a state heading `h` with run length `len`:
/// - continue one cell along `h` while `len < max`;
/// - turn left or right, moving `min` cells at once. The step cost is the
///   sum of every crossed cell, destination included.
///
/// Before the first move all four headings count as turns. Because every
/// turn lands with `len == min`, any reachable state already satisfies the
/// minimum run, so goal predicates only need to check the position.
#[derive(Clone, Copy, Debug)]
pub struct RunLimited {
    limits: RunLimits,
}

impl RunLimited {
    /// Build a rule, validating `limits`.
    pub fn new(limits: RunLimits) -> Result<Self, SearchError> {
        limits.validate()?;
        Ok(Self { limits })
    }

    /// The configured limits.
    pub fn limits(&self) -> RunLimits {
        self.limits
    }
}

impl NeighbourRule<Run> for RunLimited {
    fn expand(&self, state: &SearchState<Run>, grid: &CostGrid, out: &mut Neighbours<Run>) {
        let Run { heading, len } = state.run;

        if let Some(h) = heading {
            if len < self.limits.max {
                if let Some(next) = grid.step(state.pos, h, 1) {
                    out.push((
                        SearchState::new(next, Run::new(h, len + 1)),
                        u64::from(grid[next]),
                    ));
                }
            }
        }

        let min = self.limits.min;
        for dir in Direction::ALL {
            if heading.is_some_and(|h| h == dir || h == dir.opposite()) {
                continue;
            }
            if let Some((next, cost)) = grid.segment_cost(state.pos, dir, min as usize) {
                out.push((SearchState::new(next, Run::new(dir, min)), cost));
            }
        }
    }
}
