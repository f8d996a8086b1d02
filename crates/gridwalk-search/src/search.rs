//! Search entry point and expansion loop.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use gridwalk_core::SearchError;
use gridwalk_grid::CostGrid;
use tracing::debug;

use crate::frontier::Frontier;
use crate::policy::SearchPolicy;
use crate::rule::{NeighbourRule, Neighbours};
use crate::state::SearchState;

/// How a search terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome<R> {
    /// A goal state was finalized at minimum cost.
    Reached {
        /// Minimum cumulative cost from the start.
        cost: u64,
        /// The first goal state finalized.
        state: SearchState<R>,
    },
    /// The frontier emptied without finalizing a goal state.
    Unreachable,
    /// [`SearchPolicy::max_expansions`] was hit first.
    BudgetExhausted {
        /// Number of states finalized before stopping.
        expansions: u64,
    },
}

impl<R> SearchOutcome<R> {
    /// The goal cost, if one was reached.
    pub fn cost(&self) -> Option<u64> {
        match self {
            Self::Reached { cost, .. } => Some(*cost),
            _ => None,
        }
    }

    /// Returns `true` if the search terminated because a goal was reached.
    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached { .. })
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States finalized (moved from the frontier to the finalized set).
    pub expansions: u64,
    /// Frontier pushes, the start state included.
    pub pushes: u64,
    /// Popped entries skipped because their state was already finalized.
    pub stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Result of a search: the outcome plus work counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport<R> {
    /// How the search terminated.
    pub outcome: SearchOutcome<R>,
    /// Work counters.
    pub stats: SearchStats,
}

/// Run uniform-cost search from `start` until a state satisfying
/// `is_goal` is finalized.
///
/// The distance table and finalized set are owned by this call and
/// dropped on return; `grid` is only read, so concurrent searches may
/// share it.
///
/// Unreachable goals and budget exhaustion are reported through
/// [`SearchOutcome`], not as errors. A start that already satisfies
/// `is_goal` returns cost 0 without expanding anything.
///
/// # Errors
///
/// Returns [`SearchError::StartOutOfBounds`] if `start.pos` is outside
/// `grid`. Empty or ragged grids are rejected earlier, when the
/// [`CostGrid`] is built, with a [`GridError`](gridwalk_core::GridError)
/// that converts into [`SearchError::InvalidInput`].
pub fn search<R, N, G>(
    grid: &CostGrid,
    start: SearchState<R>,
    rule: &N,
    is_goal: G,
    policy: &SearchPolicy,
) -> Result<SearchReport<R>, SearchError>
where
    R: Copy + Eq + Hash + fmt::Debug,
    N: NeighbourRule<R> + ?Sized,
    G: Fn(&SearchState<R>) -> bool,
{
    if !grid.contains(start.pos) {
        return Err(SearchError::StartOutOfBounds { pos: start.pos });
    }

    let span = tracing::debug_span!("search", rows = grid.rows(), cols = grid.cols());
    let _enter = span.enter();

    let mut stats = SearchStats::default();

    if is_goal(&start) {
        debug!(?start, "start state is a goal");
        return Ok(SearchReport {
            outcome: SearchOutcome::Reached {
                cost: 0,
                state: start,
            },
            stats,
        });
    }

    let mut frontier = Frontier::new();
    let mut best: HashMap<SearchState<R>, u64> = HashMap::new();
    let mut finalized: HashSet<SearchState<R>> = HashSet::new();
    let mut successors: Neighbours<R> = Neighbours::new();

    best.insert(start, 0);
    frontier.push(start, 0);
    stats.pushes += 1;

    let outcome = loop {
        let Some((cost, state)) = frontier.pop() else {
            break SearchOutcome::Unreachable;
        };
        if finalized.contains(&state) {
            stats.stale_pops += 1;
            continue;
        }
        if policy.exhausted(stats.expansions) {
            break SearchOutcome::BudgetExhausted {
                expansions: stats.expansions,
            };
        }

        finalized.insert(state);
        stats.expansions += 1;

        if is_goal(&state) {
            break SearchOutcome::Reached { cost, state };
        }

        successors.clear();
        rule.expand(&state, grid, &mut successors);
        for (next, step_cost) in successors.drain(..) {
            if finalized.contains(&next) {
                continue;
            }
            let candidate = cost + step_cost;
            match best.entry(next) {
                Entry::Occupied(mut e) => {
                    if *e.get() <= candidate {
                        continue;
                    }
                    e.insert(candidate);
                }
                Entry::Vacant(e) => {
                    e.insert(candidate);
                }
            }
            frontier.push(next, candidate);
            stats.pushes += 1;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    debug!(
        expansions = stats.expansions,
        pushes = stats.pushes,
        stale_pops = stats.stale_pops,
        frontier_high_water = stats.frontier_high_water,
        ?outcome,
        "search finished"
    );

    Ok(SearchReport { outcome, stats })
}

/// Minimum cost from `start` to any goal state under an unbounded policy.
///
/// Returns `Ok(None)` if no goal is reachable.
pub fn shortest_path_cost<R, N, G>(
    grid: &CostGrid,
    start: SearchState<R>,
    rule: &N,
    is_goal: G,
) -> Result<Option<u64>, SearchError>
where
    R: Copy + Eq + Hash + fmt::Debug,
    N: NeighbourRule<R> + ?Sized,
    G: Fn(&SearchState<R>) -> bool,
{
    let report = search(grid, start, rule, is_goal, &SearchPolicy::unbounded())?;
    Ok(report.outcome.cost())
}
