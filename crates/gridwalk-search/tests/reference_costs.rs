//! Integration test: search costs against a brute-force reference.
//!
//! Enumerates every reachable state with the same neighbour rule, then
//! relaxes all edges until nothing changes (Bellman-Ford). The minimum
//! over goal states must equal what the priority-queue search reports.

use std::collections::{HashMap, HashSet, VecDeque};

use gridwalk_core::Pos;
use gridwalk_grid::{CostGrid, Grid};
use gridwalk_search::{
    search, shortest_path_cost, NeighbourRule, Neighbours, Run, RunLimited, RunLimits,
    SearchOutcome, SearchPolicy, SearchState, Unconstrained,
};
use gridwalk_test_utils::{grid_from, uniform_grid};
use proptest::prelude::*;

// ── Reference implementation ─────────────────────────────────────────

fn reference_cost<N: NeighbourRule<Run>>(
    grid: &CostGrid,
    start: Pos,
    goal: Pos,
    rule: &N,
) -> Option<u64> {
    let start = SearchState::start(start);
    let mut edges: Vec<(SearchState<Run>, SearchState<Run>, u64)> = Vec::new();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut buf = Neighbours::new();
    while let Some(state) = queue.pop_front() {
        buf.clear();
        rule.expand(&state, grid, &mut buf);
        for &(next, cost) in &buf {
            edges.push((state, next, cost));
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    let mut dist: HashMap<SearchState<Run>, u64> = HashMap::from([(start, 0)]);
    loop {
        let mut changed = false;
        for &(from, to, cost) in &edges {
            let Some(&d) = dist.get(&from) else { continue };
            let candidate = d + cost;
            if dist.get(&to).is_none_or(|&old| candidate < old) {
                dist.insert(to, candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    dist.iter()
        .filter(|(s, _)| s.pos == goal)
        .map(|(_, &d)| d)
        .min()
}

fn fast_cost<N: NeighbourRule<Run>>(
    grid: &CostGrid,
    start: Pos,
    goal: Pos,
    rule: &N,
) -> Option<u64> {
    shortest_path_cost(grid, SearchState::start(start), rule, |s: &SearchState<Run>| {
        s.pos == goal
    })
    .unwrap()
}

// ── Fixed cases ──────────────────────────────────────────────────────

#[test]
fn lopsided_grid_matches_reference() {
    let grid = Grid::from_rows(vec![
        vec![1, 9, 9, 9, 1],
        vec![1, 1, 9, 1, 1],
        vec![9, 1, 1, 1, 9],
        vec![9, 9, 9, 1, 1],
    ])
    .unwrap();
    let goal = grid.last_pos();
    for limits in [RunLimits::CRUCIBLE, RunLimits { min: 2, max: 3 }] {
        let rule = RunLimited::new(limits).unwrap();
        assert_eq!(
            fast_cost(&grid, Pos::ORIGIN, goal, &rule),
            reference_cost(&grid, Pos::ORIGIN, goal, &rule),
            "limits {limits:?}"
        );
    }
    assert_eq!(
        fast_cost(&grid, Pos::ORIGIN, goal, &Unconstrained),
        reference_cost(&grid, Pos::ORIGIN, goal, &Unconstrained)
    );
}

#[test]
fn expensive_columns_force_detours() {
    // Every odd column costs 9 except in the bottom row.
    let grid = grid_from(5, 7, |r, c| if c % 2 == 1 && r != 4 { 9 } else { 1 });
    let goal = Pos::new(0, 6);
    for limits in [RunLimits::CRUCIBLE, RunLimits { min: 1, max: 5 }] {
        let rule = RunLimited::new(limits).unwrap();
        assert_eq!(
            fast_cost(&grid, Pos::ORIGIN, goal, &rule),
            reference_cost(&grid, Pos::ORIGIN, goal, &rule),
            "limits {limits:?}"
        );
    }
    assert_eq!(
        fast_cost(&grid, Pos::ORIGIN, goal, &Unconstrained),
        reference_cost(&grid, Pos::ORIGIN, goal, &Unconstrained)
    );
}

#[test]
fn stats_are_consistent() {
    let grid = grid_from(6, 6, |r, c| (r * 3 + c * 7) as u32 % 9 + 1);
    let rule = RunLimited::new(RunLimits::CRUCIBLE).unwrap();
    let goal = grid.last_pos();
    let report = search(
        &grid,
        SearchState::start(Pos::ORIGIN),
        &rule,
        |s: &SearchState<Run>| s.pos == goal,
        &SearchPolicy::default(),
    )
    .unwrap();
    assert!(matches!(report.outcome, SearchOutcome::Reached { .. }));
    let stats = report.stats;
    assert!(stats.expansions >= 1);
    assert!(stats.pushes >= stats.expansions);
    assert!(stats.frontier_high_water >= 1);
    assert!(stats.frontier_high_water <= stats.pushes);
}

#[test]
fn budget_below_need_then_above_need() {
    let grid = uniform_grid(8, 8, 1);
    let goal = grid.last_pos();
    let is_goal = |s: &SearchState<Run>| s.pos == goal;
    let full = search(
        &grid,
        SearchState::start(Pos::ORIGIN),
        &Unconstrained,
        is_goal,
        &SearchPolicy::unbounded(),
    )
    .unwrap();
    let needed = full.stats.expansions;

    let short = search(
        &grid,
        SearchState::start(Pos::ORIGIN),
        &Unconstrained,
        is_goal,
        &SearchPolicy::with_max_expansions(needed - 1),
    )
    .unwrap();
    assert_eq!(
        short.outcome,
        SearchOutcome::BudgetExhausted {
            expansions: needed - 1
        }
    );

    let enough = search(
        &grid,
        SearchState::start(Pos::ORIGIN),
        &Unconstrained,
        is_goal,
        &SearchPolicy::with_max_expansions(needed),
    )
    .unwrap();
    assert_eq!(enough.outcome, full.outcome);
}

// ── Property tests ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn run_limited_matches_reference(
        cells in proptest::collection::vec(1u32..10, 20),
        min in 1u32..3,
        extra in 0u32..3,
    ) {
        let grid = Grid::from_parts(4, 5, cells).unwrap();
        let rule = RunLimited::new(RunLimits { min, max: min + extra }).unwrap();
        let goal = grid.last_pos();
        prop_assert_eq!(
            fast_cost(&grid, Pos::ORIGIN, goal, &rule),
            reference_cost(&grid, Pos::ORIGIN, goal, &rule)
        );
    }

    #[test]
    fn unconstrained_matches_reference(
        cells in proptest::collection::vec(1u32..10, 16),
        sr in 0usize..4, sc in 0usize..4,
        gr in 0usize..4, gc in 0usize..4,
    ) {
        let grid = Grid::from_parts(4, 4, cells).unwrap();
        let (start, goal) = (Pos::new(sr, sc), Pos::new(gr, gc));
        prop_assert_eq!(
            fast_cost(&grid, start, goal, &Unconstrained),
            reference_cost(&grid, start, goal, &Unconstrained)
        );
    }
}
