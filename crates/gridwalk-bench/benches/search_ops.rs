//! Criterion benchmarks for constrained path search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridwalk_bench::{random_cost_grid, REFERENCE_SIDE};
use gridwalk_core::Pos;
use gridwalk_search::{
    search, Run, RunLimited, RunLimits, SearchPolicy, SearchState, Unconstrained,
};

/// Benchmark: corner-to-corner search with no run limits on a full-size grid.
fn bench_unconstrained_141(c: &mut Criterion) {
    let grid = random_cost_grid(REFERENCE_SIDE, REFERENCE_SIDE, 42).unwrap();
    let goal = grid.last_pos();

    c.bench_function("search_unconstrained_141", |b| {
        b.iter(|| {
            let report = search(
                &grid,
                SearchState::start(Pos::ORIGIN),
                &Unconstrained,
                |s: &SearchState<Run>| s.pos == goal,
                &SearchPolicy::default(),
            )
            .unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: crucible limits (1..=3) on a full-size grid.
fn bench_crucible_141(c: &mut Criterion) {
    let grid = random_cost_grid(REFERENCE_SIDE, REFERENCE_SIDE, 42).unwrap();
    let rule = RunLimited::new(RunLimits::CRUCIBLE).unwrap();
    let goal = grid.last_pos();

    c.bench_function("search_crucible_141", |b| {
        b.iter(|| {
            let report = search(
                &grid,
                SearchState::start(Pos::ORIGIN),
                &rule,
                |s: &SearchState<Run>| s.pos == goal,
                &SearchPolicy::default(),
            )
            .unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: ultra-crucible limits (4..=10) on a full-size grid.
fn bench_ultra_crucible_141(c: &mut Criterion) {
    let grid = random_cost_grid(REFERENCE_SIDE, REFERENCE_SIDE, 42).unwrap();
    let rule = RunLimited::new(RunLimits::ULTRA_CRUCIBLE).unwrap();
    let goal = grid.last_pos();

    c.bench_function("search_ultra_crucible_141", |b| {
        b.iter(|| {
            let report = search(
                &grid,
                SearchState::start(Pos::ORIGIN),
                &rule,
                |s: &SearchState<Run>| s.pos == goal,
                &SearchPolicy::default(),
            )
            .unwrap();
            black_box(report);
        });
    });
}

criterion_group!(
    benches,
    bench_unconstrained_141,
    bench_crucible_141,
    bench_ultra_crucible_141
);
criterion_main!(benches);
