//! Test utilities for Gridwalk development.
//!
//! Grid builders for search tests, plus deterministic step functions
//! with known cycle structure ([`fixtures`]) and naive reference
//! implementations to compare the optimized paths against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridwalk_core::Pos;
use gridwalk_grid::{CostGrid, Grid};

/// A `rows x cols` cost grid with every cell set to `cost`.
///
/// # Panics
///
/// Panics if either dimension is 0.
pub fn uniform_grid(rows: usize, cols: usize, cost: u32) -> CostGrid {
    Grid::from_fn(rows, cols, |_| cost).expect("uniform grid dimensions must be non-zero")
}

/// A cost grid whose cell at `(r, c)` is `f(r, c)`.
///
/// # Panics
///
/// Panics if either dimension is 0.
pub fn grid_from(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> u32) -> CostGrid {
    Grid::from_fn(rows, cols, |p: Pos| f(p.row, p.col))
        .expect("grid dimensions must be non-zero")
}

/// Apply `step` to `initial` exactly `n` times.
///
/// The brute-force baseline for fast-forward comparisons.
pub fn naive_advance<S>(initial: S, step: impl Fn(&S) -> S, n: u64) -> S {
    let mut state = initial;
    for _ in 0..n {
        state = step(&state);
    }
    state
}
