//! Benchmark inputs for the Gridwalk crates.
//!
//! Every generator is seeded with a ChaCha8 stream, so a given seed always
//! yields the same input across runs and platforms:
//!
//! - [`random_cost_grid`]: digit costs 1..=9, like a heat-loss map
//! - [`random_platform`]: a rock layout for spin-cycle benchmarks
//! - [`REFERENCE_SIDE`]: the side length of a full-size puzzle input

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwalk_core::GridError;
use gridwalk_grid::{CostGrid, Grid};
use gridwalk_puzzles::{Platform, Rock};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Side length of a full-size square puzzle input (141x141).
pub const REFERENCE_SIDE: usize = 141;

/// A `rows x cols` cost grid with uniformly random digits 1..=9.
pub fn random_cost_grid(rows: usize, cols: usize, seed: u64) -> Result<CostGrid, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(rows, cols, |_| rng.next_u32() % 9 + 1)
}

/// A `rows x cols` platform: roughly one round rock in four cells and one
/// cube rock in six.
pub fn random_platform(rows: usize, cols: usize, seed: u64) -> Result<Platform, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = Grid::from_fn(rows, cols, |_| match rng.next_u32() % 12 {
        0..=2 => Rock::Round,
        3 | 4 => Rock::Cube,
        _ => Rock::Empty,
    })?;
    Ok(Platform::from_grid(grid))
}
