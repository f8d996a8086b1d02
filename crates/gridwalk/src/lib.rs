//! Gridwalk: constrained shortest paths on grids and cycle detection for
//! deterministic simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gridwalk sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gridwalk::prelude::*;
//!
//! // Least heat loss through a small cost map, at most three cells straight.
//! let grid = parse_digits("2413\n3215\n3255").unwrap();
//! let rule = RunLimited::new(RunLimits::CRUCIBLE).unwrap();
//! let goal = grid.last_pos();
//! let report = search(
//!     &grid,
//!     SearchState::start(Pos::ORIGIN),
//!     &rule,
//!     |s: &SearchState<Run>| s.pos == goal,
//!     &SearchPolicy::default(),
//! )
//! .unwrap();
//! assert!(report.outcome.is_reached());
//!
//! // The millionth state of 0 -> 1 -> 2 -> 3 -> 4 -> 2 -> ...
//! let mut detector = CycleDetector::new(0u32, |s: &u32| if *s == 4 { 2 } else { s + 1 });
//! assert_eq!(detector.detect(), Cycle { mu: 2, lam: 3 });
//! assert_eq!(detector.state_at(1_000_000), 2 + (1_000_000 - 2) % 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwalk-core` | `Direction`, `Pos`, grid and search errors |
//! | [`grid`] | `gridwalk-grid` | `Grid<T>`, `CostGrid`, text parsing |
//! | [`search`] | `gridwalk-search` | States, neighbour rules, uniform-cost search |
//! | [`cycle`] | `gridwalk-cycle` | Floyd and history cycle detection, fast-forward |
//! | [`puzzles`] | `gridwalk-puzzles` | Puzzle parsers and solvers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Directions, positions, and error enums (`gridwalk-core`).
pub use gridwalk_core as types;

/// Immutable grids and cost tables (`gridwalk-grid`).
///
/// [`grid::Grid`] is shared read-only by every search; [`grid::parse_digits`]
/// builds a [`grid::CostGrid`] from text.
pub use gridwalk_grid as grid;

/// Constrained shortest-path search (`gridwalk-search`).
///
/// The [`search::NeighbourRule`] trait is the extension point; the stock
/// rules are [`search::Unconstrained`] and [`search::RunLimited`].
pub use gridwalk_search as search;

/// Cycle detection and fast-forward (`gridwalk-cycle`).
///
/// [`cycle::CycleDetector`] answers "state after `t` steps" for huge `t`;
/// [`cycle::History`] keeps every state for later lookup.
pub use gridwalk_cycle as cycle;

/// Puzzle parsers and solvers (`gridwalk-puzzles`).
pub use gridwalk_puzzles as puzzles;

/// Common imports for typical Gridwalk usage.
///
/// ```rust
/// use gridwalk::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridwalk_core::{Direction, GridError, Pos, SearchError};

    // Grids
    pub use gridwalk_grid::{parse_digits, CostGrid, Grid};

    // Search
    pub use gridwalk_search::{
        search, shortest_path_cost, NeighbourRule, Neighbours, Run, RunLimited, RunLimits,
        SearchOutcome, SearchPolicy, SearchReport, SearchState, Unconstrained,
    };

    // Cycles
    pub use gridwalk_cycle::{detect, fast_forward, Cycle, CycleDetector, History};

    // Puzzles
    pub use gridwalk_puzzles::{solve, Answers, Puzzle, PuzzleError};
}
