//! Grid puzzles built on Gridwalk's search and cycle detection.
//!
//! Each module parses its own input format and exposes the computations
//! the puzzle asks for:
//!
//! - [`network`]: left/right walks, cycle-aligned ghost walks
//! - [`platform`]: tilting rocks, a billion spins via cycle detection
//! - [`beam`]: light propagation with loop-safe visited tracking
//! - [`crucible`]: run-limited least-cost routing
//! - [`lagoon`]: dig-plan area by shoelace and Pick's theorem
//!
//! [`solve()`] dispatches by [`Puzzle`] and returns both answers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod beam;
pub mod crucible;
pub mod error;
pub mod input;
pub mod lagoon;
pub mod network;
pub mod platform;
pub mod solve;

pub use beam::{Contraption, Tile};
pub use crucible::min_heat_loss;
pub use error::PuzzleError;
pub use input::read_input;
pub use lagoon::{lagoon_area, parse_hex_plan, parse_plan, DigStep};
pub use network::{Network, Turn};
pub use platform::{load_after_spins, load_after_tilt_north, Platform, Rock, BILLION_SPINS};
pub use solve::{solve, Answers, Puzzle};
