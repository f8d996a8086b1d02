//! Search states and the standard run descriptor.

use gridwalk_core::{Direction, Pos};
use std::fmt;

/// A node in the implicit search graph.
///
/// Two states are equal iff position and run descriptor both match.
/// States are produced by a [`NeighbourRule`](crate::NeighbourRule) and
/// never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchState<R> {
    /// Current cell.
    pub pos: Pos,
    /// Direction-of-travel bookkeeping, opaque to the search.
    pub run: R,
}

impl<R> SearchState<R> {
    /// Construct a state.
    pub fn new(pos: Pos, run: R) -> Self {
        Self { pos, run }
    }
}

impl SearchState<Run> {
    /// A state at `pos` that has not moved yet.
    pub fn start(pos: Pos) -> Self {
        Self {
            pos,
            run: Run::START,
        }
    }
}

/// Heading and length of the current straight run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Run {
    /// Direction of the last move; `None` before the first move.
    pub heading: Option<Direction>,
    /// Consecutive cells travelled along `heading`.
    pub len: u32,
}

impl Run {
    /// No move made yet.
    pub const START: Run = Run {
        heading: None,
        len: 0,
    };

    /// A run of `len` cells heading `dir`.
    pub fn new(dir: Direction, len: u32) -> Self {
        Self {
            heading: Some(dir),
            len,
        }
    }

    /// Whether moving `dir` next would reverse the current heading.
    pub fn reverses(&self, dir: Direction) -> bool {
        self.heading.is_some_and(|h| h.opposite() == dir)
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heading {
            Some(d) => write!(f, "{d}x{}", self.len),
            None => write!(f, "-"),
        }
    }
}
