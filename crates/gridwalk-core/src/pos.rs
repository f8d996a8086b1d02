//! Grid positions.

use std::fmt;

/// A cell position as `(row, col)`, both zero-based.
///
/// Ordering is row-major, matching the storage order of
/// `Grid<T>` in `gridwalk-grid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Row index, growing southwards.
    pub row: usize,
    /// Column index, growing eastwards.
    pub col: usize,
}

impl Pos {
    /// The origin cell `(0, 0)`.
    pub const ORIGIN: Pos = Pos { row: 0, col: 0 };

    /// Construct a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// L1 distance between two positions.
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
