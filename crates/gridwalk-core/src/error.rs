//! Error types for grid construction and path search.
//!
//! Organized by subsystem: [`GridError`] covers building and indexing a
//! grid, [`SearchError`] covers pre-flight validation of a search. An
//! unreachable goal is not an error; the search crate reports it as an
//! outcome.

use crate::pos::Pos;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid would have zero rows or zero columns.
    EmptyGrid,
    /// A row's width differs from the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character in the source text does not map to a cell value.
    InvalidCell {
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        col: usize,
        /// The character that was rejected.
        found: char,
    },
    /// A position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "invalid input: grid has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "invalid input: row {row} has width {found}, expected {expected}"
                )
            }
            Self::InvalidCell { row, col, found } => {
                write!(f, "invalid input: unexpected {found:?} at ({row}, {col})")
            }
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {pos} out of bounds: [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl Error for GridError {}

/// Pre-flight failures of a constrained path search.
///
/// Returned before the first frontier pop. Runtime terminations
/// (goal reached, frontier exhausted, budget spent) are outcomes, not
/// errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The grid handed to the search is malformed or empty.
    InvalidInput(GridError),
    /// Run-length limits are inconsistent (`min` of zero, or `min > max`).
    InvalidRunLimits {
        /// Configured minimum run before turning.
        min: u32,
        /// Configured maximum straight run.
        max: u32,
    },
    /// The start state names a cell outside the grid.
    StartOutOfBounds {
        /// The offending start position.
        pos: Pos,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "{e}"),
            Self::InvalidRunLimits { min, max } => {
                write!(f, "invalid run limits: min {min}, max {max}")
            }
            Self::StartOutOfBounds { pos } => {
                write!(f, "start position {pos} is outside the grid")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::InvalidInput(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_reads_as_invalid_input() {
        let e = SearchError::from(GridError::EmptyGrid);
        assert!(e.to_string().starts_with("invalid input"));
        assert!(e.source().is_some());
    }

    #[test]
    fn run_limits_error_has_no_source() {
        let e = SearchError::InvalidRunLimits { min: 4, max: 3 };
        assert_eq!(e.to_string(), "invalid run limits: min 4, max 3");
        assert!(e.source().is_none());
    }
}
