//! Error type for puzzle input and solving.

use gridwalk_core::{GridError, SearchError};
use std::error::Error;
use std::fmt;

/// Errors from reading, parsing, or solving a puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// The input file could not be read.
    Io {
        /// Path that was being read.
        path: String,
        /// The underlying I/O error, rendered.
        reason: String,
    },
    /// A line of input does not have the expected shape.
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// A grid-shaped input was malformed.
    Grid(GridError),
    /// Search configuration was rejected.
    Search(SearchError),
    /// The puzzle name is not one this crate solves.
    UnknownPuzzle {
        /// The name that was given.
        name: String,
    },
    /// The input parses but does not describe a valid puzzle.
    InvalidInput {
        /// What is inconsistent about it.
        reason: String,
    },
    /// An answer exists but does not fit the integer types used.
    Overflow {
        /// Which quantity overflowed.
        reason: String,
    },
    /// The input is well-formed but has no solution.
    NoAnswer {
        /// Why no answer exists.
        reason: String,
    },
}

impl PuzzleError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(reason: impl Into<String>) -> Self {
        Self::Overflow {
            reason: reason.into(),
        }
    }

    pub(crate) fn no_answer(reason: impl Into<String>) -> Self {
        Self::NoAnswer {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "cannot read {path}: {reason}"),
            Self::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::UnknownPuzzle { name } => write!(f, "unknown puzzle '{name}'"),
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::Overflow { reason } => write!(f, "arithmetic overflow: {reason}"),
            Self::NoAnswer { reason } => write!(f, "no answer: {reason}"),
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PuzzleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for PuzzleError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
