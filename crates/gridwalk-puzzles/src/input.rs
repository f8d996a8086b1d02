//! Reading puzzle input from disk.

use std::fs;
use std::path::Path;

use crate::error::PuzzleError;

/// Read the whole input file as text.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, PuzzleError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| PuzzleError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Non-blank lines with their one-based line numbers, `\r` stripped.
pub(crate) fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty())
}
