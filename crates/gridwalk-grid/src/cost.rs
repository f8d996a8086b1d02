//! Cost tables: grids of non-negative per-cell entry costs.

use crate::grid::Grid;
use gridwalk_core::{Direction, GridError, Pos};

/// A grid of per-cell entry costs.
///
/// Entering a cell costs its value; leaving the origin costs nothing.
pub type CostGrid = Grid<u32>;

/// Parse a block of decimal digits, one cell per character.
///
/// # Examples
///
/// ```
/// use gridwalk_grid::parse_digits;
///
/// let grid = parse_digits("123\n456\n").unwrap();
/// assert_eq!(grid.cols(), 3);
/// assert!(parse_digits("12a").is_err());
/// ```
pub fn parse_digits(text: &str) -> Result<CostGrid, GridError> {
    Grid::parse_with(text, |c| c.to_digit(10))
}

impl CostGrid {
    /// Total cost of moving `n` cells from `from` in direction `dir`.
    ///
    /// Sums every traversed cell, excluding `from` and including the
    /// destination. Returns the destination and the summed cost, or `None`
    /// if any traversed cell lies outside the grid.
    pub fn segment_cost(&self, from: Pos, dir: Direction, n: usize) -> Option<(Pos, u64)> {
        let mut pos = from;
        let mut total = 0u64;
        for _ in 0..n {
            pos = self.step(pos, dir, 1)?;
            total += u64::from(self[pos]);
        }
        Some((pos, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits_reads_values() {
        let g = parse_digits("19\n05").unwrap();
        assert_eq!(g[Pos::new(0, 1)], 9);
        assert_eq!(g[Pos::new(1, 0)], 0);
    }

    #[test]
    fn parse_digits_rejects_letters() {
        assert_eq!(
            parse_digits("1a").unwrap_err(),
            GridError::InvalidCell {
                row: 0,
                col: 1,
                found: 'a'
            }
        );
    }

    #[test]
    fn segment_cost_excludes_origin_includes_destination() {
        let g = parse_digits("1234").unwrap();
        assert_eq!(
            g.segment_cost(Pos::ORIGIN, Direction::East, 3),
            Some((Pos::new(0, 3), 2 + 3 + 4))
        );
        assert_eq!(
            g.segment_cost(Pos::new(0, 3), Direction::West, 2),
            Some((Pos::new(0, 1), 3 + 2))
        );
    }

    #[test]
    fn segment_cost_off_edge_is_none() {
        let g = parse_digits("1234").unwrap();
        assert_eq!(g.segment_cost(Pos::new(0, 2), Direction::East, 2), None);
        assert_eq!(g.segment_cost(Pos::ORIGIN, Direction::South, 1), None);
    }

    #[test]
    fn zero_length_segment_is_free() {
        let g = parse_digits("9").unwrap();
        assert_eq!(g.segment_cost(Pos::ORIGIN, Direction::North, 0), Some((Pos::ORIGIN, 0)));
    }
}
