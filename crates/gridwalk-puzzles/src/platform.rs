//! Tilting a platform of rolling rocks (day 14).
//!
//! Round rocks (`O`) roll until they hit the edge, a cube rock (`#`), or
//! another round rock. A spin tilts north, west, south, then east. The
//! spin is a pure function on a finite set of layouts, so a billion spins
//! reduce to a short cycle.

use std::fmt;

use gridwalk_core::Direction;
use gridwalk_cycle::CycleDetector;
use gridwalk_grid::Grid;
use tracing::debug;

use crate::error::PuzzleError;

/// Spins asked for by the second half of the puzzle.
pub const BILLION_SPINS: u64 = 1_000_000_000;

/// Contents of one platform cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rock {
    /// `O`: moves when tilted.
    Round,
    /// `#`: never moves.
    Cube,
    /// `.`
    Empty,
}

impl Rock {
    /// Parse one cell character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Rock::Round),
            '#' => Some(Rock::Cube),
            '.' => Some(Rock::Empty),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Rock::Round => 'O',
            Rock::Cube => '#',
            Rock::Empty => '.',
        }
    }
}

/// A rock layout. Values are compared and hashed by layout.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    rows: usize,
    cols: usize,
    cells: Vec<Rock>,
}

impl Platform {
    /// Parse a platform from its text picture.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let grid = Grid::parse_with(text, Rock::from_char)?;
        Ok(Self::from_grid(grid))
    }

    /// Take ownership of a parsed rock grid.
    pub fn from_grid(grid: Grid<Rock>) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        Self {
            rows,
            cols,
            cells: grid.into_cells(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of round rocks. Tilting never changes it.
    pub fn round_count(&self) -> usize {
        self.cells.iter().filter(|&&r| r == Rock::Round).count()
    }

    /// Roll every round rock as far as it goes towards `dir`.
    pub fn tilt(&self, dir: Direction) -> Self {
        let mut cells = self.cells.clone();
        for line in self.lines_towards(dir) {
            let mut free = 0;
            for (k, &idx) in line.iter().enumerate() {
                match cells[idx] {
                    Rock::Cube => free = k + 1,
                    Rock::Round => {
                        cells[idx] = Rock::Empty;
                        cells[line[free]] = Rock::Round;
                        free += 1;
                    }
                    Rock::Empty => {}
                }
            }
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// One spin cycle: north, west, south, east.
    pub fn spin(&self) -> Self {
        [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ]
        .into_iter()
        .fold(self.clone(), |p, dir| p.tilt(dir))
    }

    /// Load on the north support beams: each round rock weighs the number
    /// of rows from it to the south edge, itself included.
    pub fn north_load(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == Rock::Round)
            .map(|(i, _)| (self.rows - i / self.cols) as u64)
            .sum()
    }

    /// Flat indices of every line parallel to `dir`, each ordered from the
    /// wall rocks roll towards.
    fn lines_towards(&self, dir: Direction) -> Vec<Vec<usize>> {
        let (rows, cols) = (self.rows, self.cols);
        match dir {
            Direction::North => (0..cols)
                .map(|c| (0..rows).map(|r| r * cols + c).collect())
                .collect(),
            Direction::South => (0..cols)
                .map(|c| (0..rows).rev().map(|r| r * cols + c).collect())
                .collect(),
            Direction::West => (0..rows)
                .map(|r| (0..cols).map(|c| r * cols + c).collect())
                .collect(),
            Direction::East => (0..rows)
                .map(|r| (0..cols).rev().map(|c| r * cols + c).collect())
                .collect(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|r| r.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("round", &self.round_count())
            .finish_non_exhaustive()
    }
}

/// Load after a single northward tilt.
#[tracing::instrument(skip_all)]
pub fn load_after_tilt_north(platform: &Platform) -> u64 {
    platform.tilt(Direction::North).north_load()
}

/// Load after `spins` spin cycles, fast-forwarded through the cycle the
/// layouts fall into.
#[tracing::instrument(skip_all, fields(spins = spins))]
pub fn load_after_spins(platform: &Platform, spins: u64) -> u64 {
    let mut detector = CycleDetector::new(platform.clone(), Platform::spin);
    let cycle = detector.detect();
    debug!(%cycle, "spin cycle");
    detector.state_at(spins).north_load()
}
