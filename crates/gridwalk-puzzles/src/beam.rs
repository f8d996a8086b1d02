//! Light beams bouncing through mirrors and splitters (day 16).
//!
//! A beam is a position plus the heading it entered with. Mirrors turn
//! it, splitters hit side-on fork it in two, and a beam leaving the grid
//! is gone. Beams can loop, so each `(cell, heading)` pair is processed at
//! most once.

use std::collections::VecDeque;

use gridwalk_core::{Direction, Pos};
use gridwalk_grid::Grid;
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::error::PuzzleError;

/// One cell of the contraption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `.`
    Empty,
    /// `/`
    MirrorSlash,
    /// `\`
    MirrorBackslash,
    /// `|`: splits horizontal beams north and south.
    SplitVertical,
    /// `-`: splits vertical beams east and west.
    SplitHorizontal,
}

impl Tile {
    /// Parse one cell character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Tile::Empty),
            '/' => Some(Tile::MirrorSlash),
            '\\' => Some(Tile::MirrorBackslash),
            '|' => Some(Tile::SplitVertical),
            '-' => Some(Tile::SplitHorizontal),
            _ => None,
        }
    }

    /// Headings leaving this tile for a beam entering with `heading`.
    pub fn deflect(self, heading: Direction) -> SmallVec<[Direction; 2]> {
        use Direction::*;
        match (self, heading) {
            (Tile::Empty, h) => smallvec![h],
            (Tile::MirrorSlash, North) => smallvec![East],
            (Tile::MirrorSlash, East) => smallvec![North],
            (Tile::MirrorSlash, South) => smallvec![West],
            (Tile::MirrorSlash, West) => smallvec![South],
            (Tile::MirrorBackslash, North) => smallvec![West],
            (Tile::MirrorBackslash, West) => smallvec![North],
            (Tile::MirrorBackslash, South) => smallvec![East],
            (Tile::MirrorBackslash, East) => smallvec![South],
            (Tile::SplitVertical, h) if h.is_horizontal() => smallvec![North, South],
            (Tile::SplitHorizontal, h) if !h.is_horizontal() => smallvec![East, West],
            (_, h) => smallvec![h],
        }
    }
}

/// Bit for `dir` in a per-cell visited mask.
fn bit(dir: Direction) -> u8 {
    match dir {
        Direction::North => 1,
        Direction::East => 2,
        Direction::South => 4,
        Direction::West => 8,
    }
}

/// A grid of mirrors and splitters.
#[derive(Clone, Debug)]
pub struct Contraption {
    tiles: Grid<Tile>,
}

impl Contraption {
    /// Parse the contraption picture.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        Ok(Self {
            tiles: Grid::parse_with(text, Tile::from_char)?,
        })
    }

    /// The tile grid.
    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    /// Number of cells a beam entering `start` heading `heading` passes
    /// through or gets split or reflected by.
    ///
    /// Returns 0 if `start` is outside the grid.
    pub fn energized(&self, start: Pos, heading: Direction) -> usize {
        let cols = self.tiles.cols();
        let mut seen = vec![0u8; self.tiles.len()];
        let mut queue = VecDeque::new();
        if self.tiles.contains(start) {
            queue.push_back((start, heading));
        }

        while let Some((pos, heading)) = queue.pop_front() {
            let mask = &mut seen[pos.row * cols + pos.col];
            if *mask & bit(heading) != 0 {
                continue;
            }
            *mask |= bit(heading);
            for out in self.tiles[pos].deflect(heading) {
                if let Some(next) = self.tiles.step(pos, out, 1) {
                    queue.push_back((next, out));
                }
            }
        }

        seen.iter().filter(|&&m| m != 0).count()
    }

    /// Every way a beam can enter from outside: each edge cell, heading
    /// away from that edge. Corner cells appear twice.
    pub fn entries(&self) -> Vec<(Pos, Direction)> {
        let (rows, cols) = (self.tiles.rows(), self.tiles.cols());
        let mut out = Vec::with_capacity(2 * (rows + cols));
        for r in 0..rows {
            out.push((Pos::new(r, 0), Direction::East));
            out.push((Pos::new(r, cols - 1), Direction::West));
        }
        for c in 0..cols {
            out.push((Pos::new(0, c), Direction::South));
            out.push((Pos::new(rows - 1, c), Direction::North));
        }
        out
    }

    /// The most cells any single edge entry energizes.
    #[tracing::instrument(skip_all)]
    pub fn max_energized(&self) -> usize {
        let best = self
            .entries()
            .into_iter()
            .map(|(pos, heading)| self.energized(pos, heading))
            .max()
            .unwrap_or(0);
        debug!(best, "best edge entry");
        best
    }
}
