//! Dispatch from puzzle name to both answers.

use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Direction, Pos};
use gridwalk_grid::parse_digits;
use gridwalk_search::RunLimits;

use crate::beam::Contraption;
use crate::crucible::min_heat_loss;
use crate::error::PuzzleError;
use crate::lagoon::{lagoon_area, parse_hex_plan, parse_plan};
use crate::network::Network;
use crate::platform::{load_after_spins, load_after_tilt_north, Platform, BILLION_SPINS};

/// A puzzle this crate can solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Puzzle {
    /// Haunted wasteland: left/right network walks.
    Day08,
    /// Parabolic reflector dish: tilting rocks.
    Day14,
    /// The floor will be lava: light beams.
    Day16,
    /// Clumsy crucible: constrained shortest path.
    Day17,
    /// Lavaduct lagoon: dig-plan area.
    Day18,
}

impl Puzzle {
    /// Every supported puzzle.
    pub const ALL: [Puzzle; 5] = [
        Puzzle::Day08,
        Puzzle::Day14,
        Puzzle::Day16,
        Puzzle::Day17,
        Puzzle::Day18,
    ];

    /// Command-line name, e.g. `day08`.
    pub fn name(self) -> &'static str {
        match self {
            Puzzle::Day08 => "day08",
            Puzzle::Day14 => "day14",
            Puzzle::Day16 => "day16",
            Puzzle::Day17 => "day17",
            Puzzle::Day18 => "day18",
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Puzzle::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PuzzleError::UnknownPuzzle { name: s.to_string() })
    }
}

/// Both halves of a puzzle's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    /// First half.
    pub part1: u64,
    /// Second half.
    pub part2: u64,
}

/// Parse `text` as input for `puzzle` and compute both answers.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn solve(puzzle: Puzzle, text: &str) -> Result<Answers, PuzzleError> {
    let (part1, part2) = match puzzle {
        Puzzle::Day08 => {
            let net = Network::parse(text)?;
            (net.steps("AAA", |l| l == "ZZZ")?, net.ghost_steps()?)
        }
        Puzzle::Day14 => {
            let platform = Platform::parse(text)?;
            (
                load_after_tilt_north(&platform),
                load_after_spins(&platform, BILLION_SPINS),
            )
        }
        Puzzle::Day16 => {
            let c = Contraption::parse(text)?;
            (
                c.energized(Pos::ORIGIN, Direction::East) as u64,
                c.max_energized() as u64,
            )
        }
        Puzzle::Day17 => {
            let grid = parse_digits(text)?;
            (
                min_heat_loss(&grid, RunLimits::CRUCIBLE)?,
                min_heat_loss(&grid, RunLimits::ULTRA_CRUCIBLE)?,
            )
        }
        Puzzle::Day18 => (
            lagoon_area(&parse_plan(text)?)?,
            lagoon_area(&parse_hex_plan(text)?)?,
        ),
    };
    Ok(Answers { part1, part2 })
}
