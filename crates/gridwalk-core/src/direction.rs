//! Cardinal directions on a row-major grid.

use std::fmt;

/// One of the four cardinal directions.
///
/// Rows grow southwards and columns grow eastwards, so `North` is
/// `(-1, 0)` and `East` is `(0, 1)` in `(row, col)` offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last column.
    East,
    /// Towards the last row.
    South,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All four directions in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(row_offset, col_offset)` of a single step.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The reverse heading.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The two headings perpendicular to this one (left turn, right turn).
    pub fn turns(self) -> [Direction; 2] {
        match self {
            Direction::North => [Direction::West, Direction::East],
            Direction::East => [Direction::North, Direction::South],
            Direction::South => [Direction::East, Direction::West],
            Direction::West => [Direction::South, Direction::North],
        }
    }

    /// Whether this heading moves along a row (east or west).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Parse a heading letter.
    ///
    /// Accepts both compass letters (`N E S W`) and the relative letters
    /// used by dig plans (`U R D L`). Returns `None` for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' | 'U' => Some(Direction::North),
            'E' | 'R' => Some(Direction::East),
            'S' | 'D' => Some(Direction::South),
            'W' | 'L' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        };
        write!(f, "{c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn turns_are_perpendicular() {
        for d in Direction::ALL {
            for t in d.turns() {
                assert_ne!(t, d);
                assert_ne!(t, d.opposite());
                assert_ne!(t.is_horizontal(), d.is_horizontal());
            }
        }
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            let (or, oc) = d.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn from_char_accepts_both_alphabets() {
        assert_eq!(Direction::from_char('U'), Some(Direction::North));
        assert_eq!(Direction::from_char('R'), Some(Direction::East));
        assert_eq!(Direction::from_char('S'), Some(Direction::South));
        assert_eq!(Direction::from_char('L'), Some(Direction::West));
        assert_eq!(Direction::from_char('x'), None);
    }
}
