//! Digging a lagoon from a dig plan (day 18).
//!
//! The trench is a closed rectilinear loop of unit cells. Its vertices
//! sit on cell centres, so the shoelace formula gives the area enclosed by
//! the centre line, and Pick's theorem adds the half of each boundary
//! cell that lies outside it:
//!
//! `cells = area + perimeter / 2 + 1`
//!
//! This handles runs of millions of cells without materializing a grid.

use gridwalk_core::Direction;
use tracing::debug;

use crate::error::PuzzleError;
use crate::input::numbered_lines;

/// One instruction of a dig plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigStep {
    /// Heading of the trench segment.
    pub dir: Direction,
    /// Number of cells dug.
    pub len: u64,
}

fn fields(n: usize, line: &str) -> Result<(&str, &str, &str), PuzzleError> {
    let mut it = line.split_whitespace();
    match (it.next(), it.next(), it.next(), it.next()) {
        (Some(d), Some(l), Some(c), None) => Ok((d, l, c)),
        _ => Err(PuzzleError::parse(n, "expected '<dir> <len> (#rrggbb)'")),
    }
}

/// Read the plan as written: direction letter and length.
pub fn parse_plan(text: &str) -> Result<Vec<DigStep>, PuzzleError> {
    numbered_lines(text)
        .map(|(n, line)| {
            let (d, l, _) = fields(n, line)?;
            let mut chars = d.chars();
            let dir = match (chars.next(), chars.next()) {
                (Some(c), None) => Direction::from_char(c),
                _ => None,
            }
            .ok_or_else(|| PuzzleError::parse(n, format!("bad direction '{d}'")))?;
            let len = l
                .parse()
                .map_err(|_| PuzzleError::parse(n, format!("bad length '{l}'")))?;
            Ok(DigStep { dir, len })
        })
        .collect()
}

/// Read the plan from the colour codes: five hex digits of length, then
/// one digit of direction (`0` R, `1` D, `2` L, `3` U).
pub fn parse_hex_plan(text: &str) -> Result<Vec<DigStep>, PuzzleError> {
    numbered_lines(text)
        .map(|(n, line)| {
            let (_, _, code) = fields(n, line)?;
            let hex = code
                .strip_prefix("(#")
                .and_then(|s| s.strip_suffix(')'))
                .filter(|h| h.len() == 6 && h.is_ascii())
                .ok_or_else(|| PuzzleError::parse(n, format!("bad colour code '{code}'")))?;
            let (len_hex, dir_hex) = hex.split_at(5);
            let len = u64::from_str_radix(len_hex, 16)
                .map_err(|_| PuzzleError::parse(n, format!("bad hex length '{len_hex}'")))?;
            let dir = match dir_hex {
                "0" => Direction::East,
                "1" => Direction::South,
                "2" => Direction::West,
                "3" => Direction::North,
                other => {
                    return Err(PuzzleError::parse(
                        n,
                        format!("bad direction digit '{other}'"),
                    ))
                }
            };
            Ok(DigStep { dir, len })
        })
        .collect()
}

/// Number of cells dug out: the trench plus its interior.
///
/// The plan must describe a closed, non-self-intersecting loop. An empty
/// plan digs only the starting cell.
///
/// # Errors
///
/// [`PuzzleError::InvalidInput`] if the plan does not end where it
/// started, and [`PuzzleError::Overflow`] if the coordinates or the area
/// leave the range of the arithmetic.
#[tracing::instrument(skip_all, fields(steps = steps.len()))]
pub fn lagoon_area(steps: &[DigStep]) -> Result<u64, PuzzleError> {
    let overflow = || PuzzleError::overflow("dig plan is too large");
    let (mut row, mut col) = (0i128, 0i128);
    let mut twice_area = 0i128;
    let mut perimeter = 0i128;
    for step in steps {
        let (dr, dc) = step.dir.offset();
        let len = i128::from(step.len);
        let next_row = row.checked_add(i128::from(dr) * len).ok_or_else(overflow)?;
        let next_col = col.checked_add(i128::from(dc) * len).ok_or_else(overflow)?;
        let cross = col
            .checked_mul(next_row)
            .zip(next_col.checked_mul(row))
            .and_then(|(a, b)| a.checked_sub(b))
            .ok_or_else(overflow)?;
        twice_area = twice_area.checked_add(cross).ok_or_else(overflow)?;
        perimeter = perimeter.checked_add(len).ok_or_else(overflow)?;
        row = next_row;
        col = next_col;
    }
    if (row, col) != (0, 0) {
        return Err(PuzzleError::invalid_input(format!(
            "dig plan does not close: it ends at row {row}, col {col}"
        )));
    }
    let cells = twice_area
        .checked_abs()
        .and_then(|a| a.checked_add(perimeter))
        .map(|sum| sum / 2 + 1)
        .ok_or_else(overflow)?;
    debug!(twice_area = %twice_area, perimeter = %perimeter, cells = %cells, "lagoon");
    u64::try_from(cells).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn plain_plan_parses() {
        let plan = parse_plan(EXAMPLE).unwrap();
        assert_eq!(plan.len(), 14);
        assert_eq!(plan[0], DigStep { dir: Direction::East, len: 6 });
        assert_eq!(plan[13], DigStep { dir: Direction::North, len: 2 });
    }

    #[test]
    fn hex_plan_parses() {
        let plan = parse_hex_plan(EXAMPLE).unwrap();
        assert_eq!(plan[0], DigStep { dir: Direction::East, len: 461937 });
        assert_eq!(plan[1], DigStep { dir: Direction::South, len: 56407 });
        assert_eq!(plan[3], DigStep { dir: Direction::South, len: 863240 });
        assert_eq!(plan[6], DigStep { dir: Direction::West, len: 577262 });
        assert_eq!(plan[13], DigStep { dir: Direction::North, len: 500254 });
    }

    #[test]
    fn malformed_lines_report_line_numbers() {
        assert_eq!(
            parse_plan("R 6 (#70c710)\nX 5 (#0dc571)\n").unwrap_err(),
            PuzzleError::parse(2, "bad direction 'X'")
        );
        assert!(matches!(
            parse_plan("R six (#70c710)\n"),
            Err(PuzzleError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_hex_plan("R 6 (#70c719)\n"),
            Err(PuzzleError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_hex_plan("R 6 70c710\n"),
            Err(PuzzleError::Parse { line: 1, .. })
        ));
        assert!(matches!(parse_plan("R 6\n"), Err(PuzzleError::Parse { line: 1, .. })));
    }

    // ── Area ────────────────────────────────────────────────────

    #[test]
    fn plain_plan_digs_62() {
        assert_eq!(lagoon_area(&parse_plan(EXAMPLE).unwrap()).unwrap(), 62);
    }

    #[test]
    fn hex_plan_digs_952408144115() {
        assert_eq!(
            lagoon_area(&parse_hex_plan(EXAMPLE).unwrap()).unwrap(),
            952408144115
        );
    }

    #[test]
    fn open_plan_is_invalid_input() {
        let plan = parse_plan("R 3 (#000000)\n").unwrap();
        assert!(matches!(
            lagoon_area(&plan),
            Err(PuzzleError::InvalidInput { .. })
        ));
        let plan = parse_plan("R 3 (#000000)\nD 1 (#000000)\nL 3 (#000000)\n").unwrap();
        assert!(matches!(
            lagoon_area(&plan),
            Err(PuzzleError::InvalidInput { .. })
        ));
    }

    #[test]
    fn huge_plain_runs_overflow_instead_of_panicking() {
        let max = u64::MAX;
        let text: String = ["R", "D", "L", "U"]
            .iter()
            .map(|d| format!("{d} {max} (#000000)\n"))
            .collect();
        let plan = parse_plan(&text).unwrap();
        assert!(matches!(
            lagoon_area(&plan),
            Err(PuzzleError::Overflow { .. })
        ));
    }

    #[test]
    fn square_loop_counts_boundary_and_interior() {
        // A 3x3 block of cells: trench of 8 around one interior cell.
        let plan = parse_plan("R 2 (#000000)\nD 2 (#000000)\nL 2 (#000000)\nU 2 (#000000)\n")
            .unwrap();
        assert_eq!(lagoon_area(&plan).unwrap(), 9);
    }

    #[test]
    fn orientation_does_not_matter() {
        let cw = parse_plan("R 4 (#000000)\nD 1 (#000000)\nL 4 (#000000)\nU 1 (#000000)\n")
            .unwrap();
        let ccw = parse_plan("D 1 (#000000)\nR 4 (#000000)\nU 1 (#000000)\nL 4 (#000000)\n")
            .unwrap();
        assert_eq!(lagoon_area(&cw).unwrap(), 10);
        assert_eq!(lagoon_area(&ccw).unwrap(), 10);
    }

    #[test]
    fn empty_plan_digs_one_cell() {
        assert_eq!(lagoon_area(&[]).unwrap(), 1);
    }
}
