//! The generic row-major [`Grid`] table.

use gridwalk_core::{Direction, GridError, Pos};
use std::fmt;
use std::ops::Index;

/// An immutable rectangular table of cells.
///
/// Each cell has position `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Construction rejects empty and ragged input, so a
/// `Grid` always has at least one cell.
///
/// Equality and hashing are structural, which lets a grid serve directly
/// as a simulation snapshot for cycle detection.
///
/// # Examples
///
/// ```
/// use gridwalk_core::{Direction, Pos};
/// use gridwalk_grid::Grid;
///
/// let grid = Grid::parse_with("ab\ncd", Some).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid[Pos::new(1, 0)], 'c');
///
/// // Stepping off the edge yields nothing.
/// assert_eq!(grid.step(Pos::ORIGIN, Direction::North, 1), None);
/// assert_eq!(grid.step(Pos::ORIGIN, Direction::East, 1), Some(Pos::new(0, 1)));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from a row-major cell vector.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0 and
    /// `Err(GridError::RaggedRow)` if `cells.len() != rows * cols`.
    pub fn from_parts(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cells.len() != rows * cols {
            return Err(GridError::RaggedRow {
                row: cells.len() / cols,
                expected: cols,
                found: cells.len() % cols,
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from nested rows.
    ///
    /// Every row must have the width of the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Self::from_parts(height, width, cells)
    }

    /// Build a grid by evaluating `f` at every position in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Pos) -> T,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(Pos::new(row, col)));
            }
        }
        Self::from_parts(rows, cols, cells)
    }

    /// Parse a text block, one line per row, mapping each character with `f`.
    ///
    /// Trailing blank lines and `\r` line endings are ignored. A character
    /// for which `f` returns `None` fails with [`GridError::InvalidCell`].
    pub fn parse_with(text: &str, mut f: impl FnMut(char) -> Option<T>) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let cell = f(ch).ok_or(GridError::InvalidCell {
                    row: r,
                    col: c,
                    found: ch,
                })?;
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The bottom-right cell.
    pub fn last_pos(&self) -> Pos {
        Pos::new(self.rows - 1, self.cols - 1)
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Check that `pos` lies inside the grid.
    pub fn check(&self, pos: Pos) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            self.cells.get(self.flat(pos))
        } else {
            None
        }
    }

    /// Move `n` cells from `pos` in direction `dir`.
    ///
    /// Returns `None` if the destination is outside the grid.
    pub fn step(&self, pos: Pos, dir: Direction, n: usize) -> Option<Pos> {
        let next = match dir {
            Direction::North => Pos::new(pos.row.checked_sub(n)?, pos.col),
            Direction::South => Pos::new(pos.row.checked_add(n)?, pos.col),
            Direction::West => Pos::new(pos.row, pos.col.checked_sub(n)?),
            Direction::East => Pos::new(pos.row, pos.col.checked_add(n)?),
        };
        self.contains(next).then_some(next)
    }

    /// In-bounds 4-connected neighbours of `pos`, with the heading used.
    pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = (Direction, Pos)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(pos, d, 1).map(|p| (d, p)))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| Pos::new(i / cols, i % cols))
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// The row-major cell slice.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid, returning its row-major cells.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// One row as a slice. Panics if `row >= rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// One column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().skip(col).step_by(self.cols)
    }

    /// Apply `f` to every cell, preserving shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Row-major flat index of an in-bounds position.
    fn flat(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl<T: Clone> Grid<T> {
    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            cells.extend(self.column(col).cloned());
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds: [0, {}) x [0, {})",
            self.rows,
            self.cols
        );
        &self.cells[self.flat(pos)]
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}
