//! The player's view of the ocean: a rectangular grid of cell states.
//!
//! Coordinates are 1-based. Row 0 and column 0 exist only in the rendered
//! form, where they carry the axis labels.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::num::ParseIntError;

/// Column separator used when rendering.
pub const SEPARATOR: &str = "  ";

/// State of one playable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water the player has not guessed.
    #[default]
    Unknown,
    /// Guessed, nothing there.
    Miss,
    /// Guessed, ship sunk.
    Hit,
    /// Ship never found, shown after a loss.
    Revealed,
}

impl Cell {
    pub const fn symbol(self) -> char {
        match self {
            Cell::Unknown => 'O',
            Cell::Miss => 'X',
            Cell::Hit => '*',
            Cell::Revealed => '!',
        }
    }
}

/// A 1-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Playable cells of the board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-water grid with `rows` x `cols` playable cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Unknown; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether a raw, possibly negative, coordinate lies on the playable board.
    pub fn contains(&self, row: i64, col: i64) -> bool {
        (1..=self.rows as i64).contains(&row) && (1..=self.cols as i64).contains(&col)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row == 0 || pos.col == 0 || pos.row > self.rows || pos.col > self.cols {
            return None;
        }
        Some((pos.row - 1) * self.cols + (pos.col - 1))
    }

    /// Cell at `pos`, or `None` off the board (including the label row/column).
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Returns `false` when `pos` is off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// The display matrix: `(rows + 1) x (cols + 1)` strings with the labels
    /// in row 0 and column 0.
    pub fn labeled_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows + 1);
        out.push((0..=self.cols).map(|c| c.to_string()).collect());
        for r in 0..self.rows {
            let mut line = Vec::with_capacity(self.cols + 1);
            line.push((r + 1).to_string());
            let start = r * self.cols;
            line.extend(
                self.cells[start..start + self.cols]
                    .iter()
                    .map(|c| c.symbol().to_string()),
            );
            out.push(line);
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.labeled_rows() {
            writeln!(f, "{}", line.join(SEPARATOR))?;
        }
        Ok(())
    }
}

/// Read the row labels back out of a rendered grid, header row included.
pub fn parse_row_labels(rendered: &str) -> Result<Vec<usize>, ParseIntError> {
    rendered
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.split_whitespace().next().unwrap_or("").parse())
        .collect()
}
