//! Core domain types: cells and the letter grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Default board height.
pub const DEFAULT_HEIGHT: usize = 14;

/// Default board width.
pub const DEFAULT_WIDTH: usize = 14;

/// A single cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No tile.
    #[default]
    Empty,
    /// A placed letter.
    Letter(char),
}

impl Cell {
    /// Returns the letter in this cell, if any.
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(ch) => Some(ch),
        }
    }

    /// Checks if the cell holds a letter.
    pub fn is_letter(self) -> bool {
        matches!(self, Cell::Letter(_))
    }
}

/// Error returned when writing outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cell ({row}, {col}) is outside a {height}x{width} board")]
pub struct BoardError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Board height.
    pub height: usize,
    /// Board width.
    pub width: usize,
}

/// Rectangular letter grid with fixed dimensions.
///
/// Cells are stored in row-major order. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Center cell as `(row, col)`.
    pub fn center(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let i = self.index(row, col).ok_or(BoardError {
            row,
            col,
            height: self.height,
            width: self.width,
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if a signed coordinate lies on the grid.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        usize::try_from(row).is_ok_and(|r| r < self.height)
            && usize::try_from(col).is_ok_and(|c| c < self.width)
    }

    /// Reads a cell by signed coordinate.
    ///
    /// Anything outside the grid reads as [`Cell::Empty`], so traversals
    /// stop at the edge instead of reading past it.
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        if !self.contains(row, col) {
            return Cell::Empty;
        }
        self.get(row as usize, col as usize).unwrap_or_default()
    }

    /// Number of cells holding a letter.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_letter()).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Letter(ch) => write!(f, "{}", ch)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
