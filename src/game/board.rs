use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::session::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Smallest dimension that still admits a four-in-a-row.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player occupying this cell, `None` when empty.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 4x4, got {rows}x{columns}")]
    TooSmall { rows: usize, columns: usize },
}

/// Grid of cells stored row-major. Row 0 is the bottom row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            return Err(BoardError::TooSmall { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        })
    }

    /// Create the classic 6x7 board
    pub fn standard() -> Self {
        Board {
            rows: ROWS,
            columns: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// First empty row of a column scanning upward from the bottom.
    /// `None` if the column is full or does not exist.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.columns {
            return None;
        }
        (0..self.rows).find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Write a mark into an empty cell. Callers find the row with
    /// [`Board::lowest_empty_row`].
    pub fn place(&mut self, row: usize, col: usize, mark: Player) {
        debug_assert_eq!(self.get(row, col), Cell::Empty, "cell ({row}, {col}) is occupied");
        debug_assert!(
            row == 0 || self.get(row - 1, col) != Cell::Empty,
            "cell ({row}, {col}) would float"
        );
        let idx = self.index(row, col);
        self.cells[idx] = mark.to_cell();
    }

    /// Reset a cell to empty. Only used to undo a simulated drop.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Empty;
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        self.get(self.rows - 1, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, mark: Player) -> Result<usize, MoveError> {
        if col >= self.columns {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.lowest_empty_row(col).ok_or(MoveError::ColumnFull)?;
        self.place(row, col, mark);
        Ok(row)
    }

    /// Columns that can still take a piece, ascending
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full. The top row is enough
    /// because pieces never float.
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.get(self.rows - 1, col) != Cell::Empty)
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Simulate dropping `mark` into `col`, run `f` on the board with the
    /// piece in place, then take the piece back out.
    ///
    /// Returns `None` without calling `f` when the column is full.
    pub fn with_piece<R>(
        &mut self,
        col: usize,
        mark: Player,
        f: impl FnOnce(&mut Board, usize) -> R,
    ) -> Option<R> {
        let row = self.lowest_empty_row(col)?;
        self.place(row, col, mark);
        let result = f(self, row);
        self.clear(row, col);
        Some(result)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.columns {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        for col in 0..self.columns {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", col % 10)?;
        }
        Ok(())
    }
}
