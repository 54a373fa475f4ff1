use std::fmt;

use crate::error::BoardError;

/// A single square of the board: empty or holding a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece,
}

impl Cell {
    /// True iff a piece sits on this cell.
    pub fn is_occupied(self) -> bool {
        self == Cell::Piece
    }

    /// The cell with its occupancy flipped.
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Empty => Cell::Piece,
            Cell::Piece => Cell::Empty,
        }
    }

    /// 0/1 wire value of this cell.
    pub fn bit(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece => 1,
        }
    }

    /// Cell for a 0/1 wire value; `None` for anything else.
    pub fn from_bit(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Piece),
            _ => None,
        }
    }
}

/// An n x n occupancy matrix.
///
/// Rows are stored top to bottom; every row holds exactly `n` cells. The
/// square shape is fixed at construction and the only mutation is a
/// single-cell toggle, so the shape invariant cannot be broken afterwards.
/// n = 0 is a valid (empty) board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
    n: usize,
}

impl Board {
    /// Create an empty n x n board.
    pub fn empty(n: usize) -> Self {
        Board {
            rows: vec![vec![Cell::Empty; n]; n],
            n,
        }
    }

    /// Build a board from nested 0/1 values.
    ///
    /// The outer length fixes the dimension; every inner row must match it,
    /// and every value must be 0 or 1.
    pub fn from_rows(values: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let n = values.len();
        let mut rows = Vec::with_capacity(n);
        for (row_index, row) in values.into_iter().enumerate() {
            if row.len() != n {
                return Err(BoardError::NotSquare {
                    row: row_index,
                    len: row.len(),
                    expected: n,
                });
            }
            let mut cells = Vec::with_capacity(n);
            for (col_index, value) in row.into_iter().enumerate() {
                let cell = Cell::from_bit(value).ok_or(BoardError::NonBinaryCell {
                    row: row_index,
                    col: col_index,
                    value,
                })?;
                cells.push(cell);
            }
            rows.push(cells);
        }
        Ok(Board { rows, n })
    }

    /// Board dimension n.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of pieces currently on the board.
    pub fn piece_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    /// Get the cell at a specific position.
    /// Panics if either index is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Row-major view of the cells.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// True iff (row, col) addresses a cell of this board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.n && col < self.n
    }

    /// Flip the cell at (row, col) between empty and occupied, returning the
    /// value now in place.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                n: self.n,
            });
        }
        let cell = self.rows[row][col].toggled();
        self.rows[row][col] = cell;
        Ok(cell)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let mut line = String::with_capacity(2 * self.n);
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    line.push(' ');
                }
                line.push(if cell.is_occupied() { 'Q' } else { '.' });
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
