//! Conflict queries over a [`Board`].
//!
//! A line (row, column, or diagonal) is in conflict when it holds two or more
//! pieces. Every query re-derives its answer from the board's current
//! contents: one O(n) scan per line, O(n^2) for the whole-board aggregates.
//! Nothing is cached, so a query issued after a toggle always sees the toggle.
//!
//! Diagonals are named by an integer offset. A major diagonal (top-left to
//! bottom-right) holds the cells sharing col - row; a minor diagonal
//! (top-right to bottom-left) holds the cells sharing col + row.

use super::matrix::Board;

/// Offset of the major diagonal through (row, col).
pub fn major_offset_of(row: usize, col: usize) -> i32 {
    col as i32 - row as i32
}

/// Offset of the minor diagonal through (row, col).
pub fn minor_offset_of(row: usize, col: usize) -> i32 {
    col as i32 + row as i32
}

impl Board {
    /// True iff row `row` holds two or more pieces.
    /// Panics if `row` is outside the board.
    pub fn has_row_conflict_at(&self, row: usize) -> bool {
        let pieces = self.rows()[row]
            .iter()
            .filter(|cell| cell.is_occupied())
            .count();
        pieces >= 2
    }

    /// True iff any row holds two or more pieces.
    pub fn has_any_row_conflicts(&self) -> bool {
        (0..self.size()).any(|row| self.has_row_conflict_at(row))
    }

    /// True iff column `col` holds two or more pieces.
    /// Panics if `col` is outside a non-empty board.
    pub fn has_col_conflict_at(&self, col: usize) -> bool {
        let pieces = (0..self.size())
            .filter(|&row| self.get(row, col).is_occupied())
            .count();
        pieces >= 2
    }

    /// True iff any column holds two or more pieces.
    pub fn has_any_col_conflicts(&self) -> bool {
        (0..self.size()).any(|col| self.has_col_conflict_at(col))
    }

    /// True iff the major diagonal named by `offset` holds two or more
    /// pieces.
    ///
    /// The scan starts at (0, offset) and steps down-right; columns left of
    /// the board are skipped, which is what lets negative offsets reach the
    /// diagonals starting below the first row. Offsets naming no cell of the
    /// board count zero pieces and yield false.
    pub fn has_major_diagonal_conflict_at(&self, offset: i32) -> bool {
        let n = self.size() as i32;
        let mut pieces = 0;
        let mut row = 0;
        let mut col = offset;
        while row < n && col < n {
            if col >= 0 && self.get(row as usize, col as usize).is_occupied() {
                pieces += 1;
            }
            row += 1;
            col += 1;
        }
        pieces >= 2
    }

    /// True iff any major diagonal holds two or more pieces. Offsets in
    /// [1 - n, n) cover every major diagonal of the board.
    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        let n = self.size() as i32;
        (1 - n..n).any(|offset| self.has_major_diagonal_conflict_at(offset))
    }

    /// True iff the minor diagonal named by `offset` holds two or more
    /// pieces.
    ///
    /// The scan starts at (0, offset) and steps down-left; columns right of
    /// the board are skipped, which is what lets offsets past n - 1 reach the
    /// diagonals starting beyond the last column. Offsets naming no cell of
    /// the board count zero pieces and yield false.
    pub fn has_minor_diagonal_conflict_at(&self, offset: i32) -> bool {
        let n = self.size() as i32;
        let mut pieces = 0;
        let mut row = 0;
        let mut col = offset;
        while row < n && col >= 0 {
            if col < n && self.get(row as usize, col as usize).is_occupied() {
                pieces += 1;
            }
            row += 1;
            col -= 1;
        }
        pieces >= 2
    }

    /// True iff any minor diagonal holds two or more pieces. Offsets in
    /// [0, 2n - 1) cover every minor diagonal of the board.
    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        let n = self.size() as i32;
        (0..2 * n - 1).any(|offset| self.has_minor_diagonal_conflict_at(offset))
    }

    /// True iff any row or column holds two or more pieces.
    pub fn has_any_rook_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// True iff the row, the column, or either diagonal through (row, col)
    /// holds two or more pieces. Checks a single placement without
    /// rescanning the whole board.
    /// Panics if (row, col) is outside the board.
    pub fn has_queen_conflict_on(&self, row: usize, col: usize) -> bool {
        assert!(
            self.in_bounds(row, col),
            "position ({}, {}) is outside a {n}x{n} board",
            row,
            col,
            n = self.size()
        );
        self.has_row_conflict_at(row)
            || self.has_col_conflict_at(col)
            || self.has_major_diagonal_conflict_at(major_offset_of(row, col))
            || self.has_minor_diagonal_conflict_at(minor_offset_of(row, col))
    }

    /// True iff any row, column, or diagonal holds two or more pieces.
    pub fn has_any_queen_conflicts(&self) -> bool {
        self.has_any_rook_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }
}

/// Aggregate conflict findings for a whole board: one boolean per line family
/// plus the rook/queen disjunctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ConflictReport {
    pub rows: bool,
    pub cols: bool,
    pub major_diagonals: bool,
    pub minor_diagonals: bool,
    pub rooks: bool,
    pub queens: bool,
}

impl ConflictReport {
    /// Evaluate every aggregate query against the board's current contents.
    pub fn of(board: &Board) -> Self {
        let rows = board.has_any_row_conflicts();
        let cols = board.has_any_col_conflicts();
        let major_diagonals = board.has_any_major_diagonal_conflicts();
        let minor_diagonals = board.has_any_minor_diagonal_conflicts();
        ConflictReport {
            rows,
            cols,
            major_diagonals,
            minor_diagonals,
            rooks: rows || cols,
            queens: rows || cols || major_diagonals || minor_diagonals,
        }
    }
}
