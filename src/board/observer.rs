use super::matrix::{Board, Cell};
use crate::error::BoardError;

/// What a toggle did: the position touched and the cell value now in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub cell: Cell,
}

/// Callback interface for hosts that need to hear about board mutations,
/// e.g. a UI re-rendering after each toggle.
pub trait BoardObserver {
    /// Called after a successful toggle, with the mutated board.
    fn board_changed(&mut self, change: CellChange, board: &Board);
}

/// A board plus the observers watching it.
///
/// Mutations go through this wrapper so every successful toggle reaches every
/// registered observer; queries go straight to the inner [`Board`].
pub struct ObservedBoard {
    board: Board,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl ObservedBoard {
    pub fn new(board: Board) -> Self {
        ObservedBoard {
            board,
            observers: Vec::new(),
        }
    }

    /// The board under observation.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    /// Flip the cell at (row, col) and notify every observer.
    /// A rejected toggle (out-of-bounds position) notifies nobody.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellChange, BoardError> {
        let cell = self.board.toggle(row, col)?;
        let change = CellChange { row, col, cell };
        for observer in &mut self.observers {
            observer.board_changed(change, &self.board);
        }
        Ok(change)
    }

    /// Drop the observers and take the board back.
    pub fn into_board(self) -> Board {
        self.board
    }
}
