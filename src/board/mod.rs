//! Core board logic: the occupancy matrix, conflict queries over it, and the
//! observed mutation wrapper hosts hang change handlers from.

mod conflicts;
mod matrix;
mod observer;

pub use conflicts::{major_offset_of, minor_offset_of, ConflictReport};
pub use matrix::{Board, Cell};
pub use observer::{BoardObserver, CellChange, ObservedBoard};
