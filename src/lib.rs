//! # queens_referee
//!
//! Conflict detection for the N-queens puzzle family: given an n x n board of
//! 0/1 occupancy values, answer whether any row, column, major diagonal, or
//! minor diagonal holds more than one piece. The crate validates candidate
//! placements; it does not search for them.
//!
//! ## Modules
//!
//! - [`board`] — Board matrix, conflict queries, observed mutation wrapper
//! - [`input`] — Board-file loading for the validator binary
//! - [`error`] — Structured error types

pub mod board;
pub mod error;
pub mod input;
