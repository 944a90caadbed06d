//! Draw detection logic for tic-tac-toe.
//!
//! Not instrumented: minimax calls these at every node of its search.

use super::win::check_winner;
use crate::{Board, Marker};

/// Checks if the board is full (no empty cells).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&m| m != Marker::Empty)
}

/// A full board with no winner.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
