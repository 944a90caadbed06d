//! Greedy one-ply opponent.
//!
//! Takes a winning cell, else blocks the human's winning cell, else the
//! center, else a random cell. It does not see forks.

use super::random;
use crate::{Board, Cell};
use rand::Rng;

/// Picks the computer's cell by the first rule that applies.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    board
        .heuristic_open_line(board.computer_marker())
        .or_else(|| board.heuristic_open_line(board.human_marker()))
        .or_else(|| board.is_empty(Cell::Center).then_some(Cell::Center))
        .or_else(|| random::choose(board, rng))
}
