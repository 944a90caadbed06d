//! Uniformly random opponent.

use crate::{Board, Cell};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Returns a legal cell drawn uniformly at random.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    board.legal_moves().choose(rng).copied()
}
