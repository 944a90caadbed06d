//! Computer opponents.
//!
//! The three strategies form a closed set. Each is a pure decision from a
//! board to an empty cell; none keeps data between calls.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::choose as choose_heuristic;
pub use minimax::choose as choose_minimax;

use crate::{Board, Cell};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The strategy used for computer moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Opponent {
    /// Uniformly random legal cell.
    Random,
    /// Win, else block, else center, else random.
    Heuristic,
    /// Exhaustive game-tree search; never loses.
    #[default]
    Minimax,
}

impl Opponent {
    /// Picks the computer's next cell.
    ///
    /// Returns `None` only when the board has no legal moves.
    #[instrument(skip(self, rng), fields(opponent = %self))]
    pub fn choose<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Cell> {
        let choice = match self {
            Opponent::Random => random::choose(board, rng),
            Opponent::Heuristic => heuristic::choose(board, rng),
            Opponent::Minimax => minimax::choose(board, rng),
        };
        debug!(opponent = %self, cell = ?choice, "Computer chose cell");
        choice
    }
}
