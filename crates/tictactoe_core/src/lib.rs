//! Tic-tac-toe game logic with three computer opponents.
//!
//! The crate is a pure, synchronous core. Callers hold the game between
//! requests as a serialized [`GameState`], and each request rebuilds a
//! [`Board`], applies one turn and hands back the new state.
//!
//! # Architecture
//!
//! - **Types**: [`Marker`], [`Cell`] and [`Turn`], the atoms of a board
//! - **Board**: nine cells plus the line-based rules in [`rules`]
//! - **Strategy**: [`Opponent`] picks the computer's cell (random, heuristic, minimax)
//! - **Turn**: [`apply_turn`] plays the human's move and the computer's reply
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{apply_turn, new_game, Marker, Opponent, Turn, TurnStatus};
//!
//! # fn example() -> Result<(), tictactoe_core::GameError> {
//! let game = new_game(Marker::X, Turn::Human, Opponent::Minimax)?;
//! let (game, report) = apply_turn(&game, 5)?;
//! assert_eq!(report.status, TurnStatus::Continue);
//! assert_ne!(report.computer_move.map(|c| c.number()), Some(5));
//! assert_eq!(game.active_turn, "human");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
pub mod rules;
mod state;
mod strategy;
mod turn;
mod types;

pub use board::Board;
pub use cell::Cell;
pub use error::{GameError, GameErrorKind};
pub use state::{GameState, Verdict, new_game};
pub use strategy::{Opponent, choose_heuristic, choose_minimax};
pub use turn::{
    TurnReport, TurnStatus, apply_turn, apply_turn_with, computer_opening, computer_opening_with,
};
pub use types::{Marker, Outcome, Turn};
