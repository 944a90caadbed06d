//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board) against the fixed
//! win-line table. Rules are kept apart from board storage so the strategies
//! and the board share one definition of a completed line.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WIN_LINES, WinLine, check_winner, open_line};
