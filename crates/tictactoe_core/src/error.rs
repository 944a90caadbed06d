//! Error types for the game core.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A move targeted an out-of-range or occupied cell.
    #[display("Invalid cell: {}", _0)]
    InvalidCell(String),

    /// A persisted game state could not be turned back into a board.
    #[display("Invalid state: {}", _0)]
    InvalidState(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`GameErrorKind::InvalidCell`] error.
    #[track_caller]
    pub fn invalid_cell(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidCell(message.into()))
    }

    /// Shorthand for an [`GameErrorKind::InvalidState`] error.
    #[track_caller]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidState(message.into()))
    }

    /// True if the caller may simply reject the input and keep the game.
    pub fn is_invalid_cell(&self) -> bool {
        matches!(self.kind, GameErrorKind::InvalidCell(_))
    }

    /// True if the persisted state is corrupt and a new game is needed.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self.kind, GameErrorKind::InvalidState(_))
    }
}

impl From<serde_json::Error> for GameError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_state(format!("Malformed game state JSON: {}", err))
    }
}
