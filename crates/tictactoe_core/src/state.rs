//! The persisted game-state record and its conversion to a live board.

use crate::board::Board;
use crate::error::GameError;
use crate::strategy::Opponent;
use crate::types::{Marker, Turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Game state as stored by the caller between turns.
///
/// Fields stay in their raw transport form so that every malformed value is
/// reported as `InvalidState` by [`GameState::decode`] rather than rejected
/// by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Nine marker codes, row-major; `' '` is empty.
    pub board_cells: Vec<char>,
    /// The human player's symbol.
    pub human_marker: char,
    /// The computer's symbol.
    pub computer_marker: char,
    /// `human` or `computer`.
    pub active_turn: String,
    /// `random`, `heuristic` or `minimax`.
    pub opponent: String,
}

/// How a persisted game stands, from the human's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Still being played.
    #[strum(to_string = "Game in progress")]
    Ongoing,
    /// The human completed a line.
    #[strum(to_string = "You won!")]
    HumanWon,
    /// The computer completed a line.
    #[strum(to_string = "The computer won!")]
    ComputerWon,
    /// Full board, no line.
    #[strum(to_string = "It's a tie!")]
    Tie,
}

/// Starts a new game: empty board, computer plays the other symbol.
///
/// # Errors
///
/// `InvalidState` if `human_marker` is not `X` or `O`.
#[instrument]
pub fn new_game(
    human_marker: Marker,
    active_turn: Turn,
    opponent: Opponent,
) -> Result<GameState, GameError> {
    let board = Board::new(human_marker, human_marker.other(), active_turn, None)?;
    let state = GameState::encode(&board, opponent);
    debug!(human = %human_marker, turn = %active_turn, opponent = %opponent, "New game");
    Ok(state)
}

impl GameState {
    /// Rebuilds the live board and the selected opponent.
    ///
    /// # Errors
    ///
    /// `InvalidState` on a wrong cell count, an unknown marker, turn or
    /// opponent, or equal human and computer markers.
    #[instrument(skip(self))]
    pub fn decode(&self) -> Result<(Board, Opponent), GameError> {
        let human = Marker::try_from(self.human_marker)?;
        let computer = Marker::try_from(self.computer_marker)?;
        let turn: Turn = self.active_turn.parse().map_err(|_| {
            warn!(turn = %self.active_turn, "Unknown active turn");
            GameError::invalid_state(format!("Unknown active turn {:?}", self.active_turn))
        })?;
        let opponent: Opponent = self.opponent.parse().map_err(|_| {
            warn!(opponent = %self.opponent, "Unknown opponent");
            GameError::invalid_state(format!("Unknown opponent {:?}", self.opponent))
        })?;
        let board = Board::new(human, computer, turn, Some(self.board_cells.as_slice()))?;
        Ok((board, opponent))
    }

    /// Serializes a board and opponent back into a record.
    pub fn encode(board: &Board, opponent: Opponent) -> Self {
        Self {
            board_cells: board.codes(),
            human_marker: board.human_marker().code(),
            computer_marker: board.computer_marker().code(),
            active_turn: board.active_turn().to_string(),
            opponent: opponent.to_string(),
        }
    }

    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the JSON is malformed or the record is incomplete.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the record as pretty JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Classifies the stored game for a game-over view.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the record does not decode.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Result<Verdict, GameError> {
        let (board, _) = self.decode()?;
        Ok(if board.human_won() {
            Verdict::HumanWon
        } else if board.computer_won() {
            Verdict::ComputerWon
        } else if board.is_full() {
            Verdict::Tie
        } else {
            Verdict::Ongoing
        })
    }
}
