//! One full turn: the human's move followed by the computer's reply.

use crate::cell::Cell;
use crate::error::GameError;
use crate::state::GameState;
use crate::types::Turn;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Where the game stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TurnStatus {
    /// The human's move ended the game; the computer did not move.
    End,
    /// The computer's reply ended the game.
    EndAfter,
    /// Play goes on.
    Continue,
}

/// What the caller needs to render a turn without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Where the game stands.
    pub status: TurnStatus,
    /// The cell the computer played, if it moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_move: Option<Cell>,
    /// The computer's symbol, if it moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_marker: Option<char>,
}

impl TurnReport {
    fn ended_by_human() -> Self {
        Self {
            status: TurnStatus::End,
            computer_move: None,
            computer_marker: None,
        }
    }

    fn computer_moved(status: TurnStatus, cell: Cell, marker: char) -> Self {
        Self {
            status,
            computer_move: Some(cell),
            computer_marker: Some(marker),
        }
    }
}

/// Applies the human's move and, unless that ends the game, the computer's reply.
///
/// # Errors
///
/// - `InvalidState` if `state` does not decode or the game is already over.
/// - `InvalidCell` if `human_cell` is outside 1..9 or already occupied.
pub fn apply_turn(state: &GameState, human_cell: u8) -> Result<(GameState, TurnReport), GameError> {
    apply_turn_with(state, human_cell, &mut rand::rng())
}

/// [`apply_turn`] with a caller-supplied random source for the opponent.
#[instrument(skip(state, rng), fields(opponent = %state.opponent))]
pub fn apply_turn_with<R: Rng + ?Sized>(
    state: &GameState,
    human_cell: u8,
    rng: &mut R,
) -> Result<(GameState, TurnReport), GameError> {
    let (mut board, opponent) = state.decode()?;
    if board.is_terminal() {
        warn!(outcome = %board.outcome(), "Move on a finished game");
        return Err(GameError::invalid_state("The game is already over"));
    }

    let cell = Cell::try_from(human_cell).inspect_err(|_| {
        warn!(human_cell, "Move outside the board");
    })?;
    if !board.is_empty(cell) {
        warn!(cell = %cell, "Move onto an occupied cell");
        return Err(GameError::invalid_cell(format!("{} is already occupied", cell)));
    }

    board.set_active_turn(Turn::Human);
    board.place(cell);
    if board.is_terminal() {
        info!(cell = %cell, outcome = %board.outcome(), "Human move ended the game");
        return Ok((GameState::encode(&board, opponent), TurnReport::ended_by_human()));
    }

    let reply = opponent
        .choose(&board, rng)
        .ok_or_else(|| GameError::invalid_state("No legal move left for the computer"))?;
    board.place(reply);

    let status = if board.is_terminal() {
        info!(cell = %reply, outcome = %board.outcome(), "Computer move ended the game");
        TurnStatus::EndAfter
    } else {
        TurnStatus::Continue
    };

    let report = TurnReport::computer_moved(status, reply, board.computer_marker().code());
    Ok((GameState::encode(&board, opponent), report))
}

/// Lets the computer make the first move of a game it starts.
///
/// # Errors
///
/// `InvalidState` if the state does not decode, it is not the computer's
/// turn, or the game is already over.
pub fn computer_opening(state: &GameState) -> Result<(GameState, TurnReport), GameError> {
    computer_opening_with(state, &mut rand::rng())
}

/// [`computer_opening`] with a caller-supplied random source.
#[instrument(skip(state, rng), fields(opponent = %state.opponent))]
pub fn computer_opening_with<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Result<(GameState, TurnReport), GameError> {
    let (mut board, opponent) = state.decode()?;

    if board.active_turn() != Turn::Computer {
        return Err(GameError::invalid_state("It is not the computer's turn"));
    }
    if board.is_terminal() {
        return Err(GameError::invalid_state("The game is already over"));
    }

    let reply = opponent
        .choose(&board, rng)
        .ok_or_else(|| GameError::invalid_state("No legal move left for the computer"))?;
    board.place(reply);

    let status = if board.is_terminal() {
        TurnStatus::EndAfter
    } else {
        TurnStatus::Continue
    };
    info!(cell = %reply, status = %status, "Computer moved first");

    let report = TurnReport::computer_moved(status, reply, board.computer_marker().code());
    Ok((GameState::encode(&board, opponent), report))
}
