//! Terminal front ends for the game core.
//!
//! An interactive session keeps the [`GameState`] in memory between turns;
//! the state-file commands keep it in a JSON file between invocations. Both
//! go through the same `apply_turn` contract.

use crate::config::GameConfig;
use anyhow::{Context, Result, bail};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;
use tictactoe_core::{
    Cell, GameError, GameState, TurnReport, TurnStatus, Verdict, apply_turn_with,
    computer_opening_with, new_game,
};
use tracing::{debug, info, instrument, warn};

/// Creates the opening state described by `config`.
#[instrument]
pub fn start(config: &GameConfig) -> Result<GameState> {
    let marker = config.marker()?;
    Ok(new_game(marker, *config.first_turn(), *config.opponent())?)
}

/// Renders a persisted state for the terminal.
pub fn render(state: &GameState) -> Result<String> {
    let (board, _) = state.decode()?;
    Ok(board.to_string())
}

/// Plays one game, reading cells from `input` and writing the board to `output`.
///
/// Returns the final verdict, or [`Verdict::Ongoing`] if `input` runs out first.
#[instrument(skip_all)]
pub fn run_session<R, W, G>(
    config: &GameConfig,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<Verdict>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut state = start(config)?;
    writeln!(
        output,
        "You play {} against the {} opponent.",
        state.human_marker, state.opponent
    )?;

    if state.active_turn == "computer" {
        let (next, report) = computer_opening_with(&state, rng)?;
        announce(output, &report)?;
        state = next;
    }

    let mut line = String::new();
    loop {
        writeln!(output, "\n{}\n", render(&state)?)?;
        write!(output, "Your move (1-9): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nGoodbye.")?;
            return Ok(Verdict::Ongoing);
        }

        let Some(cell) = Cell::parse(&line) else {
            writeln!(output, "Invalid cell {:?}, pick a free number 1-9.", line.trim())?;
            continue;
        };

        let (next, report) = match apply_turn_with(&state, cell.number(), rng) {
            Ok(turn) => turn,
            Err(err) if err.is_invalid_cell() => {
                warn!(cell = %cell, "Rejected move");
                writeln!(output, "Invalid cell {}, it is already taken.", cell)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        state = next;
        announce(output, &report)?;

        if report.status != TurnStatus::Continue {
            let verdict = state.outcome()?;
            info!(verdict = %verdict, "Game over");
            writeln!(output, "\n{}\n\n{}", render(&state)?, verdict)?;
            return Ok(verdict);
        }
    }
}

fn announce<W: Write>(output: &mut W, report: &TurnReport) -> Result<()> {
    if let (Some(cell), Some(marker)) = (report.computer_move, report.computer_marker) {
        writeln!(output, "Computer plays {} at {} ({}).", marker, cell, cell.label())?;
    }
    Ok(())
}

/// Reads a state file.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_state(path: &Path) -> Result<GameState> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    GameState::from_json(&json).map_err(corrupt_state)
}

/// Writes a state file.
#[instrument(skip(path, state), fields(path = %path.display()))]
pub fn save_state(path: &Path, state: &GameState) -> Result<()> {
    let json = state.to_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write state file {}", path.display()))?;
    debug!("State saved");
    Ok(())
}

/// Applies one turn to the game stored at `path` and returns the report as JSON.
#[instrument(skip(path, rng), fields(path = %path.display()))]
pub fn turn_from_file<G: Rng + ?Sized>(path: &Path, cell: u8, rng: &mut G) -> Result<String> {
    let state = load_state(path)?;
    let (next, report) = match apply_turn_with(&state, cell, rng) {
        Ok(turn) => turn,
        Err(err) if err.is_invalid_cell() => bail!("Move rejected: {}", err.kind),
        Err(err) => return Err(corrupt_state(err)),
    };
    save_state(path, &next)?;
    Ok(serde_json::to_string(&report)?)
}

/// Lets the computer open the game stored at `path` and returns the report as JSON.
#[instrument(skip(path, rng), fields(path = %path.display()))]
pub fn opening_from_file<G: Rng + ?Sized>(path: &Path, rng: &mut G) -> Result<String> {
    let state = load_state(path)?;
    let (next, report) = computer_opening_with(&state, rng).map_err(corrupt_state)?;
    save_state(path, &next)?;
    Ok(serde_json::to_string(&report)?)
}

fn corrupt_state(err: GameError) -> anyhow::Error {
    anyhow::Error::new(err).context("Game state is unusable; start a new game with `tictactoe new`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GameArgs;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tictactoe_core::{Opponent, Turn};

    fn config(opponent: Opponent, first: Turn) -> GameConfig {
        GameConfig::default().with_args(&GameArgs {
            marker: Some('X'),
            first: Some(first),
            opponent: Some(opponent),
        })
    }

    #[test]
    fn test_session_against_minimax_never_won_by_human() {
        let mut input = "abc\n5\n1\n2\n3\n4\n6\n7\n8\n9\n".as_bytes();
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(4);

        let verdict = run_session(
            &config(Opponent::Minimax, Turn::Human),
            &mut input,
            &mut output,
            &mut rng,
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(matches!(verdict, Verdict::Tie | Verdict::ComputerWon));
        assert!(text.contains("Invalid cell \"abc\""));
        assert!(text.contains("Computer plays O at 1"));
    }

    #[test]
    fn test_session_ends_on_eof() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        let verdict = run_session(
            &config(Opponent::Heuristic, Turn::Computer),
            &mut input,
            &mut output,
            &mut rng,
        )
        .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(verdict, Verdict::Ongoing);
        assert!(text.contains("Computer plays O at 5"));
        assert!(text.contains("Goodbye."));
    }

    #[test]
    fn test_state_file_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let mut rng = StdRng::seed_from_u64(8);

        save_state(&path, &start(&config(Opponent::Minimax, Turn::Human)).unwrap()).unwrap();
        let report = turn_from_file(&path, 5, &mut rng).unwrap();
        let report: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(report["status"], "continue");
        assert_eq!(report["computer_move"], 1);

        let state = load_state(&path).unwrap();
        assert_eq!(state.board_cells[0], 'O');
        assert_eq!(state.board_cells[4], 'X');

        assert!(turn_from_file(&path, 5, &mut rng).is_err());
    }

    #[test]
    fn test_corrupt_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_state(&path).unwrap_err();
        assert!(err.to_string().contains("start a new game"));
    }

    #[test]
    fn test_opening_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let mut rng = StdRng::seed_from_u64(8);
        save_state(&path, &start(&config(Opponent::Heuristic, Turn::Computer)).unwrap()).unwrap();

        let report = opening_from_file(&path, &mut rng).unwrap();
        let report: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(report["computer_move"], 5);
        assert_eq!(load_state(&path).unwrap().active_turn, "human");
    }
}
