//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Opponent, Turn};

/// Tic-tac-toe against a random, heuristic or minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with default game settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Game settings that override the config file
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Your symbol (X or O)
    #[arg(short, long)]
    pub marker: Option<char>,

    /// Who moves first (human or computer)
    #[arg(short, long)]
    pub first: Option<Turn>,

    /// Computer opponent (random, heuristic or minimax)
    #[arg(short, long)]
    pub opponent: Option<Opponent>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a full game in the terminal
    Play {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Write a new game state file
    New {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,

        /// State file to create
        #[arg(short, long, default_value = "game_state.json")]
        state: PathBuf,
    },

    /// Play one cell from a state file and let the computer reply
    Turn {
        /// State file to update
        #[arg(short, long, default_value = "game_state.json")]
        state: PathBuf,

        /// Cell to mark (1-9, row-major)
        cell: u8,
    },

    /// Let the computer open a game it starts
    Opening {
        /// State file to update
        #[arg(short, long, default_value = "game_state.json")]
        state: PathBuf,
    },

    /// Show the board and result stored in a state file
    Show {
        /// State file to read
        #[arg(short, long, default_value = "game_state.json")]
        state: PathBuf,
    },
}
