//! Tic-tac-toe - terminal driver
//!
//! Plays the game core interactively or one turn at a time against a JSON
//! state file.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use std::io::{self, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { game } => run_play(config.with_args(&game)),
        Command::New { game, state } => {
            let game_state = play::start(&config.with_args(&game))?;
            play::save_state(&state, &game_state)?;
            println!("{}", play::render(&game_state)?);
            Ok(())
        }
        Command::Turn { state, cell } => {
            println!("{}", play::turn_from_file(&state, cell, &mut rand::rng())?);
            Ok(())
        }
        Command::Opening { state } => {
            println!("{}", play::opening_from_file(&state, &mut rand::rng())?);
            Ok(())
        }
        Command::Show { state } => {
            let game_state = play::load_state(&state)?;
            println!("{}\n\n{}", play::render(&game_state)?, game_state.outcome()?);
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting interactive game");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let verdict = play::run_session(&config, &mut input, &mut output, &mut rand::rng())?;
    output.flush()?;

    info!(verdict = %verdict, "Session finished");
    Ok(())
}
