//! Game settings loaded from TOML and the command line.

use crate::cli::GameArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{Marker, Opponent, Turn};
use tracing::{debug, info, instrument};

/// Environment variable naming a default config file.
pub const CONFIG_ENV: &str = "TICTACTOE_CONFIG";

/// Settings for starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// The human's symbol, `X` or `O`.
    #[serde(default = "default_marker")]
    human_marker: char,

    /// Who moves first.
    #[serde(default = "default_first_turn")]
    first_turn: Turn,

    /// The computer opponent.
    #[serde(default)]
    opponent: Opponent,
}

fn default_marker() -> char {
    'X'
}

fn default_first_turn() -> Turn {
    Turn::Human
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_marker: default_marker(),
            first_turn: default_first_turn(),
            opponent: Opponent::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read(path.to_path_buf(), e.to_string()))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Parse(path.to_path_buf(), e.to_string()))
        })?;

        info!(opponent = %config.opponent, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file at `path`, else the one named by [`CONFIG_ENV`], else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match std::env::var(CONFIG_ENV) {
                Ok(path) => Self::from_file(path),
                Err(_) => Ok(Self::default()),
            },
        }
    }

    /// Applies command-line overrides.
    pub fn with_args(mut self, args: &GameArgs) -> Self {
        if let Some(marker) = args.marker {
            self.human_marker = marker.to_ascii_uppercase();
        }
        if let Some(first) = args.first {
            self.first_turn = first;
        }
        if let Some(opponent) = args.opponent {
            self.opponent = opponent;
        }
        self
    }

    /// The human's symbol as a board marker.
    pub fn marker(&self) -> Result<Marker, ConfigError> {
        match Marker::try_from(self.human_marker) {
            Ok(marker) if marker.is_symbol() => Ok(marker),
            _ => Err(ConfigError::new(ConfigErrorKind::Marker(self.human_marker))),
        }
    }
}

/// Why a game configuration was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The config file could not be read.
    #[display("cannot read {}: {}", _0.display(), _1)]
    Read(PathBuf, String),

    /// The config file is not valid game-settings TOML.
    #[display("cannot parse {}: {}", _0.display(), _1)]
    Parse(PathBuf, String),

    /// `human_marker` is neither `X` nor `O`.
    #[display("human_marker must be X or O, got {:?}", _0)]
    Marker(char),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// Error kind.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
