//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// The symbol occupying a cell.
///
/// Persisted as a single character: `' '` for [`Marker::Empty`],
/// `'X'` and `'O'` for the two player symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Marker {
    /// Unmarked cell.
    #[default]
    Empty,
    /// The X symbol.
    X,
    /// The O symbol.
    O,
}

impl Marker {
    /// Returns the other player symbol; `Empty` stays `Empty`.
    pub fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
            Marker::Empty => Marker::Empty,
        }
    }

    /// True for `X` and `O`.
    pub fn is_symbol(self) -> bool {
        self != Marker::Empty
    }

    /// The persisted character for this marker.
    pub fn code(self) -> char {
        match self {
            Marker::Empty => ' ',
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl TryFrom<char> for Marker {
    type Error = GameError;

    #[track_caller]
    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            ' ' => Ok(Marker::Empty),
            'X' => Ok(Marker::X),
            'O' => Ok(Marker::O),
            other => Err(GameError::invalid_state(format!(
                "Unrecognized marker character {:?}",
                other
            ))),
        }
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.code()
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which side is to move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Turn {
    /// The human player.
    Human,
    /// The computer opponent.
    Computer,
}

impl Turn {
    /// Returns the side that moves next.
    pub fn other(self) -> Self {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }
}

/// Derived state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    Ongoing,
    /// The marker owns a completed line.
    Won(Marker),
    /// Board full, no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Won(marker) => Some(*marker),
            Outcome::Ongoing | Outcome::Tie => None,
        }
    }

    /// True once no further move can be made.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Won(marker) => write!(f, "{} wins", marker),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_codes() {
        assert_eq!(Marker::try_from(' ').unwrap(), Marker::Empty);
        assert_eq!(Marker::try_from('X').unwrap(), Marker::X);
        assert_eq!(Marker::try_from('O').unwrap(), Marker::O);
        assert_eq!(char::from(Marker::O), 'O');
    }

    #[test]
    fn test_unknown_marker_is_invalid_state() {
        let err = Marker::try_from('x').unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_marker_other() {
        assert_eq!(Marker::X.other(), Marker::O);
        assert_eq!(Marker::O.other(), Marker::X);
        assert_eq!(Marker::Empty.other(), Marker::Empty);
    }

    #[test]
    fn test_turn_strings() {
        assert_eq!(Turn::Human.to_string(), "human");
        assert_eq!("computer".parse::<Turn>().unwrap(), Turn::Computer);
        assert!("robot".parse::<Turn>().is_err());
    }
}
