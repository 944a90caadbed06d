//! Addressable board cells, numbered 1-9 row-major.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Cells are numbered the way the persisted board and the player see them:
///
/// ```text
/// 1|2|3
/// 4|5|6
/// 7|8|9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in ascending order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Get label for this cell (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// The cell number (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based index into the board's storage (0-8).
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Creates a cell from its number (1-9).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }

    /// Parses a cell from its number or exact (case-insensitive) label.
    #[instrument]
    pub fn parse(s: &str) -> Option<Cell> {
        let s = s.trim();
        if let Ok(num) = s.parse::<u8>() {
            return Self::from_number(num);
        }
        if s.is_empty() {
            return None;
        }

        let s_lower = s.to_lowercase();
        <Cell as strum::IntoEnumIterator>::iter()
            .find(|cell| cell.label().to_lowercase() == s_lower)
    }
}

impl TryFrom<u8> for Cell {
    type Error = GameError;

    #[track_caller]
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number)
            .ok_or_else(|| GameError::invalid_cell(format!("{} is not in 1..9", number)))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.number()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_row_major() {
        assert_eq!(Cell::TopLeft.number(), 1);
        assert_eq!(Cell::Center.number(), 5);
        assert_eq!(Cell::BottomRight.number(), 9);
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Cell::from_number(0), None);
        assert_eq!(Cell::from_number(1), Some(Cell::TopLeft));
        assert_eq!(Cell::from_number(9), Some(Cell::BottomRight));
        assert_eq!(Cell::from_number(10), None);
    }

    #[test]
    fn test_parse_number_or_label() {
        assert_eq!(Cell::parse(" 7 "), Some(Cell::BottomLeft));
        assert_eq!(Cell::parse("center"), Some(Cell::Center));
        assert_eq!(Cell::parse("Top-Right"), Some(Cell::TopRight));
        assert_eq!(Cell::parse("middle"), None);
        assert_eq!(Cell::parse(""), None);
    }
}
