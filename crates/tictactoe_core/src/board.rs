//! The 3x3 board and its queries.

use crate::cell::Cell;
use crate::error::GameError;
use crate::rules;
use crate::types::{Marker, Outcome, Turn};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Besides the nine cells, a board knows which symbol belongs to the human
/// and which to the computer, and whose turn it is. It is rebuilt from
/// persisted state for every turn and never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells in row-major order (cell 1 at index 0).
    cells: [Marker; 9],
    human_marker: Marker,
    computer_marker: Marker,
    active_turn: Turn,
}

impl Board {
    /// Creates a board, empty unless `cells` gives the 9 persisted marker codes.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the markers are not two distinct symbols, or if
    /// `cells` does not hold exactly 9 recognized codes.
    #[instrument]
    pub fn new(
        human_marker: Marker,
        computer_marker: Marker,
        active_turn: Turn,
        cells: Option<&[char]>,
    ) -> Result<Self, GameError> {
        if !human_marker.is_symbol() || !computer_marker.is_symbol() {
            return Err(GameError::invalid_state(
                "Player markers must be X or O, not empty",
            ));
        }
        if human_marker == computer_marker {
            return Err(GameError::invalid_state(format!(
                "Human and computer both use marker {}",
                human_marker
            )));
        }

        let mut board = Self {
            cells: [Marker::Empty; 9],
            human_marker,
            computer_marker,
            active_turn,
        };

        if let Some(codes) = cells {
            if codes.len() != 9 {
                return Err(GameError::invalid_state(format!(
                    "Expected 9 cells, found {}",
                    codes.len()
                )));
            }
            for (slot, &code) in board.cells.iter_mut().zip(codes) {
                *slot = Marker::try_from(code)?;
            }
        }

        Ok(board)
    }

    /// Gets the marker at the given cell.
    pub fn get(&self, cell: Cell) -> Marker {
        self.cells[cell.index()]
    }

    /// Sets the marker at the given cell.
    ///
    /// Occupancy is not checked; entry points that take player input must
    /// check [`Board::is_empty`] first.
    pub fn set(&mut self, cell: Cell, marker: Marker) {
        self.cells[cell.index()] = marker;
    }

    /// Marks `cell` for the side on turn and passes the turn.
    pub fn place(&mut self, cell: Cell) {
        self.set(cell, self.marker_of(self.active_turn));
        self.active_turn = self.active_turn.other();
    }

    /// Undoes [`Board::place`]: clears `cell` and hands the turn back.
    pub fn unplace(&mut self, cell: Cell) {
        self.set(cell, Marker::Empty);
        self.active_turn = self.active_turn.other();
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Marker::Empty
    }

    /// All cells as a slice, row-major.
    pub fn cells(&self) -> &[Marker; 9] {
        &self.cells
    }

    /// The persisted codes of all 9 cells.
    pub fn codes(&self) -> Vec<char> {
        self.cells.iter().map(|m| m.code()).collect()
    }

    /// The human player's symbol.
    pub fn human_marker(&self) -> Marker {
        self.human_marker
    }

    /// The computer's symbol.
    pub fn computer_marker(&self) -> Marker {
        self.computer_marker
    }

    /// The symbol played by `turn`.
    pub fn marker_of(&self, turn: Turn) -> Marker {
        match turn {
            Turn::Human => self.human_marker,
            Turn::Computer => self.computer_marker,
        }
    }

    /// Whose turn it is.
    pub fn active_turn(&self) -> Turn {
        self.active_turn
    }

    /// Hands the move to `turn`.
    pub fn set_active_turn(&mut self, turn: Turn) {
        self.active_turn = turn;
    }

    /// Empty cells in ascending order.
    pub fn legal_moves(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|&cell| self.is_empty(cell))
            .collect()
    }

    /// No legal moves remain.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// The marker owning the first completed line, if any.
    pub fn winner(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// Somebody won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Full board, no winner.
    pub fn is_tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// True if the human's symbol owns a completed line.
    pub fn human_won(&self) -> bool {
        self.winner() == Some(self.human_marker)
    }

    /// True if the computer's symbol owns a completed line.
    pub fn computer_won(&self) -> bool {
        self.winner() == Some(self.computer_marker)
    }

    /// Classifies the board.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(marker) => Outcome::Won(marker),
            None if self.is_full() => Outcome::Tie,
            None => Outcome::Ongoing,
        }
    }

    /// The cell that would complete a line for `marker` right now.
    pub fn heuristic_open_line(&self, marker: Marker) -> Option<Cell> {
        rules::open_line(self, marker)
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid; empty cells show their number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in Cell::ALL.chunks(3).enumerate() {
            let symbols: Vec<String> = chunk
                .iter()
                .map(|&cell| match self.get(cell) {
                    Marker::Empty => cell.number().to_string(),
                    marker => marker.to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cells: &str) -> Board {
        let cells: Vec<char> = cells.chars().collect();
        Board::new(Marker::X, Marker::O, Turn::Human, Some(cells.as_slice())).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(Marker::X, Marker::O, Turn::Human, None).unwrap();
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_rejects_wrong_cell_count() {
        let cells: Vec<char> = "XO ".chars().collect();
        let err = Board::new(Marker::X, Marker::O, Turn::Human, Some(cells.as_slice())).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_rejects_unknown_code() {
        let cells: Vec<char> = "XO  Z    ".chars().collect();
        let err = Board::new(Marker::X, Marker::O, Turn::Human, Some(cells.as_slice())).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_rejects_equal_or_empty_markers() {
        assert!(Board::new(Marker::X, Marker::X, Turn::Human, None).is_err());
        assert!(Board::new(Marker::Empty, Marker::O, Turn::Human, None).is_err());
    }

    #[test]
    fn test_place_and_unplace_restore_state() {
        let before = parse("X   O    ");
        let mut board = before;
        board.place(Cell::BottomRight);
        assert_eq!(board.get(Cell::BottomRight), Marker::X);
        assert_eq!(board.active_turn(), Turn::Computer);
        board.unplace(Cell::BottomRight);
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_ascending() {
        let board = parse("X O X O  ");
        let numbers: Vec<u8> = board.legal_moves().iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![2, 4, 6, 8, 9]);
    }

    #[test]
    fn test_tie_board() {
        let board = parse("OXXXXOOOX");
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Outcome::Tie);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_won_by_side() {
        let board = parse("XOX X XO ");
        assert!(board.human_won());
        assert!(!board.computer_won());
        assert_eq!(board.outcome(), Outcome::Won(Marker::X));
    }

    #[test]
    fn test_codes_round_trip() {
        let board = parse("XO  X   O");
        assert_eq!(board.codes().iter().collect::<String>(), "XO  X   O");
    }

    #[test]
    fn test_display_shows_numbers_for_empty_cells() {
        let board = parse("X   O    ");
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
