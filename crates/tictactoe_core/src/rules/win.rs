//! Win detection logic for tic-tac-toe.
//!
//! Not instrumented: minimax calls these at every node of its search.

use crate::{Board, Cell, Marker};

/// Three cells whose identical non-empty markers end the game.
pub type WinLine = [Cell; 3];

/// The 8 win lines, scanned in this order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the marker on the first line (in [`WIN_LINES`] order) holding
/// three identical non-empty markers, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Marker> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let marker = board.get(a);
        (marker.is_symbol() && marker == board.get(b) && marker == board.get(c)).then_some(marker)
    })
}

/// Finds the cell that would complete a line for `marker`.
///
/// Returns the empty cell of the first line holding exactly two `marker`s and
/// one empty cell.
pub fn open_line(board: &Board, marker: Marker) -> Option<Cell> {
    WIN_LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&cell| board.get(cell) == marker).count();
        let mut empty = line.iter().copied().filter(|&cell| board.get(cell) == Marker::Empty);
        match (owned, empty.next(), empty.next()) {
            (2, Some(cell), None) => Some(cell),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Turn;

    fn board() -> Board {
        Board::new(Marker::X, Marker::O, Turn::Human, None).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&board()), None);
    }

    #[test]
    fn test_every_line_both_markers() {
        for line in WIN_LINES {
            for marker in [Marker::X, Marker::O] {
                let mut board = board();
                for cell in line {
                    board.set(cell, marker);
                }
                assert_eq!(check_winner(&board), Some(marker), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = board();
        board.set(Cell::TopLeft, Marker::X);
        board.set(Cell::TopCenter, Marker::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_open_line_finds_gap() {
        let mut board = board();
        board.set(Cell::TopLeft, Marker::O);
        board.set(Cell::BottomRight, Marker::O);
        assert_eq!(open_line(&board, Marker::O), Some(Cell::Center));
        assert_eq!(open_line(&board, Marker::X), None);
    }

    #[test]
    fn test_open_line_ignores_blocked_lines() {
        let mut board = board();
        board.set(Cell::TopLeft, Marker::O);
        board.set(Cell::TopCenter, Marker::O);
        board.set(Cell::TopRight, Marker::X);
        assert_eq!(open_line(&board, Marker::O), None);
    }

    #[test]
    fn test_open_line_first_line_wins() {
        let mut board = board();
        // Row 2 (4,5,_) comes before column 1 (1,4,_) and the 1-5-9 diagonal.
        board.set(Cell::TopLeft, Marker::X);
        board.set(Cell::MiddleLeft, Marker::X);
        board.set(Cell::Center, Marker::X);
        assert_eq!(open_line(&board, Marker::X), Some(Cell::MiddleRight));
    }
}
