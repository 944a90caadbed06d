//! Exhaustive game-tree search.
//!
//! Scores terminal positions from the computer's point of view, preferring
//! quick wins and slow losses, and searches the whole remaining tree. The
//! search runs on a scratch copy of the board with an explicit place/undo
//! pair around every recursive call, so the caller never observes a
//! simulated move.

use crate::{Board, Cell, Turn};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

/// Base score of a decided game; depth is subtracted so faster wins rank higher.
const WIN_SCORE: i32 = 10;

/// Cells offered on an empty board instead of searching.
const OPENING_CELLS: [Cell; 2] = [Cell::BottomRight, Cell::Center];

/// Picks the computer's optimal cell.
///
/// Ties between equally scored cells go to the lowest-numbered cell, so the
/// answer is deterministic for every non-empty board.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    if board.legal_moves().len() == Cell::ALL.len() {
        return OPENING_CELLS.choose(rng).copied();
    }

    let mut scratch = *board;
    scratch.set_active_turn(Turn::Computer);
    let (score, cell) = search(&mut scratch, 0);
    trace!(score, cell = ?cell, "Minimax search finished");
    cell
}

fn search(board: &mut Board, depth: i32) -> (i32, Option<Cell>) {
    if board.is_terminal() {
        return (leaf_score(board, depth), None);
    }

    let maximizing = board.active_turn() == Turn::Computer;
    let mut best: Option<(i32, Cell)> = None;

    for cell in board.legal_moves() {
        board.place(cell);
        let (value, _) = search(board, depth + 1);
        board.unplace(cell);

        let better = match best {
            None => true,
            Some((best_value, _)) if maximizing => value > best_value,
            Some((best_value, _)) => value < best_value,
        };
        if better {
            best = Some((value, cell));
        }
    }

    match best {
        Some((value, cell)) => (value, Some(cell)),
        None => (leaf_score(board, depth), None),
    }
}

fn leaf_score(board: &Board, depth: i32) -> i32 {
    if board.computer_won() {
        WIN_SCORE - depth
    } else if board.human_won() {
        depth - WIN_SCORE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(cells: &str) -> Board {
        let cells: Vec<char> = cells.chars().collect();
        Board::new(Marker::X, Marker::O, Turn::Computer, Some(cells.as_slice())).unwrap()
    }

    fn score(board: &Board) -> i32 {
        let mut scratch = *board;
        search(&mut scratch, 0).0
    }

    #[test]
    fn test_opening_shortcut() {
        let empty = Board::new(Marker::X, Marker::O, Turn::Computer, None).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let cell = choose(&empty, &mut rng).unwrap();
            assert!(OPENING_CELLS.contains(&cell));
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X O / _ O X / _ _ _ : O wins at 7.
        let b = board("XXO OX   ");
        assert_eq!(choose(&b, &mut StdRng::seed_from_u64(0)), Some(Cell::BottomLeft));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X _ / _ O _ / _ _ _
        let b = board("XX  O    ");
        assert_eq!(choose(&b, &mut StdRng::seed_from_u64(0)), Some(Cell::TopRight));
    }

    #[test]
    fn test_answers_corner_with_center() {
        // Every reply but the center loses to a corner opening.
        let b = board("X        ");
        assert_eq!(choose(&b, &mut StdRng::seed_from_u64(0)), Some(Cell::Center));
    }

    #[test]
    fn test_caller_board_untouched() {
        let b = board("X   O   X");
        let before = b;
        choose(&b, &mut StdRng::seed_from_u64(0));
        assert_eq!(b, before);
    }

    #[test]
    fn test_deterministic_for_fixed_board() {
        let b = board("X   O   X");
        let first = choose(&b, &mut StdRng::seed_from_u64(1));
        let second = choose(&b, &mut StdRng::seed_from_u64(2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_prefers_faster_win() {
        // O to move and wins now.
        let b = board("XXO OX   ");
        assert_eq!(score(&b), WIN_SCORE - 1);
    }

    #[test]
    fn test_score_of_drawn_position() {
        let b = board("X        ");
        assert_eq!(score(&b), 0);
    }
}
