//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 winning triples, scanned in a fixed order: rows, then columns,
/// then diagonals. At most one mark can complete a line in a legal game,
/// so scan order only matters for determinism.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first triple uniformly occupied by a
/// mark, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        board.set(Position::TopCenter, Cell::Occupied(Mark::X));
        board.set(Position::TopRight, Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_left_column() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::O));
        board.set(Position::MiddleLeft, Cell::Occupied(Mark::O));
        board.set(Position::BottomLeft, Cell::Occupied(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::O));
        board.set(Position::Center, Cell::Occupied(Mark::O));
        board.set(Position::BottomRight, Cell::Occupied(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Occupied(Mark::X));
        board.set(Position::Center, Cell::Occupied(Mark::X));
        board.set(Position::BottomLeft, Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        board.set(Position::TopCenter, Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        board.set(Position::TopCenter, Cell::Occupied(Mark::O));
        board.set(Position::TopRight, Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }
}
