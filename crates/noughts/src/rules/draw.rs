//! Draw detection logic.

use super::win::check_winner;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if the game is a draw: a full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
