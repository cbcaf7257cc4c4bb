//! Move legality, move application, and status derivation.

use super::draw::is_draw;
use super::win::check_winner;
use crate::position::Position;
use crate::types::{Board, Cell, GamePhase, Mark, Status, Winner};
use tracing::instrument;

/// Checks if a move at the given index is legal: in range (0-8) and
/// targeting an empty cell. Never panics.
#[instrument]
pub fn is_valid_move(board: &Board, position: usize) -> bool {
    match Position::from_index(position) {
        Some(pos) => board.is_empty(pos),
        None => false,
    }
}

/// Returns a new board with `mark` placed at `position`.
///
/// An invalid move (out of range or occupied) returns a board equal to
/// the input: a silent no-op, not an error. The input board is never
/// mutated, so callers can compare before and after.
#[instrument]
pub fn apply_move(board: &Board, position: usize, mark: Mark) -> Board {
    let mut next = board.clone();
    if let Some(pos) = Position::from_index(position)
        && board.is_empty(pos)
    {
        next.set(pos, Cell::Occupied(mark));
    }
    next
}

/// Derives the phase and winner from a board.
///
/// A completed line finishes the game for that mark; a full board with
/// no line finishes it as a draw; otherwise play continues.
#[instrument]
pub fn derive_status(board: &Board) -> Status {
    if let Some(mark) = check_winner(board) {
        return Status {
            phase: GamePhase::Finished,
            winner: mark.into(),
        };
    }

    if is_draw(board) {
        return Status {
            phase: GamePhase::Finished,
            winner: Winner::Draw,
        };
    }

    Status {
        phase: GamePhase::Playing,
        winner: Winner::None,
    }
}
