//! Game session: the single stateful holder over the rule engine.

use crate::position::Position;
use crate::rules;
use crate::types::{GamePhase, GameState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Error describing why a move was rejected.
///
/// The permissive [`GameSession::apply_move`] surface swallows these as
/// silent no-ops; [`GameSession::try_apply_move`] reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The position is not on the board.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The cell at the position is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// A game session owning the current [`GameState`].
///
/// All rule decisions are delegated to the [`rules`] engine; the session
/// only commits whole snapshots, so no intermediate state is observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Creates a session holding the initial game state.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current state as a read-only snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a move at the given position (0-8).
    ///
    /// Invalid input (game over, out-of-range position, occupied cell)
    /// leaves the state unchanged. The UI keeps such controls disabled,
    /// so there is no user-visible error channel.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: usize) {
        if let Err(reason) = self.try_apply_move(position) {
            debug!(position, %reason, "Move rejected");
        }
    }

    /// Applies a move, reporting why it was rejected if it was.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, position: usize) -> Result<(), MoveError> {
        if self.state.phase() == GamePhase::Finished {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(position).ok_or(MoveError::OutOfBounds(position))?;
        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mover = self.state.current_player();
        let board = rules::apply_move(self.state.board(), position, mover);
        let status = rules::derive_status(&board);

        // The mover stays current on a game-ending move; the next mark
        // only takes over while play continues.
        let current_player = match status.phase {
            GamePhase::Playing => mover.opponent(),
            GamePhase::Finished => mover,
        };

        self.commit(GameState::snapshot(board, current_player, status));

        info!(
            position,
            mover = %mover,
            phase = ?self.state.phase(),
            winner = ?self.state.winner(),
            "Move applied"
        );

        Ok(())
    }

    /// Replaces the current state with the initial one, discarding the
    /// game in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.commit(GameState::new());
    }

    fn commit(&mut self, state: GameState) {
        self.state = state;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark, Winner};

    #[test]
    fn test_new_session_initial_state() {
        let session = GameSession::new();
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.state().current_player(), Mark::X);
        assert_eq!(session.state().phase(), GamePhase::Playing);
        assert_eq!(session.state().winner(), Winner::None);
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut session = GameSession::new();
        session.apply_move(0);
        assert_eq!(session.state().board().cell(0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(session.state().current_player(), Mark::O);
        assert_eq!(session.state().phase(), GamePhase::Playing);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut session = GameSession::new();
        session.apply_move(0);
        let before = session.state().clone();

        session.apply_move(0);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_try_apply_move_reports_rejections() {
        let mut session = GameSession::new();
        assert_eq!(session.try_apply_move(9), Err(MoveError::OutOfBounds(9)));

        session.apply_move(4);
        assert_eq!(
            session.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = GameSession::new();
        for position in [0, 3, 1, 4] {
            session.apply_move(position);
        }
        session.reset();
        assert_eq!(session.state(), &GameState::new());
    }
}
