//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Occupied(mark) => Some(mark),
            Cell::Empty => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order; the nine-cell invariant holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Returns the cell at a raw index (0-8), if in range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                write!(f, "{}", symbol)?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Game is ongoing; moves are accepted.
    Playing,
    /// Game is over; only `reset` changes the state.
    Finished,
}

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// No outcome yet.
    None,
    /// X completed a line.
    X,
    /// O completed a line.
    O,
    /// Board is full with no line.
    Draw,
}

impl Winner {
    /// Returns the winning mark, if a player won.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Winner::X => Some(Mark::X),
            Winner::O => Some(Mark::O),
            Winner::None | Winner::Draw => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, Winner::Draw)
    }
}

impl From<Mark> for Winner {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Winner::X,
            Mark::O => Winner::O,
        }
    }
}

/// Phase and winner derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Whether the game is still accepting moves.
    pub phase: GamePhase,
    /// The outcome, if any.
    pub winner: Winner,
}

/// Complete game state: an immutable snapshot.
///
/// A snapshot is replaced wholesale on every accepted move or reset,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next (or the mover, once the game is over).
    current_player: Mark,
    /// Game phase.
    phase: GamePhase,
    /// Outcome so far.
    winner: Winner,
}

impl GameState {
    /// Creates the initial game state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            phase: GamePhase::Playing,
            winner: Winner::None,
        }
    }

    pub(crate) fn snapshot(board: Board, current_player: Mark, status: Status) -> Self {
        Self {
            board,
            current_player,
            phase: status.phase,
            winner: status.winner,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the outcome so far.
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Checks whether the game is over.
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
