//! Pure tic-tac-toe game logic with a snapshot-based session.
//!
//! # Architecture
//!
//! - **Rules**: pure, stateless evaluation of boards — win and draw
//!   detection, move legality, move application, status derivation.
//! - **Session**: a thin stateful holder owning one [`GameState`],
//!   replaced wholesale on every accepted move or reset.
//!
//! A presentation layer consumes exactly three things: the state
//! snapshot, `apply_move(position)`, and `reset()`. Invalid commands are
//! silent no-ops; the UI prevents them by disabling controls.
//!
//! # Example
//!
//! ```
//! use noughts::{GamePhase, GameSession, Mark, Winner};
//!
//! let mut session = GameSession::new();
//!
//! // X takes the top row while O plays the middle row.
//! for position in [0, 3, 1, 4, 2] {
//!     session.apply_move(position);
//! }
//!
//! assert_eq!(session.state().phase(), GamePhase::Finished);
//! assert_eq!(session.state().winner(), Winner::X);
//!
//! session.reset();
//! assert_eq!(session.state().current_player(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod session;
mod types;

pub mod rules;

pub use position::Position;
pub use session::{GameSession, MoveError};
pub use types::{Board, Cell, GamePhase, GameState, Mark, Status, Winner};
