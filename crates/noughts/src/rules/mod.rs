//! The rule engine: pure, stateless evaluation of tic-tac-toe boards.
//!
//! Every operation takes the board by reference and returns a new value;
//! no function here mutates its input or holds state.

mod draw;
mod moves;
mod win;

pub use draw::{is_draw, is_full};
pub use moves::{apply_move, derive_status, is_valid_move};
pub use win::check_winner;
