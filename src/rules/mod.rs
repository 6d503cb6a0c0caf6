//! Game rules: move generation and terminal detection.
//!
//! Everything here is a pure function of a [`Board`](crate::board::Board);
//! the rules own no state of their own.

pub mod movegen;
pub mod outcome;

pub use movegen::{any_capture_exists, capture_moves_for, moves_for, Move, MoveList};
pub use outcome::winner_after_turn;
