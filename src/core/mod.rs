//! Core value types: players, squares, and piece records.

pub mod piece;
pub mod player;
pub mod square;

pub use piece::{Piece, PieceId, Rank};
pub use player::Player;
pub use square::{Square, BOARD_SIZE, DIAGONALS};
