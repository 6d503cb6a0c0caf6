//! # rust-draughts
//!
//! A two-player checkers (draughts) rule engine for the standard 8x8
//! board: move generation, mandatory capture, chain capture, promotion,
//! and win detection.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering and input binding belong to a
//!    presentation layer that re-renders from the returned state and
//!    feeds the engine discrete intents (select a piece, choose a
//!    destination). The engine performs no I/O.
//!
//! 2. **Explicit state machine**: "which piece is selected" is a
//!    [`Phase`] value, not hidden UI state. The presentation layer
//!    derives clickable targets purely from the returned move list.
//!
//! 3. **No cached legality**: legal-move sets and the mandatory-capture
//!    scan are recomputed from the board on every call. At most twelve
//!    pieces and four directions, staleness bugs would cost more than
//!    the scan ever will.
//!
//! ## Rules profile
//!
//! - Men move one step diagonally forward; kings one step in any
//!   diagonal direction. There are no long-range "flying" kings.
//! - A capture jumps an adjacent enemy onto the empty square beyond it,
//!   in any diagonal direction for men and kings alike, and chains
//!   until the capturing piece runs out of jumps.
//! - Capturing is mandatory globally: while any piece of a side can
//!   capture, every non-capturing move of that side is withheld,
//!   including from pieces that have no capture of their own.
//! - A man is promoted the instant it lands on the far row, even mid
//!   chain.
//!
//! ## Example
//!
//! ```
//! use rust_draughts::{moves_for, Game, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_player(), Player::One);
//!
//! // Select a piece with legal moves and play the first of them.
//! let id = game
//!     .board()
//!     .living_pieces(Player::One)
//!     .map(|p| p.id)
//!     .find(|&id| !moves_for(game.board(), id).is_empty())
//!     .unwrap();
//! let moves = game.select_piece(id).unwrap();
//! game.apply_move(&moves[0]).unwrap();
//! assert_eq!(game.current_player(), Player::Two);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, squares, piece records
//! - `board`: the 8x8 grid and the piece arena
//! - `rules`: move generation and terminal detection
//! - `engine`: the turn state machine
//! - `error`: recoverable rejection kinds

pub mod board;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Piece, PieceId, Player, Rank, Square, BOARD_SIZE, DIAGONALS};

pub use crate::board::{Board, PIECES_PER_PLAYER};

pub use crate::engine::{Game, Phase, TurnEvent};

pub use crate::error::{EngineError, EngineResult};

pub use crate::rules::{
    any_capture_exists, capture_moves_for, moves_for, winner_after_turn, Move, MoveList,
};
