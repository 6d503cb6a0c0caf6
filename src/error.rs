//! Error types for the draughts engine.
//!
//! Every error is a recoverable rejection: the offending operation is
//! refused and the game state is left exactly as it was. There are no
//! fatal error paths.

use thiserror::Error;

use crate::core::{PieceId, Player, Square};

/// Errors returned by engine operations.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Selecting or moving a piece the current player does not own.
    #[error("{piece} belongs to {owner}, but it is {current}'s turn")]
    WrongPlayer {
        piece: PieceId,
        owner: Player,
        current: Player,
    },

    /// A move outside the currently legal set. Covers moving without
    /// capturing while a capture is mandatory, backward moves by men,
    /// moves to occupied cells, and switching pieces mid chain capture.
    #[error("illegal move from {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// Any action after a winner has been decided.
    #[error("game is over, {winner} has won")]
    GameOver { winner: Player },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
