//! Piece records and the arena id that keys them.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::square::Square;

/// Index of a piece in the board's arena.
///
/// Ids are allocated by the board and stay valid for its whole life;
/// the arena never shrinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a piece id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "piece {}", self.0)
    }
}

/// Promotion state of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Moves one step diagonally forward; captures in any direction.
    Man,
    /// Moves and captures one step in any diagonal direction.
    King,
}

/// A piece record.
///
/// Pieces live in the board's arena for the whole game. Capture flips
/// `alive` instead of removing the record, so per-side alive/captured
/// accounting always sums to the starting roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Arena id.
    pub id: PieceId,
    /// Owning side.
    pub owner: Player,
    /// Promotion state.
    pub rank: Rank,
    /// Current position. Meaningless once captured.
    pub square: Square,
    /// False once captured.
    pub alive: bool,
}

impl Piece {
    /// Create a living piece.
    #[must_use]
    pub const fn new(id: PieceId, owner: Player, rank: Rank, square: Square) -> Self {
        Self {
            id,
            owner,
            rank,
            square,
            alive: true,
        }
    }

    /// Check whether this piece has been promoted.
    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_is_alive() {
        let piece = Piece::new(PieceId::new(3), Player::One, Rank::Man, Square::new(5, 2));
        assert!(piece.alive);
        assert!(!piece.is_king());
        assert_eq!(piece.owner, Player::One);
        assert_eq!(piece.square, Square::new(5, 2));
    }

    #[test]
    fn test_is_king() {
        let king = Piece::new(PieceId::new(0), Player::Two, Rank::King, Square::new(0, 1));
        assert!(king.is_king());
    }

    #[test]
    fn test_piece_id_display() {
        assert_eq!(format!("{}", PieceId::new(17)), "piece 17");
    }

    #[test]
    fn test_serialization() {
        let piece = Piece::new(PieceId::new(9), Player::Two, Rank::Man, Square::new(2, 5));
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
