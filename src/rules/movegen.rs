//! Move generation and the mandatory-capture scan.
//!
//! ## Rules
//!
//! - A capture jumps an adjacent enemy piece onto the empty square
//!   directly beyond it. Captures are legal in all four diagonal
//!   directions for men and kings alike.
//! - A normal move is a one-step diagonal onto an empty square: men
//!   only in their owner's forward sense, kings in any direction.
//! - Capturing is mandatory globally: while any piece of a side can
//!   capture, non-capturing moves are withheld from every piece of
//!   that side. A piece with no capture of its own then has no legal
//!   moves at all.
//!
//! The mandatory-capture scan is recomputed from the board on every
//! call rather than cached. At most twelve pieces and four directions,
//! it is cheap, and it cannot go stale.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{PieceId, Player, Rank, Square, DIAGONALS};

/// A single legal displacement of one piece.
///
/// Produced by the move generator, consumed once by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Square of the jumped piece, for a capture move.
    pub captured: Option<Square>,
}

impl Move {
    /// Create a normal one-step move.
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// Create a capture move jumping the piece on `captured`.
    #[must_use]
    pub const fn jump(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// Check whether this move removes an opposing piece.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Per-piece move list. The four diagonal directions bound its length.
pub type MoveList = SmallVec<[Move; 4]>;

/// Capture moves available to one piece. Dead pieces have none.
#[must_use]
pub fn capture_moves_for(board: &Board, id: PieceId) -> MoveList {
    let piece = board.piece(id);
    let mut moves = MoveList::new();
    if !piece.alive {
        return moves;
    }

    for (d_row, d_col) in DIAGONALS {
        let over = match piece.square.offset(d_row, d_col) {
            Some(sq) => sq,
            None => continue,
        };
        let landing = match piece.square.offset(2 * d_row, 2 * d_col) {
            Some(sq) => sq,
            None => continue,
        };
        let holds_enemy = matches!(board.piece_at(over), Some(p) if p.owner != piece.owner);
        if holds_enemy && board.piece_at(landing).is_none() {
            moves.push(Move::jump(piece.square, landing, over));
        }
    }
    moves
}

/// Check whether any living piece of `player` has a capture available.
#[must_use]
pub fn any_capture_exists(board: &Board, player: Player) -> bool {
    board
        .living_pieces(player)
        .any(|p| !capture_moves_for(board, p.id).is_empty())
}

/// All legal moves for one piece under the current board.
///
/// While [`any_capture_exists`] holds for the owner, only captures are
/// returned. That is an empty list for a piece that cannot itself
/// capture, even though it could otherwise step.
#[must_use]
pub fn moves_for(board: &Board, id: PieceId) -> MoveList {
    let piece = board.piece(id);
    if !piece.alive {
        return MoveList::new();
    }

    let mut moves = capture_moves_for(board, id);
    if !moves.is_empty() || any_capture_exists(board, piece.owner) {
        return moves;
    }

    for (d_row, d_col) in DIAGONALS {
        if piece.rank == Rank::Man && d_row != piece.owner.forward() {
            continue;
        }
        if let Some(to) = piece.square.offset(d_row, d_col) {
            if board.piece_at(to).is_none() {
                moves.push(Move::step(piece.square, to));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_man_steps_forward_only() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::Man, Square::new(4, 3));

        let moves = moves_for(&board, id);

        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::step(Square::new(4, 3), Square::new(3, 2))));
        assert!(moves.contains(&Move::step(Square::new(4, 3), Square::new(3, 4))));
    }

    #[test]
    fn test_player_two_steps_downward() {
        let mut board = Board::empty();
        let id = board.spawn(Player::Two, Rank::Man, Square::new(4, 3));

        let moves = moves_for(&board, id);

        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::step(Square::new(4, 3), Square::new(5, 2))));
        assert!(moves.contains(&Move::step(Square::new(4, 3), Square::new(5, 4))));
    }

    #[test]
    fn test_king_steps_all_directions() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::King, Square::new(4, 3));

        let moves = moves_for(&board, id);

        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_step_blocked_by_any_piece() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::Man, Square::new(4, 3));
        // A friendly piece blocks without offering a jump.
        board.spawn(Player::One, Rank::Man, Square::new(3, 2));

        let moves = moves_for(&board, id);

        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::step(Square::new(4, 3), Square::new(3, 4))));
    }

    #[test]
    fn test_single_forced_capture() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::Man, Square::new(3, 3));
        board.spawn(Player::Two, Rank::Man, Square::new(2, 4));

        let moves = moves_for(&board, id);

        assert_eq!(moves.len(), 1);
        assert_eq!(
            moves[0],
            Move::jump(Square::new(3, 3), Square::new(1, 5), Square::new(2, 4))
        );
    }

    #[test]
    fn test_man_captures_backward() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::Man, Square::new(3, 3));
        board.spawn(Player::Two, Rank::Man, Square::new(4, 4));

        let moves = moves_for(&board, id);

        assert_eq!(moves.len(), 1);
        assert_eq!(
            moves[0],
            Move::jump(Square::new(3, 3), Square::new(5, 5), Square::new(4, 4))
        );
    }

    #[test]
    fn test_capture_needs_empty_landing() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::Man, Square::new(3, 3));
        board.spawn(Player::Two, Rank::Man, Square::new(2, 4));
        board.spawn(Player::Two, Rank::Man, Square::new(1, 5));

        let moves = moves_for(&board, id);

        // The blocked jump falls away and no capture exists anywhere,
        // so normal steps come back.
        assert!(moves.iter().all(|m| !m.is_capture()));
        assert!(moves.contains(&Move::step(Square::new(3, 3), Square::new(2, 2))));
    }

    #[test]
    fn test_no_jump_over_friendly_piece() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::Man, Square::new(3, 3));
        board.spawn(Player::One, Rank::Man, Square::new(2, 4));

        let moves = moves_for(&board, id);

        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_capture_landing_stays_on_board() {
        let mut board = Board::empty();
        // Enemy adjacent, but the landing square would be off the board.
        let id = board.spawn(Player::One, Rank::Man, Square::new(1, 1));
        board.spawn(Player::Two, Rank::Man, Square::new(0, 0));

        let moves = moves_for(&board, id);

        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_teammate_capture_suppresses_normal_moves() {
        let mut board = Board::empty();
        // This piece could step freely...
        let idle = board.spawn(Player::One, Rank::Man, Square::new(6, 1));
        // ...but a teammate across the board has a capture.
        let capturer = board.spawn(Player::One, Rank::Man, Square::new(3, 4));
        board.spawn(Player::Two, Rank::Man, Square::new(2, 5));

        assert!(any_capture_exists(&board, Player::One));
        assert!(moves_for(&board, idle).is_empty());
        assert_eq!(moves_for(&board, capturer).len(), 1);
        assert!(moves_for(&board, capturer)[0].is_capture());
    }

    #[test]
    fn test_dead_piece_has_no_moves() {
        let mut board = Board::empty();
        let id = board.spawn(Player::One, Rank::Man, Square::new(4, 3));
        board.capture(id);

        assert!(moves_for(&board, id).is_empty());
        assert!(capture_moves_for(&board, id).is_empty());
        assert!(!any_capture_exists(&board, Player::One));
    }

    #[test]
    fn test_opening_position_has_no_captures() {
        let board = Board::standard();
        assert!(!any_capture_exists(&board, Player::One));
        assert!(!any_capture_exists(&board, Player::Two));
    }

    #[test]
    fn test_opening_front_row_mobility() {
        let board = Board::standard();
        // Every front-row man of One has two steps, except the edge
        // man at (5, 0) which has one.
        for piece in board.living_pieces(Player::One) {
            let moves = moves_for(&board, piece.id);
            match piece.square.row() {
                5 if piece.square.col() == 0 => assert_eq!(moves.len(), 1),
                5 => assert_eq!(moves.len(), 2),
                _ => assert!(moves.is_empty()),
            }
        }
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::jump(Square::new(3, 3), Square::new(1, 5), Square::new(2, 4));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
