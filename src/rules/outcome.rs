//! Terminal-position detection.

use crate::board::Board;
use crate::core::Player;

use super::movegen;

/// Decide whether the side that just completed a turn has won.
///
/// Invoked after every turn switch, never mid chain. Checked in order:
/// the opponent's roster is wiped out, or the opponent has no legal
/// move across all living pieces. Returns `None` while the game
/// continues.
#[must_use]
pub fn winner_after_turn(board: &Board, mover: Player) -> Option<Player> {
    let opponent = mover.opponent();

    if board.alive_count(opponent) == 0 {
        return Some(mover);
    }

    let blocked = board
        .living_pieces(opponent)
        .all(|p| movegen::moves_for(board, p.id).is_empty());
    if blocked {
        return Some(mover);
    }

    None
}
