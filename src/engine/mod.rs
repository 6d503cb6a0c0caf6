//! The turn state machine.
//!
//! ## Phases
//!
//! A game is always in exactly one phase:
//!
//! - `AwaitingSelection`: no piece chosen; the current player selects.
//! - `PieceSelected`: a piece is chosen and its move list is live.
//!   Selecting another own piece replaces the selection.
//! - `ChainCapture`: mid multi-capture. The capturing piece is force
//!   selected; it must keep jumping and no other piece may be chosen.
//! - `GameOver`: terminal until [`Game::reset`].
//!
//! ## Driving the engine
//!
//! The presentation layer feeds two intents, [`Game::select_piece`]
//! and [`Game::apply_move`], and re-renders from the returned state.
//! Both run to completion before returning and either succeed or
//! leave the game untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{PieceId, Player, Rank};
use crate::error::{EngineError, EngineResult};
use crate::rules::{self, Move, MoveList};

/// Where the turn state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No piece chosen; waiting for the current player to select one.
    AwaitingSelection,
    /// A piece is selected and its move list is live.
    PieceSelected(PieceId),
    /// Mid multi-capture: the piece must keep jumping.
    ChainCapture(PieceId),
    /// Terminal. Only a reset leaves this phase.
    GameOver(Player),
}

/// Outcome of a successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The same player keeps the same piece and must capture again.
    ChainContinues,
    /// The move completed and the opponent is now to play.
    TurnSwitched,
    /// The move ended the game.
    GameOver(Player),
}

/// A complete game: board, side to move, and phase.
///
/// Legal-move sets are recomputed from the board on demand; the engine
/// caches nothing, so they cannot go stale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    phase: Phase,
}

impl Game {
    /// Create a fresh game from the standard opening layout, with
    /// `One` to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Player::One)
    }

    /// Create a game from an arbitrary position.
    ///
    /// No legality check is applied to the position itself; this is
    /// the entry point for problem setups and tests.
    #[must_use]
    pub fn from_position(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            phase: Phase::AwaitingSelection,
        }
    }

    /// Tear the game down and rebuild the opening position.
    pub fn reset(&mut self) {
        info!("game reset");
        *self = Self::new();
    }

    // === Accessors ===

    /// Get the board and piece registry.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the side to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get the current phase of the turn state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// Legal moves of the currently selected piece.
    ///
    /// Empty outside `PieceSelected` and `ChainCapture`.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        match self.phase {
            Phase::PieceSelected(id) => rules::moves_for(&self.board, id),
            Phase::ChainCapture(id) => rules::capture_moves_for(&self.board, id),
            _ => MoveList::new(),
        }
    }

    // === Intents ===

    /// Select a piece for the current player and return its legal moves.
    ///
    /// A piece with no legal moves is silently discarded: the phase
    /// stays `AwaitingSelection` and the returned list is empty. Mid
    /// chain, only the capturing piece may be (re)selected.
    ///
    /// Panics if `id` was not allocated by this game's board.
    pub fn select_piece(&mut self, id: PieceId) -> EngineResult<MoveList> {
        if let Phase::GameOver(winner) = self.phase {
            return Err(EngineError::GameOver { winner });
        }

        let piece = self.board.piece(id);
        if piece.owner != self.current_player {
            return Err(EngineError::WrongPlayer {
                piece: id,
                owner: piece.owner,
                current: self.current_player,
            });
        }

        if let Phase::ChainCapture(chained) = self.phase {
            if id != chained {
                let at = piece.square;
                return Err(EngineError::InvalidMove { from: at, to: at });
            }
            return Ok(rules::capture_moves_for(&self.board, id));
        }

        let moves = rules::moves_for(&self.board, id);
        if moves.is_empty() {
            debug!(piece = %id, "selection discarded, no legal moves");
            self.phase = Phase::AwaitingSelection;
            return Ok(moves);
        }

        debug!(piece = %id, moves = moves.len(), "piece selected");
        self.phase = Phase::PieceSelected(id);
        Ok(moves)
    }

    /// Apply a move of the selected piece.
    ///
    /// The move must be a member of the selected piece's current legal
    /// set (captures only while chaining). A rejected move leaves the
    /// game untouched; a successful one runs to completion atomically.
    pub fn apply_move(&mut self, mv: &Move) -> EngineResult<TurnEvent> {
        if let Phase::GameOver(winner) = self.phase {
            return Err(EngineError::GameOver { winner });
        }

        let (id, legal) = match self.phase {
            Phase::PieceSelected(id) => (id, rules::moves_for(&self.board, id)),
            Phase::ChainCapture(id) => (id, rules::capture_moves_for(&self.board, id)),
            Phase::AwaitingSelection | Phase::GameOver(_) => {
                return Err(EngineError::InvalidMove {
                    from: mv.from,
                    to: mv.to,
                });
            }
        };

        if !legal.contains(mv) {
            return Err(EngineError::InvalidMove {
                from: mv.from,
                to: mv.to,
            });
        }

        // Remove the jumped piece first, then relocate the mover.
        if let Some(square) = mv.captured {
            if let Some(victim) = self.board.piece_at(square).map(|p| p.id) {
                self.board.capture(victim);
                debug!(piece = %id, victim = %victim, at = %square, "capture");
            }
        }
        self.board.place(id, mv.to);

        // Promotion is instantaneous, even mid chain.
        let piece = self.board.piece(id);
        if piece.rank == Rank::Man && mv.to.row() == piece.owner.crown_row() {
            self.board.promote(id);
            debug!(piece = %id, at = %mv.to, "promoted to king");
        }

        if mv.is_capture() && !rules::capture_moves_for(&self.board, id).is_empty() {
            self.phase = Phase::ChainCapture(id);
            debug!(piece = %id, "chain capture continues");
            return Ok(TurnEvent::ChainContinues);
        }

        let mover = self.current_player;
        self.current_player = mover.opponent();
        self.phase = Phase::AwaitingSelection;

        if let Some(winner) = rules::winner_after_turn(&self.board, mover) {
            self.phase = Phase::GameOver(winner);
            info!(winner = %winner, "game over");
            return Ok(TurnEvent::GameOver(winner));
        }

        debug!(player = %self.current_player, "turn switched");
        Ok(TurnEvent::TurnSwitched)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
