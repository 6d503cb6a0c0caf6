//! Board state: the 8x8 occupancy grid and the piece arena.
//!
//! ## Board
//!
//! Owns every piece for the whole game. The grid stores ids, the arena
//! stores the records, and the two are updated together so a piece's
//! recorded square and its grid cell never disagree. Captured pieces
//! stay in the arena flagged dead, which keeps per-side alive/captured
//! accounting summing to the starting roster.
//!
//! The board does bounds checking only (via [`Square`] construction).
//! Move legality lives in [`crate::rules`].

use serde::{Deserialize, Serialize};

use crate::core::{Piece, PieceId, Player, Rank, Square, BOARD_SIZE};

/// Men per side in the standard opening layout.
pub const PIECES_PER_PLAYER: usize = 12;

const SIZE: usize = BOARD_SIZE as usize;

/// The 8x8 board and its piece registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// `grid[row][col]` holds the occupying piece, if any.
    grid: [[Option<PieceId>; SIZE]; SIZE],
    /// Every piece ever spawned, indexed by `PieceId`.
    pieces: Vec<Piece>,
}

impl Board {
    /// Create an empty board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            grid: [[None; SIZE]; SIZE],
            pieces: Vec::new(),
        }
    }

    /// Create the standard 12-vs-12 opening layout: dark squares only,
    /// rows 0 to 2 for `Two`, rows 5 to 7 for `One`.
    ///
    /// Ids are allocated in row-major scan order, so `Two` takes
    /// 0..12 and `One` takes 12..24.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            let owner = match row {
                0..=2 => Player::Two,
                5..=7 => Player::One,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                let square = Square::new(row, col);
                if square.is_dark() {
                    board.spawn(owner, Rank::Man, square);
                }
            }
        }
        board
    }

    // === Arena ===

    /// Add a new piece to the arena and place it on the grid.
    ///
    /// Panics if the target cell is occupied.
    pub fn spawn(&mut self, owner: Player, rank: Rank, square: Square) -> PieceId {
        assert!(self.piece_at(square).is_none(), "cell already occupied");
        let id = PieceId::new(self.pieces.len() as u8);
        self.pieces.push(Piece::new(id, owner, rank, square));
        self.grid[square.row() as usize][square.col() as usize] = Some(id);
        id
    }

    /// Get a piece record by id.
    ///
    /// Panics if `id` was not allocated by this board.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Get the piece occupying a square, if any.
    ///
    /// Captured pieces never occupy a square.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.row() as usize][square.col() as usize].map(|id| self.piece(id))
    }

    // === Mutation ===

    /// Move a piece to an empty square, updating its recorded position.
    pub fn place(&mut self, id: PieceId, square: Square) {
        let from = self.pieces[id.index()].square;
        self.grid[from.row() as usize][from.col() as usize] = None;
        self.grid[square.row() as usize][square.col() as usize] = Some(id);
        self.pieces[id.index()].square = square;
    }

    /// Remove a piece from the grid and flag it dead.
    ///
    /// The record stays in the arena for alive/captured accounting.
    pub fn capture(&mut self, id: PieceId) {
        let square = self.pieces[id.index()].square;
        self.grid[square.row() as usize][square.col() as usize] = None;
        self.pieces[id.index()].alive = false;
    }

    /// Promote a piece to king. Irreversible.
    pub fn promote(&mut self, id: PieceId) {
        self.pieces[id.index()].rank = Rank::King;
    }

    // === Roster queries ===

    /// Iterate over every piece ever spawned, dead ones included.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Iterate over the living pieces of one side.
    pub fn living_pieces(&self, player: Player) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.alive && p.owner == player)
    }

    /// Count the living pieces of one side.
    #[must_use]
    pub fn alive_count(&self, player: Player) -> usize {
        self.living_pieces(player).count()
    }

    /// Count the captured pieces of one side.
    #[must_use]
    pub fn captured_count(&self, player: Player) -> usize {
        self.pieces
            .iter()
            .filter(|p| !p.alive && p.owner == player)
            .count()
    }
}
