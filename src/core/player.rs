//! Player identification and orientation.
//!
//! ## Player
//!
//! The two sides of a checkers game. `One` starts on the bottom rows
//! and its men advance toward row 0; `Two` starts on the top rows and
//! its men advance toward row 7.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Bottom side, moves first, advances toward row 0.
    One,
    /// Top side, advances toward row 7.
    Two,
}

impl Player {
    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta of a man's forward step.
    ///
    /// ```
    /// use rust_draughts::Player;
    ///
    /// assert_eq!(Player::One.forward(), -1);
    /// assert_eq!(Player::Two.forward(), 1);
    /// ```
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    /// The row on which this side's men are promoted to kings.
    #[must_use]
    pub const fn crown_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }

    /// Iterate over both players, in turn order.
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}
