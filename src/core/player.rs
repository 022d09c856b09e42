//! Player identification.
//!
//! English draughts is strictly two-player. RED sets up on rows 0-2 and
//! moves toward increasing rows; BLACK sets up on rows 5-7 and moves
//! toward decreasing rows.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// Both players, RED first.
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row delta of a forward step for this player's normal pieces.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }

    /// The row on which this player's normal pieces are crowned.
    #[must_use]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Player::Red => 7,
            Player::Black => 0,
        }
    }

    /// Rows filled at setup.
    #[must_use]
    pub fn home_rows(self) -> std::ops::RangeInclusive<i8> {
        match self {
            Player::Red => 0..=2,
            Player::Black => 5..=7,
        }
    }

    /// Single-letter glyph for a normal piece; kings use the uppercase form.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Player::Red => 'r',
            Player::Black => 'b',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "RED"),
            Player::Black => write!(f, "BLACK"),
        }
    }
}
