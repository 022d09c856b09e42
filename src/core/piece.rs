//! Pieces: a normal man or a crowned king, each owned by a player.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A piece on the board.
///
/// Direction rules branch on the variant: normal pieces step forward only,
/// kings step in all four diagonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Normal(Player),
    King(Player),
}

impl Piece {
    /// Owning player.
    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Piece::Normal(player) | Piece::King(player) => player,
        }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::King(_))
    }

    /// The king this piece becomes on promotion. Kings are unchanged.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Piece::King(self.player())
    }

    /// Normal pieces render lowercase, kings uppercase.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Piece::Normal(player) => player.glyph(),
            Piece::King(player) => player.glyph().to_ascii_uppercase(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
