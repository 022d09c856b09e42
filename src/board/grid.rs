//! The 8×8 grid of optional pieces.
//!
//! `Board` owns its cells outright; each cell holds at most one piece.
//! It knows nothing about turns or legality, those belong to the rules
//! engine. It supports:
//! - Standard setup (12 normal pieces per side on dark squares)
//! - Cell lookup, placement and removal
//! - Iteration over occupied cells
//! - Text rendering via `Display`

use serde::{Deserialize, Serialize};

use crate::core::piece::Piece;
use crate::core::player::Player;
use crate::core::position::{Position, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// Read-only copy of every cell, indexed `[row][col]`.
pub type Snapshot = [[Option<Piece>; SIZE]; SIZE];

/// Glyph for an empty cell in the text rendering.
pub const EMPTY_GLYPH: char = '.';

/// Checkers board.
///
/// ## Usage
///
/// ```
/// use draughts::board::Board;
/// use draughts::core::{Piece, Player, Position};
///
/// let mut board = Board::new();
/// board.place(Position::new(3, 2), Piece::Normal(Player::Red));
///
/// assert_eq!(board.get(Position::new(3, 2)), Some(Piece::Normal(Player::Red)));
/// assert_eq!(board.count(Player::Red), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Snapshot,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board in the starting layout.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.setup();
        board
    }

    /// Clear the board and place both sides on their home rows.
    ///
    /// Even rows use the odd columns, odd rows the even columns, so every
    /// piece lands on a dark square.
    pub fn setup(&mut self) {
        self.clear();
        for player in Player::ALL {
            for row in player.home_rows() {
                for col in ((row + 1) % 2..BOARD_SIZE).step_by(2) {
                    self.place(Position::new(row, col), Piece::Normal(player));
                }
            }
        }
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.cells = Snapshot::default();
    }

    /// Piece at `pos`, or `None` if empty or off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        let (row, col) = pos.index()?;
        self.cells[row][col]
    }

    /// Put a piece on `pos`, returning any previous occupant.
    ///
    /// Panics if `pos` is off the board.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        let (row, col) = pos
            .index()
            .unwrap_or_else(|| panic!("Position {} is off the board", pos));
        self.cells[row][col].replace(piece)
    }

    /// Take the piece off `pos`, if any.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        let (row, col) = pos.index()?;
        self.cells[row][col].take()
    }

    /// Iterate over `(position, piece)` for every occupied cell, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Iterate over the occupied cells belonging to `player`.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.player() == player)
    }

    /// Number of pieces `player` has left.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    /// Copy of all cells.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.cells
    }
}

impl std::fmt::Display for Board {
    /// Column header, then one line per row prefixed by its index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row)?;
            for cell in cells {
                let glyph = cell.map_or(EMPTY_GLYPH, Piece::glyph);
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
