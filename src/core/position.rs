//! Board coordinates.
//!
//! Coordinates are signed so that an offset may step off the board and be
//! rejected afterwards with [`Position::is_on_board`] rather than wrapping.

use serde::{Deserialize, Serialize};

/// Number of rows and columns.
pub const BOARD_SIZE: i8 = 8;

/// A cell on the board, `(row, col)`, both in `0..8` when on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Both coordinates lie in `0..BOARD_SIZE`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Dark squares are the 32 playable cells: `row + col` is odd.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row ^ self.col) & 1 != 0
    }

    /// This position shifted by `(d_row, d_col)`. May be off the board;
    /// saturates at the `i8` limits.
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Cell halfway between two positions (integer division).
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new(halfway(self.row, other.row), halfway(self.col, other.col))
    }

    /// Grid indices, `None` when off the board.
    #[must_use]
    pub fn index(self) -> Option<(usize, usize)> {
        self.is_on_board()
            .then(|| (self.row as usize, self.col as usize))
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

/// Mean of two coordinates, truncated toward zero. Always fits in `i8`.
const fn halfway(a: i8, b: i8) -> i8 {
    ((a as i16 + b as i16) / 2) as i8
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Relative diagonal offsets a piece may move by.
///
/// Steps first, then jumps.
pub const MOVE_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
];

/// Relative offsets of the four diagonal jumps.
pub const JUMP_OFFSETS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(7, 7).is_on_board());
        assert!(!Position::new(-1, 3).is_on_board());
        assert!(!Position::new(3, 8).is_on_board());
        assert_eq!(Position::new(8, 0).index(), None);
        assert_eq!(Position::new(2, 5).index(), Some((2, 5)));
    }

    #[test]
    fn test_dark_squares() {
        assert!(Position::new(0, 1).is_dark());
        assert!(Position::new(1, 0).is_dark());
        assert!(!Position::new(0, 0).is_dark());
        assert_eq!(Position::all().filter(|p| p.is_dark()).count(), 32);
        assert!(Position::new(i8::MAX, i8::MAX - 1).is_dark());
        assert!(!Position::new(i8::MIN, -2).is_dark());
    }

    #[test]
    fn test_offset_and_midpoint() {
        let from = Position::new(3, 2);
        let to = from.offset(2, 2);
        assert_eq!(to, Position::new(5, 4));
        assert_eq!(from.midpoint(to), Position::new(4, 3));
        assert_eq!(to.midpoint(from), Position::new(4, 3));
    }

    #[test]
    fn test_offset_and_midpoint_at_limits() {
        let corner = Position::new(i8::MAX, i8::MIN);
        assert_eq!(corner.offset(2, -2), Position::new(i8::MAX, i8::MIN));
        assert!(!corner.offset(2, -2).is_on_board());

        let far = Position::new(i8::MAX, i8::MAX);
        assert_eq!(far.midpoint(far), far);
        assert_eq!(
            Position::new(i8::MIN, 0).midpoint(Position::new(i8::MAX, 0)),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_all_positions() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[9], Position::new(1, 1));
        assert_eq!(all[63], Position::new(7, 7));
    }

    #[test]
    fn test_from_tuple_and_display() {
        let pos: Position = (2, 1).into();
        assert_eq!(pos, Position::new(2, 1));
        assert_eq!(format!("{}", pos), "(2, 1)");
    }
}
