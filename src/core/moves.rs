//! Move representation: an origin and a destination.
//!
//! A move whose row distance is 2 is a jump; the captured piece sits on the
//! midpoint. Moves can be parsed from the four-integer line the console
//! loop accepts:
//!
//! ```
//! use draughts::core::{Move, Position};
//!
//! let mv: Move = "2 1 3 2".parse().unwrap();
//! assert_eq!(mv, Move::new(Position::new(2, 1), Position::new(3, 2)));
//! assert!(!mv.is_jump());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::Position;

/// A single step or jump of one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Signed `(row, col)` displacement, widened so any pair of `i8`
    /// coordinates fits.
    #[must_use]
    pub const fn delta(&self) -> (i16, i16) {
        (
            self.to.row as i16 - self.from.row as i16,
            self.to.col as i16 - self.from.col as i16,
        )
    }

    /// Two-square moves are jumps.
    #[must_use]
    pub const fn is_jump(&self) -> bool {
        self.to.row.abs_diff(self.from.row) == 2
    }

    /// Square of the piece a jump would capture.
    #[must_use]
    pub fn captured_square(&self) -> Option<Position> {
        self.is_jump().then(|| self.from.midpoint(self.to))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.from.row, self.from.col, self.to.row, self.to.col
        )
    }
}

/// Why a move line could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected 4 coordinates, found {0}")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a coordinate")]
    InvalidCoordinate(String),
}

impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    /// Parse `"from_row from_col to_row to_col"`, whitespace separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i8>()
                    .map_err(|_| ParseMoveError::InvalidCoordinate(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match coords[..] {
            [from_row, from_col, to_row, to_col] => Ok(Move::new(
                Position::new(from_row, from_col),
                Position::new(to_row, to_col),
            )),
            _ => Err(ParseMoveError::WrongTokenCount(coords.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_jump() {
        let step = Move::new(Position::new(2, 1), Position::new(3, 2));
        assert!(!step.is_jump());
        assert_eq!(step.delta(), (1, 1));
        assert_eq!(step.captured_square(), None);

        let jump = Move::new(Position::new(3, 2), Position::new(5, 4));
        assert!(jump.is_jump());
        assert_eq!(jump.captured_square(), Some(Position::new(4, 3)));

        let back = Move::new(Position::new(5, 4), Position::new(3, 2));
        assert_eq!(back.delta(), (-2, -2));
        assert_eq!(back.captured_square(), Some(Position::new(4, 3)));
    }

    #[test]
    fn test_extreme_coordinates() {
        let mv: Move = "127 0 -128 0".parse().unwrap();
        assert_eq!(mv.delta(), (-255, 0));
        assert!(!mv.is_jump());
        assert_eq!(mv.captured_square(), None);

        let mv: Move = "100 0 102 0".parse().unwrap();
        assert!(mv.is_jump());
        assert_eq!(mv.captured_square(), Some(Position::new(101, 0)));

        let mv: Move = "-128 -128 -126 -126".parse().unwrap();
        assert_eq!(mv.captured_square(), Some(Position::new(-127, -127)));
    }

    #[test]
    fn test_parse() {
        let mv: Move = "  5 4   3 2 ".parse().unwrap();
        assert_eq!(mv, Move::new(Position::new(5, 4), Position::new(3, 2)));
        assert_eq!(format!("{}", mv), "5 4 3 2");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "2 1 3".parse::<Move>(),
            Err(ParseMoveError::WrongTokenCount(3))
        );
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::WrongTokenCount(0)));
        assert_eq!(
            "2 1 x 2".parse::<Move>(),
            Err(ParseMoveError::InvalidCoordinate("x".to_string()))
        );
        assert_eq!(
            "2 1 3 2 4".parse::<Move>(),
            Err(ParseMoveError::WrongTokenCount(5))
        );
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(Position::new(3, 2), Position::new(5, 4));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
