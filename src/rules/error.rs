//! Reasons a move is rejected.
//!
//! The engine's boolean boundary (`attempt_move`) collapses all of these to
//! `false`. `try_move` returns them for callers and tests that need to tell
//! rejections apart.

use thiserror::Error;

use crate::core::player::Player;
use crate::core::position::Position;

/// A rejected move. The game state is unchanged whenever one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{0} is off the board")]
    OffBoard(Position),

    #[error("no piece at {0}")]
    EmptyOrigin(Position),

    #[error("piece belongs to {found}, but {expected} is to move")]
    WrongPlayer { expected: Player, found: Player },

    #[error("the piece on {required} must continue jumping")]
    MustContinueJump { required: Position },

    #[error("move is not diagonal")]
    NotDiagonal,

    #[error("move covers {0} rows; only 1 (step) or 2 (jump) are allowed")]
    WrongDistance(i16),

    #[error("{0} is occupied")]
    DestinationOccupied(Position),

    #[error("normal pieces cannot move in that direction")]
    WrongDirection,

    #[error("no piece to capture on {0}")]
    NoCaptureTarget(Position),

    #[error("cannot capture own piece on {0}")]
    FriendlyCaptureTarget(Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::EmptyOrigin(Position::new(3, 3)).to_string(),
            "no piece at (3, 3)"
        );
        assert_eq!(
            MoveError::WrongPlayer {
                expected: Player::Red,
                found: Player::Black,
            }
            .to_string(),
            "piece belongs to BLACK, but RED is to move"
        );
        assert_eq!(
            MoveError::MustContinueJump {
                required: Position::new(5, 4),
            }
            .to_string(),
            "the piece on (5, 4) must continue jumping"
        );
    }
}
