//! Move legality for a single piece.
//!
//! These functions look only at geometry and board occupancy. Turn order and
//! forced continuation are the engine's concern.
//!
//! ## Rules
//!
//! - Moves are diagonal and cover 1 (step) or 2 (jump) rows
//! - The destination must be empty
//! - Normal pieces step forward only; kings step in any direction
//! - Jumps go in any direction (normal pieces may be restricted to forward
//!   jumps via `RulesConfig::men_capture_backward`)
//! - A jump must pass over an opposing piece, which is captured

use smallvec::SmallVec;

use super::error::MoveError;
use crate::board::Board;
use crate::core::config::RulesConfig;
use crate::core::moves::Move;
use crate::core::piece::Piece;
use crate::core::position::{Position, JUMP_OFFSETS, MOVE_OFFSETS};

/// Candidate moves for one piece. Never more than 8.
pub type MoveList = SmallVec<[Move; 8]>;

/// Check whether `piece` may make `mv` on `board`.
///
/// Returns the square of the captured piece for a legal jump, `None` for a
/// legal step. The origin cell itself is not inspected, so callers may ask
/// about a piece before or after lifting it.
pub fn check_move(
    board: &Board,
    config: &RulesConfig,
    mv: Move,
    piece: Piece,
) -> Result<Option<Position>, MoveError> {
    for pos in [mv.from, mv.to] {
        if !pos.is_on_board() {
            return Err(MoveError::OffBoard(pos));
        }
    }

    let (d_row, d_col) = mv.delta();
    if d_row.abs() != d_col.abs() {
        return Err(MoveError::NotDiagonal);
    }
    let distance = d_row.abs();
    if distance != 1 && distance != 2 {
        return Err(MoveError::WrongDistance(distance));
    }

    if board.get(mv.to).is_some() {
        return Err(MoveError::DestinationOccupied(mv.to));
    }

    if let Piece::Normal(player) = piece {
        let forward = i16::from(player.forward());
        let allowed = match distance {
            1 => d_row == forward,
            _ => config.men_capture_backward || d_row == 2 * forward,
        };
        if !allowed {
            return Err(MoveError::WrongDirection);
        }
    }

    let Some(square) = mv.captured_square() else {
        return Ok(None);
    };
    match board.get(square) {
        None => Err(MoveError::NoCaptureTarget(square)),
        Some(target) if target.player() == piece.player() => {
            Err(MoveError::FriendlyCaptureTarget(square))
        }
        Some(_) => Ok(Some(square)),
    }
}

/// Is `mv` legal for `piece`?
#[must_use]
pub fn is_legal(board: &Board, config: &RulesConfig, mv: Move, piece: Piece) -> bool {
    check_move(board, config, mv, piece).is_ok()
}

/// Every legal step and jump for `piece` standing on `from`.
#[must_use]
pub fn moves_from(board: &Board, config: &RulesConfig, from: Position, piece: Piece) -> MoveList {
    MOVE_OFFSETS
        .iter()
        .map(|&(d_row, d_col)| Move::new(from, from.offset(d_row, d_col)))
        .filter(|&mv| mv.to.is_on_board() && is_legal(board, config, mv, piece))
        .collect()
}

/// Does `piece` on `from` have at least one legal move?
#[must_use]
pub fn has_any_move(board: &Board, config: &RulesConfig, from: Position, piece: Piece) -> bool {
    MOVE_OFFSETS.iter().any(|&(d_row, d_col)| {
        let to = from.offset(d_row, d_col);
        to.is_on_board() && is_legal(board, config, Move::new(from, to), piece)
    })
}

/// Does `piece` on `from` have at least one legal jump?
#[must_use]
pub fn has_jump(board: &Board, config: &RulesConfig, from: Position, piece: Piece) -> bool {
    JUMP_OFFSETS.iter().any(|&(d_row, d_col)| {
        let to = from.offset(d_row, d_col);
        to.is_on_board() && is_legal(board, config, Move::new(from, to), piece)
    })
}
