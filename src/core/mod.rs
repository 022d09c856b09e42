//! Core value types: players, positions, pieces, moves, configuration.
//!
//! Everything here is `Copy` and carries no board state. The board and the
//! rules engine build on these.

pub mod player;
pub mod position;
pub mod piece;
pub mod moves;
pub mod config;

pub use player::Player;
pub use position::{Position, BOARD_SIZE, JUMP_OFFSETS, MOVE_OFFSETS};
pub use piece::Piece;
pub use moves::{Move, ParseMoveError};
pub use config::RulesConfig;
