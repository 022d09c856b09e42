//! Rules of English draughts.
//!
//! - `legality`: whether a single piece may make a given step or jump
//! - `engine`: turn order, captures, promotion, forced continuation and
//!   game-over detection
//! - `error`: why a move was rejected

pub mod engine;
pub mod error;
pub mod legality;

pub use engine::{Checkers, GameResult, GameStatus, MoveOutcome};
pub use error::MoveError;
pub use legality::MoveList;
