//! # draughts
//!
//! Rules engine for English draughts (checkers) on an 8×8 board.
//!
//! ## Rules
//!
//! 1. **Setup**: 12 normal pieces per side on the dark squares of the three
//!    home rows. RED (rows 0-2) moves first.
//!
//! 2. **Movement**: diagonal only. Normal pieces step forward; kings step in
//!    any direction. Jumps over an opposing piece capture it and may go in
//!    any direction.
//!
//! 3. **Forced continuation**: a piece that captures and can capture again
//!    must keep jumping before the turn passes.
//!
//! 4. **Promotion**: a normal piece reaching the far row is crowned at once
//!    and may continue jumping as a king.
//!
//! 5. **End**: the player to move with no legal move loses.
//!
//! ## Modules
//!
//! - `core`: players, positions, pieces, moves, rules configuration
//! - `board`: the grid, setup and text rendering
//! - `rules`: legality checks and the `Checkers` engine

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Move, ParseMoveError, Piece, Player, Position, RulesConfig};

pub use crate::board::{Board, Snapshot};

pub use crate::rules::{Checkers, GameResult, GameStatus, MoveError, MoveOutcome};
