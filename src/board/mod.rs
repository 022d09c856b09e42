//! Board storage.
//!
//! ## Key Types
//!
//! - `Board`: 8×8 grid of `Option<Piece>`, setup and rendering
//! - `Snapshot`: plain array copy of the grid for read-only consumers

pub mod grid;

pub use grid::{Board, Snapshot, EMPTY_GLYPH};
