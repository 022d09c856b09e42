//! Rules configuration.
//!
//! The defaults reproduce the standard game as this engine plays it:
//! - RED moves first
//! - Normal pieces may capture backward (but never step backward)
//!
//! The second point departs from some tournament rulings. It is kept as
//! the default and exposed here so callers can opt into forward-only
//! captures for men.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Rule switches fixed at game creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Player to move after setup.
    pub first_player: Player,

    /// May a normal piece jump toward its own home rows?
    pub men_capture_backward: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_player: Player::Red,
            men_capture_backward: true,
        }
    }
}

impl RulesConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Allow or forbid backward jumps by normal pieces.
    #[must_use]
    pub fn with_men_capture_backward(mut self, allowed: bool) -> Self {
        self.men_capture_backward = allowed;
        self
    }
}
