//! Session configuration.
//!
//! Sessions take their player-count bounds from a `SessionConfig`. The
//! default allows 2 to 255 players.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Player-count bounds for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Players required before the game can start (at least 2).
    pub min_players: usize,

    /// Players accepted during setup (at most 255).
    pub max_players: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: PlayerId::MAX_PLAYERS,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` players to start.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        assert!(min >= 2, "A game needs at least 2 players");
        assert!(min <= self.max_players, "Minimum players exceeds maximum");
        self.min_players = min;
        self
    }

    /// Accept at most `max` players.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(max <= PlayerId::MAX_PLAYERS, "At most 255 players supported");
        assert!(max >= self.min_players, "Maximum players below minimum");
        self.max_players = max;
        self
    }
}
