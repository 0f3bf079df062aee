//! Player identification and per-player score tracking.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The id is the
//! player's registration index, which is also their position in the turn
//! rotation.
//!
//! ## Player
//!
//! A registered player with their ordered turn scores and running total.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Largest number of players a session can hold.
    pub const MAX_PLAYERS: usize = u8::MAX as usize;

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one in a rotation of `player_count` players.
    ///
    /// ```
    /// use lowball::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0 && player_count <= Self::MAX_PLAYERS);
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A registered player.
///
/// `total` is updated together with `scores` in [`Player::record`], so it
/// always equals the sum of `scores`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    scores: Vector<u32>,
    total: u64,
}

impl Player {
    /// Create a player with no scores.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            scores: Vector::new(),
            total: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scores in turn order.
    #[must_use]
    pub fn scores(&self) -> &Vector<u32> {
        &self.scores
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of turns this player has taken.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.scores.len()
    }

    /// Record one turn's points.
    pub(crate) fn record(&mut self, points: u32) {
        self.scores.push_back(points);
        self.total += u64::from(points);
    }
}
