//! Turn records and the "whose turn is it" descriptor.
//!
//! Every accepted score submission becomes a `TurnRecord` in the session
//! history. Records are used for:
//! - Replaying how totals were built up
//! - Debugging and display
//!
//! A `TurnDescriptor` identifies the next turn while a game is in progress.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// One accepted turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who took the turn.
    pub player: PlayerId,

    /// Set the turn belonged to (starts at 1).
    pub set: u32,

    /// Points scored.
    pub points: u32,

    /// Position in the whole game (0-based).
    pub sequence: u64,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(player: PlayerId, set: u32, points: u32, sequence: u64) -> Self {
        Self {
            player,
            set,
            points,
            sequence,
        }
    }
}

/// The turn that is up next.
///
/// Displays as the status line shown during play, e.g. `Set 1/3 - Alice's turn`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnDescriptor {
    /// Set being played (starts at 1).
    pub set: u32,

    /// Total sets in the game.
    pub max_sets: u32,

    /// Player whose turn it is.
    pub player: PlayerId,

    /// That player's name.
    pub name: String,
}

impl std::fmt::Display for TurnDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Set {}/{} - {}'s turn", self.set, self.max_sets, self.name)
    }
}
