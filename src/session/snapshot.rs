//! Read-only player views handed to renderers.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// A player's name, scores, and total at one point in time.
///
/// Scores share structure with the session, so taking a snapshot is cheap
/// and later turns never change it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub scores: Vector<u32>,
    pub total: u64,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            scores: player.scores().clone(),
            total: player.total(),
        }
    }
}

impl std::fmt::Display for PlayerSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        if self.scores.is_empty() {
            return Ok(());
        }
        let points = self
            .scores
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, " - Points: {} (Total: {})", points, self.total)
    }
}
