//! Winner determination.
//!
//! The lowest total wins. Every player sharing the lowest total is a winner,
//! listed in registration order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;

/// Names of the players sharing the lowest total.
pub type Winners = SmallVec<[String; 4]>;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Single player with the lowest total.
    Winner {
        /// Winner's name.
        name: String,
        /// Their total.
        total: u64,
    },
    /// Several players share the lowest total.
    Tie {
        /// Tied players, in registration order.
        names: Winners,
        /// The shared total.
        total: u64,
    },
}

impl Outcome {
    /// Compute the outcome for `players`.
    ///
    /// Returns `None` when there are no players.
    #[must_use]
    pub fn from_players(players: &[Player]) -> Option<Self> {
        let min_total = players.iter().map(Player::total).min()?;

        let mut names: Winners = players
            .iter()
            .filter(|p| p.total() == min_total)
            .map(|p| p.name().to_string())
            .collect();

        let outcome = if names.len() == 1 {
            Outcome::Winner {
                name: names.remove(0),
                total: min_total,
            }
        } else {
            Outcome::Tie {
                names,
                total: min_total,
            }
        };
        Some(outcome)
    }

    /// The lowest total.
    #[must_use]
    pub fn min_total(&self) -> u64 {
        match self {
            Outcome::Winner { total, .. } | Outcome::Tie { total, .. } => *total,
        }
    }

    /// Winning names in registration order.
    #[must_use]
    pub fn winners(&self) -> &[String] {
        match self {
            Outcome::Winner { name, .. } => std::slice::from_ref(name),
            Outcome::Tie { names, .. } => names,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie { .. })
    }

    /// Check if a player won (alone or as part of a tie).
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners().iter().any(|w| w == name)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { name, total } => {
                write!(f, "{name} wins with the lowest score of {total} points!")
            }
            Outcome::Tie { names, .. } => {
                write!(f, "It's a tie between {}!", names.join(" and "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn player(id: u8, name: &str, scores: &[u32]) -> Player {
        let mut p = Player::new(PlayerId::new(id), name);
        for &s in scores {
            p.record(s);
        }
        p
    }

    #[test]
    fn test_single_winner() {
        let players = vec![player(0, "Alice", &[5]), player(1, "Bob", &[3])];
        let outcome = Outcome::from_players(&players).unwrap();

        assert_eq!(
            outcome,
            Outcome::Winner {
                name: "Bob".into(),
                total: 3
            }
        );
        assert!(!outcome.is_tie());
        assert!(outcome.is_winner("Bob"));
        assert!(!outcome.is_winner("Alice"));
        assert_eq!(outcome.min_total(), 3);
    }

    #[test]
    fn test_tie_keeps_registration_order() {
        let players = vec![
            player(0, "Carol", &[4, 6]),
            player(1, "Alice", &[9, 9]),
            player(2, "Bob", &[2, 8]),
        ];
        let outcome = Outcome::from_players(&players).unwrap();

        assert!(outcome.is_tie());
        assert_eq!(outcome.winners(), &["Carol".to_string(), "Bob".to_string()]);
        assert_eq!(outcome.min_total(), 10);
    }

    #[test]
    fn test_all_zero_is_full_tie() {
        let players = vec![player(0, "A", &[0]), player(1, "B", &[0]), player(2, "C", &[0])];
        let outcome = Outcome::from_players(&players).unwrap();

        assert_eq!(outcome.winners().len(), 3);
        assert_eq!(outcome.min_total(), 0);
    }

    #[test]
    fn test_no_players() {
        assert!(Outcome::from_players(&[]).is_none());
    }

    #[test]
    fn test_display() {
        let win = Outcome::Winner {
            name: "Bob".into(),
            total: 3,
        };
        assert_eq!(win.to_string(), "Bob wins with the lowest score of 3 points!");

        let tie = Outcome::Tie {
            names: ["Alice".to_string(), "Bob".to_string()].into_iter().collect(),
            total: 10,
        };
        assert_eq!(tie.to_string(), "It's a tie between Alice and Bob!");
    }

    #[test]
    fn test_serialization() {
        let tie = Outcome::Tie {
            names: ["Alice".to_string(), "Bob".to_string()].into_iter().collect(),
            total: 10,
        };
        let json = serde_json::to_value(&tie).unwrap();
        assert_eq!(json["kind"], "tie");
        assert_eq!(json["total"], 10);

        let back: Outcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, tie);
    }
}
