//! Session lifecycle phases and the operations they guard.

use serde::{Deserialize, Serialize};

/// Coarse lifecycle state of a session.
///
/// A session moves `Setup → InProgress → Finished` exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players are being registered.
    #[default]
    Setup,
    /// Turns are being played.
    InProgress,
    /// All sets are played and the outcome is frozen.
    Finished,
}

impl Phase {
    /// Whether `operation` may be invoked in this phase.
    #[must_use]
    pub fn permits(self, operation: Operation) -> bool {
        match operation {
            Operation::AddPlayer | Operation::StartGame => self == Phase::Setup,
            Operation::SubmitScore | Operation::CurrentTurn => self == Phase::InProgress,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "in setup",
            Phase::InProgress => "in progress",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Phase-guarded session operations, used to report misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    AddPlayer,
    StartGame,
    SubmitScore,
    CurrentTurn,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::AddPlayer => "add player",
            Operation::StartGame => "start game",
            Operation::SubmitScore => "submit score",
            Operation::CurrentTurn => "current turn",
        };
        f.write_str(name)
    }
}
