//! What a renderer is given to draw.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, TurnDescriptor};
use crate::rules::Outcome;
use crate::session::{GameSession, PlayerSnapshot};

/// Which inputs the user may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub add_player: bool,
    pub start: bool,
    pub submit_score: bool,
}

impl Controls {
    /// Registration is open during setup, scoring while in progress, and
    /// nothing once finished.
    #[must_use]
    pub fn for_phase(phase: Phase) -> Self {
        Self {
            add_player: phase == Phase::Setup,
            start: phase == Phase::Setup,
            submit_score: phase == Phase::InProgress,
        }
    }
}

/// The status area: nothing yet, the next turn, or the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Status {
    Setup,
    Turn(TurnDescriptor),
    Finished(Outcome),
}

/// Everything needed to draw a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub players: Vec<PlayerSnapshot>,
    pub status: Status,
    pub controls: Controls,
}

impl View {
    /// Capture the current state of `session`.
    #[must_use]
    pub fn of(session: &GameSession) -> Self {
        let status = match session.phase() {
            Phase::Setup => Status::Setup,
            Phase::InProgress => session.current_turn().map_or(Status::Setup, Status::Turn),
            Phase::Finished => session.outcome().cloned().map_or(Status::Setup, Status::Finished),
        };
        Self {
            players: session.players_snapshot(),
            status,
            controls: Controls::for_phase(session.phase()),
        }
    }
}
