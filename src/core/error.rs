//! Error types for session operations.
//!
//! Two kinds of failure exist:
//! - [`ValidationError`]: user input failed a precondition. The input is
//!   discarded and the session is unchanged, so the caller may retry.
//! - [`GameError::InvalidState`]: an operation was invoked in a phase that
//!   does not permit it. This is an integration bug in the caller.

use thiserror::Error;

use super::phase::{Operation, Phase};

/// Rejected user input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Player name is empty after trimming.
    #[error("empty name")]
    EmptyName,
    /// A player with the same trimmed name is already registered.
    #[error("duplicate name")]
    DuplicateName(String),
    /// Too few players registered to start.
    #[error("not enough players")]
    NotEnoughPlayers {
        /// Minimum the session requires.
        required: usize,
        /// Players currently registered.
        registered: usize,
    },
    /// Session is already at its player cap.
    #[error("too many players")]
    TooManyPlayers {
        /// Configured cap.
        max: usize,
    },
    /// Set count is not a positive integer.
    #[error("invalid set count")]
    InvalidSetCount,
    /// Points are not a non-negative integer.
    #[error("invalid points")]
    InvalidPoints,
}

/// Errors returned by [`GameSession`](crate::session::GameSession) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Input failed validation; the session is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Operation is not allowed in the current phase.
    #[error("{operation} is not allowed while the game is {phase}")]
    InvalidState {
        /// Operation that was attempted.
        operation: Operation,
        /// Phase the session was in.
        phase: Phase,
    },
}

impl GameError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, GameError::Validation(_))
    }

    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, GameError::InvalidState { .. })
    }

    /// The validation failure, if this is one.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            GameError::Validation(err) => Some(err),
            GameError::InvalidState { .. } => None,
        }
    }
}
