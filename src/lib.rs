//! # lowball
//!
//! Score tracker for turn-based, multi-set games where the lowest total wins.
//!
//! ## How a game runs
//!
//! 1. **Setup**: players are registered by name. Names are trimmed, must be
//!    non-empty, and must be unique.
//! 2. **In progress**: once at least two players are registered the game is
//!    started with a fixed number of sets. Players take turns in
//!    registration order, each entering a non-negative score. A set ends when
//!    every player has had one turn.
//! 3. **Finished**: after the last set the player with the lowest cumulative
//!    total wins. Players sharing the lowest total tie.
//!
//! ## Architecture
//!
//! - **Owned session**: all state lives in a [`GameSession`]. Independent
//!   games are independent values.
//!
//! - **Atomic operations**: every operation validates fully before mutating,
//!   so rejected input never leaves a half-applied change.
//!
//! - **Presentation boundary**: the session never draws anything. The
//!   [`display`] module supplies a [`Renderer`] trait and a [`Table`] that
//!   feeds raw input to the session and redraws after each accepted action.
//!
//! ## Modules
//!
//! - `core`: players, phases, turns, configuration, errors
//! - `rules`: winner computation
//! - `session`: the `GameSession` state machine and player snapshots
//! - `input`: reading numbers out of raw text
//! - `display`: renderer trait, text and JSON renderers, input driver
//! - `console`: line-oriented command loop for terminals

pub mod console;
pub mod core;
pub mod display;
pub mod input;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, Operation, Phase, Player, PlayerId, SessionConfig, TurnDescriptor, TurnRecord,
    ValidationError,
};

pub use crate::rules::{Outcome, Winners};

pub use crate::session::{GameSession, PlayerSnapshot, Progress};

pub use crate::display::{
    Controls, JsonRenderer, Renderer, Status, Table, TableError, TextRenderer, View,
};
