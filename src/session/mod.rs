//! Game session: the state machine that owns all game state.
//!
//! A `GameSession` is created empty, collects players during setup, then
//! accepts one score per turn until every set has been played.
//! `PlayerSnapshot` is the read-only view handed to renderers.

pub mod game;
pub mod snapshot;

pub use game::{GameSession, Progress};
pub use snapshot::PlayerSnapshot;
