//! Core session types: players, phases, turns, configuration, errors.
//!
//! These are the building blocks the session state machine is made of.
//! None of them perform rendering or input parsing.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod turn;

pub use config::SessionConfig;
pub use error::{GameError, ValidationError};
pub use phase::{Operation, Phase};
pub use player::{Player, PlayerId};
pub use turn::{TurnDescriptor, TurnRecord};
