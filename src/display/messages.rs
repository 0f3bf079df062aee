//! User-facing wording for rejected input.

use std::borrow::Cow;

use crate::core::{GameError, ValidationError};

/// The message to show the user for a rejected input.
#[must_use]
pub fn user_message(err: &ValidationError) -> Cow<'static, str> {
    match err {
        ValidationError::EmptyName => "Please enter a player name".into(),
        ValidationError::DuplicateName(_) => "Player already exists!".into(),
        ValidationError::NotEnoughPlayers { required, .. } => {
            format!("Add at least {required} players to start the game").into()
        }
        ValidationError::TooManyPlayers { max } => {
            format!("No more than {max} players can join").into()
        }
        ValidationError::InvalidSetCount => "Please enter a valid number for sets".into(),
        ValidationError::InvalidPoints => "Please enter a valid number of points".into(),
    }
}

/// Like [`user_message`], falling back to the error text for misuse.
#[must_use]
pub fn error_message(err: &GameError) -> Cow<'static, str> {
    match err.validation() {
        Some(validation) => user_message(validation),
        None => err.to_string().into(),
    }
}
