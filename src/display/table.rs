//! Drives a session from raw user input and keeps a renderer up to date.

use std::io;

use thiserror::Error;
use tracing::debug;

use super::messages::error_message;
use super::renderer::Renderer;
use super::view::View;
use crate::core::{GameError, Operation};
use crate::input::{parse_points, parse_set_count};
use crate::session::GameSession;

/// Errors from a [`Table`] action.
#[derive(Debug, Error)]
pub enum TableError {
    /// The session rejected the action. The user has already been told.
    #[error(transparent)]
    Game(#[from] GameError),
    /// The renderer failed.
    #[error("rendering failed")]
    Render(#[from] io::Error),
}

impl TableError {
    /// The session error, if the session rejected the action.
    #[must_use]
    pub fn game(&self) -> Option<&GameError> {
        match self {
            TableError::Game(err) => Some(err),
            TableError::Render(_) => None,
        }
    }
}

/// A session paired with the renderer that displays it.
///
/// Every accepted action is followed by a full render. Every rejected action
/// is followed by a notification and leaves the display alone.
pub struct Table<R> {
    session: GameSession,
    renderer: R,
}

impl<R: Renderer> Table<R> {
    /// Wrap `session`. Nothing is drawn until [`Table::refresh`] or the
    /// first accepted action.
    pub fn new(session: GameSession, renderer: R) -> Self {
        Self { session, renderer }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (GameSession, R) {
        (self.session, self.renderer)
    }

    /// Redraw without changing anything.
    pub fn refresh(&mut self) -> Result<(), TableError> {
        self.renderer.render(&View::of(&self.session))?;
        Ok(())
    }

    /// Show a message without changing anything.
    pub fn notify(&mut self, message: &str) -> Result<(), TableError> {
        self.renderer.notify(message)?;
        Ok(())
    }

    /// Register a player from the name field.
    pub fn add_player(&mut self, raw_name: &str) -> Result<(), TableError> {
        let result = self.session.add_player(raw_name).map(drop);
        self.settle(Operation::AddPlayer, result)
    }

    /// Start the game from the set-count field.
    ///
    /// A missing player is reported before an unreadable set count.
    pub fn start_game(&mut self, raw_sets: &str) -> Result<(), TableError> {
        let result = self
            .session
            .check_start()
            .and_then(|()| parse_set_count(raw_sets).map_err(GameError::from))
            .and_then(|sets| self.session.start_game(sets))
            .map(drop);
        self.settle(Operation::StartGame, result)
    }

    /// Submit the current player's score from the points field.
    pub fn submit_score(&mut self, raw_points: &str) -> Result<(), TableError> {
        let result = self
            .session
            .check(Operation::SubmitScore)
            .and_then(|()| parse_points(raw_points).map_err(GameError::from))
            .and_then(|points| self.session.submit_score(points))
            .map(drop);
        self.settle(Operation::SubmitScore, result)
    }

    fn settle(
        &mut self,
        operation: Operation,
        result: Result<(), GameError>,
    ) -> Result<(), TableError> {
        match result {
            Ok(()) => self.refresh(),
            Err(err) => {
                debug!(%operation, error = %err, "notifying user of rejected action");
                self.renderer.notify(&error_message(&err))?;
                Err(err.into())
            }
        }
    }
}
