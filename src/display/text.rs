//! Plain-text renderer for terminals.

use std::io::{self, Write};

use super::renderer::Renderer;
use super::view::{Status, View};

/// Writes the player list and status as lines of text.
///
/// ```text
/// Alice - Points: 5 (Total: 5)
/// Bob
/// Set 1/2 - Bob's turn
/// ```
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &View) -> io::Result<()> {
        for player in &view.players {
            writeln!(self.out, "{player}")?;
        }
        match &view.status {
            Status::Setup => {}
            Status::Turn(turn) => writeln!(self.out, "{turn}")?,
            Status::Finished(outcome) => {
                writeln!(self.out, "Game Over! {outcome}")?;
                writeln!(self.out, "Start a new session to play again")?;
            }
        }
        self.out.flush()
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "! {message}")?;
        self.out.flush()
    }
}
