//! Renderer trait for presentation front ends.
//!
//! Front ends implement `Renderer` to:
//! - Draw the session after every accepted change
//! - Show a message when input is rejected
//!
//! The session never calls into a renderer; [`Table`](super::Table) does,
//! after each operation completes.

use std::io;

use super::view::View;

/// Presentation boundary.
pub trait Renderer {
    /// Draw the session.
    fn render(&mut self, view: &View) -> io::Result<()>;

    /// Tell the user their input was not accepted.
    fn notify(&mut self, message: &str) -> io::Result<()>;
}
