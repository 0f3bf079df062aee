//! Presentation boundary.
//!
//! The session knows nothing about displays. This module supplies:
//! - `Renderer`: the trait a front end implements
//! - `View`: what a renderer draws, including which `Controls` are enabled
//! - `Table`: feeds raw user input to a session and calls the renderer
//! - `TextRenderer` and `JsonRenderer`: two ready-made front ends
//! - `user_message`: the wording shown for each rejected input

pub mod json;
pub mod messages;
pub mod renderer;
pub mod table;
pub mod text;
pub mod view;

pub use json::JsonRenderer;
pub use messages::{error_message, user_message};
pub use renderer::Renderer;
pub use table::{Table, TableError};
pub use text::TextRenderer;
pub use view::{Controls, Status, View};
