//! Line-delimited JSON renderer, for driving the game from another program.

use std::io::{self, Write};

use serde::Serialize;

use super::renderer::Renderer;
use super::view::View;

/// One line of output.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Render(&'a View),
    Notice { message: &'a str },
}

/// Writes one JSON object per line.
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &Event<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &View) -> io::Result<()> {
        self.emit(&Event::Render(view))
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        self.emit(&Event::Notice { message })
    }
}
