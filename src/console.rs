//! Line-oriented command loop for terminal play.
//!
//! Each input line is one command:
//!
//! | Line | Effect |
//! |---|---|
//! | `add <name>` | register a player |
//! | `start <sets>` | start the game |
//! | `score <points>` | submit the current player's points |
//! | `players`, `status` | redraw |
//! | `help` | list the commands available right now |
//! | `quit` | leave |
//!
//! A line that is not a command is a player name during setup and a score
//! afterwards.

use std::io::{self, BufRead};

use tracing::debug;

use crate::core::Phase;
use crate::display::{Controls, Renderer, Table, TableError};

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Start(String),
    Score(String),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one line. Blank lines give `None`.
    #[must_use]
    pub fn parse(line: &str, phase: Phase) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Add(rest.to_string()),
            "start" => Command::Start(rest.to_string()),
            "score" => Command::Score(rest.to_string()),
            "players" | "status" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => match phase {
                Phase::Setup => Command::Add(line.to_string()),
                Phase::InProgress | Phase::Finished => Command::Score(line.to_string()),
            },
        };
        Some(command)
    }
}

/// Commands usable under `controls`, one per line.
#[must_use]
pub fn help_lines(controls: Controls) -> Vec<&'static str> {
    let mut lines = Vec::new();
    if controls.add_player {
        lines.push("add <name>     register a player");
    }
    if controls.start {
        lines.push("start <sets>   start the game");
    }
    if controls.submit_score {
        lines.push("score <points> record points for the current player");
    }
    lines.push("players        show the scoreboard");
    lines.push("quit           leave");
    lines
}

/// Apply players and a set count supplied up front, before any commands
/// are read.
///
/// The game is only started when enough players were supplied. Rejected
/// names or set counts are shown to the user like any other rejected
/// command, and the table is drawn either way.
pub fn prepare<R: Renderer>(
    table: &mut Table<R>,
    players: &[String],
    sets: Option<&str>,
) -> io::Result<()> {
    for name in players {
        tolerate(table.add_player(name))?;
    }

    let registered = table.session().player_count();
    let ready = registered >= table.session().config().min_players;
    let result = match sets {
        Some(sets) if ready => table.start_game(sets),
        Some(_) => {
            debug!(players = registered, "too few players to start yet");
            table.refresh()
        }
        None => table.refresh(),
    };
    match result {
        Ok(()) => Ok(()),
        Err(TableError::Game(_)) => tolerate(table.refresh()),
        Err(TableError::Render(err)) => Err(err),
    }
}

/// Read commands from `input` until it ends, the user quits, or the game
/// finishes.
///
/// Rejected commands are shown to the user and do not stop the loop; only
/// read and render failures do.
pub fn run<I: BufRead, R: Renderer>(input: I, table: &mut Table<R>) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line, table.session().phase()) else {
            continue;
        };
        debug!(?command, "command received");

        let result = match command {
            Command::Add(name) => table.add_player(&name),
            Command::Start(sets) => table.start_game(&sets),
            Command::Score(points) => table.submit_score(&points),
            Command::Show => table.refresh(),
            Command::Help => show_help(table),
            Command::Quit => break,
        };
        tolerate(result)?;

        if table.session().phase() == Phase::Finished {
            break;
        }
    }
    Ok(())
}

fn show_help<R: Renderer>(table: &mut Table<R>) -> Result<(), TableError> {
    let controls = Controls::for_phase(table.session().phase());
    for line in help_lines(controls) {
        table.notify(line)?;
    }
    Ok(())
}

/// Keep going after rejected input; stop on I/O failure.
fn tolerate(result: Result<(), TableError>) -> io::Result<()> {
    match result {
        Ok(()) | Err(TableError::Game(_)) => Ok(()),
        Err(TableError::Render(err)) => Err(err),
    }
}
