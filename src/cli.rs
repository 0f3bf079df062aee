//! Command-line interface for the lowball binary.

use clap::{Parser, ValueEnum};

/// Keep score for a game where the lowest total wins
#[derive(Parser, Debug)]
#[command(name = "lowball")]
#[command(about = "Track a turn-based scoring game where the lowest total wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Register a player before reading commands (repeatable)
    #[arg(short, long = "player", value_name = "NAME")]
    pub players: Vec<String>,

    /// Start the game with this many sets once the players are registered
    #[arg(short, long, value_name = "SETS")]
    pub sets: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Largest number of players accepted
    #[arg(long, default_value_t = 255, value_parser = clap::value_parser!(u8).range(2..))]
    pub max_players: u8,
}

/// How the game is drawn on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}
