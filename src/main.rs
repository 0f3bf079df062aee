//! lowball binary entrypoint: reads commands from stdin and draws the game on stdout.

mod cli;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Format};
use lowball::{console, GameSession, JsonRenderer, Renderer, SessionConfig, Table, TextRenderer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = SessionConfig::new().with_max_players(usize::from(cli.max_players));
    let session = GameSession::with_config(config);
    let stdout = io::stdout().lock();

    match cli.format {
        Format::Text => play(&cli, session, TextRenderer::new(stdout)),
        Format::Json => play(&cli, session, JsonRenderer::new(stdout)),
    }
}

/// Apply the players and set count given on the command line, then hand
/// over to the interactive loop.
fn play<R: Renderer>(cli: &Cli, session: GameSession, renderer: R) -> anyhow::Result<()> {
    let mut table = Table::new(session, renderer);

    console::prepare(&mut table, &cli.players, cli.sets.as_deref())
        .context("applying command-line players")?;

    info!(players = table.session().player_count(), "reading commands");
    console::run(io::stdin().lock(), &mut table).context("reading commands")?;
    Ok(())
}

/// Logs go to stderr so they never mix with the rendered game.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
