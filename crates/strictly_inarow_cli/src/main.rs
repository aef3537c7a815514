//! inarow - hot-seat tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_inarow_cli::{App, Cli, Command, Config, parse_position, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Replay { moves } => run_replay(config, &moves),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: Config) -> Result<()> {
    info!("Starting interactive game");
    let mut app = App::new(config);
    app.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}

/// Replay a list of `row,col` moves
#[instrument(skip(config))]
fn run_replay(config: Config, moves: &[String]) -> Result<()> {
    let positions = moves
        .iter()
        .map(|m| parse_position(m).with_context(|| format!("Invalid move `{}`", m)))
        .collect::<Result<Vec<_>>>()?;

    replay(config, &positions, std::io::stdout().lock())
}
