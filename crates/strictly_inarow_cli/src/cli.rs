//! Command-line interface for inarow.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-a-row - hot-seat tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "inarow")]
#[command(about = "Hot-seat tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config (symbols for players and empty cells)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Play a fixed list of moves and print the result
    Replay {
        /// Moves as `row,col`, player A first
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
