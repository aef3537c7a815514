//! Terminal front end for strictly_inarow.
//!
//! A presentation layer over [`strictly_inarow::GameSession`]: parses typed
//! coordinates, renders the board, and restarts on input after a game ends.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod presenter;

pub use app::{App, replay};
pub use cli::{Cli, Command};
pub use config::{Config, ConfigError};
pub use input::{InputError, parse, parse_position};
pub use presenter::Presenter;
