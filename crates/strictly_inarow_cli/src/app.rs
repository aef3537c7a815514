//! Interactive hot-seat game loop.
//!
//! The app is the presentation layer: it owns the session, turns typed
//! lines into grid positions, and prints whatever the session reports.

use super::config::Config;
use super::input::{self, Command, HELP};
use super::presenter::Presenter;
use std::io::{BufRead, Write};
use strictly_inarow::{EventLog, GameSession, InputGate, PlacementError, Position, Rules};
use tracing::{debug, info, instrument};

/// Terminal front end for one session.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    events: EventLog,
    gate: InputGate,
    presenter: Presenter,
}

impl App {
    /// Creates an app playing the standard board.
    #[instrument(skip(config))]
    pub fn new(config: Config) -> Self {
        let events = EventLog::new();
        let gate = InputGate::new();

        let mut session = GameSession::new(Rules::standard());
        session.subscribe(events.clone());
        session.subscribe(gate.clone());

        Self {
            session,
            events,
            gate,
            presenter: Presenter::new(config),
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays until `quit` or end of input.
    ///
    /// Once a game ends, input is frozen until the next line, which starts
    /// a new game unless it asks to quit or for help.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
        self.session.new_game();
        self.flush(&mut output)?;

        for line in input.lines() {
            let line = line?;

            if !self.gate.is_open() {
                match input::parse(&line) {
                    Ok(Command::Quit) => {
                        info!("Player quit");
                        break;
                    }
                    Ok(Command::Help) => {
                        writeln!(output, "{}", HELP)?;
                        continue;
                    }
                    _ => {}
                }
                debug!("Input after game end, restarting");
                self.gate.reopen();
                self.session.new_game();
                self.flush(&mut output)?;
                continue;
            }

            let command = match input::parse(&line) {
                Ok(command) => command,
                Err(error) => {
                    writeln!(output, "{}", error)?;
                    continue;
                }
            };

            match command {
                Command::Quit => {
                    info!("Player quit");
                    break;
                }
                Command::Help => writeln!(output, "{}", HELP)?,
                Command::NewGame => self.session.new_game(),
                Command::Place(position) => self.place(position, &mut output)?,
            }
            self.flush(&mut output)?;
        }

        output.flush()
    }

    fn place(&mut self, position: Position, output: &mut impl Write) -> std::io::Result<()> {
        match self.session.submit_move(position) {
            Ok(_) => Ok(()),
            Err(PlacementError::OutOfBounds(_)) => {
                let board = self.session.board();
                writeln!(
                    output,
                    "{} is off the {}x{} board.",
                    position,
                    board.height(),
                    board.width()
                )
            }
            Err(error @ PlacementError::CellOccupied(_)) => writeln!(output, "{}.", error),
        }
    }

    /// Prints pending notifications, then the board.
    fn flush(&mut self, output: &mut impl Write) -> std::io::Result<()> {
        for event in self.events.drain() {
            writeln!(output, "{}", self.presenter.describe(event))?;
        }
        writeln!(output, "{}", self.presenter.render_board(self.session.board()))?;
        if !self.session.is_playing() {
            writeln!(output, "Press enter to play again, or `quit` to leave.")?;
        }
        Ok(())
    }
}

/// Plays `positions` on a fresh standard board and reports the result.
#[instrument(skip(output))]
pub fn replay(
    config: Config,
    positions: &[Position],
    mut output: impl Write,
) -> anyhow::Result<()> {
    let session = GameSession::replay(Rules::standard(), positions)?;
    let presenter = Presenter::new(config);

    writeln!(output, "{}", presenter.render_board(session.board()))?;
    match session.outcome() {
        Some(outcome) => writeln!(output, "{}", outcome)?,
        None => writeln!(output, "In progress, player {} to move", session.current_turn())?,
    }
    Ok(())
}
