//! Text rendering of boards and session events.

use super::config::Config;
use strictly_inarow::{Board, Outcome, SessionEvent};

/// Renders game state as text using the configured symbols.
#[derive(Debug, Clone)]
pub struct Presenter {
    config: Config,
}

impl Presenter {
    /// Creates a presenter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Draws the board with row and column indices.
    ///
    /// ```text
    ///    0 1 2
    /// 0  X . .
    /// 1  . O .
    /// 2  . . .
    /// ```
    pub fn render_board(&self, board: &Board) -> String {
        let label_width = board.height().saturating_sub(1).to_string().len();
        let header = (0..board.width())
            .map(|col| col.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut out = format!("{:label_width$}  {}", "", header);
        for (row, cells) in board.cells().chunks(board.width()).enumerate() {
            let symbols = cells
                .iter()
                .map(|cell| self.config.cell_symbol(*cell))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("\n{:>label_width$}  {}", row, symbols));
        }
        out
    }

    /// One-line description of a session event.
    pub fn describe(&self, event: SessionEvent) -> String {
        match event {
            SessionEvent::SessionStarted(player) => format!(
                "New game. {} ({}) moves first.",
                self.config.player_symbol(player),
                player
            ),
            SessionEvent::TurnChanged(player) => format!(
                "{} ({}) to move.",
                self.config.player_symbol(player),
                player
            ),
            SessionEvent::GameEnded(Outcome::Won(player)) => format!(
                "Game over: {} ({}) wins!",
                self.config.player_symbol(player),
                player
            ),
            SessionEvent::GameEnded(Outcome::Draw) => "Game over: draw.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_inarow::{Player, Position};

    #[test]
    fn test_render_board() {
        let mut board = Board::standard();
        board.place(Position::new(0, 0), Player::A).unwrap();
        board.place(Position::new(1, 1), Player::B).unwrap();

        let presenter = Presenter::new(Config::default());
        assert_eq!(
            presenter.render_board(&board),
            "   0 1 2\n0  X . .\n1  . O .\n2  . . ."
        );
    }

    #[test]
    fn test_describe_events() {
        let presenter = Presenter::new(Config::default());
        assert_eq!(
            presenter.describe(SessionEvent::GameEnded(Outcome::Won(Player::B))),
            "Game over: O (B) wins!"
        );
        assert_eq!(
            presenter.describe(SessionEvent::TurnChanged(Player::A)),
            "X (A) to move."
        );
    }
}
