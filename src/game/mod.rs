use crate::core::{Board, GameOutcome, Mark, Position};
use crate::display::{render_board, DisplayState};
use crate::logic::{legal_moves, outcome};
use crate::player::PlayerController;

/// The turn loop. Owns the one authoritative board and the turn marker;
/// the core modules never store either.
pub struct Game {
    pub board: Board,
    pub current: Mark,
    pub last_move: Option<Position>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current: Mark::X,
            last_move: None,
        }
    }

    /// Runs one game to its terminal outcome. X always moves first.
    /// Returns `None` if a player resigned or the user interrupted.
    pub fn play(
        &mut self,
        p_x: &dyn PlayerController,
        p_o: &dyn PlayerController,
    ) -> Option<GameOutcome> {
        loop {
            let result = outcome(&self.board);
            if result.is_terminal() {
                return Some(result);
            }

            let controller = match self.current {
                Mark::X => p_x,
                Mark::O => p_o,
            };

            if controller.name().contains("AI") {
                let mut state = DisplayState::default();
                state.last_move = self.last_move;
                state.status_msg =
                    Some(format!("{} ({}) is thinking...", controller.name(), self.current));
                render_board(&self.board, &state);

                // Brief pause so engine moves are watchable; q interrupts.
                let timeout = std::time::Duration::from_millis(400);
                if crossterm::event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                        if key.code == crossterm::event::KeyCode::Char('q') {
                            return None;
                        }
                    }
                }
            }

            let moves = legal_moves(&self.board);
            match controller.choose_move(&mut self.board, &moves) {
                Some(pos) => {
                    self.board.place(pos, self.current);
                    self.last_move = Some(pos);
                    self.current = self.current.opponent();
                }
                None => return None,
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
