use crate::core::{Board, Mark, Position, BOARD_SIZE};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    mark: Mark,
    name: String,
}

impl TuiController {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &mut Board, empty_cells: &[Position]) -> Option<Position> {
        let mut state = DisplayState::default();
        state.show_cursor = true;
        state.status_msg = Some(format!("{}'s turn ({})", self.name, self.mark));

        // Start the cursor on the first open square.
        if let Some(&first) = empty_cells.first() {
            state.cursor = first;
        }

        loop {
            render_board(board, &state);
            print!("[Arrows]: Move | [Enter]: Place | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap() {
                if let Event::Key(KeyEvent { code, .. }) = event::read().unwrap() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up => {
                            if state.cursor.row > 0 {
                                state.cursor.row -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if state.cursor.row < BOARD_SIZE - 1 {
                                state.cursor.row += 1;
                            }
                        }
                        KeyCode::Left => {
                            if state.cursor.col > 0 {
                                state.cursor.col -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if state.cursor.col < BOARD_SIZE - 1 {
                                state.cursor.col += 1;
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            if board.get(state.cursor).is_none() {
                                return Some(state.cursor);
                            }
                            state.status_msg =
                                Some(format!("{} is already taken", state.cursor));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
