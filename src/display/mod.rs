use crate::core::{Board, Mark, Position, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Position,
    pub status_msg: Option<String>,
    pub last_move: Option<Position>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            status_msg: None,
            last_move: None,
            show_cursor: false,
        }
    }
}

fn cell_text(board: &Board, pos: Position) -> String {
    match board.get(pos) {
        Some(Mark::X) => format!(" {} ", "X".red().bold()),
        Some(Mark::O) => format!(" {} ", "O".blue().bold()),
        None => "   ".to_string(),
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // Clear the screen so the board never scrolls.
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Tic-Tac-Toe (Unbeatable AI) ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    print!("    ");
    for col in 0..BOARD_SIZE {
        print!("  {} ", col + 1);
    }
    print!("\r\n");

    print!("    +{}\r\n", "---+".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("  {} |", row + 1);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let mut text = cell_text(board, pos);
            if state.show_cursor && state.cursor == pos {
                text = format!("{}", text.reverse());
            } else if state.last_move == Some(pos) {
                text = format!("{}", text.underlined());
            }
            print!("{}|", text);
        }
        print!("\r\n");
        print!("    +{}\r\n", "---+".repeat(BOARD_SIZE));
    }
    print!("\r\n");
}
