use crossterm::{cursor, execute, terminal};
use std::io;
use tictactoe_ai::core::{GameOutcome, Mark};
use tictactoe_ai::display::{render_board, DisplayState};
use tictactoe_ai::game::Game;
use tictactoe_ai::player::{MinimaxAI, PlayerController, TuiController};

fn main() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    loop {
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        print!("=== Tic-Tac-Toe (Unbeatable AI) ===\r\n");
        print!("\r\nSelect mode:\r\n");
        print!("1. Human (X) vs AI (O)\r\n");
        print!("2. AI vs AI (demo)\r\n");
        print!("q. Quit\r\n");

        let mode = loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('1') => break "human",
                        KeyCode::Char('2') => break "demo",
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                }
            }
        };

        let (p_x, p_o): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match mode {
            "demo" => (
                Box::new(MinimaxAI::new(Mark::X, "AI (X)")),
                Box::new(MinimaxAI::new(Mark::O, "AI (O)")),
            ),
            _ => (
                Box::new(TuiController::new(Mark::X, "Human")),
                Box::new(MinimaxAI::new(Mark::O, "AI")),
            ),
        };

        'game: loop {
            let mut game = Game::new();
            let result = game.play(p_x.as_ref(), p_o.as_ref());

            let mut state = DisplayState::default();
            state.last_move = game.last_move;
            state.status_msg = Some(match result {
                Some(GameOutcome::Won(mark)) => {
                    let name = match mark {
                        Mark::X => p_x.name(),
                        Mark::O => p_o.name(),
                    };
                    format!("Winner: {} ({})!", name, mark)
                }
                Some(GameOutcome::Draw) => "It's a draw!".to_string(),
                _ => "Game aborted.".to_string(),
            });
            render_board(&game.board, &state);
            print!("[r]: Play again | [m]: Menu | [q]: Quit\r\n");

            loop {
                if event::poll(Duration::from_millis(100))? {
                    if let Event::Key(key) = event::read()? {
                        match key.code {
                            KeyCode::Char('r') => continue 'game,
                            KeyCode::Char('m') => break 'game,
                            KeyCode::Char('q') => return Ok(()),
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}
