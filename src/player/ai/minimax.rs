use crate::core::{Board, Mark, Position};
use crate::logic::{legal_moves, winner};
use crate::player::PlayerController;

/// +1 if `mark` has won, -1 if the opponent has, 0 otherwise. In-progress
/// and drawn boards both score 0; terminality is the caller's check.
pub fn evaluate(board: &Board, mark: Mark) -> i32 {
    match winner(board) {
        Some(w) if w == mark => 1,
        Some(_) => -1,
        None => 0,
    }
}

/// Full-depth minimax from `mark`'s perspective. Trial moves are placed and
/// cleared on the live board (place, recurse, clear), so the board comes
/// back untouched. The tree is at most 9 plies deep; no pruning needed.
pub fn minimax(board: &mut Board, maximizing: bool, mark: Mark) -> i32 {
    if winner(board).is_some() || board.is_full() {
        return evaluate(board, mark);
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for pos in legal_moves(board) {
            board.place(pos, mark);
            max_eval = max_eval.max(minimax(board, false, mark));
            board.clear(pos);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in legal_moves(board) {
            board.place(pos, mark.opponent());
            min_eval = min_eval.min(minimax(board, true, mark));
            board.clear(pos);
        }
        min_eval
    }
}

/// The game-theoretically best cell for `mark`, or `None` on a full board.
/// Candidates are tried in row-major order and only a strictly better score
/// replaces the current best, so among equal moves the earliest cell wins.
pub fn best_move(board: &mut Board, mark: Mark) -> Option<Position> {
    let mut best_score = i32::MIN;
    let mut best = None;

    for pos in legal_moves(board) {
        board.place(pos, mark);
        let score = minimax(board, false, mark);
        board.clear(pos);

        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    best
}

pub struct MinimaxAI {
    pub mark: Mark,
    pub name: String,
}

impl MinimaxAI {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &mut Board, empty_cells: &[Position]) -> Option<Position> {
        if empty_cells.is_empty() {
            return None;
        }
        best_move(board, self.mark)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
