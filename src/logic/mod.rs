use crate::core::{Board, GameOutcome, Mark, Position, BOARD_SIZE};

/// Scans for a completed line: rows top to bottom, then columns left to
/// right, then the two diagonals. A legally reached board has at most one
/// winning mark, but the scan order is fixed so results are reproducible.
pub fn winner(board: &Board) -> Option<Mark> {
    let c = &board.cells;

    for row in 0..BOARD_SIZE {
        if c[row][0].is_some() && c[row][0] == c[row][1] && c[row][1] == c[row][2] {
            return c[row][0];
        }
    }

    for col in 0..BOARD_SIZE {
        if c[0][col].is_some() && c[0][col] == c[1][col] && c[1][col] == c[2][col] {
            return c[0][col];
        }
    }

    if c[0][0].is_some() && c[0][0] == c[1][1] && c[1][1] == c[2][2] {
        return c[0][0];
    }
    if c[0][2].is_some() && c[0][2] == c[1][1] && c[1][1] == c[2][0] {
        return c[0][2];
    }

    None
}

/// Legal move generation: every empty cell, in row-major order. The search
/// engine's tie-break (first cell with the best score wins) depends on this
/// order, so it is part of the contract.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if board.get(pos).is_none() {
                moves.push(pos);
            }
        }
    }
    moves
}

pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(mark) = winner(board) {
        GameOutcome::Won(mark)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
