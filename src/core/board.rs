use super::types::{Mark, Position};
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// The 3x3 grid. Holds nothing beyond the nine cells; whose turn it is
/// and whether the game is over are the orchestrator's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells[pos.row][pos.col]
    }

    /// Precondition: the cell is empty. Placing on an occupied cell is a
    /// caller bug, not a recoverable condition.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert!(
            self.cells[pos.row][pos.col].is_none(),
            "cell {} is occupied",
            pos
        );
        self.cells[pos.row][pos.col] = Some(mark);
    }

    /// Resets a cell. Used by the search engine to undo a trial move.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = None;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
