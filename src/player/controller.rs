use crate::core::{Board, Position};

/// A source of moves, human or engine. Controllers get the live board by
/// mutable reference so the engine can backtrack in place; every
/// implementation must return the board exactly as it received it.
/// Returning `None` is a resignation.
pub trait PlayerController {
    fn choose_move(&self, board: &mut Board, empty_cells: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
}
