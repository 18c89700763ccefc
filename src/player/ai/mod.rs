pub mod minimax;

pub use minimax::MinimaxAI;
