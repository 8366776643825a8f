use baduk::{GameState, Move};

use crate::evaluator::EvalError;

/// Anything that can pick a move to play. Selection may mutate the
/// agent (search trees, collected experience) and may fail when a
/// backing evaluator does.
pub trait Agent {
    fn select_move(&mut self, state: &GameState) -> Result<Move, EvalError>;
}
