use baduk::{compute_result, GameState, Move, Player};

use crate::{agent::Agent, evaluator::EvalError};

/// When an agent should stop playing on.
#[derive(Clone, Copy, Debug)]
pub enum TerminationStrategy {
    /// Leave every decision to the wrapped agent.
    PlayOn,
    /// Answer an opponent's pass with a pass, sealing the game.
    PassWhenOpponentPasses,
    /// Resign once clearly lost late in the game.
    ResignLostGame {
        own_color: Player,
        cut_off_move: u32,
        margin: f32,
    },
}

impl TerminationStrategy {
    pub fn should_pass(&self, state: &GameState) -> bool {
        matches!(self, TerminationStrategy::PassWhenOpponentPasses)
            && state.last_move() == Some(Move::Pass)
    }

    pub fn should_resign(&self, state: &GameState) -> bool {
        let TerminationStrategy::ResignLostGame {
            own_color,
            cut_off_move,
            margin,
        } = *self
        else {
            return false;
        };
        if state.num_moves() < cut_off_move {
            return false;
        }
        let result = compute_result(state);
        result.winner() == own_color.other() && result.winning_margin() >= margin
    }
}

/// Wraps an agent with an end-of-game policy so games against
/// pass-happy or hopeless opponents actually finish.
pub struct TerminationAgent<A: Agent> {
    agent: A,
    strategy: TerminationStrategy,
}

impl<A: Agent> TerminationAgent<A> {
    pub fn new(agent: A, strategy: TerminationStrategy) -> Self {
        TerminationAgent { agent, strategy }
    }
}

impl<A: Agent> Agent for TerminationAgent<A> {
    fn select_move(&mut self, state: &GameState) -> Result<Move, EvalError> {
        if self.strategy.should_pass(state) {
            return Ok(Move::Pass);
        }
        if self.strategy.should_resign(state) {
            return Ok(Move::Resign);
        }
        self.agent.select_move(state)
    }
}
