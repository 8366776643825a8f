use baduk::{is_eye, GameState, Move};
use rand::thread_rng;
use rand_distr::{Distribution, WeightedIndex};

use crate::{
    agent::Agent,
    encoder::Encoder,
    evaluator::{EvalError, Evaluator},
};

/// Plays straight from the evaluator's priors, no search.
///
/// Points are ranked by sampling without replacement in proportion to
/// the cubed, clamped priors; the first legal candidate that is not
/// one of the agent's own eyes is played. With no candidate left the
/// agent passes.
pub struct PolicyAgent<E: Evaluator> {
    evaluator: E,
    encoder: Encoder,
}

impl<E: Evaluator> PolicyAgent<E> {
    pub fn new(evaluator: E, board_size: u8) -> Self {
        PolicyAgent {
            evaluator,
            encoder: Encoder::new(board_size),
        }
    }
}

impl<E: Evaluator> Agent for PolicyAgent<E> {
    fn select_move(&mut self, state: &GameState) -> Result<Move, EvalError> {
        let encoded = self.encoder.encode(state);
        let evaluation = self.evaluator.evaluate(&encoded)?;
        assert_eq!(
            evaluation.priors.len(),
            self.encoder.num_moves(),
            "evaluator must cover every move index"
        );

        // Sharpen the distribution and keep every weight positive so
        // any point can still come up as a late candidate.
        let num_points = self.encoder.num_moves() - 1;
        let weights: Vec<f32> = evaluation.priors[..num_points]
            .iter()
            .map(|prior| prior.powi(3).clamp(1e-6, 1.0 - 1e-6))
            .collect();

        let mut rng = thread_rng();
        let mut distribution = WeightedIndex::new(&weights).unwrap();
        let mut ranked = Vec::with_capacity(num_points);
        loop {
            let index = distribution.sample(&mut rng);
            ranked.push(index);
            // Spending the last weight empties the distribution.
            if distribution.update_weights(&[(index, &0.0)]).is_err() {
                break;
            }
        }

        for index in ranked {
            let mov = self.encoder.decode_move_index(index);
            if let Move::Play(point) = mov {
                if state.is_valid_move(mov) && !is_eye(state.board(), point, state.next_player()) {
                    return Ok(mov);
                }
            }
        }
        Ok(Move::Pass)
    }
}
