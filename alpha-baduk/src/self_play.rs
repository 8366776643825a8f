use baduk::{GameState, Player};
use log::info;

use crate::{
    evaluator::{EvalError, Evaluator},
    search::ZeroAgent,
};

/// Play one game between two search agents from an empty board to the
/// end. Attached collectors get a fresh episode, every searched
/// decision, and finally the reward from their own side's view.
pub fn simulate_game<E: Evaluator>(
    black: &mut ZeroAgent<E>,
    white: &mut ZeroAgent<E>,
    board_size: u8,
) -> Result<GameState, EvalError> {
    if let Some(collector) = &mut black.collector {
        collector.begin_episode();
    }
    if let Some(collector) = &mut white.collector {
        collector.begin_episode();
    }

    let mut state = GameState::new_game(board_size);
    while !state.is_over() {
        let mov = match state.next_player() {
            Player::Black => black.search(&state)?,
            Player::White => white.search(&state)?,
        };
        state = state.play_move(mov).expect("agents pick legal moves");
    }

    let winner = state.winner().expect("finished games have a winner");
    info!("game over after {} moves, winner: {winner}", state.num_moves());

    let (black_reward, white_reward) = match winner {
        Player::Black => (1.0, -1.0),
        Player::White => (-1.0, 1.0),
    };
    if let Some(collector) = &mut black.collector {
        collector.complete_episode(black_reward);
    }
    if let Some(collector) = &mut white.collector {
        collector.complete_episode(white_reward);
    }
    Ok(state)
}
