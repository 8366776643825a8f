// search
pub const EXPLORATION: f32 = 3.0;
pub const ROUNDS_PER_MOVE: u32 = 1000;

pub const DIRICHLET_NOISE: f32 = 0.05;
pub const NOISE_RATIO: f32 = 0.25;

/// Knobs for one tree search. `Default` matches the module constants.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub rounds: u32,
    pub exploration: f32,
    pub dirichlet_noise: f32,
    pub noise_ratio: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            rounds: ROUNDS_PER_MOVE,
            exploration: EXPLORATION,
            dirichlet_noise: DIRICHLET_NOISE,
            noise_ratio: NOISE_RATIO,
        }
    }
}
