#[macro_use]
extern crate lazy_static;

mod board;
mod error;
mod eye;
mod game;
mod geometry;
mod group;
mod moves;
mod player;
mod point;
mod score;
mod zobrist;

pub use board::Board;
pub use error::PlayError;
pub use eye::is_eye;
pub use game::GameState;
pub use geometry::Geometry;
pub use group::StoneGroup;
pub use moves::Move;
pub use player::Player;
pub use point::Point;
pub use score::{compute_result, evaluate_territory, GameResult, Territory, KOMI};
pub use zobrist::MAX_BOARD_SIZE;
