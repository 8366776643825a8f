use rand::{thread_rng, Rng};

use crate::{player::Player, point::Point};

/// Largest board dimension the hash tables cover.
pub const MAX_BOARD_SIZE: u8 = 19;

const POINT_STATES: usize = 3;

lazy_static! {
    static ref HASH_CODES: HashCodes = HashCodes::generate();
}

/// Random 63-bit codes for every (point, contents) pair, drawn once per
/// process. XOR-ing a code in and out again restores the hash, which is
/// what makes incremental updates work.
struct HashCodes {
    empty_board: u64,
    codes: Vec<u64>,
}

impl HashCodes {
    fn generate() -> Self {
        let mut rng = thread_rng();
        let num_points = MAX_BOARD_SIZE as usize * MAX_BOARD_SIZE as usize;
        HashCodes {
            empty_board: rng.gen::<u64>() >> 1,
            codes: (0..num_points * POINT_STATES)
                .map(|_| rng.gen::<u64>() >> 1)
                .collect(),
        }
    }

    fn index(point: Point, state: usize) -> usize {
        debug_assert!((1..=MAX_BOARD_SIZE).contains(&point.row));
        debug_assert!((1..=MAX_BOARD_SIZE).contains(&point.col));
        let point_index =
            (point.row as usize - 1) * MAX_BOARD_SIZE as usize + (point.col as usize - 1);
        point_index * POINT_STATES + state
    }
}

/// Hash of a board with no stones on it, for any dimensions.
pub(crate) fn empty_board() -> u64 {
    HASH_CODES.empty_board
}

/// Code for a point being empty.
pub(crate) fn empty_point(point: Point) -> u64 {
    HASH_CODES.codes[HashCodes::index(point, 0)]
}

/// Code for a point holding a player's stone.
pub(crate) fn stone(player: Player, point: Point) -> u64 {
    let state = match player {
        Player::Black => 1,
        Player::White => 2,
    };
    HASH_CODES.codes[HashCodes::index(point, state)]
}
