use baduk::{GameState, Move, Player, Point};

use crate::tensor::Tensor;

/// Feature planes per encoded position.
///
/// Planes 0-3 hold the mover's stones split by liberty count (1, 2, 3,
/// 4 or more), planes 4-7 the same for the opponent. Plane 8 is all
/// ones when White moves, plane 9 when Black moves, and plane 10 marks
/// points where a capture is forbidden by the ko rule.
pub const PLANES: usize = 11;

/// Translates positions to tensors and moves to flat indices for one
/// board size. Index `size * size` is the pass; resignations have no
/// index and never reach an evaluator.
#[derive(Clone, Copy, Debug)]
pub struct Encoder {
    board_size: u8,
}

impl Encoder {
    pub fn new(board_size: u8) -> Self {
        Encoder { board_size }
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        let size = self.board_size as usize;
        (PLANES, size, size)
    }

    /// Number of move indices: every point plus the pass.
    pub fn num_moves(&self) -> usize {
        let size = self.board_size as usize;
        size * size + 1
    }

    pub fn encode(&self, state: &GameState) -> Tensor {
        let (planes, rows, cols) = self.shape();
        let mut tensor = Tensor::zeros(planes, rows, cols);

        let mover = state.next_player();
        match mover {
            Player::White => tensor.fill_plane(8, 1.0),
            Player::Black => tensor.fill_plane(9, 1.0),
        }

        let board = state.board();
        for point in board.points() {
            let (row, col) = (point.row as usize - 1, point.col as usize - 1);
            match board.group_at(point) {
                Some(group) => {
                    let mut plane = group.num_liberties().min(4) - 1;
                    if group.color != mover {
                        plane += 4;
                    }
                    tensor.set(plane, row, col, 1.0);
                }
                None => {
                    if state.ko_rule(mover, Move::Play(point)) {
                        tensor.set(10, row, col, 1.0);
                    }
                }
            }
        }
        tensor
    }

    /// Flat index of a move in the prior vector.
    pub fn move_index(&self, mov: Move) -> usize {
        let size = self.board_size as usize;
        match mov {
            Move::Play(point) => size * (point.row as usize - 1) + (point.col as usize - 1),
            Move::Pass => size * size,
            Move::Resign => panic!("resignation has no move index"),
        }
    }

    /// Inverse of [`move_index`](Self::move_index).
    pub fn decode_move_index(&self, index: usize) -> Move {
        let size = self.board_size as usize;
        if index == size * size {
            return Move::Pass;
        }
        assert!(index < size * size, "move index {index} out of range");
        Move::Play(Point::new((index / size + 1) as u8, (index % size + 1) as u8))
    }
}
