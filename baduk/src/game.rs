use std::{collections::HashSet, rc::Rc};

use crate::{
    board::Board,
    error::PlayError,
    moves::Move,
    player::Player,
    score,
};

/// One position in a game, linked to the position it came from.
///
/// States are immutable: playing a move builds a child that shares
/// whatever it can with its parent. The board is cloned only for stone
/// placements, passes and resignations keep the parent's board. Each
/// state carries the set of every (player to move, board hash) pair
/// seen earlier in its line of play, which is what the superko rule
/// checks against.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Rc<Board>,
    next_player: Player,
    previous: Option<Rc<GameState>>,
    last_move: Option<Move>,
    previous_situations: Rc<HashSet<(Player, u64)>>,
}

impl GameState {
    /// Start a fresh game on an empty square board. Black moves first.
    pub fn new_game(board_size: u8) -> GameState {
        GameState {
            board: Rc::new(Board::new(board_size, board_size)),
            next_player: Player::Black,
            previous: None,
            last_move: None,
            previous_situations: Rc::new(HashSet::new()),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The position this one was played from.
    pub fn previous_state(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }

    /// The (player to move, board hash) pair identifying this position.
    pub fn situation(&self) -> (Player, u64) {
        (self.next_player, self.board.zobrist_hash())
    }

    /// Number of moves played to reach this position.
    pub fn num_moves(&self) -> u32 {
        let mut count = 0;
        let mut state = self.previous.as_deref();
        while let Some(previous) = state {
            count += 1;
            state = previous.previous.as_deref();
        }
        count
    }

    /// Whether a move is legal in this position.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    fn validate_move(&self, mv: Move) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if let Move::Play(point) = mv {
            if !self.board.is_on_grid(point) {
                return Err(PlayError::OutOfBounds);
            }
            if self.board.stone_at(point).is_some() {
                return Err(PlayError::Occupied);
            }
            if self.board.is_self_capture(self.next_player, point) {
                return Err(PlayError::SelfCapture);
            }
            if self.ko_rule(self.next_player, mv) {
                return Err(PlayError::Ko);
            }
        }
        Ok(())
    }

    /// Positional superko: a capture may not recreate any situation
    /// seen earlier in this line of play. Only captures can bring a
    /// previous position back, so everything else passes the check
    /// without the speculative placement.
    pub fn ko_rule(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else { return false };
        if !self.board.would_capture(player, point) {
            return false;
        }
        let mut next_board = (*self.board).clone();
        next_board.place_stone(player, point);
        let next_situation = (player.other(), next_board.zobrist_hash());
        self.previous_situations.contains(&next_situation)
    }

    /// Play a move, producing the next position. Illegal moves are
    /// rejected and leave this state untouched.
    pub fn play_move(&self, mv: Move) -> Result<GameState, PlayError> {
        self.validate_move(mv)?;

        let board = match mv {
            Move::Play(point) => {
                let mut board = (*self.board).clone();
                board.place_stone(self.next_player, point);
                Rc::new(board)
            }
            Move::Pass | Move::Resign => Rc::clone(&self.board),
        };

        let mut situations = (*self.previous_situations).clone();
        situations.insert(self.situation());

        Ok(GameState {
            board,
            next_player: self.next_player.other(),
            previous: Some(Rc::new(self.clone())),
            last_move: Some(mv),
            previous_situations: Rc::new(situations),
        })
    }

    /// Every legal move in this position.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let mut moves: Vec<Move> = self
            .board
            .points()
            .map(Move::Play)
            .filter(|&mv| self.is_valid_move(mv))
            .collect();
        moves.push(Move::Pass);
        moves.push(Move::Resign);
        moves
    }

    /// The game ends on a resignation or two passes in a row.
    pub fn is_over(&self) -> bool {
        match self.last_move {
            Some(Move::Resign) => true,
            Some(Move::Pass) => matches!(
                self.previous.as_ref().and_then(|state| state.last_move),
                Some(Move::Pass)
            ),
            _ => false,
        }
    }

    /// The winner of a finished game, or `None` while play continues.
    /// Resigning hands the win to the opponent; a double pass is scored
    /// by territory.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        if let Some(Move::Resign) = self.last_move {
            return Some(self.next_player);
        }
        Some(score::compute_result(self).winner())
    }
}
