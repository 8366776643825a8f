use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display},
};

use crate::{board::Board, game::GameState, player::Player, point::Point};

/// Compensation granted to White for moving second.
pub const KOMI: f32 = 5.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointStatus {
    Stone(Player),
    Territory(Player),
    Dame,
}

/// Stone, territory, and dame tallies for one position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Territory {
    pub num_black_stones: u32,
    pub num_white_stones: u32,
    pub num_black_territory: u32,
    pub num_white_territory: u32,
    pub num_dame: u32,
    pub dame_points: Vec<Point>,
}

/// Final score of a game: stones plus surrounded territory per side,
/// with komi added to White's total when comparing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameResult {
    pub black: u32,
    pub white: u32,
    pub komi: f32,
}

impl GameResult {
    pub fn winner(&self) -> Player {
        if self.black as f32 > self.white as f32 + self.komi {
            Player::Black
        } else {
            Player::White
        }
    }

    pub fn winning_margin(&self) -> f32 {
        (self.black as f32 - (self.white as f32 + self.komi)).abs()
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Player::Black => write!(f, "B+{}", self.winning_margin()),
            Player::White => write!(f, "W+{}", self.winning_margin()),
        }
    }
}

/// Classify every point of a board as a stone, one side's territory,
/// or dame. An empty region is territory when stones of exactly one
/// color border it.
pub fn evaluate_territory(board: &Board) -> Territory {
    let mut status: HashMap<Point, PointStatus> = HashMap::new();
    for point in board.points() {
        if status.contains_key(&point) {
            continue;
        }
        if let Some(color) = board.stone_at(point) {
            status.insert(point, PointStatus::Stone(color));
            continue;
        }
        let (region, borders) = collect_region(board, point);
        let fill = match (borders.contains(&Player::Black), borders.contains(&Player::White)) {
            (true, false) => PointStatus::Territory(Player::Black),
            (false, true) => PointStatus::Territory(Player::White),
            _ => PointStatus::Dame,
        };
        for &member in &region {
            status.insert(member, fill);
        }
    }

    let mut territory = Territory::default();
    for (point, point_status) in status {
        match point_status {
            PointStatus::Stone(Player::Black) => territory.num_black_stones += 1,
            PointStatus::Stone(Player::White) => territory.num_white_stones += 1,
            PointStatus::Territory(Player::Black) => territory.num_black_territory += 1,
            PointStatus::Territory(Player::White) => territory.num_white_territory += 1,
            PointStatus::Dame => {
                territory.num_dame += 1;
                territory.dame_points.push(point);
            }
        }
    }
    territory
}

/// Flood-fill the empty region containing `start`, returning its
/// points and the stone colors found on its border.
fn collect_region(board: &Board, start: Point) -> (Vec<Point>, HashSet<Player>) {
    let mut region = Vec::new();
    let mut borders = HashSet::new();
    let mut visited = HashSet::from([start]);
    let mut frontier = vec![start];
    while let Some(point) = frontier.pop() {
        region.push(point);
        for &neighbor in board.neighbors(point) {
            match board.stone_at(neighbor) {
                Some(color) => {
                    borders.insert(color);
                }
                None => {
                    if visited.insert(neighbor) {
                        frontier.push(neighbor);
                    }
                }
            }
        }
    }
    (region, borders)
}

/// Score a position by territory, with the standard komi.
pub fn compute_result(state: &GameState) -> GameResult {
    let territory = evaluate_territory(state.board());
    GameResult {
        black: territory.num_black_territory + territory.num_black_stones,
        white: territory.num_white_territory + territory.num_white_stones,
        komi: KOMI,
    }
}
