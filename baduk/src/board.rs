use std::{collections::HashMap, collections::HashSet, rc::Rc, sync::Arc};

use crate::{
    geometry::Geometry,
    group::StoneGroup,
    player::Player,
    point::Point,
    zobrist,
};

/// A Go board: a grid of points, each empty or holding a stone.
///
/// Occupancy is tracked per group. Every stone of a group maps to the
/// same shared `StoneGroup`, so group updates rewrite the entry of each
/// covered point and capture code can tell groups apart by identity.
/// The 63-bit Zobrist hash is maintained incrementally with every stone
/// placed or removed.
#[derive(Clone, Debug)]
pub struct Board {
    num_rows: u8,
    num_cols: u8,
    grid: HashMap<Point, Rc<StoneGroup>>,
    hash: u64,
    geometry: Arc<Geometry>,
}

impl Board {
    pub fn new(num_rows: u8, num_cols: u8) -> Self {
        assert!(
            (1..=zobrist::MAX_BOARD_SIZE).contains(&num_rows)
                && (1..=zobrist::MAX_BOARD_SIZE).contains(&num_cols),
            "board dimensions must be between 1 and {}",
            zobrist::MAX_BOARD_SIZE
        );
        Board {
            num_rows,
            num_cols,
            grid: HashMap::new(),
            hash: zobrist::empty_board(),
            geometry: Geometry::shared(num_rows, num_cols),
        }
    }

    pub fn num_rows(&self) -> u8 {
        self.num_rows
    }

    pub fn num_cols(&self) -> u8 {
        self.num_cols
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        self.geometry.is_on_grid(point)
    }

    /// In-bounds orthogonal neighbors of a point.
    pub fn neighbors(&self, point: Point) -> &[Point] {
        self.geometry.neighbors(point)
    }

    /// In-bounds diagonal neighbors of a point.
    pub fn corners(&self, point: Point) -> &[Point] {
        self.geometry.corners(point)
    }

    /// All points of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (num_rows, num_cols) = (self.num_rows, self.num_cols);
        (1..=num_rows).flat_map(move |row| (1..=num_cols).map(move |col| Point::new(row, col)))
    }

    /// The color of the stone on a point, if any.
    pub fn stone_at(&self, point: Point) -> Option<Player> {
        self.grid.get(&point).map(|group| group.color)
    }

    /// The group occupying a point, if any.
    pub fn group_at(&self, point: Point) -> Option<&Rc<StoneGroup>> {
        self.grid.get(&point)
    }

    /// The incrementally maintained 63-bit position hash.
    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    /// Put a stone on an empty in-bounds point, merging it with
    /// friendly neighbor groups and capturing enemy groups this leaves
    /// without liberties. Callers validate legality first; placement on
    /// an occupied or off-board point is a contract violation.
    pub fn place_stone(&mut self, player: Player, point: Point) {
        assert!(self.is_on_grid(point), "point {point} is off the board");
        assert!(self.stone_at(point).is_none(), "point {point} is already occupied");

        let mut liberties = HashSet::new();
        let mut adjacent_same: Vec<Rc<StoneGroup>> = Vec::new();
        let mut adjacent_opposite: Vec<Rc<StoneGroup>> = Vec::new();
        for neighbor in self.geometry.neighbors(point) {
            match self.grid.get(neighbor) {
                None => {
                    liberties.insert(*neighbor);
                }
                Some(group) if group.color == player => {
                    if !adjacent_same.iter().any(|same| Rc::ptr_eq(same, group)) {
                        adjacent_same.push(Rc::clone(group));
                    }
                }
                Some(group) => {
                    if !adjacent_opposite.iter().any(|other| Rc::ptr_eq(other, group)) {
                        adjacent_opposite.push(Rc::clone(group));
                    }
                }
            }
        }

        // The new stone joins every distinct friendly neighbor group.
        let mut new_group = StoneGroup::new(player, HashSet::from([point]), liberties);
        for group in &adjacent_same {
            new_group = new_group.merged_with(group);
        }
        let new_group = Rc::new(new_group);
        for &stone in &new_group.stones {
            self.grid.insert(stone, Rc::clone(&new_group));
        }

        self.hash ^= zobrist::empty_point(point);
        self.hash ^= zobrist::stone(player, point);

        // Enemy neighbors lose this point as a liberty. A group left
        // with none is captured whole.
        for group in &adjacent_opposite {
            let shrunk = group.without_liberty(point);
            if shrunk.num_liberties() == 0 {
                self.remove_group(group);
            } else {
                let shrunk = Rc::new(shrunk);
                for &stone in &shrunk.stones {
                    self.grid.insert(stone, Rc::clone(&shrunk));
                }
            }
        }
    }

    /// Take a captured group off the board. Every removed stone returns
    /// as a liberty to the other groups around it, one stone at a time,
    /// so shared borders are counted per point.
    fn remove_group(&mut self, group: &Rc<StoneGroup>) {
        for &stone in &group.stones {
            for neighbor in self.geometry.neighbors(stone) {
                let restored = match self.grid.get(neighbor) {
                    None => continue,
                    // Grid entries of the dying group still hold the
                    // original allocation, which is what skips them.
                    Some(neighbor_group) if Rc::ptr_eq(neighbor_group, group) => continue,
                    Some(neighbor_group) => Rc::new(neighbor_group.with_liberty(stone)),
                };
                for &other in &restored.stones {
                    self.grid.insert(other, Rc::clone(&restored));
                }
            }
            self.grid.remove(&stone);
            self.hash ^= zobrist::stone(group.color, stone);
            self.hash ^= zobrist::empty_point(stone);
        }
    }

    /// Whether placing here would leave the placed stone's own group
    /// with no liberties: no empty neighbor, no enemy neighbor group in
    /// atari to capture, and every friendly neighbor group down to its
    /// final liberty.
    pub fn is_self_capture(&self, player: Player, point: Point) -> bool {
        let mut friendly: Vec<&Rc<StoneGroup>> = Vec::new();
        for neighbor in self.geometry.neighbors(point) {
            match self.grid.get(neighbor) {
                None => return false,
                Some(group) if group.color == player => friendly.push(group),
                Some(group) => {
                    if group.num_liberties() == 1 {
                        // The placement captures this group first.
                        return false;
                    }
                }
            }
        }
        friendly.iter().all(|group| group.num_liberties() == 1)
    }

    /// Whether placing here captures at least one enemy group.
    pub fn would_capture(&self, player: Player, point: Point) -> bool {
        self.geometry.neighbors(point).iter().any(|neighbor| {
            self.grid
                .get(neighbor)
                .map_or(false, |group| group.color != player && group.num_liberties() == 1)
        })
    }
}
