use std::collections::HashSet;

use crate::{player::Player, point::Point};

/// A maximal chain of connected same-colored stones and its liberties.
///
/// Groups are immutable values: merging and liberty edits build new
/// groups, and the board swaps them in wholesale. Connectivity holds by
/// construction, because groups only ever grow by placing a stone next
/// to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoneGroup {
    pub color: Player,
    pub stones: HashSet<Point>,
    pub liberties: HashSet<Point>,
}

impl StoneGroup {
    pub fn new(color: Player, stones: HashSet<Point>, liberties: HashSet<Point>) -> Self {
        debug_assert!(!stones.is_empty());
        debug_assert!(stones.is_disjoint(&liberties));
        StoneGroup {
            color,
            stones,
            liberties,
        }
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    /// Combine with an adjacent group of the same color.
    pub fn merged_with(&self, other: &StoneGroup) -> StoneGroup {
        assert_eq!(self.color, other.color, "cannot merge groups of different colors");
        let stones: HashSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .copied()
            .filter(|liberty| !stones.contains(liberty))
            .collect();
        StoneGroup {
            color: self.color,
            stones,
            liberties,
        }
    }

    /// This group with one liberty taken away.
    pub fn without_liberty(&self, point: Point) -> StoneGroup {
        let mut liberties = self.liberties.clone();
        liberties.remove(&point);
        StoneGroup {
            color: self.color,
            stones: self.stones.clone(),
            liberties,
        }
    }

    /// This group with one liberty added back.
    pub fn with_liberty(&self, point: Point) -> StoneGroup {
        let mut liberties = self.liberties.clone();
        liberties.insert(point);
        StoneGroup {
            color: self.color,
            stones: self.stones.clone(),
            liberties,
        }
    }
}
