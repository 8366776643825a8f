use std::fmt::{self, Display};

use crate::point::Point;

/// A single action: placing a stone, passing, or resigning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    /// The point this move places a stone on, if any.
    pub fn point(self) -> Option<Point> {
        match self {
            Move::Play(point) => Some(point),
            _ => None,
        }
    }

    pub fn is_play(self) -> bool {
        matches!(self, Move::Play(_))
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn is_resign(self) -> bool {
        matches!(self, Move::Resign)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(point) => write!(f, "play {point}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}
