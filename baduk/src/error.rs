use std::{error::Error, fmt::Display};

/// Why a requested move was rejected. The game state is left untouched
/// whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    GameOver,
    OutOfBounds,
    Occupied,
    SelfCapture,
    Ko,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PlayError::*;
        write!(f, "{}", match self {
            GameOver => "the game is already over",
            OutOfBounds => "given point is not on the board",
            Occupied => "cannot place a stone on an occupied point",
            SelfCapture => "placement would leave its own group without liberties",
            Ko => "placement would recreate a previous board situation",
        })
    }
}

impl Error for PlayError {}
