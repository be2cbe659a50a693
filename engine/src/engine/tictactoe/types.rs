use std::fmt;

use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
            Mark::Empty => write!(f, "."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub cells: [usize; 3],
    pub mark: Mark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(usize),
    Occupied(usize),
    GameOver,
    NotYourTurn,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfRange(index) => write!(f, "Cell index {} is out of range", index),
            InvalidMove::Occupied(index) => write!(f, "Cell {} is already marked", index),
            InvalidMove::GameOver => write!(f, "Game is already over"),
            InvalidMove::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for InvalidMove {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLegalMove;

impl fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No legal move on a finished board")
    }
}

impl std::error::Error for NoLegalMove {}
