//! Moves: a position plus the counter the mover chose to place

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The mark placed by a move.
///
/// Either side may place either counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Counter {
    X,
    O,
}

impl Counter {
    pub const ALL: [Counter; 2] = [Counter::X, Counter::O];

    pub fn as_str(self) -> &'static str {
        match self {
            Counter::X => "X",
            Counter::O => "O",
        }
    }
}

impl FromStr for Counter {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Counter::X),
            "O" => Ok(Counter::O),
            other => Err(crate::Error::InvalidCounter {
                counter: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub counter: Counter,
}

impl Move {
    pub fn new(position: usize, counter: Counter) -> Self {
        Self { position, counter }
    }

    /// Build a move from its wire form `(position, "X" | "O")`.
    ///
    /// The position is not range-checked here; that happens when the move is
    /// applied to a board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCounter`] for any other counter symbol.
    pub fn parse(position: usize, counter: &str) -> Result<Self, crate::Error> {
        Ok(Self::new(position, counter.parse()?))
    }
}

impl From<(usize, Counter)> for Move {
    fn from((position, counter): (usize, Counter)) -> Self {
        Self::new(position, counter)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.counter, self.position)
    }
}
