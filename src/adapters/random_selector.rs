//! Uniformly random move selector

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    ports::MoveSelector,
    tictactoe::{Board, Counter, Move},
};

/// Picks a uniformly random empty cell and a uniformly random counter.
///
/// This is the default opponent for training runs.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    name: String,
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            name: "Random".to_string(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random selector with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            name: "Random".to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        let positions = board.empty_positions();
        let &position = positions.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
        let &counter = Counter::ALL.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
        Ok(Move::new(position, counter))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
