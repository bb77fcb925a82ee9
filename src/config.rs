//! Configuration types for engines and matches.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, engine::Turn};

/// Configuration for a [`crate::engine::GameEngine`].
///
/// # Examples
///
/// ```
/// use wild_tictactoe::{config::EngineConfig, engine::Turn};
///
/// let config = EngineConfig::new()
///     .with_seed(42)
///     .with_first_turn(Turn::ControlledPlayer);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the first-mover coin flip
    pub seed: Option<u64>,
    /// Skip the coin flip and always start with this side
    pub first_turn: Option<Turn>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Always open episodes with `turn`.
    pub fn with_first_turn(mut self, turn: Turn) -> Self {
        self.first_turn = Some(turn);
        self
    }
}

/// Configuration for a match of several episodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Seed for the engine's coin flip
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn new(games: usize) -> Self {
        Self { games, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Engine configuration derived from this match.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            seed: self.seed,
            first_turn: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if no games are requested.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "a match needs at least one game".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
        }
    }
}
