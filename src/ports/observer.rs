//! Observer port - presentation and bookkeeping hooks for episode drivers
//!
//! The engine emits no events itself. Drivers such as
//! [`crate::pipeline::play_game`] translate each `reset`/`step` result into
//! these calls, so presentation state lives entirely on the observer side.

use crate::{
    Result,
    engine::{Outcome, Turn},
    tictactoe::{Board, Move},
};

/// Observer for episodes played by a driver.
///
/// # Event Sequence
///
/// For each episode:
/// 1. `on_episode_start(game_num)` - before the first half-move; observers
///    must clear any per-episode state here
/// 2. `on_half_move(side, mv)` - for each applied half-move, in order
/// 3. `on_board(board)` - after every `reset` and `step`
/// 4. `on_episode_end(game_num, outcome, board)` - once the episode is done
pub trait EpisodeObserver: Send {
    fn on_episode_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    fn on_half_move(&mut self, _side: Turn, _mv: Move) -> Result<()> {
        Ok(())
    }

    fn on_board(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        _game_num: usize,
        _outcome: Outcome,
        _board: &Board,
    ) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl EpisodeObserver for NullObserver {}
