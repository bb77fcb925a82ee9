//! Observers for match drivers
//!
//! Observers collect data during matches without coupling the driver to a
//! specific output format.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    engine::{Outcome, Turn},
    ports::EpisodeObserver,
    tictactoe::{Board, Move},
};

/// Progress bar observer - Shows match progress
pub struct ProgressObserver {
    progress_bar: ProgressBar,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a progress bar sized for `total_games`
    pub fn new(total_games: usize) -> Result<Self> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        Ok(Self {
            progress_bar: pb,
            wins: 0,
            draws: 0,
            losses: 0,
        })
    }

    fn tally(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_with_message(self.tally());
    }
}

impl EpisodeObserver for ProgressObserver {
    fn on_episode_end(
        &mut self,
        game_num: usize,
        outcome: Outcome,
        _board: &Board,
    ) -> Result<()> {
        match outcome {
            Outcome::Win(Turn::ControlledPlayer) => self.wins += 1,
            Outcome::Win(Turn::Opponent) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }

        self.progress_bar.set_position(game_num as u64 + 1);
        self.progress_bar.set_message(self.tally());
        Ok(())
    }
}

/// Metrics observer - Tracks outcomes, openings and game lengths
#[derive(Debug, Default)]
pub struct MetricsObserver {
    wins: usize,
    draws: usize,
    losses: usize,
    opponent_openings: usize,
    current_half_moves: usize,
    half_move_counts: Vec<usize>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> usize {
        self.half_move_counts.len()
    }

    /// Average number of half-moves per finished game
    pub fn avg_game_length(&self) -> f64 {
        if self.half_move_counts.is_empty() {
            0.0
        } else {
            let total: usize = self.half_move_counts.iter().sum();
            total as f64 / self.half_move_counts.len() as f64
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_games: self.total_games(),
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            opponent_openings: self.opponent_openings,
            avg_game_length: self.avg_game_length(),
        }
    }
}

/// Summary of match metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    /// Games in which the opponent moved first
    pub opponent_openings: usize,
    pub avg_game_length: f64,
}

impl EpisodeObserver for MetricsObserver {
    fn on_episode_start(&mut self, _game_num: usize) -> Result<()> {
        self.current_half_moves = 0;
        Ok(())
    }

    fn on_half_move(&mut self, side: Turn, _mv: Move) -> Result<()> {
        if self.current_half_moves == 0 && side == Turn::Opponent {
            self.opponent_openings += 1;
        }
        self.current_half_moves += 1;
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        _game_num: usize,
        outcome: Outcome,
        _board: &Board,
    ) -> Result<()> {
        match outcome {
            Outcome::Win(Turn::ControlledPlayer) => self.wins += 1,
            Outcome::Win(Turn::Opponent) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.half_move_counts.push(self.current_half_moves);
        Ok(())
    }
}
