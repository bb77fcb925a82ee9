//! Drivers that run episodes against a [`crate::engine::GameEngine`]
//!
//! - [`play_game`]/[`play_match`]: the episode loop an external learner or
//!   evaluator runs, without any delays
//! - [`observers`]: progress and metrics observers
//! - [`submission`]: checks that a team's stored value function can play

pub mod observers;
pub mod play;
pub mod submission;

pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use play::{MatchResult, play_game, play_match};
pub use submission::{SubmissionReport, check_submission};

pub use crate::ports::{EpisodeObserver, MoveSelector};
