//! Wild tic-tac-toe episode engine
//!
//! This crate provides:
//! - A 3x3 board where either side may place an `X` or an `O` on its turn
//! - [`GameEngine`], a reset/step episode engine with an injectable opponent
//!   and rewards from the controlled player's perspective
//! - Move selectors, value-function persistence and a text renderer
//! - Match drivers that play whole episodes and aggregate results

pub mod adapters;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;
pub mod types;
pub mod value_function;

pub use config::{EngineConfig, MatchConfig};
pub use engine::{GameEngine, Outcome, StepResult, Turn};
pub use error::{Error, Result};
pub use ports::MoveSelector;
pub use tictactoe::{Board, Cell, Counter, Move};
pub use types::TeamName;
pub use value_function::ValueFunction;
