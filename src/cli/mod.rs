//! CLI infrastructure for the `wild-ttt` binary
//!
//! Playing matches against the engine and checking stored value functions.

pub mod commands;
pub mod output;
