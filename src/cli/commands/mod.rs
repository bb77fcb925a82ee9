//! Subcommands of the `wild-ttt` binary

pub mod check;
pub mod play;

/// Which selector drives the controlled player or the opponent
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Uniformly random empty cell and counter
    Random,
    /// Greedy over a stored value function (needs `--team`)
    Greedy,
}
