//! wild-ttt CLI - play matches and check value functions for wild tic-tac-toe

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wild-ttt")]
#[command(version, about = "Wild tic-tac-toe episode engine toolkit", long_about = None)]
struct Cli {
    /// Log engine events at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match between two selectors
    Play(wild_tictactoe::cli::commands::play::PlayArgs),

    /// Check a team's stored value function
    Check(wild_tictactoe::cli::commands::check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "info,wild_tictactoe=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => wild_tictactoe::cli::commands::play::execute(args),
        Commands::Check(args) => wild_tictactoe::cli::commands::check::execute(args),
    }
}
