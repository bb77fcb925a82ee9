//! Check command - verify a team's stored value function can play

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    cli::output::{print_kv, print_section},
    pipeline::check_submission,
};

#[derive(Parser, Debug)]
#[command(about = "Check that a team's value function is ready to play")]
pub struct CheckArgs {
    /// Team name the value function was saved under
    #[arg(long, short = 't')]
    pub team: String,

    /// Directory holding value functions
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let repo = MsgPackRepository::new(&args.dir);
    let report = check_submission(&repo, &args.team)
        .with_context(|| format!("checking submission for team '{}'", args.team))?;

    print_section("Submission Check");
    print_kv("Team", report.team.as_str());
    print_kv(
        "Value function",
        &repo.path_for(&report.team).display().to_string(),
    );
    print_kv("Entries", &report.entries.to_string());
    print_kv("Opening move", &report.opening_move.to_string());
    println!("\nReady to play.");

    Ok(())
}
