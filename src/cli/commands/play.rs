//! Play command - run a match against the engine

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use super::SelectorKind;
use crate::{
    adapters::{GreedyValueSelector, MsgPackRepository, RandomSelector, TextRenderer},
    cli::output::{print_kv, print_section},
    config::MatchConfig,
    engine::{Outcome, Turn},
    pipeline::{MetricsObserver, ProgressObserver, play_match},
    ports::{EpisodeObserver, MoveSelector, ValueFunctionRepository},
    tictactoe::{Board, Move},
    types::TeamName,
};

#[derive(Parser, Debug)]
#[command(about = "Play a match of wild tic-tac-toe")]
pub struct PlayArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Controlled player's selector
    #[arg(long, value_enum, default_value_t = SelectorKind::Random)]
    pub player: SelectorKind,

    /// Opponent's selector
    #[arg(long, value_enum, default_value_t = SelectorKind::Random)]
    pub opponent: SelectorKind,

    /// Team whose value function the greedy selector plays from
    #[arg(long)]
    pub team: Option<String>,

    /// Directory holding value functions
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every board instead of a progress bar
    #[arg(long)]
    pub render: bool,

    /// Export the match result as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

fn build_selector(
    kind: SelectorKind,
    args: &PlayArgs,
    seed: Option<u64>,
    label: &str,
) -> Result<Box<dyn MoveSelector>> {
    match kind {
        SelectorKind::Random => {
            let selector = match seed {
                Some(seed) => RandomSelector::with_seed(seed),
                None => RandomSelector::new(),
            };
            Ok(Box::new(selector.named(format!("Random-{label}"))))
        }
        SelectorKind::Greedy => {
            let Some(team) = &args.team else {
                bail!("--team is required for the greedy selector");
            };
            let team = TeamName::new(team.as_str())?;
            let values = MsgPackRepository::new(&args.dir)
                .load(&team)
                .with_context(|| format!("loading value function for team '{team}'"))?;
            Ok(Box::new(
                GreedyValueSelector::new(values).named(team.to_string()),
            ))
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = MatchConfig {
        games: args.games,
        seed: args.seed,
    };
    config.validate()?;

    let player_seed = args.seed.map(|s| s.wrapping_add(1));
    let opponent_seed = args.seed.map(|s| s.wrapping_add(2));
    let mut player = build_selector(args.player, &args, player_seed, "player")?;
    let opponent = build_selector(args.opponent, &args, opponent_seed, "opponent")?;

    print_section("Match Configuration");
    print_kv("Player", player.name());
    print_kv("Opponent", opponent.name());
    print_kv("Games", &config.games.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let (result, summary) = if args.render {
        let mut observer = Tee(TextRenderer::stdout(), MetricsObserver::new());
        let result = play_match(&config, player.as_mut(), opponent, &mut observer)?;
        (result, observer.1.summary())
    } else {
        let progress = ProgressObserver::new(config.games)?;
        let mut observer = Tee(progress, MetricsObserver::new());
        let result = play_match(&config, player.as_mut(), opponent, &mut observer)?;
        observer.0.finish();
        (result, observer.1.summary())
    };

    print_section("Match Result");
    print_kv("Wins", &result.wins.to_string());
    print_kv("Draws", &result.draws.to_string());
    print_kv("Losses", &result.losses.to_string());
    print_kv("Win rate", &format!("{:.1}%", result.win_rate * 100.0));
    print_kv("Total return", &result.total_return.to_string());
    print_kv(
        "Opponent opened",
        &format!("{} of {}", summary.opponent_openings, summary.total_games),
    );
    print_kv(
        "Avg game length",
        &format!("{:.2} half-moves", summary.avg_game_length),
    );

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("exporting match result to {}", path.display()))?;
        println!("\nResult exported to {}", path.display());
    }

    Ok(())
}

/// Forwards every event to two observers
struct Tee<A, B>(A, B);

impl<A: EpisodeObserver, B: EpisodeObserver> EpisodeObserver for Tee<A, B> {
    fn on_episode_start(&mut self, game_num: usize) -> crate::Result<()> {
        self.0.on_episode_start(game_num)?;
        self.1.on_episode_start(game_num)
    }

    fn on_half_move(&mut self, side: Turn, mv: Move) -> crate::Result<()> {
        self.0.on_half_move(side, mv)?;
        self.1.on_half_move(side, mv)
    }

    fn on_board(&mut self, board: &Board) -> crate::Result<()> {
        self.0.on_board(board)?;
        self.1.on_board(board)
    }

    fn on_episode_end(
        &mut self,
        game_num: usize,
        outcome: Outcome,
        board: &Board,
    ) -> crate::Result<()> {
        self.0.on_episode_end(game_num, outcome, board)?;
        self.1.on_episode_end(game_num, outcome, board)
    }
}
