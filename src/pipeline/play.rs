//! Episode loop and match aggregation

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    config::MatchConfig,
    engine::{GameEngine, Turn},
    ports::{EpisodeObserver, MoveSelector},
};

/// Result of a match, from the controlled player's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Total games played
    pub games: usize,

    pub wins: usize,
    pub draws: usize,
    pub losses: usize,

    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,

    /// Sum of every game's total return
    pub total_return: i64,
}

impl MatchResult {
    pub fn new(wins: usize, draws: usize, losses: usize) -> Self {
        let games = wins + draws + losses;
        let rate = |count: usize| {
            if games > 0 {
                count as f64 / games as f64
            } else {
                0.0
            }
        };

        Self {
            games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            total_return: wins as i64 - losses as i64,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Play one episode to completion and return its total return.
///
/// `player` chooses the controlled player's moves; the engine's own selector
/// answers for the opponent. Observer events are emitted after each
/// `reset`/`step`, never from inside the engine.
///
/// # Errors
///
/// Propagates engine errors, selector errors and observer errors unchanged.
pub fn play_game<P, S, O>(
    game_num: usize,
    player: &mut P,
    engine: &mut GameEngine<S>,
    observer: &mut O,
) -> Result<i32>
where
    P: MoveSelector + ?Sized,
    S: MoveSelector,
    O: EpisodeObserver + ?Sized,
{
    observer.on_episode_start(game_num)?;

    let mut result = engine.reset()?;
    if let Some(opening) = result.opponent_move {
        observer.on_half_move(Turn::Opponent, opening)?;
    }
    observer.on_board(&result.board)?;

    let mut total_return = result.reward;
    while !result.done {
        let mv = player.choose_move(&result.board)?;
        result = engine.step(mv)?;

        observer.on_half_move(Turn::ControlledPlayer, mv)?;
        if let Some(reply) = result.opponent_move {
            observer.on_half_move(Turn::Opponent, reply)?;
        }
        observer.on_board(&result.board)?;

        total_return += result.reward;
    }

    let outcome = engine.outcome().ok_or_else(|| Error::InvalidState {
        message: "episode finished without an outcome".to_string(),
    })?;
    observer.on_episode_end(game_num, outcome, &result.board)?;

    debug!(game = game_num, ?outcome, total_return, "game finished");
    Ok(total_return)
}

/// Play `config.games` episodes of `player` against `opponent`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] for an empty match and otherwise
/// propagates the first error raised by [`play_game`].
pub fn play_match<P, S, O>(
    config: &MatchConfig,
    player: &mut P,
    opponent: S,
    observer: &mut O,
) -> Result<MatchResult>
where
    P: MoveSelector + ?Sized,
    S: MoveSelector,
    O: EpisodeObserver + ?Sized,
{
    config.validate()?;

    let mut engine = GameEngine::with_config(opponent, config.engine_config());
    let (mut wins, mut draws, mut losses) = (0, 0, 0);

    for game_num in 0..config.games {
        match play_game(game_num, player, &mut engine, observer)? {
            r if r > 0 => wins += 1,
            0 => draws += 1,
            _ => losses += 1,
        }
    }

    let result = MatchResult::new(wins, draws, losses);
    info!(
        player = player.name(),
        opponent = engine.opponent().name(),
        games = result.games,
        wins,
        draws,
        losses,
        "match finished"
    );
    Ok(result)
}
