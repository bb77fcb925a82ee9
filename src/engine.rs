//! Episode engine for wild tic-tac-toe
//!
//! [`GameEngine`] owns the board, whose turn it is and whether the episode is
//! over. An external learning loop drives it with [`GameEngine::reset`] and
//! [`GameEngine::step`]; each `step` plays the controlled player's move and,
//! unless that ends the game, the opponent's reply.
//!
//! Rewards are reported from the controlled player's perspective: `1` when
//! the controlled player completes a line, `-1` when the opponent does, and
//! `0` otherwise (including draws).

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    config::EngineConfig,
    ports::MoveSelector,
    tictactoe::{BOARD_CELLS, Board, LineAnalyzer, Move},
};

/// Which side moves next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The side whose moves are passed to [`GameEngine::step`]
    ControlledPlayer,
    /// The side played by the injected [`MoveSelector`]
    Opponent,
}

impl Turn {
    pub fn other(self) -> Turn {
        match self {
            Turn::ControlledPlayer => Turn::Opponent,
            Turn::Opponent => Turn::ControlledPlayer,
        }
    }
}

/// Outcome of a finished episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The named side completed a line
    Win(Turn),
    Draw,
}

impl Outcome {
    /// Total return of the episode for the controlled player
    pub fn reward(self) -> i32 {
        match self {
            Outcome::Win(Turn::ControlledPlayer) => 1,
            Outcome::Win(Turn::Opponent) => -1,
            Outcome::Draw => 0,
        }
    }
}

/// Result of [`GameEngine::reset`] and [`GameEngine::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Board after the call
    pub board: Board,
    /// Reward accrued during the call, in `{-1, 0, 1}`
    pub reward: i32,
    /// Whether the episode is over
    pub done: bool,
    /// The opponent's half-move made during the call, if any
    pub opponent_move: Option<Move>,
}

impl StepResult {
    /// Flattened row-major symbols (`" "`, `"X"`, `"O"`)
    pub fn symbols(&self) -> [&'static str; BOARD_CELLS] {
        self.board.to_symbols()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EpisodeState {
    board: Board,
    turn: Turn,
    done: bool,
    went_first: Turn,
    outcome: Option<Outcome>,
}

impl EpisodeState {
    fn new(first: Turn) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            done: false,
            went_first: first,
            outcome: None,
        }
    }

    /// Apply one half-move for the side whose turn it is.
    ///
    /// Returns 1 if the move completed a line, 0 otherwise. On error nothing
    /// is modified.
    fn apply(&mut self, mv: Move) -> Result<i32> {
        if self.done {
            return Err(Error::EpisodeFinished);
        }

        self.board.place(mv)?;

        let winner = self.board.is_winner();
        let full = self.board.is_full();
        self.done = winner || full;
        if self.done {
            self.outcome = Some(if winner {
                Outcome::Win(self.turn)
            } else {
                Outcome::Draw
            });
        }

        debug!(side = ?self.turn, %mv, winner, full, "half-move applied");

        self.turn = self.turn.other();
        Ok(if winner { 1 } else { 0 })
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Wild tic-tac-toe episode engine.
///
/// The opponent strategy is injected at construction and consulted only when
/// it is the opponent's turn.
///
/// # Examples
///
/// ```
/// use wild_tictactoe::{
///     adapters::RandomSelector,
///     config::EngineConfig,
///     engine::{GameEngine, Turn},
///     tictactoe::{Counter, Move},
/// };
///
/// let config = EngineConfig::new().with_first_turn(Turn::ControlledPlayer);
/// let mut engine = GameEngine::with_config(RandomSelector::with_seed(1), config);
///
/// let start = engine.reset()?;
/// assert!(!start.done);
///
/// let result = engine.step(Move::new(4, Counter::X))?;
/// assert_eq!(result.board.occupied_count(), 2);
/// # Ok::<(), wild_tictactoe::Error>(())
/// ```
pub struct GameEngine<S: MoveSelector = Box<dyn MoveSelector>> {
    opponent: S,
    config: EngineConfig,
    rng: StdRng,
    state: Option<EpisodeState>,
}

impl<S: MoveSelector> GameEngine<S> {
    /// Create an engine with a random coin flip for the first mover
    pub fn new(opponent: S) -> Self {
        Self::with_config(opponent, EngineConfig::default())
    }

    pub fn with_config(opponent: S, config: EngineConfig) -> Self {
        Self {
            opponent,
            rng: build_rng(config.seed),
            config,
            state: None,
        }
    }

    /// Start a new episode.
    ///
    /// The first mover is taken from the configuration or chosen uniformly at
    /// random. If the opponent opens, its move is played before returning.
    ///
    /// # Errors
    ///
    /// Propagates the opponent's errors and [`Error::IllegalMove`] for an
    /// illegal opening move. On error the engine keeps its previous state.
    pub fn reset(&mut self) -> Result<StepResult> {
        let first = match self.config.first_turn {
            Some(turn) => turn,
            None => {
                if self.rng.random_bool(0.5) {
                    Turn::ControlledPlayer
                } else {
                    Turn::Opponent
                }
            }
        };
        self.reset_with(first)
    }

    /// Start a new episode with `first` to move.
    ///
    /// # Errors
    ///
    /// See [`GameEngine::reset`].
    pub fn reset_with(&mut self, first: Turn) -> Result<StepResult> {
        let mut state = EpisodeState::new(first);
        debug!(first = ?first, opponent = self.opponent.name(), "episode started");

        let mut reward = 0;
        let mut opponent_move = None;
        if first == Turn::Opponent {
            let mv = self.opponent.choose_move(&state.board)?;
            reward -= state.apply(mv)?;
            opponent_move = Some(mv);
        }

        self.commit(state);
        Ok(StepResult {
            board: state.board,
            reward,
            done: state.done,
            opponent_move,
        })
    }

    /// Play the controlled player's move, then the opponent's reply.
    ///
    /// The opponent is not consulted if the controlled player's move ends the
    /// episode. The reported reward is the controlled player's half-move
    /// reward minus the opponent's.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidState`] if no episode has been started
    /// - [`Error::EpisodeFinished`] if the episode is over
    /// - [`Error::IllegalMove`] if either move targets an occupied or
    ///   out-of-range cell
    /// - any error returned by the opponent selector
    ///
    /// On error the board, turn and done flag are exactly as before the call.
    pub fn step(&mut self, mv: Move) -> Result<StepResult> {
        let mut state = self.state.ok_or_else(|| Error::InvalidState {
            message: "step() called before reset()".to_string(),
        })?;

        if state.done {
            return Err(Error::EpisodeFinished);
        }
        if state.turn != Turn::ControlledPlayer {
            return Err(Error::InvalidState {
                message: "step() called while the opponent is to move".to_string(),
            });
        }

        let mut reward = state.apply(mv)?;
        let mut opponent_move = None;
        if !state.done {
            let reply = self.opponent.choose_move(&state.board)?;
            reward -= state.apply(reply)?;
            opponent_move = Some(reply);
        }

        self.commit(state);
        Ok(StepResult {
            board: state.board,
            reward,
            done: state.done,
            opponent_move,
        })
    }

    fn commit(&mut self, state: EpisodeState) {
        if let Some(outcome) = state.outcome
            && self.state.and_then(|s| s.outcome).is_none()
        {
            debug!(?outcome, board = %state.board.encode(), "episode finished");
        }
        self.state = Some(state);
    }

    /// Current board; empty before the first `reset`
    pub fn board(&self) -> Board {
        self.state.map(|s| s.board).unwrap_or_default()
    }

    /// Side to move, `None` before the first `reset`
    pub fn turn(&self) -> Option<Turn> {
        self.state.map(|s| s.turn)
    }

    pub fn is_done(&self) -> bool {
        self.state.is_some_and(|s| s.done)
    }

    /// Side that opened the current episode
    pub fn went_first(&self) -> Option<Turn> {
        self.state.map(|s| s.went_first)
    }

    /// Outcome of the current episode once it is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.and_then(|s| s.outcome)
    }

    /// The line that ended the episode, if it was won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.state.and_then(|s| LineAnalyzer::winning_line(s.board.cells()))
    }

    pub fn opponent(&self) -> &S {
        &self.opponent
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::tictactoe::{Cell, Counter};

    /// Plays a fixed list of moves and counts how often it was asked
    struct Scripted {
        moves: VecDeque<Move>,
        calls: usize,
    }

    impl Scripted {
        fn new(moves: &[(usize, Counter)]) -> Self {
            Self {
                moves: moves.iter().map(|&m| Move::from(m)).collect(),
                calls: 0,
            }
        }
    }

    impl MoveSelector for Scripted {
        fn choose_move(&mut self, _board: &Board) -> Result<Move> {
            self.calls += 1;
            self.moves.pop_front().ok_or(Error::NoValidMoves)
        }
    }

    fn player_first(opponent: Scripted) -> GameEngine<Scripted> {
        GameEngine::with_config(
            opponent,
            EngineConfig::new().with_first_turn(Turn::ControlledPlayer),
        )
    }

    #[test]
    fn test_step_before_reset_is_invalid_state() {
        let mut engine = player_first(Scripted::new(&[]));
        let err = engine.step(Move::new(0, Counter::X)).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
        assert_eq!(engine.turn(), None);
    }

    #[test]
    fn test_player_first_reset_leaves_board_empty() {
        let mut engine = player_first(Scripted::new(&[]));
        let result = engine.reset().unwrap();
        assert_eq!(result.board, Board::new());
        assert_eq!(result.reward, 0);
        assert!(!result.done);
        assert_eq!(result.opponent_move, None);
        assert_eq!(engine.turn(), Some(Turn::ControlledPlayer));
        assert_eq!(engine.went_first(), Some(Turn::ControlledPlayer));
        assert_eq!(engine.config().first_turn, Some(Turn::ControlledPlayer));
        assert_eq!(engine.opponent().calls, 0);
    }

    #[test]
    fn test_opponent_opening_move_in_reset() {
        let mut engine = GameEngine::with_config(
            Scripted::new(&[(4, Counter::O)]),
            EngineConfig::new().with_first_turn(Turn::Opponent),
        );
        let result = engine.reset().unwrap();
        assert_eq!(result.board.get(4), Some(Cell::O));
        assert_eq!(result.board.occupied_count(), 1);
        assert_eq!(result.reward, 0);
        assert_eq!(result.opponent_move, Some(Move::new(4, Counter::O)));
        assert_eq!(engine.turn(), Some(Turn::ControlledPlayer));
        assert_eq!(engine.went_first(), Some(Turn::Opponent));
    }

    #[test]
    fn test_step_plays_both_half_moves() {
        let mut engine = player_first(Scripted::new(&[(8, Counter::X)]));
        engine.reset().unwrap();

        let result = engine.step(Move::new(0, Counter::X)).unwrap();
        assert_eq!(result.board.get(0), Some(Cell::X));
        assert_eq!(result.board.get(8), Some(Cell::X));
        assert_eq!(result.reward, 0);
        assert!(!result.done);
        assert_eq!(engine.turn(), Some(Turn::ControlledPlayer));
    }

    #[test]
    fn test_player_win_skips_opponent() {
        let mut engine = player_first(Scripted::new(&[(3, Counter::O), (4, Counter::O)]));
        engine.reset().unwrap();
        engine.step(Move::new(0, Counter::X)).unwrap();
        engine.step(Move::new(1, Counter::X)).unwrap();
        assert_eq!(engine.opponent().calls, 2);

        let result = engine.step(Move::new(2, Counter::X)).unwrap();
        assert_eq!(result.reward, 1);
        assert!(result.done);
        assert_eq!(result.opponent_move, None);
        assert_eq!(engine.opponent().calls, 2);
        assert_eq!(engine.outcome(), Some(Outcome::Win(Turn::ControlledPlayer)));
        assert_eq!(engine.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_opponent_win_is_negative_reward() {
        // Opponent completes the middle column with O after the player set it up
        let mut engine = player_first(Scripted::new(&[(4, Counter::O), (7, Counter::O)]));
        engine.reset().unwrap();
        engine.step(Move::new(1, Counter::O)).unwrap();

        let result = engine.step(Move::new(0, Counter::X)).unwrap();
        assert_eq!(result.reward, -1);
        assert!(result.done);
        assert_eq!(engine.outcome(), Some(Outcome::Win(Turn::Opponent)));
    }

    #[test]
    fn test_step_after_done_is_episode_finished() {
        let mut engine = player_first(Scripted::new(&[(3, Counter::O), (4, Counter::O)]));
        engine.reset().unwrap();
        engine.step(Move::new(0, Counter::X)).unwrap();
        engine.step(Move::new(1, Counter::X)).unwrap();
        engine.step(Move::new(2, Counter::X)).unwrap();

        let err = engine.step(Move::new(8, Counter::X)).unwrap_err();
        assert!(matches!(err, Error::EpisodeFinished));
    }

    #[test]
    fn test_illegal_opponent_reply_rolls_back_step() {
        let mut engine = player_first(Scripted::new(&[(0, Counter::O)]));
        engine.reset().unwrap();
        let before = engine.board();

        // Opponent tries the cell the player just took
        let err = engine.step(Move::new(0, Counter::X)).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { position: 0, .. }));
        assert_eq!(engine.board(), before);
        assert_eq!(engine.turn(), Some(Turn::ControlledPlayer));
        assert!(!engine.is_done());
    }

    #[test]
    fn test_opponent_error_propagates_unchanged() {
        let mut engine = player_first(Scripted::new(&[]));
        engine.reset().unwrap();
        let err = engine.step(Move::new(0, Counter::X)).unwrap_err();
        assert!(matches!(err, Error::NoValidMoves));
        assert_eq!(engine.board(), Board::new());
    }

    #[test]
    fn test_seeded_coin_flip_is_reproducible() {
        let firsts = |seed| {
            let mut engine = GameEngine::with_config(
                crate::adapters::RandomSelector::with_seed(seed),
                EngineConfig::new().with_seed(seed),
            );
            (0..20)
                .map(|_| {
                    engine.reset().unwrap();
                    engine.went_first().unwrap()
                })
                .collect::<Vec<_>>()
        };
        let a = firsts(11);
        assert_eq!(a, firsts(11));
        assert!(a.contains(&Turn::ControlledPlayer));
        assert!(a.contains(&Turn::Opponent));
    }

    #[test]
    fn test_outcome_reward() {
        assert_eq!(Outcome::Win(Turn::ControlledPlayer).reward(), 1);
        assert_eq!(Outcome::Win(Turn::Opponent).reward(), -1);
        assert_eq!(Outcome::Draw.reward(), 0);
    }
}
