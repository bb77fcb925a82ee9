//! Submission check: can a team's stored value function play a move?

use serde::Serialize;

use crate::{
    Result,
    adapters::GreedyValueSelector,
    ports::{MoveSelector, ValueFunctionRepository},
    tictactoe::{Board, Move},
    types::TeamName,
};

/// What a successful check found
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    pub team: TeamName,
    /// Number of boards in the stored value function
    pub entries: usize,
    /// Move the greedy selector chose on the empty board
    pub opening_move: Move,
}

/// Validate `team_name`, load its value function and make sure the greedy
/// selector built from it returns a legal move on the empty board.
///
/// # Errors
///
/// - [`crate::Error::InvalidTeamName`] for an empty, placeholder or path-like name
/// - [`crate::Error::ValueFunctionNotFound`] if nothing is stored for the team
/// - [`crate::Error::IllegalMove`] if the chosen move is not legal
pub fn check_submission<R>(repo: &R, team_name: &str) -> Result<SubmissionReport>
where
    R: ValueFunctionRepository + ?Sized,
{
    let team = TeamName::new(team_name)?;
    let values = repo.load(&team)?;
    let entries = values.len();

    let board = Board::new();
    let mut selector = GreedyValueSelector::new(values).named(team.as_str());
    let opening_move = selector.choose_move(&board)?;
    board.validate(opening_move)?;

    Ok(SubmissionReport {
        team,
        entries,
        opening_move,
    })
}
