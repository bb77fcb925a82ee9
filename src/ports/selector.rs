//! Move selector port - the "given a board, return a move" capability

use crate::{
    Result,
    tictactoe::{Board, Move},
};

/// Strategy that picks a move for the side to play.
///
/// The engine consults its opponent selector whenever it is the opponent's
/// turn. A selector receives a snapshot of the board and never sees the
/// engine itself, so it cannot call back into it.
///
/// Selectors must return a legal move for the board they are given; the
/// engine applies the same legality check it applies to the controlled
/// player and surfaces [`crate::Error::IllegalMove`] otherwise.
///
/// # Examples
///
/// ```
/// use wild_tictactoe::{
///     ports::MoveSelector,
///     tictactoe::{Board, Counter, Move},
/// };
///
/// struct FirstEmpty;
///
/// impl MoveSelector for FirstEmpty {
///     fn choose_move(&mut self, board: &Board) -> wild_tictactoe::Result<Move> {
///         board
///             .empty_positions()
///             .first()
///             .map(|&position| Move::new(position, Counter::X))
///             .ok_or(wild_tictactoe::Error::NoValidMoves)
///     }
/// }
/// ```
pub trait MoveSelector: Send {
    /// Choose a move for `board`.
    ///
    /// # Errors
    ///
    /// Errors are propagated unchanged through the engine's `reset`/`step`.
    fn choose_move(&mut self, board: &Board) -> Result<Move>;

    /// Name used in logs and match summaries.
    fn name(&self) -> &str {
        "selector"
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        (**self).choose_move(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for &mut S {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        (**self).choose_move(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
