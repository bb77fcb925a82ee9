//! Closure-backed move selector

use crate::{
    Result,
    ports::MoveSelector,
    tictactoe::{Board, Move},
};

/// Wraps any `FnMut(&Board) -> Result<Move>` as a [`MoveSelector`].
///
/// # Examples
///
/// ```
/// use wild_tictactoe::{
///     adapters::FnSelector,
///     ports::MoveSelector,
///     tictactoe::{Board, Counter, Move},
/// };
///
/// let mut centre = FnSelector::new("centre", |_board: &Board| Ok(Move::new(4, Counter::O)));
/// assert_eq!(centre.choose_move(&Board::new())?.position, 4);
/// # Ok::<(), wild_tictactoe::Error>(())
/// ```
pub struct FnSelector<F> {
    name: String,
    choose: F,
}

impl<F> FnSelector<F>
where
    F: FnMut(&Board) -> Result<Move> + Send,
{
    pub fn new(name: impl Into<String>, choose: F) -> Self {
        Self {
            name: name.into(),
            choose,
        }
    }
}

impl<F> MoveSelector for FnSelector<F>
where
    F: FnMut(&Board) -> Result<Move> + Send,
{
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        (self.choose)(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
