//! Greedy selector driven by a value function

use crate::{
    Error, Result,
    ports::MoveSelector,
    tictactoe::{Board, Counter, LineAnalyzer, Move},
    value_function::ValueFunction,
};

/// Plays the move whose successor board has the highest value.
///
/// A move that completes a line is always taken. Otherwise every legal
/// `(position, counter)` pair is scored by looking up the resulting board;
/// ties go to the lowest position, then to `X` over `O`.
#[derive(Debug, Clone)]
pub struct GreedyValueSelector {
    name: String,
    values: ValueFunction,
}

impl GreedyValueSelector {
    pub fn new(values: ValueFunction) -> Self {
        Self {
            name: "Greedy".to_string(),
            values,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn values(&self) -> &ValueFunction {
        &self.values
    }

    fn winning_move(board: &Board) -> Result<Option<Move>> {
        for position in LineAnalyzer::completing_positions(board.cells()) {
            for counter in Counter::ALL {
                let mv = Move::new(position, counter);
                if board.with_move(mv)?.is_winner() {
                    return Ok(Some(mv));
                }
            }
        }
        Ok(None)
    }
}

impl MoveSelector for GreedyValueSelector {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        if let Some(mv) = Self::winning_move(board)? {
            return Ok(mv);
        }

        let mut best: Option<(Move, f64)> = None;
        for mv in board.legal_moves() {
            let value = self.values.get(&board.with_move(mv)?);
            // Strict comparison keeps the earliest move on ties
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        best.map(|(mv, _)| mv).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
