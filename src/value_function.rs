//! Value function: the artifact a trained agent plays from
//!
//! Maps boards to the value of reaching them, from the point of view of the
//! side that just moved. Unseen boards score `default_value`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Board;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFunction {
    /// Board key (see [`Board::encode`]) -> value
    values: HashMap<String, f64>,
    /// Value reported for boards that were never set
    default_value: f64,
}

impl ValueFunction {
    pub fn new() -> Self {
        Self::with_default(0.0)
    }

    pub fn with_default(default_value: f64) -> Self {
        Self {
            values: HashMap::new(),
            default_value,
        }
    }

    /// Value of `board`, or the default for unseen boards
    pub fn get(&self, board: &Board) -> f64 {
        self.values
            .get(&board.encode())
            .copied()
            .unwrap_or(self.default_value)
    }

    /// Value stored for `board`, if any
    pub fn lookup(&self, board: &Board) -> Option<f64> {
        self.values.get(&board.encode()).copied()
    }

    pub fn set(&mut self, board: &Board, value: f64) {
        self.values.insert(board.encode(), value);
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl Default for ValueFunction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Counter, Move};

    #[test]
    fn test_default_for_unseen_boards() {
        let values = ValueFunction::with_default(0.25);
        assert_eq!(values.get(&Board::new()), 0.25);
        assert_eq!(values.lookup(&Board::new()), None);
        assert!(values.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut values = ValueFunction::new();
        let board = Board::new().with_move(Move::new(4, Counter::O)).unwrap();
        values.set(&board, 0.8);

        assert_eq!(values.get(&board), 0.8);
        assert_eq!(values.len(), 1);
        assert_eq!(values.iter().next(), Some(("....O....", 0.8)));
        // Same position with the other counter is a different board
        let other = Board::new().with_move(Move::new(4, Counter::X)).unwrap();
        assert_eq!(values.get(&other), 0.0);
    }
}
