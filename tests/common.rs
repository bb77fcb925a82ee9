//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use wild_tictactoe::{
    Board, Error, Result,
    config::EngineConfig,
    engine::{GameEngine, Turn},
    ports::MoveSelector,
    tictactoe::{Counter, Move},
};

/// Opponent that plays a fixed list of moves and counts how often it was asked
pub struct Scripted {
    moves: VecDeque<Move>,
    pub calls: usize,
}

impl Scripted {
    pub fn new(moves: &[(usize, Counter)]) -> Self {
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

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Engine whose episodes always open with `first`
pub fn engine_with(first: Turn, opponent: &[(usize, Counter)]) -> GameEngine<Scripted> {
    GameEngine::with_config(
        Scripted::new(opponent),
        EngineConfig::new().with_first_turn(first),
    )
}

/// Board from a compact string such as `"XO.X....."`
pub fn board(cells: &str) -> Board {
    let symbols: Vec<&str> = cells
        .chars()
        .map(|c| match c {
            'X' => "X",
            'O' => "O",
            _ => " ",
        })
        .collect();
    Board::from_symbols(&symbols).unwrap()
}
