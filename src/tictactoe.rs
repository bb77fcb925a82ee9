//! Wild tic-tac-toe board, moves and line analysis

pub mod board;
pub mod lines;
pub mod moves;

pub use board::{BOARD_CELLS, BOARD_SIZE, Board, Cell, to_indices, to_position};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use moves::{Counter, Move};
