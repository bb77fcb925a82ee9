//! Winning line analysis for wild tic-tac-toe
//!
//! Both sides may place either counter, so a line is decided by whether its
//! three cells match, not by which counter they hold.

use super::{Cell, board::BOARD_CELLS};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Three identical, non-empty cells
    pub fn is_complete(cells: &[Cell; BOARD_CELLS], line: &[usize; 3]) -> bool {
        let first = cells[line[0]];
        first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first)
    }

    /// True iff any of the eight lines is complete
    pub fn is_winner(cells: &[Cell; BOARD_CELLS]) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::is_complete(cells, line))
    }

    /// First complete line, in row, column, diagonal order
    pub fn winning_line(cells: &[Cell; BOARD_CELLS]) -> Option<[usize; 3]> {
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| Self::is_complete(cells, line))
    }

    /// Empty positions that would complete a line with some counter.
    ///
    /// Returned in ascending order without duplicates.
    pub fn completing_positions(cells: &[Cell; BOARD_CELLS]) -> Vec<usize> {
        let mut positions: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::completing_position_in_line(cells, line))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    /// The single empty cell of a line whose other two cells match
    fn completing_position_in_line(
        cells: &[Cell; BOARD_CELLS],
        line: &[usize; 3],
    ) -> Option<usize> {
        let mut empty_pos = None;
        let mut filled = Vec::with_capacity(2);

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                cell => filled.push(cell),
            }
        }

        match filled.as_slice() {
            [a, b] if a == b => empty_pos,
            _ => None,
        }
    }
}
