//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    lines::LineAnalyzer,
    moves::{Counter, Move},
};

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: usize = 3;

/// A cell on the wild tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Symbol used by the flattened board interface
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::X => "X",
            Cell::O => "O",
        }
    }

    /// Compact character used in keys and logs
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a flattened-board symbol.
    ///
    /// Only `" "`, `"X"` and `"O"` are accepted.
    pub fn from_symbol(symbol: &str) -> Option<Cell> {
        match symbol {
            " " => Some(Cell::Empty),
            "X" => Some(Cell::X),
            "O" => Some(Cell::O),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Counter> for Cell {
    fn from(counter: Counter) -> Self {
        match counter {
            Counter::X => Cell::X,
            Counter::O => Cell::O,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a flat position (0-8) into `(row, column)`.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] if the position is off the board.
pub fn to_indices(position: usize) -> Result<(usize, usize), crate::Error> {
    if position >= BOARD_CELLS {
        return Err(crate::Error::illegal_move(
            position,
            "position is outside the board (must be 0-8)",
        ));
    }
    Ok((position / BOARD_SIZE, position % BOARD_SIZE))
}

/// Convert `(row, column)` into a flat position.
pub fn to_position(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// Fixed 3x3 grid stored row-major.
///
/// This type is `Copy`; mutation happens through `&mut self` on the
/// engine-owned instance and snapshots are handed out by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Parse the flattened representation (9 symbols, row-major).
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly 9 symbols or a symbol is not
    /// one of `" "`, `"X"`, `"O"`.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self, crate::Error> {
        if symbols.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: symbols.len(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (position, symbol) in symbols.iter().enumerate() {
            let symbol = symbol.as_ref();
            cells[position] =
                Cell::from_symbol(symbol).ok_or_else(|| crate::Error::InvalidCellSymbol {
                    symbol: symbol.to_string(),
                    position,
                })?;
        }

        Ok(Self { cells })
    }

    /// Flattened row-major cells
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Flattened row-major symbols
    pub fn to_symbols(&self) -> [&'static str; BOARD_CELLS] {
        self.cells.map(Cell::as_str)
    }

    /// Get cell at position (0-8)
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Get cell at `(row, col)`
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.get(to_position(row, col))
    }

    /// Check if a position is on the board and empty
    pub fn is_empty_at(&self, position: usize) -> bool {
        self.get(position).is_some_and(Cell::is_empty)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Every legal move: each empty position with either counter
    pub fn legal_moves(&self) -> Vec<Move> {
        self.empty_positions()
            .into_iter()
            .flat_map(|position| Counter::ALL.map(|counter| Move::new(position, counter)))
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check that `mv` may be played on this board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the position is out of range
    /// or already occupied.
    pub fn validate(&self, mv: Move) -> Result<(), crate::Error> {
        to_indices(mv.position)?;
        if !self.is_empty_at(mv.position) {
            return Err(crate::Error::illegal_move(
                mv.position,
                "cell already has a counter on it",
            ));
        }
        Ok(())
    }

    /// Place a counter after validating the move.
    ///
    /// On error the board is left untouched.
    pub fn place(&mut self, mv: Move) -> Result<(), crate::Error> {
        self.validate(mv)?;
        self.cells[mv.position] = mv.counter.into();
        Ok(())
    }

    /// Return a new board with `mv` applied
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, mv: Move) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.place(mv)?;
        Ok(next)
    }

    /// True iff some line holds three identical non-empty counters
    pub fn is_winner(&self) -> bool {
        LineAnalyzer::is_winner(&self.cells)
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Win or full board
    pub fn is_terminal(&self) -> bool {
        self.is_winner() || self.is_full()
    }

    /// Compact key for lookup tables, e.g. `"XO......."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < BOARD_CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
