//! Plain-text presentation of episodes
//!
//! The renderer remembers which side placed every counter so the two sides
//! stay distinguishable even though both may place either counter. That
//! memory belongs to the renderer and is cleared on every episode start.

use std::io::{self, Stdout, Write};

use crate::{
    Result,
    engine::{Outcome, Turn},
    ports::EpisodeObserver,
    tictactoe::{BOARD_CELLS, BOARD_SIZE, Board, Cell, Move},
};

fn side_label(side: Turn) -> &'static str {
    match side {
        Turn::ControlledPlayer => "You",
        Turn::Opponent => "Opponent",
    }
}

/// Writes boards and results as text.
///
/// Counters placed by the controlled player are shown as `[X]`, those placed
/// by the opponent as `(X)`.
pub struct TextRenderer<W: Write + Send = Stdout> {
    out: W,
    owners: [Option<Turn>; BOARD_CELLS],
}

impl TextRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            owners: [None; BOARD_CELLS],
        }
    }

    /// Side that placed the counter at `position`, if known
    pub fn owner(&self, position: usize) -> Option<Turn> {
        self.owners.get(position).copied().flatten()
    }

    /// Render `board` as three rows using the remembered owners
    pub fn render(&self, board: &Board) -> String {
        let rows: Vec<String> = board
            .cells()
            .chunks(BOARD_SIZE)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| self.render_cell(row * BOARD_SIZE + col, cell))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---+---+---\n")
    }

    fn render_cell(&self, position: usize, cell: Cell) -> String {
        match (cell, self.owner(position)) {
            (Cell::Empty, _) => "   ".to_string(),
            (cell, Some(Turn::Opponent)) => format!("({cell})"),
            (cell, _) => format!("[{cell}]"),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> EpisodeObserver for TextRenderer<W> {
    fn on_episode_start(&mut self, game_num: usize) -> Result<()> {
        self.owners = [None; BOARD_CELLS];
        writeln!(self.out, "Game {} starts!", game_num + 1)?;
        Ok(())
    }

    fn on_half_move(&mut self, side: Turn, mv: Move) -> Result<()> {
        if let Some(owner) = self.owners.get_mut(mv.position)
            && owner.is_none()
        {
            *owner = Some(side);
        }
        writeln!(self.out, "{} played {}", side_label(side), mv)?;
        Ok(())
    }

    fn on_board(&mut self, board: &Board) -> Result<()> {
        let rendered = self.render(board);
        writeln!(self.out, "{rendered}\n")?;
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        _game_num: usize,
        outcome: Outcome,
        _board: &Board,
    ) -> Result<()> {
        let message = match outcome {
            Outcome::Win(Turn::ControlledPlayer) => "You win!",
            Outcome::Win(Turn::Opponent) => "Oh no, your opponent won!",
            Outcome::Draw => "Game drawn!",
        };
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }
}
