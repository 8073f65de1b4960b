#![cfg(feature = "std")]

//! Sources of guesses for a session.
//!
//! - `ConsolePlayer`: the human at the terminal
//! - `SweepPlayer`: walks the board in reading order, for unattended runs

use std::io::{BufRead, Write};

use crate::{
    common::GuessResult,
    console::Console,
    game::GameSession,
    grid::{Cell, Position},
};

/// Something that picks the next coordinate to fire at.
pub trait Player {
    /// Choose the next raw `(row, col)` guess. It is not range checked.
    fn select_target<R: BufRead, W: Write>(
        &mut self,
        session: &GameSession,
        console: &mut Console<R, W>,
    ) -> anyhow::Result<(i64, i64)>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: (i64, i64), _result: GuessResult) {}
}

/// Reads a row and then a column from the console.
#[derive(Debug, Default)]
pub struct ConsolePlayer;

impl ConsolePlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for ConsolePlayer {
    fn select_target<R: BufRead, W: Write>(
        &mut self,
        _session: &GameSession,
        console: &mut Console<R, W>,
    ) -> anyhow::Result<(i64, i64)> {
        let row = console.read_int("Guess Row: ")?;
        let col = console.read_int("Guess Col: ")?;
        Ok((row, col))
    }
}

/// Guesses every unknown cell in row-major order.
#[derive(Debug, Default)]
pub struct SweepPlayer {
    next: usize,
}

impl SweepPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for SweepPlayer {
    fn select_target<R: BufRead, W: Write>(
        &mut self,
        session: &GameSession,
        _console: &mut Console<R, W>,
    ) -> anyhow::Result<(i64, i64)> {
        let grid = session.grid();
        let total = grid.rows() * grid.cols();
        while self.next < total {
            let pos = Position::new(self.next / grid.cols() + 1, self.next % grid.cols() + 1);
            self.next += 1;
            if grid.get(pos) == Some(Cell::Unknown) {
                return Ok((pos.row as i64, pos.col as i64));
            }
        }
        // Board exhausted but budget left: burn the remaining turns off the board.
        Ok((0, 0))
    }
}
