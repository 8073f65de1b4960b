#![cfg(feature = "std")]

//! Line-oriented console I/O and the ask / play / ask-again loop.
//!
//! `Console` is generic over its reader and writer so whole games can be
//! scripted in tests with `std::io::Cursor`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::bail;
use rand::Rng;

use crate::{
    common::GuessResult,
    config::GameConfig,
    game::{GameSession, GameStatus, GameSummary},
    grid::Grid,
    input::{parse_answer, parse_coordinate},
    player::{ConsolePlayer, Player},
};

pub const FIRST_INVITATION: &str = "Do you want to play Battleship? (y/n) ";
pub const REPEAT_INVITATION: &str = "Would you like to play again? (y/n) ";
pub const INVALID_ANSWER: &str = "Oops that's not a valid option, please use y or n.";
pub const FAREWELL: &str = "Goodbye, have a nice day!";
pub const INVALID_INTEGER: &str = "Invalid input! Enter an integer: ";
pub const LEGEND: &str = "X = missed, * = sunk, ! = not guessed";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn show_grid(&mut self, grid: &Grid) -> anyhow::Result<()> {
        write!(self.output, "{}", grid)?;
        Ok(())
    }

    /// Show `prompt` and block for one line. End of input is an error.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line)
    }

    /// Ask whether to (re)play until the answer is `y` or `n`.
    pub fn ask_to_play(&mut self, first: bool) -> anyhow::Result<bool> {
        let prompt = if first {
            FIRST_INVITATION
        } else {
            REPEAT_INVITATION
        };
        loop {
            let line = self.read_line(prompt)?;
            match parse_answer(&line) {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    log::debug!("rejected answer {:?}: {}", line.trim_end(), e);
                    self.say(INVALID_ANSWER)?;
                }
            }
        }
    }

    /// Ask for an integer, switching to the fixed re-prompt after the first failure.
    pub fn read_int(&mut self, prompt: &str) -> anyhow::Result<i64> {
        let mut prompt = prompt;
        loop {
            let line = self.read_line(prompt)?;
            match parse_coordinate(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected coordinate {:?}: {}", line.trim_end(), e);
                    prompt = INVALID_INTEGER;
                }
            }
        }
    }
}

/// Play `session` to completion, taking guesses from `player`.
pub fn play_session<P, R, W>(
    session: &mut GameSession,
    player: &mut P,
    console: &mut Console<R, W>,
) -> anyhow::Result<GameSummary>
where
    P: Player,
    R: BufRead,
    W: Write,
{
    console.say("Let's play Battleship!")?;

    while session.status() == GameStatus::InProgress {
        console.say(format_args!(
            "Turn: {} of {}",
            session.turn(),
            session.max_guesses()
        ))?;
        console.show_grid(session.grid())?;

        let (row, col) = player.select_target(session, console)?;
        let result = session.guess(row, col)?;
        player.handle_guess_result((row, col), result);

        match result {
            GuessResult::OutOfBounds => console.say("Oops, that's not even in the ocean.\n")?,
            GuessResult::Hit => {
                console.say("Congratulations! You sunk one of my battleships!")?;
                console.say(format_args!(
                    "Remaining ship(s): {}\n",
                    session.ships_remaining()
                ))?;
            }
            GuessResult::AlreadyGuessed => console.say("You guessed that one already.\n")?,
            GuessResult::Miss => console.say("You missed my battleship!\n")?,
        }
    }

    let sank = format!(
        "You sank {} of {}",
        session.ships_sunk(),
        session.ships_total()
    );
    match session.status() {
        GameStatus::Won => {
            console.say(sank)?;
            console.show_grid(session.grid())?;
            console.say("You win!")?;
        }
        GameStatus::Lost => {
            console.say("You have run out of guesses")?;
            console.say(sank)?;
            console.say(LEGEND)?;
            console.show_grid(session.grid())?;
            console.say("Game Over")?;
        }
        GameStatus::InProgress => {}
    }
    Ok(session.summary())
}

/// Invite the player, run a fresh session per `y`, stop on `n`.
/// Returns the summaries of the sessions played.
pub fn run<G, R, W>(
    config: &GameConfig,
    rng: &mut G,
    console: &mut Console<R, W>,
) -> anyhow::Result<Vec<GameSummary>>
where
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    config.validate()?;

    let mut played = Vec::new();
    while console.ask_to_play(played.is_empty())? {
        let mut session = GameSession::new(config, rng);
        let summary = play_session(&mut session, &mut ConsolePlayer::new(), console)?;
        log::info!("session {} ended: {:?}", played.len() + 1, summary.status);
        played.push(summary);
    }
    console.say(FAREWELL)?;
    Ok(played)
}
