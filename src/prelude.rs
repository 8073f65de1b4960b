//! Commonly used types and utilities for ease of import.

pub use crate::{GameConfig, GameSession, GameStatus, GuessResult, Position};

#[cfg(feature = "std")]
pub use crate::{play_session, run, Console, ConsolePlayer, Player, SweepPlayer};
