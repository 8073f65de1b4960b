//! Common types for a solo game: guess classifications and session errors.

use core::fmt;

/// Classification of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess found a ship that had not been sunk yet.
    Hit,
    /// Guess landed on open water.
    Miss,
    /// The cell was already hit or missed.
    AlreadyGuessed,
    /// Guess is outside the playable board.
    OutOfBounds,
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The session already ended in a win or a loss.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
