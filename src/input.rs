//! Validation of raw console lines. No I/O happens here; the retry loops
//! live with the console.

use core::fmt;

/// Why a line of input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Expected `y` or `n`.
    InvalidAnswer,
    /// Expected a whole number.
    NotAnInteger,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidAnswer => write!(f, "Expected y or n"),
            InputError::NotAnInteger => write!(f, "Expected an integer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// `y`/`n` in any case, surrounding whitespace ignored.
pub fn parse_answer(line: &str) -> Result<bool, InputError> {
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if answer.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(InputError::InvalidAnswer)
    }
}

/// A signed integer coordinate. Range checking is the session's job.
pub fn parse_coordinate(line: &str) -> Result<i64, InputError> {
    line.trim().parse().map_err(|_| InputError::NotAnInteger)
}
