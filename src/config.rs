//! Board dimensions, fleet size and guess budget.

use core::fmt;

/// Playable rows, label row excluded.
pub const DEFAULT_ROWS: usize = 6;
/// Playable columns, label column excluded.
pub const DEFAULT_COLS: usize = 10;
/// Number of hidden single-cell ships.
pub const DEFAULT_SHIPS: usize = 6;
/// Largest board, in playable cells, a session will allocate.
pub const MAX_CELLS: usize = 1 << 20;

/// Startup configuration for one or more sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub ships: usize,
    /// Overrides the derived guess budget when set.
    pub max_guesses: Option<usize>,
}

/// Reasons a configuration cannot start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board needs at least one playable row.
    NoRows,
    /// Board needs at least one playable column.
    NoColumns,
    /// At least one ship must be hidden.
    NoShips,
    /// The player must get at least one guess.
    NoGuesses,
    /// More ships than distinct playable cells.
    TooManyShips { ships: usize, capacity: usize },
    /// Board has more than `MAX_CELLS` cells, or its size overflows.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoRows => write!(f, "Board must have at least one row"),
            ConfigError::NoColumns => write!(f, "Board must have at least one column"),
            ConfigError::NoShips => write!(f, "At least one ship is required"),
            ConfigError::NoGuesses => write!(f, "Guess budget must be at least one"),
            ConfigError::TooLarge { rows, cols } => write!(
                f,
                "A {}x{} board exceeds the {} cell limit",
                rows, cols, MAX_CELLS
            ),
            ConfigError::TooManyShips { ships, capacity } => write!(
                f,
                "Cannot hide {} ships on a board with {} cells",
                ships, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            ships: DEFAULT_SHIPS,
            max_guesses: None,
        }
    }
}

impl GameConfig {
    /// Configuration with a derived guess budget.
    pub const fn new(rows: usize, cols: usize, ships: usize) -> Self {
        Self {
            rows,
            cols,
            ships,
            max_guesses: None,
        }
    }

    /// Replace the derived guess budget with a fixed one.
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = Some(max_guesses);
        self
    }

    /// Number of distinct cells a ship can occupy.
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Unless overridden, half of `(rows - 1) x (cols - 1)`, rounded down:
    /// 22 on the default 6x10 board. Boards with a single row or column
    /// derive 0 and need an explicit budget.
    pub fn guess_budget(&self) -> usize {
        self.max_guesses.unwrap_or_else(|| {
            self.rows
                .saturating_sub(1)
                .saturating_mul(self.cols.saturating_sub(1))
                / 2
        })
    }

    /// Check every precondition the session and the placement generator rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::NoColumns);
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::TooLarge {
                    rows: self.rows,
                    cols: self.cols,
                })
            }
        }
        if self.ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.guess_budget() == 0 {
            return Err(ConfigError::NoGuesses);
        }
        let capacity = self.capacity();
        if self.ships > capacity {
            return Err(ConfigError::TooManyShips {
                ships: self.ships,
                capacity,
            });
        }
        Ok(())
    }
}
