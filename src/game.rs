use rand::Rng;

use crate::{
    common::{GameError, GuessResult},
    config::GameConfig,
    grid::{Cell, Grid, Position},
    placement::{place_ships, Fleet},
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// End-of-session figures, serializable for the simulator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub status: GameStatus,
    pub ships_sunk: usize,
    pub ships_total: usize,
    pub guesses_used: usize,
    pub max_guesses: usize,
}

/// One play-through: the grid, the hidden fleet and the turn counter.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    fleet: Fleet,
    ships_remaining: usize,
    turn: usize,
    max_guesses: usize,
    status: GameStatus,
}

impl GameSession {
    /// Start a session with a freshly placed fleet.
    ///
    /// `config` must pass [`GameConfig::validate`]; placement does not
    /// terminate when there are more ships than cells.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let fleet = place_ships(rng, config.ships, config.rows, config.cols);
        Self::with_fleet(config, fleet)
    }

    /// Start a session with a known fleet. The fleet must have been built for
    /// the same board dimensions; `config.ships` is ignored in favour of
    /// `fleet.len()`.
    pub fn with_fleet(config: &GameConfig, fleet: Fleet) -> Self {
        debug_assert!(
            fleet
                .iter()
                .all(|p| (1..=config.rows).contains(&p.row) && (1..=config.cols).contains(&p.col)),
            "fleet does not fit a {}x{} board",
            config.rows,
            config.cols
        );
        let ships_remaining = fleet.len();
        let status = if ships_remaining == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        log::debug!(
            "new session: {}x{} board, {} ships, {} guesses",
            config.rows,
            config.cols,
            ships_remaining,
            config.guess_budget()
        );
        Self {
            grid: Grid::new(config.rows, config.cols),
            fleet,
            ships_remaining,
            turn: 1,
            max_guesses: config.guess_budget(),
            status,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The turn about to be played, starting at 1.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    pub fn ships_total(&self) -> usize {
        self.fleet.len()
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_total() - self.ships_remaining
    }

    /// Apply a raw guess. Every call consumes a turn, whatever the outcome.
    pub fn guess(&mut self, row: i64, col: i64) -> Result<GuessResult, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let result = if self.grid.contains(row, col) {
            self.classify(Position::new(row as usize, col as usize))
        } else {
            GuessResult::OutOfBounds
        };
        log::debug!("turn {}: ({}, {}) -> {:?}", self.turn, row, col, result);

        self.turn += 1;
        if self.status == GameStatus::InProgress && self.turn > self.max_guesses {
            self.status = GameStatus::Lost;
            self.reveal();
            log::info!(
                "out of guesses with {} of {} ships sunk",
                self.ships_sunk(),
                self.ships_total()
            );
        }
        Ok(result)
    }

    fn classify(&mut self, pos: Position) -> GuessResult {
        match self.grid.get(pos) {
            Some(Cell::Unknown) if self.fleet.contains(pos) => {
                self.grid.set(pos, Cell::Hit);
                self.ships_remaining -= 1;
                if self.ships_remaining == 0 {
                    self.status = GameStatus::Won;
                    log::info!("all {} ships sunk on turn {}", self.ships_total(), self.turn);
                }
                GuessResult::Hit
            }
            Some(Cell::Unknown) => {
                self.grid.set(pos, Cell::Miss);
                GuessResult::Miss
            }
            _ => GuessResult::AlreadyGuessed,
        }
    }

    /// Mark every ship that was never hit. Hit cells are left alone.
    fn reveal(&mut self) {
        for pos in self.fleet.iter() {
            if self.grid.get(pos) != Some(Cell::Hit) {
                self.grid.set(pos, Cell::Revealed);
            }
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            ships_sunk: self.ships_sunk(),
            ships_total: self.ships_total(),
            guesses_used: self.turn - 1,
            max_guesses: self.max_guesses,
        }
    }
}
