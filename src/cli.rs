#![cfg(feature = "std")]

//! Command-line options shared by the game and the simulator.

use clap::Args;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{GameConfig, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SHIPS};

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Playable rows, label row excluded.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,
    /// Playable columns, label column excluded.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,
    /// Number of hidden ships.
    #[arg(long, default_value_t = DEFAULT_SHIPS)]
    pub ships: usize,
    /// Guess budget; defaults to half of (rows - 1) x (cols - 1), 22 on the default board.
    #[arg(long)]
    pub max_guesses: Option<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    pub seed: Option<u64>,
}

impl BoardArgs {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            ships: self.ships,
            max_guesses: self.max_guesses,
        }
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}
