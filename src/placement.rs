//! Random placement of single-cell ships.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::grid::Position;

/// Why a hand-built fleet was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// Two ships share a cell.
    Duplicate(Position),
    /// A ship lies outside `[1, rows] x [1, cols]`.
    OutOfBounds(Position),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Duplicate(p) => write!(f, "Two ships placed at {}", p),
            FleetError::OutOfBounds(p) => write!(f, "Ship at {} is off the board", p),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

/// Distinct ship positions, in the order they were placed. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    positions: Vec<Position>,
}

impl Fleet {
    /// Build a fleet from explicit positions, checked against a `rows` x `cols` board.
    pub fn from_positions<I>(positions: I, rows: usize, cols: usize) -> Result<Self, FleetError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for p in positions {
            if p.row == 0 || p.col == 0 || p.row > rows || p.col > cols {
                return Err(FleetError::OutOfBounds(p));
            }
            if !seen.insert(p) {
                return Err(FleetError::Duplicate(p));
            }
            out.push(p);
        }
        Ok(Self { positions: out })
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }
}

/// Hide `count` ships at distinct cells drawn uniformly from `[1, rows] x [1, cols]`.
///
/// Samples are rejected and redrawn on collision, so `count` must not exceed
/// `rows * cols`; otherwise this never returns. `GameConfig::validate` checks
/// that before a session is created.
pub fn place_ships<R: Rng + ?Sized>(rng: &mut R, count: usize, rows: usize, cols: usize) -> Fleet {
    debug_assert!(rows >= 1 && cols >= 1, "board must have playable cells");
    debug_assert!(count <= rows * cols, "more ships than cells");

    let mut taken = BTreeSet::new();
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let pos = Position::new(rng.random_range(1..=rows), rng.random_range(1..=cols));
        if taken.insert(pos) {
            positions.push(pos);
        } else {
            log::trace!("placement collision at {}, resampling", pos);
        }
    }
    Fleet { positions }
}
