#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod game;
mod grid;
mod input;
mod placement;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
pub mod prelude;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use input::*;
pub use placement::*;
#[cfg(feature = "std")]
pub use console::{play_session, run, Console};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::*;
