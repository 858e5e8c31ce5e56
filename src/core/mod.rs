//! Core game state and tuning constants.

#![allow(unused_imports)]

pub mod constants;
pub mod game_state;

pub use constants::*;
pub use game_state::*;
