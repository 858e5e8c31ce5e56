//! Worldmap - navigation and access control for an exploration idle game
//!
//! Decides where the player may travel, moves them between routes, towns
//! and regions, and derives the highlight classes and accessibility labels
//! the map and dungeon views render.

pub mod core;
pub mod dungeon;
pub mod navigation;
pub mod progress;
pub mod world;
