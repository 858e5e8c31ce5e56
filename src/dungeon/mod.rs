//! Dungeon floors: per-tile exploration state and player marker movement.

pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{DungeonError, DungeonFloor};
#[allow(unused_imports)]
pub use types::{DungeonTile, TileKind};
