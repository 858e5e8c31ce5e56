//! Player progress stores: statistics, badges, key items and the pokédex.

mod pokedex;
mod statistics;

#[allow(unused_imports)]
pub use pokedex::{native_region, CaughtEntry, Pokedex};
#[allow(unused_imports)]
pub use statistics::{BadgeCase, KeyItems, Statistics};
