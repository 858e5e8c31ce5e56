use crate::world::Region;

// Route progress
/// Kills on a route before it stops being reported as unfinished.
pub const ROUTE_KILLS_NEEDED: u64 = 10;

// Region progression
pub const MAX_AVAILABLE_REGION: Region = Region::Alola;

/// Cumulative national dex size at the end of each region.
/// Index 0 = Kanto, index 6 = Alola.
pub const TOTAL_POKEMON_PER_REGION: [u32; 7] = [
    151, // Kanto
    251, // Johto
    386, // Hoenn
    493, // Sinnoh
    649, // Unova
    721, // Kalos
    809, // Alola
];

// Breeding
pub const QUEUE_SLOTS_PER_REGION: u32 = 4;

/// Hatchery queue slots granted when leaving `region` for the next one.
pub fn queue_slots_gained_from_region(region: Region) -> u32 {
    QUEUE_SLOTS_PER_REGION * (region.index() as u32 + 1)
}
