//! Caught species tracking.

use crate::core::constants::TOTAL_POKEMON_PER_REGION;
use crate::world::Region;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaughtEntry {
    pub shiny: bool,
}

/// Species the player owns, keyed by national dex id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pokedex {
    caught: BTreeMap<u32, CaughtEntry>,
}

impl Pokedex {
    /// Records a catch. A shiny catch upgrades an existing entry; a normal
    /// catch never downgrades one.
    pub fn catch(&mut self, id: u32, shiny: bool) {
        let entry = self.caught.entry(id).or_default();
        entry.shiny |= shiny;
    }

    pub fn is_caught(&self, id: u32) -> bool {
        self.caught.contains_key(&id)
    }

    pub fn is_caught_shiny(&self, id: u32) -> bool {
        self.caught.get(&id).is_some_and(|e| e.shiny)
    }

    /// True when every listed species is caught (shiny if `shiny`).
    pub fn all_caught(&self, species: &[u32], shiny: bool) -> bool {
        species.iter().all(|&id| {
            if shiny {
                self.is_caught_shiny(id)
            } else {
                self.is_caught(id)
            }
        })
    }

    pub fn caught_count(&self) -> usize {
        self.caught.len()
    }

    /// Distinct caught species native to `up_to` or an earlier region.
    pub fn caught_native_count(&self, up_to: Region) -> usize {
        self.caught
            .keys()
            .filter(|&&id| native_region(id).is_some_and(|r| r <= up_to))
            .count()
    }
}

/// Region a species was introduced in, from the dex id ranges.
pub fn native_region(id: u32) -> Option<Region> {
    if id == 0 {
        return None;
    }
    TOTAL_POKEMON_PER_REGION
        .iter()
        .position(|&total| id <= total)
        .and_then(Region::from_index)
}
