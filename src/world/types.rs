//! Region, location and environment definitions.

use super::requirements::{all_completed, Requirement};
use crate::core::constants::TOTAL_POKEMON_PER_REGION;
use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game regions in the order the player unlocks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
}

impl Region {
    /// All regions in progression order.
    pub const ALL: [Region; 7] = [
        Region::Kanto,
        Region::Johto,
        Region::Hoenn,
        Region::Sinnoh,
        Region::Unova,
        Region::Kalos,
        Region::Alola,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Region> {
        Self::ALL.get(index).copied()
    }

    /// The region unlocked after this one.
    pub fn next(&self) -> Option<Region> {
        Self::from_index(self.index() + 1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Kanto => "Kanto",
            Region::Johto => "Johto",
            Region::Hoenn => "Hoenn",
            Region::Sinnoh => "Sinnoh",
            Region::Unova => "Unova",
            Region::Kalos => "Kalos",
            Region::Alola => "Alola",
        }
    }

    /// Town the player lands in when first travelling to this region.
    pub fn starting_town(&self) -> &'static str {
        match self {
            Region::Kanto => "Pallet Town",
            Region::Johto => "New Bark Town",
            Region::Hoenn => "Littleroot Town",
            Region::Sinnoh => "Twinleaf Town",
            Region::Unova => "Aspertia City",
            Region::Kalos => "Vaniville Town",
            Region::Alola => "Iki Town",
        }
    }

    /// Town whose dock opens the ship travel menu.
    pub fn harbor_town(&self) -> &'static str {
        match self {
            Region::Kanto => "Vermilion City",
            Region::Johto => "Olivine City",
            Region::Hoenn => "Slateport City",
            Region::Sinnoh => "Canalave City",
            Region::Unova => "Castelia City",
            Region::Kalos => "Coumarine City",
            Region::Alola => "Hau'oli City",
        }
    }

    /// National dex size up to and including this region.
    pub fn species_total(&self) -> u32 {
        TOTAL_POKEMON_PER_REGION[self.index()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terrain themes used for battle backdrops and route styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    Water,
    Ice,
    Fire,
    Forest,
    Cave,
    GemCave,
    PowerPlant,
    Mansion,
    Graveyard,
}

impl Environment {
    /// CSS class for the battle backdrop.
    pub fn battle_css_class(&self) -> &'static str {
        match self {
            Environment::Water => "water",
            Environment::Ice => "ice",
            Environment::Fire => "fire",
            Environment::Forest => "forest",
            Environment::Cave => "cave",
            Environment::GemCave => "cave-gem",
            Environment::PowerPlant => "power-plant",
            Environment::Mansion => "mansion",
            Environment::Graveyard => "graveyard",
        }
    }
}

/// Areas of one region that share an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDef {
    pub environment: Environment,
    pub region: Region,
    #[serde(default)]
    pub routes: Vec<u32>,
    #[serde(default)]
    pub towns: Vec<String>,
}

impl EnvironmentDef {
    pub fn contains_route(&self, region: Region, route: u32) -> bool {
        self.region == region && self.routes.contains(&route)
    }

    pub fn contains_town(&self, region: Region, town: &str) -> bool {
        self.region == region && self.towns.iter().any(|t| t == town)
    }
}

/// A route between towns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    pub region: Region,
    pub number: u32,
    /// Custom display name; defaults to "<Region> Route <n>"
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// Species that can be encountered here
    #[serde(default)]
    pub pokemon: Vec<u32>,
}

impl RouteDef {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| default_route_name(self.region, self.number))
    }

    pub fn is_unlocked(&self, state: &GameState) -> bool {
        all_completed(&self.requirements, state)
    }
}

/// Name used for a route with no custom name, or one not in the registry.
pub fn default_route_name(region: Region, number: u32) -> String {
    format!("{} Route {}", region.name(), number)
}

/// A town; dungeon entrances are towns too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TownDef {
    pub name: String,
    pub region: Region,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl TownDef {
    pub fn is_unlocked(&self, state: &GameState) -> bool {
        all_completed(&self.requirements, state)
    }
}

/// Dungeon hosted by the town of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonDef {
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<u32>,
}

/// Gym hosted by a town.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymDef {
    pub town: String,
    pub leader: String,
    pub badge: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl GymDef {
    pub fn is_unlocked(&self, state: &GameState) -> bool {
        all_completed(&self.requirements, state)
    }
}

/// Raw registry contents as loaded from data files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldData {
    #[serde(default)]
    pub routes: Vec<RouteDef>,
    #[serde(default)]
    pub towns: Vec<TownDef>,
    #[serde(default)]
    pub dungeons: Vec<DungeonDef>,
    #[serde(default)]
    pub gyms: Vec<GymDef>,
    #[serde(default)]
    pub environments: Vec<EnvironmentDef>,
}
