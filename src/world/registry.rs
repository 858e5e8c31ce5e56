//! Read-only lookup of every route, town, dungeon and gym.

use super::types::{
    DungeonDef, Environment, EnvironmentDef, GymDef, Region, RouteDef, TownDef, WorldData,
};
use std::collections::{BTreeMap, HashMap};

/// Errors raised while building a [`World`] from data.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("failed to parse world data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("route numbers start at 1 (found route 0 in the {0} region)")]
    InvalidRouteNumber(Region),

    #[error("route {number} is defined twice in the {region} region")]
    DuplicateRoute { region: Region, number: u32 },

    #[error("town '{0}' is defined twice")]
    DuplicateTown(String),

    #[error("dungeon '{0}' has no town of the same name")]
    OrphanDungeon(String),

    #[error("gym in '{0}' has no matching town")]
    OrphanGym(String),
}

/// The location registry.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Sorted by (region, number); the order defines normalized numbering
    routes: Vec<RouteDef>,
    towns: Vec<TownDef>,
    dungeons: Vec<DungeonDef>,
    gyms: Vec<GymDef>,
    environments: Vec<EnvironmentDef>,
    route_index: BTreeMap<(Region, u32), usize>,
    town_index: HashMap<String, usize>,
    dungeon_index: HashMap<String, usize>,
    gym_index: HashMap<String, usize>,
}

impl World {
    /// Validates raw data and builds the lookup tables.
    pub fn from_data(data: WorldData) -> Result<Self, WorldError> {
        let WorldData {
            mut routes,
            towns,
            dungeons,
            gyms,
            environments,
        } = data;

        routes.sort_by_key(|r| (r.region, r.number));
        let mut route_index = BTreeMap::new();
        for (i, route) in routes.iter().enumerate() {
            if route.number == 0 {
                return Err(WorldError::InvalidRouteNumber(route.region));
            }
            if route_index.insert((route.region, route.number), i).is_some() {
                return Err(WorldError::DuplicateRoute {
                    region: route.region,
                    number: route.number,
                });
            }
        }

        let mut town_index = HashMap::new();
        for (i, town) in towns.iter().enumerate() {
            if town_index.insert(town.name.clone(), i).is_some() {
                return Err(WorldError::DuplicateTown(town.name.clone()));
            }
        }

        let mut dungeon_index = HashMap::new();
        for (i, dungeon) in dungeons.iter().enumerate() {
            if !town_index.contains_key(&dungeon.name) {
                return Err(WorldError::OrphanDungeon(dungeon.name.clone()));
            }
            dungeon_index.insert(dungeon.name.clone(), i);
        }

        let mut gym_index = HashMap::new();
        for (i, gym) in gyms.iter().enumerate() {
            if !town_index.contains_key(&gym.town) {
                return Err(WorldError::OrphanGym(gym.town.clone()));
            }
            gym_index.insert(gym.town.clone(), i);
        }

        Ok(Self {
            routes,
            towns,
            dungeons,
            gyms,
            environments,
            route_index,
            town_index,
            dungeon_index,
            gym_index,
        })
    }

    /// Parses a JSON document shaped like [`WorldData`].
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        let data: WorldData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    pub fn route(&self, region: Region, number: u32) -> Option<&RouteDef> {
        self.route_index
            .get(&(region, number))
            .map(|&i| &self.routes[i])
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn routes_in(&self, region: Region) -> impl Iterator<Item = &RouteDef> {
        self.routes.iter().filter(move |r| r.region == region)
    }

    pub fn town(&self, name: &str) -> Option<&TownDef> {
        self.town_index.get(name).map(|&i| &self.towns[i])
    }

    pub fn towns(&self) -> &[TownDef] {
        &self.towns
    }

    /// Dungeon hosted by `town`, if any.
    pub fn dungeon(&self, town: &str) -> Option<&DungeonDef> {
        self.dungeon_index.get(town).map(|&i| &self.dungeons[i])
    }

    /// Gym hosted by `town`, if any.
    pub fn gym(&self, town: &str) -> Option<&GymDef> {
        self.gym_index.get(town).map(|&i| &self.gyms[i])
    }

    /// Canonical number of a route across all regions (1-based, in registry
    /// order). Routes missing from the registry keep their raw number.
    pub fn normalized_route_number(&self, region: Region, number: u32) -> u32 {
        match self.route_index.get(&(region, number)) {
            Some(&i) => i as u32 + 1,
            None => number,
        }
    }

    pub fn is_water_route(&self, region: Region, route: u32) -> bool {
        self.environments
            .iter()
            .any(|e| e.environment == Environment::Water && e.contains_route(region, route))
    }

    /// First environment, in declaration order, containing the route.
    pub fn route_environment(&self, region: Region, route: u32) -> Option<Environment> {
        self.environments
            .iter()
            .find(|e| e.contains_route(region, route))
            .map(|e| e.environment)
    }

    /// First environment, in declaration order, containing the town.
    pub fn town_environment(&self, region: Region, town: &str) -> Option<Environment> {
        self.environments
            .iter()
            .find(|e| e.contains_town(region, town))
            .map(|e| e.environment)
    }
}
