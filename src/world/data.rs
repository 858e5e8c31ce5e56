//! Built-in map data: Kanto up to Cinnabar Island plus the start of Johto.

use super::registry::{World, WorldError};
use super::requirements::Requirement;
use super::types::{
    DungeonDef, Environment, EnvironmentDef, GymDef, Region, RouteDef, TownDef, WorldData,
};

fn route_kill(region: Region, route: u32) -> Requirement {
    Requirement::RouteKill {
        region,
        route,
        amount: 10,
    }
}

fn badge(name: &str) -> Requirement {
    Requirement::GymBadge {
        badge: name.to_string(),
    }
}

fn clear(dungeon: &str) -> Requirement {
    Requirement::ClearDungeon {
        dungeon: dungeon.to_string(),
        amount: 1,
    }
}

fn route(region: Region, number: u32, requirements: Vec<Requirement>, pokemon: &[u32]) -> RouteDef {
    RouteDef {
        region,
        number,
        name: None,
        requirements,
        pokemon: pokemon.to_vec(),
    }
}

fn town(name: &str, region: Region, requirements: Vec<Requirement>) -> TownDef {
    TownDef {
        name: name.to_string(),
        region,
        requirements,
    }
}

fn gym(town: &str, leader: &str, badge_name: &str, requirements: Vec<Requirement>) -> GymDef {
    GymDef {
        town: town.to_string(),
        leader: leader.to_string(),
        badge: badge_name.to_string(),
        requirements,
    }
}

/// Returns the built-in world definition.
pub fn sample_world_data() -> WorldData {
    use Region::{Johto, Kanto};

    WorldData {
        routes: vec![
            route(Kanto, 1, vec![], &[16, 19]),
            route(Kanto, 2, vec![route_kill(Kanto, 1)], &[16, 19, 29, 32]),
            route(Kanto, 22, vec![route_kill(Kanto, 1)], &[19, 21, 56]),
            route(Kanto, 3, vec![badge("Boulder")], &[21, 29, 32, 39, 56]),
            route(Kanto, 4, vec![clear("Mt. Moon")], &[19, 21, 23, 27, 56]),
            route(Kanto, 5, vec![badge("Cascade")], &[16, 43, 52, 69]),
            route(Kanto, 6, vec![route_kill(Kanto, 5)], &[16, 43, 52, 69]),
            route(Kanto, 19, vec![badge("Thunder")], &[72]),
            route(Kanto, 20, vec![route_kill(Kanto, 19)], &[72, 90]),
            route(Kanto, 21, vec![badge("Thunder")], &[72, 114]),
            route(Johto, 29, vec![badge("Champion")], &[16, 19, 161, 163]),
        ],
        towns: vec![
            town("Pallet Town", Kanto, vec![]),
            town("Viridian City", Kanto, vec![route_kill(Kanto, 1)]),
            town("Viridian Forest", Kanto, vec![route_kill(Kanto, 2)]),
            town("Pewter City", Kanto, vec![clear("Viridian Forest")]),
            town("Mt. Moon", Kanto, vec![route_kill(Kanto, 3)]),
            town("Cerulean City", Kanto, vec![route_kill(Kanto, 4)]),
            town("Vermilion City", Kanto, vec![route_kill(Kanto, 6)]),
            town(
                "Cinnabar Island",
                Kanto,
                vec![Requirement::OneOf {
                    requirements: vec![route_kill(Kanto, 20), route_kill(Kanto, 21)],
                }],
            ),
            town("New Bark Town", Johto, vec![badge("Champion")]),
            town("Olivine City", Johto, vec![route_kill(Johto, 29)]),
        ],
        dungeons: vec![
            DungeonDef {
                name: "Viridian Forest".to_string(),
                pokemon: vec![10, 11, 13, 14, 25],
            },
            DungeonDef {
                name: "Mt. Moon".to_string(),
                pokemon: vec![35, 41, 46, 74],
            },
        ],
        gyms: vec![
            gym("Pewter City", "Brock", "Boulder", vec![]),
            gym("Cerulean City", "Misty", "Cascade", vec![badge("Boulder")]),
            gym("Vermilion City", "Lt. Surge", "Thunder", vec![badge("Cascade")]),
        ],
        environments: vec![
            EnvironmentDef {
                environment: Environment::Water,
                region: Kanto,
                routes: vec![19, 20, 21],
                towns: vec!["Cinnabar Island".to_string()],
            },
            EnvironmentDef {
                environment: Environment::Forest,
                region: Kanto,
                routes: vec![],
                towns: vec!["Viridian Forest".to_string()],
            },
            EnvironmentDef {
                environment: Environment::Cave,
                region: Kanto,
                routes: vec![],
                towns: vec!["Mt. Moon".to_string()],
            },
        ],
    }
}

impl World {
    /// The built-in map, validated.
    pub fn sample() -> Result<Self, WorldError> {
        Self::from_data(sample_world_data())
    }
}
