//! Existence and unlock checks for routes and towns.

use super::events::AccessError;
use crate::core::game_state::GameState;
use crate::world::{default_route_name, unmet_hints, Region, World};

pub fn route_exists(world: &World, route: u32, region: Region) -> bool {
    world.route(region, route).is_some()
}

pub fn normalize_route(world: &World, route: u32, region: Region) -> u32 {
    world.normalized_route_number(region, route)
}

/// Display name for a route, whether or not it is in the registry.
pub fn route_name(world: &World, route: u32, region: Region) -> String {
    world
        .route(region, route)
        .map(|r| r.display_name())
        .unwrap_or_else(|| default_route_name(region, route))
}

/// `Ok` when the route exists and is unlocked, otherwise the reason.
pub fn check_route_access(
    state: &GameState,
    world: &World,
    route: u32,
    region: Region,
) -> Result<(), AccessError> {
    let Some(route_def) = world.route(region, route) else {
        return Err(AccessError::UnknownRoute {
            route_name: route_name(world, route, region),
            region,
        });
    };

    if route_def.is_unlocked(state) {
        Ok(())
    } else {
        Err(AccessError::RouteLocked {
            hints: unmet_hints(&route_def.requirements, state),
        })
    }
}

/// `Ok` when the town exists and is unlocked, otherwise the reason.
pub fn check_town_access(state: &GameState, world: &World, town: &str) -> Result<(), AccessError> {
    let Some(town_def) = world.town(town) else {
        return Err(AccessError::UnknownTown(town.to_string()));
    };

    if town_def.is_unlocked(state) {
        Ok(())
    } else {
        Err(AccessError::TownLocked {
            hints: unmet_hints(&town_def.requirements, state),
        })
    }
}

pub fn has_route_access(state: &GameState, world: &World, route: u32, region: Region) -> bool {
    check_route_access(state, world, route, region).is_ok()
}

pub fn has_town_access(state: &GameState, world: &World, town: &str) -> bool {
    check_town_access(state, world, town).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> World {
        World::sample().unwrap()
    }

    #[test]
    fn test_route_exists_ignores_lock_state() {
        let world = sample();
        let state = GameState::new();

        assert!(route_exists(&world, 3, Region::Kanto));
        assert!(!has_route_access(&state, &world, 3, Region::Kanto));
        assert!(!route_exists(&world, 3, Region::Johto));
    }

    #[test]
    fn test_route_access_follows_requirements() {
        let world = sample();
        let mut state = GameState::new();

        assert!(has_route_access(&state, &world, 1, Region::Kanto));
        assert!(!has_route_access(&state, &world, 2, Region::Kanto));

        state.statistics.add_route_kills(Region::Kanto, 1, 10);
        assert!(has_route_access(&state, &world, 2, Region::Kanto));
    }

    #[test]
    fn test_check_route_access_reports_reason() {
        let world = sample();
        let state = GameState::new();

        assert_eq!(
            check_route_access(&state, &world, 3, Region::Kanto),
            Err(AccessError::RouteLocked {
                hints: vec!["Requires the Boulder Badge.".to_string()]
            })
        );
        assert_eq!(
            check_route_access(&state, &world, 42, Region::Kanto),
            Err(AccessError::UnknownRoute {
                route_name: "Kanto Route 42".to_string(),
                region: Region::Kanto
            })
        );
    }

    #[test]
    fn test_town_access() {
        let world = sample();
        let mut state = GameState::new();

        assert!(has_town_access(&state, &world, "Pallet Town"));
        assert!(!has_town_access(&state, &world, "Pewter City"));
        assert!(!has_town_access(&state, &world, "Atlantis"));

        state.statistics.add_dungeon_clear("Viridian Forest");
        assert!(has_town_access(&state, &world, "Pewter City"));
    }

    #[test]
    fn test_normalize_route_delegates() {
        let world = sample();
        assert_eq!(normalize_route(&world, 1, Region::Kanto), 1);
        assert_eq!(normalize_route(&world, 22, Region::Kanto), 10);
        assert_eq!(normalize_route(&world, 29, Region::Johto), 11);
    }
}
