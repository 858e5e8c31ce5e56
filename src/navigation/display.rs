//! Map highlight classes, accessibility labels and battle backdrops.

use super::access::{has_route_access, has_town_access};
use crate::core::constants::ROUTE_KILLS_NEEDED;
use crate::core::game_state::{GameState, Location};
use crate::world::{Environment, Region, World};

/// Progress state of a map location, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    CurrentLocation,
    Locked,
    UnlockedUnfinished,
    UncaughtPokemon,
    UncaughtShinyPokemon,
    Completed,
}

impl LocationStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            LocationStatus::CurrentLocation => "currentLocation",
            LocationStatus::Locked => "locked",
            LocationStatus::UnlockedUnfinished => "unlockedUnfinished",
            LocationStatus::UncaughtPokemon => "uncaughtPokemon",
            LocationStatus::UncaughtShinyPokemon => "uncaughtShinyPokemon",
            LocationStatus::Completed => "completed",
        }
    }
}

/// Modifier appended to water routes.
pub const WATER_ROUTE_CLASS: &str = "waterRoute";

/// Catch progress for a species list, or `None` when all shinies are caught.
fn catch_status(state: &GameState, species: &[u32]) -> Option<LocationStatus> {
    if !state.pokedex.all_caught(species, false) {
        Some(LocationStatus::UncaughtPokemon)
    } else if !state.pokedex.all_caught(species, true) {
        Some(LocationStatus::UncaughtShinyPokemon)
    } else {
        None
    }
}

pub fn route_status(state: &GameState, world: &World, route: u32, region: Region) -> LocationStatus {
    let player = &state.player;
    if player.route() == route && player.region() == region {
        return LocationStatus::CurrentLocation;
    }
    if !has_route_access(state, world, route, region) {
        return LocationStatus::Locked;
    }
    if state.statistics.route_kills(region, route) < ROUTE_KILLS_NEEDED {
        return LocationStatus::UnlockedUnfinished;
    }

    let species = world
        .route(region, route)
        .map(|r| r.pokemon.as_slice())
        .unwrap_or_default();
    catch_status(state, species).unwrap_or(LocationStatus::Completed)
}

pub fn calculate_route_class(state: &GameState, world: &World, route: u32, region: Region) -> String {
    let status = route_status(state, world, route, region).css_class();
    if world.is_water_route(region, route) {
        format!("{} {}", status, WATER_ROUTE_CLASS)
    } else {
        status.to_string()
    }
}

pub fn calculate_route_a11y_label(
    state: &GameState,
    world: &World,
    route: u32,
    region: Region,
) -> String {
    match route_status(state, world, route, region) {
        LocationStatus::CurrentLocation => format!("Route {} (Current Location)", route),
        LocationStatus::Locked => format!("Route {} (Locked)", route),
        _ => format!("Route {}", route),
    }
}

pub fn town_status(state: &GameState, world: &World, town: &str) -> LocationStatus {
    if !state.player.is_on_route() && state.player.town() == Some(town) {
        return LocationStatus::CurrentLocation;
    }
    if !has_town_access(state, world, town) {
        return LocationStatus::Locked;
    }

    // Dungeon progress is checked before the gym; a finished dungeon falls
    // through to the gym check
    if let Some(dungeon) = world.dungeon(town) {
        if state.statistics.dungeons_cleared(&dungeon.name) == 0 {
            return LocationStatus::UnlockedUnfinished;
        }
        if let Some(status) = catch_status(state, &dungeon.pokemon) {
            return status;
        }
    }

    if let Some(gym) = world.gym(town) {
        if gym.is_unlocked(state) && !state.badges.has_badge(&gym.badge) {
            return LocationStatus::UnlockedUnfinished;
        }
    }

    LocationStatus::Completed
}

pub fn calculate_town_class(state: &GameState, world: &World, town: &str) -> String {
    town_status(state, world, town).css_class().to_string()
}

pub fn calculate_town_a11y_label(state: &GameState, world: &World, town: &str) -> String {
    match town_status(state, world, town) {
        LocationStatus::CurrentLocation => format!("{} (Current Location)", town),
        LocationStatus::Locked => format!("{} (Locked)", town),
        _ => town.to_string(),
    }
}

/// Environment of the player's current route, or of their town when not on
/// a route.
pub fn current_environment(state: &GameState, world: &World) -> Option<Environment> {
    match state.player.location()? {
        Location::Route { region, number } => world.route_environment(region, number),
        Location::Town(town) => world.town_environment(state.player.region(), town),
    }
}

pub fn calculate_battle_css_class(state: &GameState, world: &World) -> Option<&'static str> {
    current_environment(state, world).map(|env| env.battle_css_class())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::PlayerState;

    fn world() -> World {
        World::sample().unwrap()
    }

    fn at_route(route: u32) -> GameState {
        GameState::with_player(PlayerState::restore(
            Region::Kanto,
            route,
            Some("Pallet Town".to_string()),
            Region::Kanto,
        ))
    }

    #[test]
    fn test_route_class_progression() {
        let world = world();
        let mut state = at_route(0);

        assert_eq!(calculate_route_class(&state, &world, 1, Region::Kanto), "unlockedUnfinished");

        state.statistics.add_route_kills(Region::Kanto, 1, ROUTE_KILLS_NEEDED);
        assert_eq!(calculate_route_class(&state, &world, 1, Region::Kanto), "uncaughtPokemon");

        state.pokedex.catch(16, false);
        state.pokedex.catch(19, false);
        assert_eq!(
            calculate_route_class(&state, &world, 1, Region::Kanto),
            "uncaughtShinyPokemon"
        );

        state.pokedex.catch(16, true);
        state.pokedex.catch(19, true);
        assert_eq!(calculate_route_class(&state, &world, 1, Region::Kanto), "completed");
    }

    #[test]
    fn test_current_route_wins_over_everything() {
        let world = world();
        let state = at_route(1);
        assert_eq!(calculate_route_class(&state, &world, 1, Region::Kanto), "currentLocation");
        assert_eq!(
            calculate_route_a11y_label(&state, &world, 1, Region::Kanto),
            "Route 1 (Current Location)"
        );
        // Same number, other region
        assert_eq!(calculate_route_class(&state, &world, 1, Region::Johto), "locked");
    }

    #[test]
    fn test_water_modifier_is_appended() {
        let world = world();
        let mut state = at_route(0);
        assert_eq!(calculate_route_class(&state, &world, 19, Region::Kanto), "locked waterRoute");
        assert_eq!(
            calculate_route_a11y_label(&state, &world, 19, Region::Kanto),
            "Route 19 (Locked)"
        );

        state.badges.gain_badge("Thunder");
        assert_eq!(
            calculate_route_class(&state, &world, 19, Region::Kanto),
            "unlockedUnfinished waterRoute"
        );
        assert_eq!(calculate_route_a11y_label(&state, &world, 19, Region::Kanto), "Route 19");
    }

    #[test]
    fn test_town_labels() {
        let world = world();
        let state = at_route(0);
        assert_eq!(
            calculate_town_a11y_label(&state, &world, "Pallet Town"),
            "Pallet Town (Current Location)"
        );
        assert_eq!(
            calculate_town_a11y_label(&state, &world, "Pewter City"),
            "Pewter City (Locked)"
        );
    }

    #[test]
    fn test_town_on_route_is_not_current() {
        let world = world();
        let state = at_route(1);
        assert_eq!(calculate_town_class(&state, &world, "Pallet Town"), "completed");
        assert_eq!(calculate_town_a11y_label(&state, &world, "Pallet Town"), "Pallet Town");
    }

    #[test]
    fn test_uncleared_dungeon_is_unfinished() {
        let world = world();
        let mut state = at_route(0);
        state.statistics.add_route_kills(Region::Kanto, 2, 10);
        assert_eq!(
            calculate_town_class(&state, &world, "Viridian Forest"),
            "unlockedUnfinished"
        );

        state.statistics.add_dungeon_clear("Viridian Forest");
        assert_eq!(calculate_town_class(&state, &world, "Viridian Forest"), "uncaughtPokemon");
    }

    #[test]
    fn test_battle_backdrop() {
        let world = world();
        let state = at_route(19);
        assert_eq!(current_environment(&state, &world), Some(Environment::Water));
        assert_eq!(calculate_battle_css_class(&state, &world), Some("water"));

        let state = GameState::with_player(PlayerState::restore(
            Region::Kanto,
            0,
            Some("Mt. Moon".to_string()),
            Region::Kanto,
        ));
        assert_eq!(calculate_battle_css_class(&state, &world), Some("cave"));

        assert_eq!(calculate_battle_css_class(&at_route(1), &world), None);
    }
}
