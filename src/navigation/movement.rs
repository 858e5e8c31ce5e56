//! Moving the player between routes and towns.

use super::access::{check_route_access, check_town_access};
use super::events::NavigationEvent;
use crate::core::game_state::{GameMode, GameState};
use crate::world::{Region, World};

/// Moves the player onto a route.
///
/// On success the route and region are committed before the mode switches
/// to fighting. On failure nothing changes and a single notification is
/// returned.
pub fn move_to_route(
    state: &mut GameState,
    world: &World,
    route: u32,
    region: Region,
) -> Vec<NavigationEvent> {
    let mut events = Vec::new();

    if let Err(err) = check_route_access(state, world, route, region) {
        tracing::debug!(route, %region, reason = %err, "route move refused");
        events.push(err.into());
        return events;
    }

    let needs_new_enemy = route != state.player.route();
    state.player.enter_route(route, region);
    if needs_new_enemy && !state.battle.is_catching() {
        events.push(NavigationEvent::EncounterRequested { region, route });
    }
    state.set_mode(GameMode::Fighting);

    events
}

/// Same as [`move_to_route`] for raw UI input. Numeric text with no
/// fractional part (`"5"`, `"5.0"`) is a route number; anything else is
/// ignored without a notification.
pub fn move_to_route_input(
    state: &mut GameState,
    world: &World,
    raw: &str,
    region: Region,
) -> Vec<NavigationEvent> {
    match parse_route_number(raw) {
        Some(route) => move_to_route(state, world, route, region),
        None => Vec::new(),
    }
}

fn parse_route_number(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

/// Moves the player into a town.
pub fn move_to_town(state: &mut GameState, world: &World, town: &str) -> Vec<NavigationEvent> {
    if let Err(err) = check_town_access(state, world, town) {
        tracing::debug!(town, reason = %err, "town move refused");
        return vec![err.into()];
    }

    land_in_town(state, town);
    Vec::new()
}

/// Commits a town move without any access check.
pub(crate) fn land_in_town(state: &mut GameState, town: &str) {
    state.set_mode(GameMode::Idle);
    state.player.enter_town(town);
    state.battle.clear_enemy();
    // Last, so everything reading the town sees the new values
    state.set_mode(GameMode::Town);
}
