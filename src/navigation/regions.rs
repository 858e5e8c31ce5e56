//! Region progression and harbor travel.

use super::events::{AccessError, AnalyticsEvent, NavigationEvent};
use super::movement::land_in_town;
use crate::core::constants::{queue_slots_gained_from_region, MAX_AVAILABLE_REGION};
use crate::core::game_state::GameState;
use crate::world::{Region, World};

/// Whether the player may unlock the region after their highest one.
pub fn can_advance_region(state: &GameState, world: &World) -> bool {
    let highest = state.player.highest_region();
    if highest >= MAX_AVAILABLE_REGION {
        return false;
    }
    let Some(next) = highest.next() else {
        return false;
    };

    if !state.challenges.require_complete_pokedex {
        return world
            .town(next.starting_town())
            .is_some_and(|town| town.is_unlocked(state));
    }

    // Complete dex challenge: every species native so far must be caught
    state.pokedex.caught_native_count(highest) >= highest.species_total() as usize
}

/// Moves the player into the next region's starting town.
///
/// Does nothing (no events) when [`can_advance_region`] is false or the
/// starting town is not in the registry. Once allowed, the player always
/// lands, even if the complete dex challenge let them past a locked town.
pub fn advance_to_next_region(state: &mut GameState, world: &World) -> Vec<NavigationEvent> {
    if !can_advance_region(state, world) {
        return Vec::new();
    }
    let leaving = state.player.highest_region();
    let Some(town) = leaving
        .next()
        .and_then(|next| world.town(next.starting_town()))
    else {
        tracing::debug!(from = %leaving, "next starting town is not registered");
        return Vec::new();
    };

    let Some(new_region) = state.player.raise_highest_region() else {
        return Vec::new();
    };
    state
        .breeding
        .gain_queue_slots(queue_slots_gained_from_region(leaving));
    land_in_town(state, &town.name);
    state.player.set_region(new_region);

    tracing::info!(from = %leaving, to = %new_region, "advanced to next region");
    vec![
        NavigationEvent::Analytics(AnalyticsEvent::new(
            "new region",
            "new region",
            new_region.name(),
            state.statistics.seconds_played(),
        )),
        NavigationEvent::Analytics(AnalyticsEvent::new(
            "attack measurement",
            "new region",
            new_region.name(),
            state.battle.party_attack,
        )),
    ]
}

/// First region, scanning upward from the player's current one, whose
/// harbor town is unlocked. Kanto's dock additionally needs the player to
/// have reached a later region.
pub fn find_accessible_harbor_region(state: &GameState, world: &World) -> Option<Region> {
    let current = state.player.region();
    let highest = state.player.highest_region();

    Region::ALL[current.index()..].iter().copied().find(|&region| {
        if region == Region::Kanto && highest == Region::Kanto {
            return false;
        }
        world
            .town(region.harbor_town())
            .is_some_and(|town| town.is_unlocked(state))
    })
}

/// Opens the ship travel menu, or explains why the dock is closed.
pub fn open_ship_modal(state: &GameState, world: &World) -> Vec<NavigationEvent> {
    match find_accessible_harbor_region(state, world) {
        Some(region) => vec![NavigationEvent::ShipModalOpened { region }],
        None => vec![AccessError::NoHarborAccess.into()],
    }
}
