//! Unlock requirements attached to routes, towns and gyms.

use super::types::Region;
use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};

fn default_amount() -> u64 {
    1
}

/// A single condition gating access to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// Defeat a number of wild Pokémon on a route
    RouteKill {
        region: Region,
        route: u32,
        amount: u64,
    },
    /// Own a gym badge
    GymBadge { badge: String },
    /// Clear a dungeon a number of times
    ClearDungeon {
        dungeon: String,
        #[serde(default = "default_amount")]
        amount: u64,
    },
    /// Own a key item
    KeyItem { item: String },
    /// Any one of the nested requirements
    OneOf { requirements: Vec<Requirement> },
}

impl Requirement {
    pub fn is_completed(&self, state: &GameState) -> bool {
        match self {
            Requirement::RouteKill {
                region,
                route,
                amount,
            } => state.statistics.route_kills(*region, *route) >= *amount,
            Requirement::GymBadge { badge } => state.badges.has_badge(badge),
            Requirement::ClearDungeon { dungeon, amount } => {
                state.statistics.dungeons_cleared(dungeon) >= *amount
            }
            Requirement::KeyItem { item } => state.key_items.has(item),
            Requirement::OneOf { requirements } => {
                requirements.iter().any(|r| r.is_completed(state))
            }
        }
    }

    /// What the player still has to do, shown when access is refused.
    pub fn hint(&self) -> String {
        match self {
            Requirement::RouteKill { route, amount, .. } => {
                format!("Defeat {} Pokémon on Route {}.", amount, route)
            }
            Requirement::GymBadge { badge } => format!("Requires the {} Badge.", badge),
            Requirement::ClearDungeon { dungeon, amount } => {
                if *amount > 1 {
                    format!("Requires clearing {} {} times.", dungeon, amount)
                } else {
                    format!("Requires clearing {}.", dungeon)
                }
            }
            Requirement::KeyItem { item } => format!("Requires the {}.", item),
            Requirement::OneOf { requirements } => requirements
                .iter()
                .map(|r| r.hint())
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

/// True when every requirement is met (an empty list is always met).
pub fn all_completed(requirements: &[Requirement], state: &GameState) -> bool {
    requirements.iter().all(|r| r.is_completed(state))
}

/// Hints for the unmet requirements, in list order.
pub fn unmet_hints(requirements: &[Requirement], state: &GameState) -> Vec<String> {
    requirements
        .iter()
        .filter(|r| !r.is_completed(state))
        .map(|r| r.hint())
        .collect()
}
