//! Counters and owned unlocks the requirement checks read.

use crate::world::Region;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Lifetime counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    route_kills: BTreeMap<Region, BTreeMap<u32, u64>>,
    #[serde(default)]
    dungeons_cleared: BTreeMap<String, u64>,
    #[serde(default)]
    seconds_played: u64,
}

impl Statistics {
    pub fn route_kills(&self, region: Region, route: u32) -> u64 {
        self.route_kills
            .get(&region)
            .and_then(|routes| routes.get(&route))
            .copied()
            .unwrap_or(0)
    }

    pub fn add_route_kill(&mut self, region: Region, route: u32) {
        self.add_route_kills(region, route, 1);
    }

    pub fn add_route_kills(&mut self, region: Region, route: u32, amount: u64) {
        let kills = self
            .route_kills
            .entry(region)
            .or_default()
            .entry(route)
            .or_insert(0);
        *kills = kills.saturating_add(amount);
    }

    pub fn dungeons_cleared(&self, dungeon: &str) -> u64 {
        self.dungeons_cleared.get(dungeon).copied().unwrap_or(0)
    }

    pub fn add_dungeon_clear(&mut self, dungeon: &str) {
        *self
            .dungeons_cleared
            .entry(dungeon.to_string())
            .or_insert(0) += 1;
    }

    pub fn seconds_played(&self) -> u64 {
        self.seconds_played
    }

    pub fn add_seconds_played(&mut self, seconds: u64) {
        self.seconds_played = self.seconds_played.saturating_add(seconds);
    }
}

/// Gym badges earned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeCase {
    badges: BTreeSet<String>,
}

impl BadgeCase {
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.contains(badge)
    }

    /// Returns false if the badge was already owned.
    pub fn gain_badge(&mut self, badge: &str) -> bool {
        self.badges.insert(badge.to_string())
    }

    pub fn count(&self) -> usize {
        self.badges.len()
    }
}

/// Story items that unlock locations (tickets, passes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyItems {
    items: BTreeSet<String>,
}

impl KeyItems {
    pub fn has(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn gain(&mut self, item: &str) -> bool {
        self.items.insert(item.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_kills_are_per_region() {
        let mut stats = Statistics::default();
        stats.add_route_kill(Region::Kanto, 1);
        stats.add_route_kills(Region::Kanto, 1, 4);

        assert_eq!(stats.route_kills(Region::Kanto, 1), 5);
        assert_eq!(stats.route_kills(Region::Johto, 1), 0);
        assert_eq!(stats.route_kills(Region::Kanto, 2), 0);
    }

    #[test]
    fn test_dungeon_clears() {
        let mut stats = Statistics::default();
        assert_eq!(stats.dungeons_cleared("Mt. Moon"), 0);
        stats.add_dungeon_clear("Mt. Moon");
        stats.add_dungeon_clear("Mt. Moon");
        assert_eq!(stats.dungeons_cleared("Mt. Moon"), 2);
    }

    #[test]
    fn test_gain_badge_once() {
        let mut badges = BadgeCase::default();
        assert!(badges.gain_badge("Boulder"));
        assert!(!badges.gain_badge("Boulder"));
        assert!(badges.has_badge("Boulder"));
        assert_eq!(badges.count(), 1);
    }

    #[test]
    fn test_statistics_save_round_trip() {
        let mut stats = Statistics::default();
        stats.add_route_kills(Region::Johto, 29, 12);
        stats.add_dungeon_clear("Viridian Forest");
        stats.add_seconds_played(90);

        let json = serde_json::to_string(&stats).unwrap();
        let loaded: Statistics = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, stats);
    }
}
