use crate::progress::{BadgeCase, KeyItems, Pokedex, Statistics};
use crate::world::Region;
use serde::{Deserialize, Serialize};

/// What the main screen is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Idle,
    Paused,
    Fighting,
    Gym,
    Dungeon,
    Town,
    Shop,
}

/// The concrete place the player is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    Route { region: Region, number: u32 },
    Town(&'a str),
}

/// Where the player is on the world map.
///
/// Fields are private: position only changes through the navigation
/// functions, which keep route/town/region consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedPlayer")]
pub struct PlayerState {
    region: Region,
    /// Island or area selector within the current region (0 = main island)
    #[serde(default)]
    subregion: u32,
    /// Current route number, 0 while in a town
    route: u32,
    /// Last town entered
    town: Option<String>,
    highest_region: Region,
}

/// On-disk shape of [`PlayerState`], normalised on load.
#[derive(Deserialize)]
struct SavedPlayer {
    region: Region,
    #[serde(default)]
    subregion: u32,
    route: u32,
    town: Option<String>,
    highest_region: Region,
}

impl From<SavedPlayer> for PlayerState {
    fn from(saved: SavedPlayer) -> Self {
        let mut player = Self::restore(
            saved.region,
            saved.route,
            saved.town,
            saved.highest_region,
        );
        player.subregion = saved.subregion;
        player
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// A fresh player standing in Kanto's starting town.
    pub fn new() -> Self {
        Self {
            region: Region::Kanto,
            subregion: 0,
            route: 0,
            town: Some(Region::Kanto.starting_town().to_string()),
            highest_region: Region::Kanto,
        }
    }

    /// Rebuilds a position from saved values.
    /// `highest_region` is raised to `region` if it lags behind.
    pub fn restore(
        region: Region,
        route: u32,
        town: Option<String>,
        highest_region: Region,
    ) -> Self {
        Self {
            region,
            subregion: 0,
            route,
            town,
            highest_region: highest_region.max(region),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn subregion(&self) -> u32 {
        self.subregion
    }

    pub fn route(&self) -> u32 {
        self.route
    }

    pub fn town(&self) -> Option<&str> {
        self.town.as_deref()
    }

    pub fn highest_region(&self) -> Region {
        self.highest_region
    }

    pub fn is_on_route(&self) -> bool {
        self.route > 0
    }

    /// Route if one is active, otherwise the last town.
    pub fn location(&self) -> Option<Location<'_>> {
        if self.is_on_route() {
            Some(Location::Route {
                region: self.region,
                number: self.route,
            })
        } else {
            self.town().map(Location::Town)
        }
    }

    /// Picks an island/area within the current region.
    pub fn select_subregion(&mut self, subregion: u32) {
        self.subregion = subregion;
    }

    pub(crate) fn enter_route(&mut self, route: u32, region: Region) {
        self.route = route;
        self.set_region(region);
    }

    pub(crate) fn enter_town(&mut self, name: &str) {
        self.route = 0;
        self.town = Some(name.to_string());
    }

    pub(crate) fn set_region(&mut self, region: Region) {
        if self.region != region {
            self.region = region;
            // Always back to the main island when changing regions
            self.subregion = 0;
        }
    }

    /// Bumps the highest region reached; returns the new value, or `None`
    /// when already at the last region.
    pub(crate) fn raise_highest_region(&mut self) -> Option<Region> {
        let next = self.highest_region.next()?;
        self.highest_region = next;
        Some(next)
    }
}

/// Battle-side state the navigation layer reads or resets.
#[derive(Debug, Clone, Default)]
pub struct BattleState {
    /// A catch animation is in progress; swapping the enemy would cancel it
    pub catching: bool,
    pub enemy: Option<String>,
    /// Party attack as computed by the battle layer, reported on region change
    pub party_attack: u64,
}

impl BattleState {
    pub fn is_catching(&self) -> bool {
        self.catching
    }

    pub fn clear_enemy(&mut self) {
        self.enemy = None;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreedingState {
    pub queue_slots: u32,
}

impl BreedingState {
    pub fn gain_queue_slots(&mut self, amount: u32) {
        self.queue_slots = self.queue_slots.saturating_add(amount);
    }
}

/// Optional self-imposed challenge modes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Challenges {
    /// Region travel requires every native species caught
    pub require_complete_pokedex: bool,
}

/// Everything the navigation layer reads and writes for one save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerState,
    #[serde(default)]
    mode: GameMode,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub badges: BadgeCase,
    #[serde(default)]
    pub key_items: KeyItems,
    #[serde(default)]
    pub pokedex: Pokedex,
    /// Transient, not saved
    #[serde(skip)]
    pub battle: BattleState,
    #[serde(default)]
    pub breeding: BreedingState,
    #[serde(default)]
    pub challenges: Challenges,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a restored player position with empty progress.
    pub fn with_player(player: PlayerState) -> Self {
        Self {
            player,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_in_pallet_town() {
        let player = PlayerState::new();
        assert_eq!(player.region(), Region::Kanto);
        assert_eq!(player.route(), 0);
        assert_eq!(player.town(), Some("Pallet Town"));
        assert_eq!(player.location(), Some(Location::Town("Pallet Town")));
    }

    #[test]
    fn test_region_change_resets_subregion() {
        let mut player = PlayerState::new();
        player.select_subregion(2);

        // Same region keeps the selection
        player.enter_route(1, Region::Kanto);
        assert_eq!(player.subregion(), 2);

        player.enter_route(29, Region::Johto);
        assert_eq!(player.subregion(), 0);
        assert_eq!(
            player.location(),
            Some(Location::Route {
                region: Region::Johto,
                number: 29
            })
        );
    }

    #[test]
    fn test_entering_town_clears_route() {
        let mut player = PlayerState::restore(Region::Kanto, 3, None, Region::Kanto);
        player.enter_town("Pewter City");
        assert!(!player.is_on_route());
        assert_eq!(player.location(), Some(Location::Town("Pewter City")));
    }

    #[test]
    fn test_highest_region_stops_at_last_region() {
        let mut player = PlayerState::restore(Region::Alola, 0, None, Region::Kalos);
        assert_eq!(player.highest_region(), Region::Alola);
        assert_eq!(player.raise_highest_region(), None);
        assert_eq!(player.highest_region(), Region::Alola);
    }

    #[test]
    fn test_mode_is_skipped_when_missing_from_save() {
        let json = r#"{"player":{"region":"johto","route":0,"town":"Olivine City","highest_region":"johto"}}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.mode(), GameMode::Idle);
        assert_eq!(state.player.town(), Some("Olivine City"));
        assert!(!state.battle.is_catching());
    }

    #[test]
    fn test_loaded_player_highest_region_catches_up() {
        let json = r#"{"region":"johto","subregion":2,"route":29,"town":null,"highest_region":"kanto"}"#;
        let player: PlayerState = serde_json::from_str(json).unwrap();
        assert_eq!(player.region(), Region::Johto);
        assert_eq!(player.highest_region(), Region::Johto);
        assert_eq!(player.subregion(), 2);
        assert_eq!(player.route(), 29);

        let reloaded: PlayerState =
            serde_json::from_str(&serde_json::to_string(&player).unwrap()).unwrap();
        assert_eq!(reloaded, player);
    }
}
