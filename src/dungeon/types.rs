//! Dungeon tile state and its derived presentation.

use serde::{Deserialize, Serialize};

/// Kind of content on a dungeon tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Empty,
    /// Where the player starts the floor
    Entrance,
    Enemy,
    Chest,
    Boss,
}

impl TileKind {
    /// Name used in CSS classes and labels
    pub fn name(&self) -> &'static str {
        match self {
            TileKind::Empty => "empty",
            TileKind::Entrance => "entrance",
            TileKind::Enemy => "enemy",
            TileKind::Chest => "chest",
            TileKind::Boss => "boss",
        }
    }
}

/// A single cell of a dungeon floor.
///
/// `css_class` and `a11y_label` are recomputed on every flag write, so they
/// are never stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonTile {
    kind: TileKind,
    visible: bool,
    visited: bool,
    has_player: bool,
    css_class: String,
    a11y_label: String,
}

impl DungeonTile {
    pub fn new(kind: TileKind) -> Self {
        let mut tile = Self {
            kind,
            visible: false,
            visited: false,
            has_player: false,
            css_class: String::new(),
            a11y_label: String::new(),
        };
        tile.refresh();
        tile
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn has_player(&self) -> bool {
        self.has_player
    }

    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    pub fn a11y_label(&self) -> &str {
        &self.a11y_label
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.refresh();
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
        self.refresh();
    }

    pub fn set_has_player(&mut self, has_player: bool) {
        self.has_player = has_player;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.css_class = self.calculate_css_class();
        self.a11y_label = self.calculate_a11y_label();
    }

    pub fn calculate_css_class(&self) -> String {
        // Hidden tiles reveal nothing about their content
        if !self.visible {
            return "tile tile-invisible".to_string();
        }
        if self.has_player {
            return "tile tile-player".to_string();
        }

        let mut css = vec!["tile".to_string()];
        if self.visited {
            css.push("tile-visited".to_string());
        }
        css.push(format!("tile-{}", self.kind.name()));
        css.join(" ")
    }

    pub fn calculate_a11y_label(&self) -> String {
        if !self.visible {
            return "Tile".to_string();
        }

        let mut label = format!("{} Tile", self.kind.name());
        if self.visited {
            label.push_str(" (Visited)");
        }
        if self.has_player {
            label.push_str(" (Current Location)");
        }
        label
    }
}
