//! Dungeon floor grid and player marker movement.

use super::types::{DungeonTile, TileKind};

/// Direction offsets: (dx, dy) for up, right, down, left
pub const DIR_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DungeonError {
    #[error("dungeon floor has no tiles")]
    EmptyLayout,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("position ({x}, {y}) is outside the floor")]
    OutOfBounds { x: usize, y: usize },
}

/// One generated dungeon floor.
///
/// Tiles are independent cells; any in-bounds tile can be entered.
#[derive(Debug, Clone)]
pub struct DungeonFloor {
    /// Row-major: `tiles[y][x]`
    tiles: Vec<Vec<DungeonTile>>,
    player_position: (usize, usize),
}

impl DungeonFloor {
    /// Builds a floor from a tile layout and puts the player on `entrance`.
    pub fn new(layout: Vec<Vec<TileKind>>, entrance: (usize, usize)) -> Result<Self, DungeonError> {
        let width = layout.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(DungeonError::EmptyLayout);
        }
        if let Some((row, found)) = layout
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != width)
        {
            return Err(DungeonError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        let tiles = layout
            .into_iter()
            .map(|row| row.into_iter().map(DungeonTile::new).collect())
            .collect();

        let mut floor = Self {
            tiles,
            player_position: entrance,
        };
        if floor.tile(entrance.0, entrance.1).is_none() {
            return Err(DungeonError::OutOfBounds {
                x: entrance.0,
                y: entrance.1,
            });
        }
        floor.enter(entrance);
        Ok(floor)
    }

    /// (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.tiles[0].len(), self.tiles.len())
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<&DungeonTile> {
        self.tiles.get(y).and_then(|row| row.get(x))
    }

    pub fn rows(&self) -> &[Vec<DungeonTile>] {
        &self.tiles
    }

    pub fn player_position(&self) -> (usize, usize) {
        self.player_position
    }

    /// Moves the player marker. Nothing changes if `to` is off the floor.
    pub fn move_player(&mut self, to: (usize, usize)) -> Result<(), DungeonError> {
        if self.tile(to.0, to.1).is_none() {
            return Err(DungeonError::OutOfBounds { x: to.0, y: to.1 });
        }

        let (old_x, old_y) = self.player_position;
        self.tiles[old_y][old_x].set_has_player(false);
        self.enter(to);
        Ok(())
    }

    fn enter(&mut self, (x, y): (usize, usize)) {
        // Visible and visited must be set before the player marker
        let tile = &mut self.tiles[y][x];
        tile.set_visible(true);
        tile.set_visited(true);
        tile.set_has_player(true);
        self.player_position = (x, y);
        self.reveal_adjacent(x, y);
    }

    fn reveal_adjacent(&mut self, x: usize, y: usize) {
        let (width, height) = self.size();
        for (dx, dy) in DIR_OFFSETS {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height {
                let tile = &mut self.tiles[ny as usize][nx as usize];
                if !tile.is_visible() {
                    tile.set_visible(true);
                }
            }
        }
    }
}
