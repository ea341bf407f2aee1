use super::tables::TileTables;
use super::types::{TileColor, TileId, TileUid};
use bevy::prelude::*;

/// A single tile instance.
///
/// `tile_type` and `color` are always resolved together from the same key, so
/// they stay consistent with the tables they were read from. A key missing from
/// a table leaves the matching field as `None`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Tile {
    id: TileUid,
    tile_type: Option<TileId>,
    color: Option<TileColor>,
}

impl Tile {
    /// Build a tile for `key` using the given tables
    pub fn new(id: TileUid, key: &str, tables: &TileTables) -> Self {
        Self {
            id,
            tile_type: tables.tile_type(key),
            color: tables.color(key),
        }
    }

    /// Retype the tile. The id is kept.
    pub fn set_tile_type(&mut self, key: &str, tables: &TileTables) {
        self.color = tables.color(key);
        self.tile_type = tables.tile_type(key);
    }

    pub fn tile_type(&self) -> Option<TileId> {
        self.tile_type
    }

    pub fn color(&self) -> Option<TileColor> {
        self.color
    }

    pub fn id(&self) -> &TileUid {
        &self.id
    }

    /// Both type and color were found in the tables
    pub fn is_resolved(&self) -> bool {
        self.tile_type.is_some() && self.color.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::constants::*;

    #[test]
    fn test_new_resolves_both_fields() {
        let tables = TileTables::builtin();
        let tile = Tile::new(TileUid::new("t-1"), KEY_GRASS, &tables);

        assert_eq!(tile.tile_type(), Some(TILE_GRASS));
        assert_eq!(tile.color(), Some(COLOR_GRASS));
        assert_eq!(tile.id().as_str(), "t-1");
        assert!(tile.is_resolved());
    }

    #[test]
    fn test_set_tile_type_keeps_id() {
        let tables = TileTables::builtin();
        let mut tile = Tile::new(TileUid::new("t-1"), KEY_GRASS, &tables);

        tile.set_tile_type(KEY_SAND, &tables);

        assert_eq!(tile.tile_type(), Some(TILE_SAND));
        assert_eq!(tile.color(), Some(COLOR_SAND));
        assert_eq!(tile.id().as_str(), "t-1");
    }

    #[test]
    fn test_set_unknown_type_clears_fields() {
        let tables = TileTables::builtin();
        let mut tile = Tile::new(TileUid::new("t-1"), KEY_STONE, &tables);

        tile.set_tile_type("lava", &tables);

        assert_eq!(tile.tile_type(), None);
        assert_eq!(tile.color(), None);
        assert!(!tile.is_resolved());
    }
}
