pub mod id;

pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};

use crate::tiles::{Tile, TileTables};
use bevy::prelude::*;

/// Builds tiles from a type key.
///
/// The factory owns the tables and the id generator it was given and keeps no
/// record of the tiles it hands out.
#[derive(Resource)]
pub struct TileFactory {
    tables: TileTables,
    ids: Box<dyn IdGenerator>,
}

impl TileFactory {
    pub fn new(tables: TileTables, ids: impl IdGenerator + 'static) -> Self {
        Self {
            tables,
            ids: Box::new(ids),
        }
    }

    /// Factory over `tables` that issues random UUIDs
    pub fn with_tables(tables: TileTables) -> Self {
        Self::new(tables, UuidGenerator)
    }

    /// Create a tile of type `key` with a fresh id.
    ///
    /// A key missing from a table leaves the matching field of the tile empty;
    /// no error is raised.
    pub fn create_instance(&self, key: &str) -> Tile {
        let id = self.ids.next_id();
        let tile = Tile::new(id, key, &self.tables);
        match missing_tables(&tile) {
            Some(tables) => warn!(
                "Tile type {:?} not in the {}, tile {} left unresolved",
                key,
                tables,
                tile.id()
            ),
            None => debug!("Created {:?} tile {}", key, tile.id()),
        }
        tile
    }

    pub fn tables(&self) -> &TileTables {
        &self.tables
    }
}

/// Which lookups came back empty for a tile
fn missing_tables(tile: &Tile) -> Option<&'static str> {
    match (tile.tile_type(), tile.color()) {
        (Some(_), Some(_)) => None,
        (None, Some(_)) => Some("type table"),
        (Some(_), None) => Some("color table"),
        (None, None) => Some("type and color tables"),
    }
}

impl Default for TileFactory {
    fn default() -> Self {
        Self::with_tables(TileTables::builtin())
    }
}

impl std::fmt::Debug for TileFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileFactory")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::constants::*;
    use crate::tiles::TileColor;

    fn example_tables() -> TileTables {
        let mut tables = TileTables::new();
        tables.insert("grass", 1, TileColor::rgb(0, 255, 0));
        tables.insert("water", 2, TileColor::rgb(0, 0, 255));
        tables
    }

    fn test_factory() -> TileFactory {
        TileFactory::new(example_tables(), SequentialIdGenerator::new("t"))
    }

    #[test]
    fn test_create_instance() {
        let factory = test_factory();
        let tile = factory.create_instance("water");

        assert_eq!(tile.tile_type(), Some(2));
        assert_eq!(tile.color(), Some(TileColor::rgb(0, 0, 255)));
        assert_eq!(tile.id().as_str(), "t-1");
    }

    #[test]
    fn test_fields_match_tables() {
        let factory = TileFactory::default();
        for key in factory.tables().keys() {
            let tile = factory.create_instance(key);
            assert_eq!(tile.tile_type(), factory.tables().tile_type(key));
            assert_eq!(tile.color(), factory.tables().color(key));
            assert!(tile.is_resolved());
        }
    }

    #[test]
    fn test_same_key_distinct_ids() {
        let factory = TileFactory::default();
        let a = factory.create_instance(KEY_GRASS);
        let b = factory.create_instance(KEY_GRASS);

        assert_eq!(a.tile_type(), b.tile_type());
        assert_eq!(a.color(), b.color());
        assert_ne!(a.id(), b.id());
        assert!(!a.id().is_empty());
        assert!(!b.id().is_empty());
    }

    #[test]
    fn test_unknown_key_degrades_silently() {
        let factory = test_factory();
        let tile = factory.create_instance("lava");

        assert_eq!(tile.tile_type(), None);
        assert_eq!(tile.color(), None);
        // Still gets an id
        assert_eq!(tile.id().as_str(), "t-1");
    }

    #[test]
    fn test_key_in_one_table_only() {
        let mut tables = example_tables();
        tables.insert_color("fog", TileColor::rgb(200, 200, 200));
        let factory = TileFactory::new(tables, SequentialIdGenerator::default());

        let tile = factory.create_instance("fog");
        assert_eq!(tile.tile_type(), None);
        assert_eq!(tile.color(), Some(TileColor::rgb(200, 200, 200)));
        assert!(!tile.is_resolved());
    }

    #[test]
    fn test_missing_tables() {
        let mut tables = example_tables();
        tables.insert_type("ice", 3);
        tables.insert_color("fog", TileColor::rgb(200, 200, 200));
        let factory = TileFactory::new(tables, SequentialIdGenerator::default());

        assert_eq!(missing_tables(&factory.create_instance("grass")), None);
        assert_eq!(missing_tables(&factory.create_instance("ice")), Some("color table"));
        assert_eq!(missing_tables(&factory.create_instance("fog")), Some("type table"));
        assert_eq!(
            missing_tables(&factory.create_instance("lava")),
            Some("type and color tables")
        );
    }

    #[test]
    fn test_retype_created_tile() {
        let factory = test_factory();
        let mut tile = factory.create_instance("grass");
        let id = tile.id().clone();

        tile.set_tile_type("water", factory.tables());

        assert_eq!(tile.tile_type(), Some(2));
        assert_eq!(tile.color(), Some(TileColor::rgb(0, 0, 255)));
        assert_eq!(tile.id(), &id);
    }

    #[test]
    fn test_spawn_as_component() {
        let mut world = World::new();
        world.insert_resource(TileFactory::new(
            TileTables::builtin(),
            SequentialIdGenerator::default(),
        ));

        let tile = world.resource::<TileFactory>().create_instance(KEY_STONE);
        let entity = world.spawn(tile).id();

        let stored = world.get::<Tile>(entity).unwrap();
        assert_eq!(stored.tile_type(), Some(TILE_STONE));
        assert_eq!(stored.id().as_str(), "tile-1");
    }
}
