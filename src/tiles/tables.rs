use super::constants::DEFAULT_TILES;
use super::types::{TileColor, TileId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lookup tables mapping a tile type key to its type tag and its color.
///
/// The two tables are independent: a key may be present in one and missing
/// from the other, in which case only the matching field of a tile resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileTables {
    types: BTreeMap<String, TileId>,
    colors: BTreeMap<String, TileColor>,
}

impl TileTables {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables filled with the built-in tile set
    pub fn builtin() -> Self {
        let mut tables = Self::new();
        for (key, tile_id, color) in DEFAULT_TILES {
            tables.insert(key, tile_id, color);
        }
        tables
    }

    /// Register a key in both tables
    pub fn insert(&mut self, key: impl Into<String>, tile_id: TileId, color: TileColor) {
        let key = key.into();
        self.colors.insert(key.clone(), color);
        self.types.insert(key, tile_id);
    }

    /// Register a key in the type table only
    pub fn insert_type(&mut self, key: impl Into<String>, tile_id: TileId) -> Option<TileId> {
        self.types.insert(key.into(), tile_id)
    }

    /// Register a key in the color table only
    pub fn insert_color(&mut self, key: impl Into<String>, color: TileColor) -> Option<TileColor> {
        self.colors.insert(key.into(), color)
    }

    /// Look up the type tag for a key
    pub fn tile_type(&self, key: &str) -> Option<TileId> {
        self.types.get(key).copied()
    }

    /// Look up the color for a key
    pub fn color(&self, key: &str) -> Option<TileColor> {
        self.colors.get(key).copied()
    }

    /// Check if a key is present in both tables
    pub fn contains(&self, key: &str) -> bool {
        self.types.contains_key(key) && self.colors.contains_key(key)
    }

    /// Keys known to either table, sorted and without duplicates
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .types
            .keys()
            .chain(self.colors.keys())
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.colors.is_empty()
    }
}
