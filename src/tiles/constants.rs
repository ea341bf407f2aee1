use super::types::TileColor;

// Tile type constants
/// Empty/air tile
pub const TILE_EMPTY: u16 = 0;

/// Grass tile
pub const TILE_GRASS: u16 = 1;

/// Dirt tile
pub const TILE_DIRT: u16 = 2;

/// Water tile
pub const TILE_WATER: u16 = 3;

/// Sand tile
pub const TILE_SAND: u16 = 4;

/// Stone tile
pub const TILE_STONE: u16 = 5;

// Tile type keys used by the built-in tables
pub const KEY_EMPTY: &str = "empty";
pub const KEY_GRASS: &str = "grass";
pub const KEY_DIRT: &str = "dirt";
pub const KEY_WATER: &str = "water";
pub const KEY_SAND: &str = "sand";
pub const KEY_STONE: &str = "stone";

// Tile colors (RGBA)
pub const COLOR_EMPTY: TileColor = TileColor::rgba(0, 0, 0, 0);
pub const COLOR_GRASS: TileColor = TileColor::rgb(88, 160, 64);
pub const COLOR_DIRT: TileColor = TileColor::rgb(120, 84, 48);
pub const COLOR_WATER: TileColor = TileColor::rgb(52, 100, 190);
pub const COLOR_SAND: TileColor = TileColor::rgb(214, 192, 130);
pub const COLOR_STONE: TileColor = TileColor::rgb(120, 120, 120);

/// Built-in (key, tile id, color) rows, in table order
pub const DEFAULT_TILES: [(&str, u16, TileColor); 6] = [
    (KEY_EMPTY, TILE_EMPTY, COLOR_EMPTY),
    (KEY_GRASS, TILE_GRASS, COLOR_GRASS),
    (KEY_DIRT, TILE_DIRT, COLOR_DIRT),
    (KEY_WATER, TILE_WATER, COLOR_WATER),
    (KEY_SAND, TILE_SAND, COLOR_SAND),
    (KEY_STONE, TILE_STONE, COLOR_STONE),
];

/// Default location of the tile table file
pub const DEFAULT_TABLE_PATH: &str = "assets/tiles.ttbl";

/// Prefix used by the sequential id generator when none is given
pub const DEFAULT_ID_PREFIX: &str = "tile";
