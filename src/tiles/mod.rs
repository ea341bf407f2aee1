pub mod constants;
pub mod serialization;
pub mod tables;
pub mod tile;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use serialization::{load_tables, load_tables_or_default, save_tables, TableFileError};
pub use tables::TileTables;
pub use tile::Tile;
pub use types::{TileColor, TileId, TileUid};
