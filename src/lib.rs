//! Tile construction: look a type key up in injected tables and attach a
//! freshly generated id.

pub mod factory;
pub mod tiles;

pub use factory::{IdGenerator, SequentialIdGenerator, TileFactory, UuidGenerator};
pub use tiles::{Tile, TileColor, TileId, TileTables, TileUid};
