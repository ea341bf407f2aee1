use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type alias for tile type tags (u16 allows 0-65,535 tile types)
pub type TileId = u16;

/// RGBA color of a tile type, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileColor(pub [u8; 4]);

impl TileColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.0[3] == 0
    }

    /// Hex notation, e.g. `#58a040ff`
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0;
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

impl From<[u8; 4]> for TileColor {
    fn from(rgba: [u8; 4]) -> Self {
        Self(rgba)
    }
}

impl From<(u8, u8, u8)> for TileColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<TileColor> for Color {
    fn from(color: TileColor) -> Self {
        let [r, g, b, a] = color.0;
        Color::srgba_u8(r, g, b, a)
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Unique identifier of a single tile instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileUid(String);

impl TileUid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TileUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
