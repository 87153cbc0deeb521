//! Fixed tile palette.
//!
//! The tray kit ships with three tile colors. Each entry pairs the tile's fill
//! with a contrast color used for labels and outlines drawn on top of it.

use super::{Hexagon, RgbColor};

/// Fill shown for tiles that have not been painted (light gray).
pub const NEUTRAL_FILL: RgbColor = RgbColor::new(0xD3, 0xD3, 0xD3);

/// Outline drawn between tiles (white).
pub const TILE_OUTLINE: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);

/// Gold tile fill.
pub const GOLD: RgbColor = RgbColor::new(0xED, 0xBE, 0x62);
/// Black tile fill.
pub const BLACK: RgbColor = RgbColor::new(0x4A, 0x42, 0x46);
/// White tile fill.
pub const WHITE: RgbColor = RgbColor::new(0xF0, 0xE6, 0xDA);

/// One selectable tile color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Display name (e.g., "Gold")
    pub name: &'static str,
    /// Tile fill color
    pub fill: RgbColor,
    /// Contrast color for text and borders drawn over the fill
    pub contrast: RgbColor,
}

/// Ordered list of selectable colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// The three colors of the tiled tray kit: gold, black, white.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: vec![
                PaletteEntry {
                    name: "Gold",
                    fill: GOLD,
                    contrast: BLACK,
                },
                PaletteEntry {
                    name: "Black",
                    fill: BLACK,
                    contrast: WHITE,
                },
                PaletteEntry {
                    name: "White",
                    fill: WHITE,
                    contrast: BLACK,
                },
            ],
        }
    }

    /// All entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Get an entry by index.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tile count for every entry, in palette order.
    #[must_use]
    pub fn usage<'a>(&'a self, hexagon: &Hexagon) -> Vec<(&'a PaletteEntry, usize)> {
        self.entries
            .iter()
            .map(|entry| (entry, hexagon.count_tiles_of_color(entry.fill)))
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
