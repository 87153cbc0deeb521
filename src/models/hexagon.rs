//! Hexagon grid model: six slices of concentric triangular levels.
//!
//! A level at index `j` holds `2*j + 1` tiles, so a slice is a triangular
//! wedge and six wedges rotated by 60° form the hexagon. Edits never mutate a
//! hexagon in place; [`Hexagon::apply_edit`] returns the next value.

use anyhow::{Context, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::RgbColor;

/// Number of 60° slices in a hexagon.
pub const SLICE_COUNT: usize = 6;

/// Number of concentric levels in every slice.
pub const LEVEL_COUNT: usize = 7;

/// Total tiles in a hexagon (6 × 49).
pub const TILE_COUNT: usize = SLICE_COUNT * LEVEL_COUNT * LEVEL_COUNT;

/// Number of tiles in the level at `level` (`2*level + 1`).
#[must_use]
pub const fn tiles_in_level(level: usize) -> usize {
    2 * level + 1
}

/// Address of a single tile: (slice, level, tile index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileAddress {
    /// Slice index (0-5)
    pub slice: usize,
    /// Level index (0-6), counted outward from the center
    pub level: usize,
    /// Tile index within the level (0..=2*level)
    pub tile: usize,
}

impl TileAddress {
    /// Creates a new address. Does not validate; see [`TileAddress::is_valid`].
    #[must_use]
    pub const fn new(slice: usize, level: usize, tile: usize) -> Self {
        Self { slice, level, tile }
    }

    /// Returns true if the address names a tile that exists in every hexagon.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.slice < SLICE_COUNT && self.level < LEVEL_COUNT && self.tile < tiles_in_level(self.level)
    }

    /// Same level and tile index in another slice.
    #[must_use]
    pub const fn in_slice(&self, slice: usize) -> Self {
        Self::new(slice, self.level, self.tile)
    }
}

/// A single colorable cell.
///
/// Serialized as a string: `""` when empty, `"#RRGGBB"` when painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile(Option<RgbColor>);

impl Tile {
    /// An uncolored tile.
    pub const EMPTY: Self = Self(None);

    /// A tile painted with `color`.
    #[must_use]
    pub const fn painted(color: RgbColor) -> Self {
        Self(Some(color))
    }

    /// The stored color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<RgbColor> {
        self.0
    }

    /// Returns true if the tile has not been painted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl Serialize for Tile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(color) => serializer.serialize_str(&color.to_hex()),
            None => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(Self::EMPTY);
        }
        RgbColor::from_hex(&raw)
            .map(Self::painted)
            .map_err(|e| de::Error::custom(format!("{e:#}")))
    }
}

/// One concentric row of a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    tiles: Vec<Tile>,
}

impl Level {
    fn blank(index: usize) -> Self {
        Self {
            tiles: vec![Tile::EMPTY; tiles_in_level(index)],
        }
    }

    /// Tiles of this level, left to right.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// One 60° wedge of the hexagon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    levels: Vec<Level>,
}

impl Slice {
    fn blank() -> Self {
        Self {
            levels: (0..LEVEL_COUNT).map(Level::blank).collect(),
        }
    }

    /// Levels of this slice, center outward.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}

/// The complete mosaic.
///
/// # Validation
///
/// - exactly [`SLICE_COUNT`] slices
/// - exactly [`LEVEL_COUNT`] levels per slice
/// - level `j` holds exactly `2*j + 1` tiles
///
/// Values built by this module always satisfy these rules; [`Hexagon::validate`]
/// exists for values that came from deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagon {
    slices: Vec<Slice>,
}

impl Hexagon {
    /// Builds a hexagon with every tile empty.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            slices: (0..SLICE_COUNT).map(|_| Slice::blank()).collect(),
        }
    }

    /// Slices of the hexagon in rotation order.
    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Looks up a tile by address.
    #[must_use]
    pub fn tile(&self, address: TileAddress) -> Option<&Tile> {
        self.slices
            .get(address.slice)?
            .levels
            .get(address.level)?
            .tiles
            .get(address.tile)
    }

    /// Iterates every tile with its address in slice, level, tile order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileAddress, &Tile)> + '_ {
        self.slices.iter().enumerate().flat_map(|(i, slice)| {
            slice.levels.iter().enumerate().flat_map(move |(j, level)| {
                level
                    .tiles
                    .iter()
                    .enumerate()
                    .map(move |(k, tile)| (TileAddress::new(i, j, k), tile))
            })
        })
    }

    /// Counts tiles painted exactly `color`.
    #[must_use]
    pub fn count_tiles_of_color(&self, color: RgbColor) -> usize {
        self.tiles()
            .filter(|(_, tile)| tile.color() == Some(color))
            .count()
    }

    /// Counts tiles that have not been painted.
    #[must_use]
    pub fn count_empty_tiles(&self) -> usize {
        self.tiles().filter(|(_, tile)| tile.is_empty()).count()
    }

    /// Addresses an edit at `address` would recolor.
    ///
    /// Mirror mode fans the edit out to the same level and tile index in all
    /// six slices, clicked slice included.
    #[must_use]
    pub fn edit_targets(address: TileAddress, mirror: bool) -> Vec<TileAddress> {
        if mirror {
            (0..SLICE_COUNT).map(|s| address.in_slice(s)).collect()
        } else {
            vec![address]
        }
    }

    /// Returns a new hexagon with the edit applied; `self` is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `address` is out of bounds. The front-end only emits
    /// addresses of tiles it rendered, so this is a programming error.
    #[must_use]
    pub fn apply_edit(&self, address: TileAddress, color: RgbColor, mirror: bool) -> Self {
        assert!(
            address.is_valid(),
            "tile address out of bounds: {address:?}"
        );

        let mut next = self.clone();
        for target in Self::edit_targets(address, mirror) {
            next.slices[target.slice].levels[target.level].tiles[target.tile] =
                Tile::painted(color);
        }
        next
    }

    /// Checks the fixed nested shape.
    pub fn validate(&self) -> Result<()> {
        if self.slices.len() != SLICE_COUNT {
            anyhow::bail!(
                "Expected {SLICE_COUNT} slices, found {}",
                self.slices.len()
            );
        }

        for (i, slice) in self.slices.iter().enumerate() {
            if slice.levels.len() != LEVEL_COUNT {
                anyhow::bail!(
                    "Slice {i}: expected {LEVEL_COUNT} levels, found {}",
                    slice.levels.len()
                );
            }
            for (j, level) in slice.levels.iter().enumerate() {
                let expected = tiles_in_level(j);
                if level.tiles.len() != expected {
                    anyhow::bail!(
                        "Slice {i}, level {j}: expected {expected} tiles, found {}",
                        level.tiles.len()
                    );
                }
            }
        }

        Ok(())
    }

    /// Serializes to the nested-array JSON blob.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize hexagon")
    }

    /// Parses and validates a nested-array JSON blob.
    pub fn from_json(json: &str) -> Result<Self> {
        let hexagon: Self = serde_json::from_str(json).context("Failed to parse hexagon JSON")?;
        hexagon.validate().context("Hexagon has an invalid shape")?;
        Ok(hexagon)
    }
}

impl Default for Hexagon {
    fn default() -> Self {
        Self::blank()
    }
}
