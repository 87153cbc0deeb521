//! Data models for the hexagon mosaic, its palette, and tile geometry.
//!
//! Models are independent of the terminal UI and of persistence.

pub mod hexagon;
pub mod palette;
pub mod rgb;
pub mod tile_geometry;

// Re-export all model types
pub use hexagon::{
    tiles_in_level, Hexagon, Level, Slice, Tile, TileAddress, LEVEL_COUNT, SLICE_COUNT, TILE_COUNT,
};
pub use palette::{Palette, PaletteEntry, NEUTRAL_FILL, TILE_OUTLINE};
pub use rgb::RgbColor;
pub use tile_geometry::{Orientation, Point, TileGeometry, TileShape, TRIANGLE_SIZE};
