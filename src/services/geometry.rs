//! Hexagon layout service: address-labeled shapes for drawing and hit testing.
//!
//! Every tile of every slice gets its outline computed once, rotated into its
//! slice, and tagged with its [`TileAddress`]. Drawing walks these shapes;
//! pointer input is attributed to whichever labeled shape contains the point,
//! so there is no inverse coordinate math.

use crate::models::{
    tiles_in_level, Hexagon, Point, RgbColor, Tile, TileAddress, TileGeometry, TileShape,
    LEVEL_COUNT, NEUTRAL_FILL, SLICE_COUNT,
};

/// Visible drawing region in drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge
    pub min_x: f64,
    /// Top edge
    pub min_y: f64,
    /// Total width
    pub width: f64,
    /// Total height
    pub height: f64,
}

impl ViewBox {
    /// Right edge.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }
}

/// View box centered on the hexagon with room for all six slices.
pub const VIEW_BOX: ViewBox = ViewBox {
    min_x: -300.0,
    min_y: -250.0,
    width: 600.0,
    height: 500.0,
};

/// Rotation applied to a slice when it is drawn.
#[must_use]
pub fn slice_rotation_degrees(slice: usize) -> f64 {
    60.0 * slice as f64
}

/// Fill used to draw a tile: its stored color, or the neutral fill.
#[must_use]
pub fn resolve_fill(tile: &Tile) -> RgbColor {
    tile.color().unwrap_or(NEUTRAL_FILL)
}

/// A tile outline in its final on-screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    /// Address this shape stands for
    pub address: TileAddress,
    /// Rotated outline
    pub shape: TileShape,
    /// Resolved fill color
    pub fill: RgbColor,
}

/// All 294 labeled tile shapes of a hexagon.
#[derive(Debug, Clone)]
pub struct HexagonLayout {
    geometry: TileGeometry,
    shapes: Vec<(TileAddress, TileShape)>,
}

impl HexagonLayout {
    /// Builds the labeled shapes for the given triangle geometry.
    #[must_use]
    pub fn new(geometry: TileGeometry) -> Self {
        let mut shapes = Vec::new();
        for slice in 0..SLICE_COUNT {
            let degrees = slice_rotation_degrees(slice);
            for level in 0..LEVEL_COUNT {
                for tile in 0..tiles_in_level(level) {
                    let shape = geometry.shape(level, tile).rotated(degrees);
                    shapes.push((TileAddress::new(slice, level, tile), shape));
                }
            }
        }

        Self { geometry, shapes }
    }

    /// Triangle geometry the layout was built from.
    #[must_use]
    pub const fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }

    /// Drawing region that contains the whole hexagon.
    #[must_use]
    pub const fn bounds(&self) -> ViewBox {
        VIEW_BOX
    }

    /// Rotated outline of one tile.
    #[must_use]
    pub fn shape(&self, address: TileAddress) -> Option<TileShape> {
        self.shapes
            .iter()
            .find(|(a, _)| *a == address)
            .map(|(_, shape)| *shape)
    }

    /// Every tile of `hexagon` with its outline and fill.
    #[must_use]
    pub fn placed_tiles(&self, hexagon: &Hexagon) -> Vec<PlacedTile> {
        self.shapes
            .iter()
            .filter_map(|(address, shape)| {
                hexagon.tile(*address).map(|tile| PlacedTile {
                    address: *address,
                    shape: *shape,
                    fill: resolve_fill(tile),
                })
            })
            .collect()
    }

    /// Address of the tile drawn under `point`, if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<TileAddress> {
        self.shapes
            .iter()
            .find(|(_, shape)| shape.contains(point))
            .map(|(address, _)| *address)
    }
}

impl Default for HexagonLayout {
    fn default() -> Self {
        Self::new(TileGeometry::default())
    }
}
