//! Triangle geometry for a single slice.
//!
//! # Coordinate System
//!
//! Drawing coordinates use the y-down convention: the hexagon center is the
//! origin, level `j` sits `height * j` below it and is shifted left by
//! `half_edge * j` so every row stays centered. Slices are produced by rotating
//! slice-0 shapes by `60° * slice` about the origin (clockwise on screen).

/// Default triangle edge length in drawing units.
pub const TRIANGLE_SIZE: f64 = 40.0;

// sqrt(3); `f64::sqrt` is not const
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotates the point about the origin by `degrees` (clockwise on screen).
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x.mul_add(cos, -self.y * sin),
            y: self.x.mul_add(sin, self.y * cos),
        }
    }
}

/// Which way a triangle points within its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Odd tile indices: flat top edge, apex below
    Up,
    /// Even tile indices: apex on top, flat bottom edge
    Down,
}

impl Orientation {
    /// Orientation of the tile at `tile` within any level.
    #[must_use]
    pub const fn for_tile(tile: usize) -> Self {
        if tile % 2 == 1 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// A triangle outline ready for drawing or hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileShape {
    /// Orientation the shape was built with
    pub orientation: Orientation,
    /// Outline vertices
    pub points: [Point; 3],
}

impl TileShape {
    /// Rotates every vertex about the origin.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Self {
        Self {
            orientation: self.orientation,
            points: self.points.map(|p| p.rotated(degrees)),
        }
    }

    /// Average of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.points;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Returns true if `point` lies inside the triangle or on its edge.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let [a, b, c] = self.points;
        let d1 = edge_side(point, a, b);
        let d2 = edge_side(point, b, c);
        let d3 = edge_side(point, c, a);

        let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_negative && has_positive)
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn bounding_box(&self) -> (Point, Point) {
        let [a, b, c] = self.points;
        (
            Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }
}

fn edge_side(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x).mul_add(a.y - b.y, -(a.x - b.x) * (p.y - b.y))
}

/// Per-slice triangle layout derived from the edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    /// Triangle edge length
    pub edge: f64,
    /// Half the edge length
    pub half_edge: f64,
    /// Triangle height (`half_edge * sqrt(3)`)
    pub height: f64,
}

impl TileGeometry {
    /// Creates the geometry for triangles with the given edge length.
    #[must_use]
    pub fn new(edge: f64) -> Self {
        let half_edge = edge / 2.0;
        Self {
            edge,
            half_edge,
            height: half_edge * SQRT_3,
        }
    }

    /// Reference point of a tile before slice rotation.
    ///
    /// For a downward tile this is the apex; for an upward tile it is the
    /// midpoint of the top edge.
    #[must_use]
    pub fn origin(&self, level: usize, tile: usize) -> Point {
        let row_offset = -self.half_edge * level as f64;
        Point::new(
            self.half_edge.mul_add(tile as f64, row_offset),
            self.height * level as f64,
        )
    }

    /// Orientation of a tile (odd index up, even index down).
    #[must_use]
    pub const fn orientation(&self, tile: usize) -> Orientation {
        Orientation::for_tile(tile)
    }

    /// Outline of a tile in slice-0 coordinates.
    #[must_use]
    pub fn shape(&self, level: usize, tile: usize) -> TileShape {
        let Point { x, y } = self.origin(level, tile);
        let (h, height) = (self.half_edge, self.height);
        let orientation = self.orientation(tile);

        let points = match orientation {
            Orientation::Up => [
                Point::new(x - h, y),
                Point::new(x + h, y),
                Point::new(x, y + height),
            ],
            Orientation::Down => [
                Point::new(x, y),
                Point::new(x + h, y + height),
                Point::new(x - h, y + height),
            ],
        };

        TileShape {
            orientation,
            points,
        }
    }
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self::new(TRIANGLE_SIZE)
    }
}
