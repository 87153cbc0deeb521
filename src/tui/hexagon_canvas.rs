//! Hexagon widget: draws every tile as a filled triangle on a half-block canvas.
//!
//! Drawing units are y-down; the canvas is y-up, so points are flipped on the
//! way in. Mouse input goes the other way through [`cell_to_point`].

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Painter, Shape},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::AppState;
use crate::models::{Point, TileShape, TILE_OUTLINE};
use crate::services::ViewBox;

/// Height of a terminal row measured in column widths.
const ROW_HEIGHT_IN_COLUMNS: f64 = 2.0;

/// Smallest drawing area worth rendering into.
pub const MIN_COLUMNS: u16 = 24;
/// Smallest drawing area worth rendering into.
pub const MIN_ROWS: u16 = 10;

/// Tile outlines are only drawn once an edge spans this many pixels.
const OUTLINE_MIN_PIXELS: f64 = 12.0;

/// Largest rectangle inside `area` that shows `view` without distortion, centered.
#[must_use]
pub fn fit_drawing_area(area: Rect, view: ViewBox) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }

    let target = view.width / view.height * ROW_HEIGHT_IN_COLUMNS;
    let width = f64::from(area.width);
    let height = f64::from(area.height);

    let (fit_width, fit_height) = if width > height * target {
        ((height * target).round() as u16, area.height)
    } else {
        (area.width, (width / target).round() as u16)
    };
    let fit_width = fit_width.clamp(1, area.width);
    let fit_height = fit_height.clamp(1, area.height);

    Rect::new(
        area.x + (area.width - fit_width) / 2,
        area.y + (area.height - fit_height) / 2,
        fit_width,
        fit_height,
    )
}

/// Whether a fitted drawing area is large enough to show the hexagon.
#[must_use]
pub const fn is_drawable(area: Rect) -> bool {
    area.width >= MIN_COLUMNS && area.height >= MIN_ROWS
}

/// Drawing-unit point at the center of the terminal cell (`column`, `row`).
///
/// Returns `None` if the cell lies outside `area`.
#[must_use]
pub fn cell_to_point(area: Rect, view: ViewBox, column: u16, row: u16) -> Option<Point> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }

    let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
    let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
    Some(Point::new(
        fx.mul_add(view.width, view.min_x),
        fy.mul_add(view.height, view.min_y),
    ))
}

/// Solid triangle, filled by sampling its bounding box.
struct FilledTriangle {
    shape: TileShape,
    color: Color,
    step_x: f64,
    step_y: f64,
}

impl Shape for FilledTriangle {
    fn draw(&self, painter: &mut Painter) {
        let (min, max) = self.shape.bounding_box();
        let mut y = min.y + self.step_y / 2.0;
        while y < max.y {
            let mut x = min.x + self.step_x / 2.0;
            while x < max.x {
                if self.shape.contains(Point::new(x, y)) {
                    if let Some((px, py)) = painter.get_point(x, -y) {
                        painter.paint(px, py, self.color);
                    }
                }
                x += self.step_x;
            }
            y += self.step_y;
        }
    }
}

fn outline(shape: &TileShape, color: Color) -> [CanvasLine; 3] {
    let [a, b, c] = shape.points;
    [
        CanvasLine::new(a.x, -a.y, b.x, -b.y, color),
        CanvasLine::new(b.x, -b.y, c.x, -c.y, color),
        CanvasLine::new(c.x, -c.y, a.x, -a.y, color),
    ]
}

/// Hexagon widget
pub struct HexagonCanvas;

impl HexagonCanvas {
    /// Render the hexagon into `area` (borders included).
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let cursor = state.cursor;
        let title = format!(
            " Slice {} | Level {} | Tile {} ",
            cursor.slice + 1,
            cursor.level + 1,
            cursor.tile + 1
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let drawing = fit_drawing_area(inner, state.layout.bounds());
        if !is_drawable(drawing) {
            let warning = Paragraph::new("Terminal too small to draw the hexagon")
                .style(Style::default().fg(theme.text_muted));
            f.render_widget(warning, inner);
            return;
        }

        let view = state.layout.bounds();
        // Half the size of a half-block pixel, so neighbouring pixels are never skipped
        let step_x = view.width / f64::from(drawing.width) / 2.0;
        let step_y = view.height / (f64::from(drawing.height) * 2.0) / 2.0;

        let show_outlines = state.layout.geometry().edge / (step_x * 2.0) >= OUTLINE_MIN_PIXELS;
        let outline_color = TILE_OUTLINE.to_ratatui_color();

        let placed = state.layout.placed_tiles(state.designer.hexagon());
        let targets = state.designer.paint_targets(cursor);

        let canvas = Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(theme.background)
            .x_bounds([view.min_x, view.max_x()])
            .y_bounds([-view.max_y(), -view.min_y])
            .paint(|ctx| {
                for tile in &placed {
                    ctx.draw(&FilledTriangle {
                        shape: tile.shape,
                        color: tile.fill.to_ratatui_color(),
                        step_x,
                        step_y,
                    });
                }
                if show_outlines {
                    for tile in &placed {
                        for line in outline(&tile.shape, outline_color) {
                            ctx.draw(&line);
                        }
                    }
                }
                ctx.layer();

                for address in &targets {
                    if *address == cursor {
                        continue;
                    }
                    if let Some(shape) = state.layout.shape(*address) {
                        for line in outline(&shape, theme.warning) {
                            ctx.draw(&line);
                        }
                    }
                }
                if let Some(shape) = state.layout.shape(cursor) {
                    for line in outline(&shape, theme.accent) {
                        ctx.draw(&line);
                    }
                }
            });

        f.render_widget(canvas, drawing);
    }
}
