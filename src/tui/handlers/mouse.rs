//! Mouse input: clicks on the hexagon paint, clicks on the palette select.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::action_handlers::painting;
use crate::tui::hexagon_canvas::cell_to_point;
use crate::tui::palette_bar::{PaletteBar, PaletteTarget};
use crate::tui::AppState;

/// Handle a mouse event against the last rendered screen.
pub fn handle_mouse_input(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(false);
    }

    let areas = state.screen;
    let view = state.layout.bounds();

    if let Some(point) = cell_to_point(areas.drawing, view, mouse.column, mouse.row) {
        return match state.layout.hit_test(point) {
            Some(address) => {
                debug!("Click at ({}, {}) hit {:?}", point.x, point.y, address);
                state.cursor = address;
                painting::paint_at(state, address)
            }
            None => Ok(false),
        };
    }

    match PaletteBar::target_at(areas.palette, state, mouse.column, mouse.row) {
        Some(PaletteTarget::Color(index)) => painting::handle_select_color(state, index),
        Some(PaletteTarget::Mirror) => painting::handle_toggle_mirror(state),
        None => Ok(false),
    }
}
