// Painting and palette action handlers

use crate::models::TileAddress;
use crate::tui::AppState;
use anyhow::Result;

/// Paint `address` with the selected color and report what changed.
pub fn paint_at(state: &mut AppState, address: TileAddress) -> Result<bool> {
    let targets = state.designer.paint_targets(address).len();
    let name = state
        .designer
        .current_entry()
        .map_or("", |entry| entry.name);

    if state.designer.paint(address) {
        let plural = if targets == 1 { "tile" } else { "tiles" };
        state.set_status(format!("Painted {targets} {plural} {name}"));
    } else {
        state.set_status("No color selected");
    }
    Ok(false)
}

/// Handle paint tile action
pub fn handle_paint_tile(state: &mut AppState) -> Result<bool> {
    paint_at(state, state.cursor)
}

/// Handle select color action
pub fn handle_select_color(state: &mut AppState, index: usize) -> Result<bool> {
    if state.designer.select_color(index) {
        announce_color(state);
    }
    Ok(false)
}

/// Handle cycle color action
pub fn handle_cycle_color(state: &mut AppState) -> Result<bool> {
    state.designer.cycle_color();
    announce_color(state);
    Ok(false)
}

/// Handle toggle mirror action
pub fn handle_toggle_mirror(state: &mut AppState) -> Result<bool> {
    let status = if state.designer.toggle_mirror() {
        "Mirror mode ON: paints repeat in all six slices"
    } else {
        "Mirror mode OFF"
    };
    state.set_status(status);
    Ok(false)
}

fn announce_color(state: &mut AppState) {
    if let Some(entry) = state.designer.current_entry() {
        let message = format!("Color: {} ({})", entry.name, entry.fill);
        state.set_status(message);
    }
}
