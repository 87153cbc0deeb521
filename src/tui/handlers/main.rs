//! Main UI input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::AppState;

/// Handle key input for the main view.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
