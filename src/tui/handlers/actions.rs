//! Action dispatch for the main view.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{navigation, painting};

/// Run `action` against the app state.
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),
        Action::NextSlice => navigation::handle_next_slice(state),
        Action::PreviousSlice => navigation::handle_previous_slice(state),

        // Painting
        Action::PaintTile => painting::handle_paint_tile(state),
        Action::SelectColor(index) => painting::handle_select_color(state, index),
        Action::CycleColor => painting::handle_cycle_color(state),
        Action::ToggleMirror => painting::handle_toggle_mirror(state),

        // General
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TileAddress;
    use crate::tui::test_state;

    #[test]
    fn test_dispatch_moves_then_paints() {
        let mut state = test_state();
        assert!(!dispatch_action(&mut state, Action::NavigateDown).unwrap());
        assert!(!dispatch_action(&mut state, Action::NextSlice).unwrap());
        assert_eq!(state.cursor, TileAddress::new(1, 1, 1));

        dispatch_action(&mut state, Action::PaintTile).unwrap();
        assert!(!state
            .designer
            .hexagon()
            .tile(TileAddress::new(1, 1, 1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_dispatch_quit() {
        let mut state = test_state();
        assert!(dispatch_action(&mut state, Action::Quit).unwrap());
        assert!(state.should_quit);
    }
}
