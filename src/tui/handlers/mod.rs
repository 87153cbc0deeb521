//! Input handler modules for the TUI.

pub mod action_handlers;
pub mod actions;
pub mod main;
pub mod mouse;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use mouse::handle_mouse_input;
