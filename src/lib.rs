//! HexTray library
//!
//! Core of the hexagon tile designer: the grid model and its pure edits,
//! tile geometry and hit testing, design persistence, and the terminal UI.

// Module declarations
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
