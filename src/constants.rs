//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "HexTray";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hextray";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "HexTray";

/// Default design file name inside the config directory.
pub const DESIGN_FILE_NAME: &str = "hexagon.json";

/// Log file name inside the config directory (TUI mode).
pub const LOG_FILE_NAME: &str = "hextray.log";
