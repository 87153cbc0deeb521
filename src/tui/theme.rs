//! Terminal chrome colors for dark and light backgrounds.
//!
//! Tile colors come from the palette and never change with the theme. The
//! theme only covers borders, text, the canvas background, and the cursor.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and titles
    pub primary: Color,
    /// Cursor outline and selected palette entry
    pub accent: Color,
    /// Mirror-mode indicator and confirmations
    pub success: Color,
    /// Secondary cursor outlines (mirror targets)
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Key hints and dim content
    pub text_muted: Color,

    /// Main background color, also behind the hexagon
    pub background: Color,
    /// Disabled indicators
    pub inactive: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching Theme.
    ///
    /// Unspecified modes and detection errors fall back to dark.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for the configured preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::Magenta,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            inactive: Color::Gray,
        }
    }

    /// Light theme.
    ///
    /// The accent stays dark enough to read against the pale tile fills.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 60, 0),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(140, 0, 140),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            inactive: Color::Rgb(180, 180, 180),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow vanishes on a white background
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_from_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());

        let auto = Theme::from_mode(ThemeMode::Auto);
        assert!(auto == Theme::dark() || auto == Theme::light());
    }

    #[test]
    fn test_cursor_colors_distinct() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.accent, theme.warning);
            assert_ne!(theme.accent, theme.background);
        }
    }
}
