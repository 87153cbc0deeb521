//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets that draw the hexagon, the palette, and the status bar.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod handlers;
pub mod hexagon_canvas;
pub mod palette_bar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::TileAddress;
use crate::services::geometry::VIEW_BOX;
use crate::services::{Designer, HexagonLayout};
use crate::shortcuts::ShortcutRegistry;

pub use hexagon_canvas::HexagonCanvas;
pub use palette_bar::PaletteBar;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Screen regions of the last rendered frame.
///
/// Mouse events are attributed against these, so they must be derived from the
/// same split `render` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    /// Title bar
    pub title: Rect,
    /// Hexagon panel, borders included
    pub hexagon: Rect,
    /// Undistorted drawing region inside the hexagon panel, empty when too small to draw
    pub drawing: Rect,
    /// Palette bar
    pub palette: Rect,
    /// Status bar
    pub status: Rect,
}

impl ScreenAreas {
    /// Splits the full terminal area.
    #[must_use]
    pub fn compute(full: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(12),   // Hexagon
                Constraint::Length(3), // Palette
                Constraint::Length(4), // Status bar (message + hints)
            ])
            .split(full);

        let hexagon = chunks[1];
        let inner = Block::default().borders(Borders::ALL).inner(hexagon);
        let fitted = hexagon_canvas::fit_drawing_area(inner, VIEW_BOX);
        // Nothing is drawn below the minimum size, so nothing may be clicked
        let drawing = if hexagon_canvas::is_drawable(fitted) {
            fitted
        } else {
            Rect::default()
        };

        Self {
            title: chunks[0],
            hexagon,
            drawing,
            palette: chunks[2],
            status: chunks[3],
        }
    }
}

/// Application state
pub struct AppState {
    /// Current design, palette selection, and mirror mode
    pub designer: Designer,
    /// Labeled tile shapes for drawing and hit testing
    pub layout: HexagonLayout,
    /// Tile the keyboard cursor is on
    pub cursor: TileAddress,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// UI colors
    pub theme: Theme,
    /// Application configuration
    pub config: Config,
    /// Where the design is saved
    pub design_path: PathBuf,
    /// Status bar message
    pub status_message: String,
    /// Set once the user asks to leave
    pub should_quit: bool,
    /// Regions of the last rendered frame
    pub screen: ScreenAreas,
}

impl AppState {
    /// Creates the initial state around a ready designer.
    #[must_use]
    pub fn new(designer: Designer, config: Config, design_path: PathBuf) -> Self {
        Self {
            designer,
            layout: HexagonLayout::default(),
            cursor: TileAddress::new(0, 0, 0),
            shortcuts: ShortcutRegistry::new(),
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            design_path,
            status_message: "Pick a color and paint tiles".to_string(),
            should_quit: false,
            screen: ScreenAreas::default(),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state and keep the regions for mouse attribution
        let frame = terminal.draw(|f| render(f, state))?;
        state.screen = ScreenAreas::compute(frame.area);

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            let quit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(state, key)?
                }
                Event::Mouse(mouse) => handlers::handle_mouse_input(state, mouse)?,
                // Resize and focus changes re-render on the next loop
                _ => false,
            };
            if quit {
                break;
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let areas = ScreenAreas::compute(f.area());

    render_title_bar(f, areas.title, state);
    HexagonCanvas::render(f, areas.hexagon, state);
    PaletteBar::render(f, areas.palette, state);
    StatusBar::render(f, areas.status, state, &state.theme);
}

/// Render title bar with the design file name
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let file_name = state
        .design_path
        .file_name()
        .map_or_else(|| state.design_path.display().to_string(), |name| {
            name.to_string_lossy().into_owned()
        });
    let title = format!(" {APP_NAME} - Tile Designer - {file_name}");

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Handle key events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    handlers::handle_main_input(state, key)
}

/// Fresh state on a blank design with a fixed dark theme.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::config::ThemeMode;
    use crate::models::{Hexagon, Palette};

    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Dark;
    AppState::new(
        Designer::new(Hexagon::blank(), Palette::standard()),
        config,
        PathBuf::from("hexagon.json"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_screen_areas_stack_vertically() {
        let areas = ScreenAreas::compute(Rect::new(0, 0, 160, 60));
        assert_eq!(areas.title.height, 3);
        assert_eq!(areas.palette.height, 3);
        assert_eq!(areas.status.height, 4);
        assert_eq!(areas.hexagon.height, 50);
        assert_eq!(areas.palette.y, areas.hexagon.y + areas.hexagon.height);

        let inner = Block::default().borders(Borders::ALL).inner(areas.hexagon);
        assert!(inner.contains(areas.drawing.as_position()));
        assert!(areas.drawing.right() <= inner.right());
        assert!(areas.drawing.bottom() <= inner.bottom());
    }

    #[test]
    fn test_render_draws_title_and_palette() {
        let mut state = test_state();
        state.set_status("Ready");
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Tile Designer - hexagon.json"));
        assert!(text.contains("1 Gold (0)"));
        assert!(text.contains("Empty (294)"));
        assert!(text.contains("Mirror: OFF"));
        assert!(text.contains("Ready"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let state = test_state();
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }

    #[test]
    fn test_small_terminal_has_no_drawing_area() {
        let full = Rect::new(0, 0, 22, 24);
        let areas = ScreenAreas::compute(full);
        assert_eq!(areas.drawing, Rect::default());

        let state = test_state();
        let mut terminal = Terminal::new(TestBackend::new(full.width, full.height)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Terminal"));
    }
}
