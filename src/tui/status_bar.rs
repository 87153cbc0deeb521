//! Status bar widget for displaying status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::Action;

/// Keys shown in the hint line, paired with the action they trigger.
const HINTS: [(&str, Action); 8] = [
    ("←↓↑→/hjkl", Action::NavigateUp),
    ("Tab/S-Tab", Action::NextSlice),
    ("Enter/click", Action::PaintTile),
    ("1-3", Action::SelectColor(0)),
    ("c", Action::CycleColor),
    ("m", Action::ToggleMirror),
    ("q", Action::Quit),
    ("Esc", Action::Quit),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Key hint line built from the action labels.
    #[must_use]
    pub fn hints_line(theme: &Theme) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, (keys, action)) in HINTS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(
                *keys,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", action.label()),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines = vec![Line::from(vec![
            Span::styled("Status: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ),
        ])];

        if state.config.ui.show_hints {
            lines.push(Self::hints_line(theme));
        }

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );

        f.render_widget(status, area);
    }
}
