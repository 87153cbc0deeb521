//! Palette bar: one button per color with its tile count, plus the mirror toggle.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// What a click on the palette bar selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteTarget {
    /// Palette entry by position
    Color(usize),
    /// The mirror toggle
    Mirror,
}

/// Palette bar widget
pub struct PaletteBar;

impl PaletteBar {
    /// Spans in display order, each tagged with what clicking it does.
    fn segments(state: &AppState) -> Vec<(Option<PaletteTarget>, Span<'static>)> {
        let theme = &state.theme;
        let designer = &state.designer;
        let mut segments = Vec::new();

        for (index, (entry, count)) in designer.usage().into_iter().enumerate() {
            let selected = index == designer.selected_index();
            let mut style = Style::default()
                .fg(entry.contrast.to_ratatui_color())
                .bg(entry.fill.to_ratatui_color());
            if selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            let marker = if selected { "▶" } else { " " };
            segments.push((None, Span::styled(marker, Style::default().fg(theme.accent))));
            segments.push((
                Some(PaletteTarget::Color(index)),
                Span::styled(format!(" {} {} ({count}) ", index + 1, entry.name), style),
            ));
            segments.push((None, Span::raw(" ")));
        }

        segments.push((
            None,
            Span::styled(
                format!(" Empty ({})   ", designer.hexagon().count_empty_tiles()),
                Style::default().fg(theme.text_muted),
            ),
        ));

        let (mirror_label, mirror_color) = if designer.mirror() {
            ("ON", theme.success)
        } else {
            ("OFF", theme.inactive)
        };
        segments.push((
            Some(PaletteTarget::Mirror),
            Span::styled(
                format!("[Mirror: {mirror_label}]"),
                Style::default()
                    .fg(mirror_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ));

        segments
    }

    /// Render the palette bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let spans: Vec<Span> = Self::segments(state)
            .into_iter()
            .map(|(_, span)| span)
            .collect();

        let widget = Paragraph::new(Line::from(spans))
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .title(" Palette ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );

        f.render_widget(widget, area);
    }

    /// What sits under the cell (`column`, `row`) when the bar is drawn in `area`.
    #[must_use]
    pub fn target_at(area: Rect, state: &AppState, column: u16, row: u16) -> Option<PaletteTarget> {
        // Content is a single line just inside the top border
        if row != area.y + 1 || column <= area.x {
            return None;
        }

        let mut start = area.x + 1;
        for (target, span) in Self::segments(state) {
            let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
            let end = start.saturating_add(width);
            if column >= start && column < end {
                return target;
            }
            start = end;
        }
        None
    }
}
