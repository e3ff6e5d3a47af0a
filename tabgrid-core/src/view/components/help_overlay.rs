//! src/view/components/help_overlay.rs
//! ============================================================================
//! # Help Overlay
//!
//! Centered keybinding reference, toggled with `?`.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::view::theme;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/k ↓/j", "move the row cursor"),
    ("Enter", "open the highlighted row"),
    ("←/h →/l", "previous / next page"),
    ("PgUp PgDn", "previous / next page"),
    ("z", "cycle the page size (5, 10, 20, 50)"),
    ("1-9", "toggle sort on column n"),
    ("/", "edit the global search"),
    ("Tab", "focus the next filter"),
    ("f", "cycle the focused filter's value"),
    ("Space", "toggle selection of the highlighted row"),
    ("a", "select / clear the whole filtered view"),
    ("d, Del", "delete the selected rows"),
    ("m", "switch client / server pagination"),
    ("?", "toggle this help"),
    ("q, Ctrl+C", "quit"),
];

pub struct HelpOverlay;

impl HelpOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let popup = centered_rect(54, (BINDINGS.len() as u16) + 4, area);
        frame.render_widget(Clear, popup);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!(" {keys:<11}"), Style::default().fg(theme::CYAN)),
                    Span::styled((*description).to_string(), theme::base_style()),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .title_style(theme::title_style())
            .border_style(theme::border_style())
            .style(theme::base_style());

        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

/// A rect of the given size centered within `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
