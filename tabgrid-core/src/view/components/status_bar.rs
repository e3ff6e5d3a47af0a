//! src/view/components/status_bar.rs
//! ============================================================================
//! # Status Bar
//!
//! Key hints on the left, transient feedback (fetch in flight, last action
//! outcome) on the right.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::model::ui_state::UIState;
use crate::view::theme;

const HINTS: &str = " q quit  / search  Tab/f filter  1-9 sort  Space select  d delete  ? help";

pub struct StatusBar;

impl StatusBar {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, ui: &UIState, area: Rect) {
        let hints = Paragraph::new(HINTS)
            .style(theme::hint_style().bg(theme::SURFACE));
        frame.render_widget(hints, area);

        let right = if ui.busy {
            Some(Span::styled("loading… ", theme::busy_style()))
        } else {
            ui.last_message
                .as_deref()
                .map(|message| Span::styled(format!("{message} "), theme::selected_style()))
        };

        if let Some(span) = right {
            let status = Paragraph::new(Line::from(span))
                .alignment(Alignment::Right)
                .style(Style::default().bg(theme::SURFACE));
            frame.render_widget(status, area);
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn busy_flag_wins_over_the_last_message() {
        let mut ui = UIState::default();
        ui.message("3 deleted");
        ui.busy = true;

        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| StatusBar::new().render(frame, &ui, frame.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("loading…"));
        assert!(!text.contains("3 deleted"));
    }

    #[test]
    fn shows_the_last_message_when_idle() {
        let mut ui = UIState::default();
        ui.message("3 deleted");

        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| StatusBar::new().render(frame, &ui, frame.area()))
            .unwrap();

        assert!(buffer_text(&terminal).contains("3 deleted"));
    }
}
