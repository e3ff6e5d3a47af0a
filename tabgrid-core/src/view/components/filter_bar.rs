//! src/view/components/filter_bar.rs
//! ============================================================================
//! # Filter Bar
//!
//! One-line summary of the active global search term and each column filter.
//! The keyboard-focused filter is highlighted; `f` cycles its value.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::model::{table_model::TableModel, ui_state::UIState};
use crate::view::theme;

pub struct FilterBar;

impl FilterBar {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, model: &TableModel, ui: &UIState, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();

        let term = model.search_term();
        if ui.overlay == crate::model::ui_state::UIOverlay::Search {
            spans.push(Span::styled(" /", theme::title_style()));
            spans.push(Span::styled(
                format!("{term}█"),
                Style::default().fg(theme::BRIGHT),
            ));
        } else if term.is_empty() {
            spans.push(Span::styled(" / search", theme::hint_style()));
        } else {
            spans.push(Span::styled(" /", theme::title_style()));
            spans.push(Span::styled(
                term.to_string(),
                Style::default().fg(theme::BRIGHT),
            ));
        }

        for (index, filter) in model.spec().filters.iter().enumerate() {
            spans.push(Span::raw("  "));

            let value = model.filters().get(&filter.field).and_then(Clone::clone);
            let label = match value {
                Some(value) => {
                    // Show the option label when one matches the stored value.
                    let display = filter
                        .options
                        .iter()
                        .find(|option| option.value == value)
                        .map_or(value.clone(), |option| option.label.clone());
                    format!("{}: {display}", filter.label)
                }
                None => format!("{}: all", filter.label),
            };

            let style = if index == ui.active_filter {
                theme::highlight_style().fg(theme::CYAN)
            } else {
                theme::hint_style()
            };
            spans.push(Span::styled(format!("[{label}]"), style));
        }

        let bar = Paragraph::new(Line::from(spans)).style(theme::base_style());
        frame.render_widget(bar, area);
    }
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new()
    }
}
