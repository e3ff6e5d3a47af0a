//! src/view/ui.rs
//! ============================================================================
//! # Frame Composition
//!
//! Assembles the full frame: filter bar, record table, pagination bar, status
//! bar, plus the help overlay when open. The renderer holds the widgets and
//! no state; everything it draws comes from the model and the UI state.

use ratatui::prelude::*;

use crate::model::{table_model::TableModel, ui_state::{UIOverlay, UIState}};
use crate::view::components::{FilterBar, HelpOverlay, PaginationBar, RecordTable, StatusBar};

pub struct UIRenderer {
    filter_bar: FilterBar,
    table: RecordTable,
    pagination_bar: PaginationBar,
    status_bar: StatusBar,
    help: HelpOverlay,
}

impl UIRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter_bar: FilterBar::new(),
            table: RecordTable::new(),
            pagination_bar: PaginationBar::new(),
            status_bar: StatusBar::new(),
            help: HelpOverlay::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, model: &TableModel, ui: &UIState) {
        let [filter_area, table_area, pagination_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let view = model.view();

        self.filter_bar.render(frame, model, ui, filter_area);
        self.table.render(frame, model, &view, table_area);
        self.pagination_bar.render(frame, model, &view, pagination_area);
        self.status_bar.render(frame, ui, status_area);

        if ui.overlay == UIOverlay::Help {
            self.help.render(frame, frame.area());
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
