//! src/view/components/pagination_bar.rs
//! ============================================================================
//! # Pagination Bar
//!
//! Page position, total row count and the active page size. The same geometry
//! renders in both modes; in server mode it comes from the last page slice.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::model::table_model::{TableModel, TableView};
use crate::view::theme;

pub struct PaginationBar;

impl PaginationBar {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        model: &TableModel,
        view: &TableView<'_>,
        area: Rect,
    ) {
        let position = if view.page_count == 0 {
            "page 0/0".to_string()
        } else {
            format!("page {}/{}", view.page_index + 1, view.page_count)
        };

        let mode = if model.is_server() { "server" } else { "client" };

        let line = Line::from(vec![
            Span::styled(format!(" {position}"), Style::default().fg(theme::BRIGHT)),
            Span::styled(
                format!("  {} rows", view.total_items),
                theme::hint_style(),
            ),
            Span::styled(format!("  size {}", view.page_size), theme::hint_style()),
            Span::styled(format!("  [{mode}]"), theme::title_style()),
            Span::styled(
                format!("  {} selected", model.selected_ids().len()),
                theme::selected_style(),
            ),
        ]);

        frame.render_widget(Paragraph::new(line).style(theme::base_style()), area);
    }
}

impl Default for PaginationBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::ColumnSpec;
    use crate::model::record::Record;
    use crate::model::table_model::TableSpec;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

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
    fn shows_one_based_page_position_and_counts() {
        let records: Vec<Record> = (0..23)
            .map(|i| Record::new(json!({"id": i, "name": format!("r{i}")})))
            .collect();
        let model =
            TableModel::with_records(TableSpec::new(vec![ColumnSpec::new("name", "Name")]), records);

        let backend = TestBackend::new(70, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let view = model.view();
                PaginationBar::new().render(frame, &model, &view, frame.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("page 1/3"));
        assert!(text.contains("23 rows"));
        assert!(text.contains("size 10"));
        assert!(text.contains("[client]"));
    }

    #[test]
    fn empty_view_shows_page_zero() {
        let model = TableModel::new(TableSpec::new(vec![ColumnSpec::new("name", "Name")]));

        let backend = TestBackend::new(70, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let view = model.view();
                PaginationBar::new().render(frame, &model, &view, frame.area());
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("page 0/0"));
    }
}
