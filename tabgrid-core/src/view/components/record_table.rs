//! src/view/components/record_table.rs
//! ============================================================================
//! # Record Table Widget
//!
//! Renders the derived view: header row with sort markers, an optional
//! selection column, cell text resolved through the column descriptors, and
//! the empty-state message when the filtered set has no rows.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState},
};

use crate::model::{
    column::ColumnSpec,
    derived::{SortDirection, SortKey},
    table_model::{TableModel, TableView},
};
use crate::view::theme;

const SORT_ASC_MARKER: &str = " ▲";
const SORT_DESC_MARKER: &str = " ▼";
const CHECKED_MARKER: &str = "[x]";
const UNCHECKED_MARKER: &str = "[ ]";

pub struct RecordTable;

impl RecordTable {
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
        let options = &model.spec().options;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Records ")
            .title_style(theme::title_style())
            .border_style(theme::border_style())
            .style(theme::base_style());

        if view.rows.is_empty() {
            let empty = Paragraph::new(options.empty_text.as_str())
                .style(theme::empty_text_style())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let columns = &model.spec().columns;
        let with_selection = options.enable_bulk_delete;

        let header = Row::new(self.header_cells(columns, model.sort_state(), with_selection))
            .style(theme::header_style(options.header_style))
            .bottom_margin(1);

        let row_height = options.row_height.lines();
        let rows: Vec<Row> = view
            .rows
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let mut cells: Vec<Cell> = Vec::with_capacity(columns.len() + 1);

                if with_selection {
                    let checked = record
                        .id()
                        .is_some_and(|id| model.selected_ids().contains(&id));
                    let marker = if checked { CHECKED_MARKER } else { UNCHECKED_MARKER };
                    let style = if checked {
                        theme::selected_style()
                    } else {
                        theme::hint_style()
                    };
                    cells.push(Cell::from(Span::styled(marker, style)));
                }

                for column in columns {
                    let text = column.cell(record);
                    let line = Line::from(text).alignment(column.align.into());
                    cells.push(Cell::from(line));
                }

                let mut row = Row::new(cells).height(row_height);
                if options.striped && index % 2 == 1 {
                    row = row.style(theme::stripe_style());
                }
                row
            })
            .collect();

        let widths = self.widths(columns, with_selection);

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(theme::highlight_style())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        let cursor = model.cursor().min(view.rows.len().saturating_sub(1));
        let mut table_state = TableState::default().with_selected(Some(cursor));

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn header_cells<'a>(
        &self,
        columns: &'a [ColumnSpec],
        sort: Option<&SortKey>,
        with_selection: bool,
    ) -> Vec<Cell<'a>> {
        let mut cells: Vec<Cell<'a>> = Vec::with_capacity(columns.len() + 1);

        if with_selection {
            cells.push(Cell::from("sel"));
        }

        for column in columns {
            let marker = match sort {
                Some(key) if key.key == column.key => match key.direction {
                    SortDirection::Ascending => SORT_ASC_MARKER,
                    SortDirection::Descending => SORT_DESC_MARKER,
                },
                _ => "",
            };
            let line =
                Line::from(format!("{}{marker}", column.header)).alignment(column.align.into());
            cells.push(Cell::from(line));
        }

        cells
    }

    fn widths(&self, columns: &[ColumnSpec], with_selection: bool) -> Vec<Constraint> {
        let mut widths = Vec::with_capacity(columns.len() + 1);

        if with_selection {
            widths.push(Constraint::Length(3));
        }
        for column in columns {
            widths.push(column.width.unwrap_or(Constraint::Fill(1)));
        }

        widths
    }
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new()
    }
}
