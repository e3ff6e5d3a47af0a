//! src/model/table_model.rs
//! ============================================================================
//! # `TableModel`: Generic Tabular View State
//!
//! The reusable table state machine: filter/sort/pagination/selection state,
//! the client-mode derived view, and the server-driven passthrough mode.
//!
//! The model never performs I/O. Every user interaction is a synchronous
//! mutation that records [`TableIntent`]s in an outbox; the embedding caller
//! drains the outbox after dispatch and reacts (re-querying a paged source in
//! server mode, issuing the actual deletion on bulk delete, syncing controlled
//! state back in).
//!
//! Sort, global search and selection each support controlled/uncontrolled
//! duality: when marked controlled, the model treats its copy as a read-only
//! snapshot of the caller-owned value, emits intents instead of mutating, and
//! expects the caller to push the canonical value back via `sync_*`.

use std::collections::BTreeSet;

use tracing::debug;

use crate::model::{
    column::{ColumnSpec, FilterSpec, HeaderStyle, RowHeight},
    derived::{self, FilterValues, SortKey},
    record::{Record, RecordId},
};
use crate::source::paged::PageSlice;

/// The fixed page-size option set.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Presentation and behavior options, fixed for the table's lifetime.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub striped: bool,
    pub row_height: RowHeight,
    pub header_style: HeaderStyle,

    /// Message surfaced when the filtered set is empty.
    pub empty_text: String,

    pub enable_bulk_delete: bool,
    pub initial_page_size: usize,

    /// Columns searched by the global text filter; all column keys when empty.
    pub searchable: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            striped: false,
            row_height: RowHeight::default(),
            header_style: HeaderStyle::default(),
            empty_text: "No records".to_string(),
            enable_bulk_delete: false,
            initial_page_size: 10,
            searchable: Vec::new(),
        }
    }
}

/// Column descriptors, filter descriptors and options supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub filters: Vec<FilterSpec>,
    pub options: TableOptions,
}

impl TableSpec {
    #[must_use]
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            filters: Vec::new(),
            options: TableOptions::default(),
        }
    }

    #[must_use]
    pub fn filters(mut self, filters: Vec<FilterSpec>) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }
}

/// Client mode computes the derived view locally; server mode renders the
/// supplied page verbatim and forwards every interaction as an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationMode {
    Client,
    Server {
        page_count: usize,
        page_index: usize,
        total_items: usize,
    },
}

/// The callback contract: requested state changes and notifications emitted
/// by the model for the embedding caller to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum TableIntent {
    PaginationChanged {
        page_index: usize,
        page_size: usize,
    },
    FiltersChanged(FilterValues),
    GlobalSearchChanged(String),
    SortChanged(Option<SortKey>),
    /// Current selection mapped back to full record objects.
    SelectionChanged(Vec<Record>),
    RowActivated(Record),
    BulkDeleteRequested(Vec<RecordId>),
}

/// Resolved-state holder for the controlled/uncontrolled duality. All
/// mutation paths route through the owning model, which only writes through
/// `Local` values; `External` values are caller-owned snapshots.
#[derive(Debug, Clone)]
enum Controlled<T> {
    Local(T),
    External(T),
}

impl<T> Controlled<T> {
    fn get(&self) -> &T {
        match self {
            Self::Local(value) | Self::External(value) => value,
        }
    }

    /// Write the value only when locally owned; returns whether it was.
    fn set_local(&mut self, value: T) -> bool {
        match self {
            Self::Local(current) => {
                *current = value;
                true
            }
            Self::External(_) => false,
        }
    }

    /// Unconditional write: programmatic set for local state, snapshot sync
    /// for external state.
    fn sync(&mut self, value: T) {
        match self {
            Self::Local(current) | Self::External(current) => *current = value,
        }
    }
}

/// The filtered, sorted, paginated subset of records actually rendered, plus
/// the page geometry the controls display.
#[derive(Debug)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Record>,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,

    /// Matching records across all pages (caller-supplied in server mode).
    pub total_items: usize,
}

/// Generic record-table state machine. See the module docs for the contract.
#[derive(Debug)]
pub struct TableModel {
    spec: TableSpec,
    records: Vec<Record>,
    mode: PaginationMode,

    filters: FilterValues,
    search: Controlled<String>,
    sort: Controlled<Option<SortKey>>,
    selection: Controlled<BTreeSet<RecordId>>,

    page_index: usize,
    page_size: usize,

    /// Highlighted row within the rendered page.
    cursor: usize,

    intents: Vec<TableIntent>,
}

impl TableModel {
    #[must_use]
    pub fn new(spec: TableSpec) -> Self {
        let page_size = spec.options.initial_page_size;
        let filters = spec
            .filters
            .iter()
            .map(|filter| (filter.field.clone(), None))
            .collect();

        Self {
            spec,
            records: Vec::new(),
            mode: PaginationMode::Client,
            filters,
            search: Controlled::Local(String::new()),
            sort: Controlled::Local(None),
            selection: Controlled::Local(BTreeSet::new()),
            page_index: 0,
            page_size,
            cursor: 0,
            intents: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_records(spec: TableSpec, records: Vec<Record>) -> Self {
        let mut model = Self::new(spec);
        model.set_records(records);
        model
    }

    /// Start in server-driven mode. Controls stay inert until the first
    /// [`PageSlice`] arrives.
    #[must_use]
    pub fn server(spec: TableSpec) -> Self {
        let mut model = Self::new(spec);
        model.mode = PaginationMode::Server {
            page_count: 0,
            page_index: 0,
            total_items: 0,
        };
        model
    }

    // ------------------------------------------------------------------
    // Controlled-state builders and sync points
    // ------------------------------------------------------------------

    #[must_use]
    pub fn controlled_selection(mut self, ids: impl IntoIterator<Item = RecordId>) -> Self {
        self.selection = Controlled::External(ids.into_iter().collect());
        self
    }

    #[must_use]
    pub fn controlled_sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = Controlled::External(sort);
        self
    }

    #[must_use]
    pub fn controlled_search(mut self, term: impl Into<String>) -> Self {
        self.search = Controlled::External(term.into());
        self
    }

    pub fn sync_selection(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.selection.sync(ids.into_iter().collect());
    }

    pub fn sync_sort(&mut self, sort: Option<SortKey>) {
        self.sort.sync(sort);
    }

    pub fn sync_search(&mut self, term: impl Into<String>) {
        self.search.sync(term.into());
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn mode(&self) -> &PaginationMode {
        &self.mode
    }

    #[must_use]
    pub const fn is_server(&self) -> bool {
        matches!(self.mode, PaginationMode::Server { .. })
    }

    #[must_use]
    pub fn filters(&self) -> &FilterValues {
        &self.filters
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search.get()
    }

    #[must_use]
    pub fn sort_state(&self) -> Option<&SortKey> {
        self.sort.get().as_ref()
    }

    #[must_use]
    pub fn selected_ids(&self) -> &BTreeSet<RecordId> {
        self.selection.get()
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Columns consulted by the global text filter.
    #[must_use]
    pub fn search_keys(&self) -> Vec<String> {
        if self.spec.options.searchable.is_empty() {
            self.spec.columns.iter().map(|c| c.key.clone()).collect()
        } else {
            self.spec.options.searchable.clone()
        }
    }

    #[must_use]
    pub fn has_intents(&self) -> bool {
        !self.intents.is_empty()
    }

    /// Take the intents recorded since the last drain, in emission order.
    pub fn drain_intents(&mut self) -> Vec<TableIntent> {
        std::mem::take(&mut self.intents)
    }

    // ------------------------------------------------------------------
    // Data updates
    // ------------------------------------------------------------------

    /// Replace the client-mode record set. Selection is pruned to identifiers
    /// that still exist, and the page index is clamped against the new view.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;

        let existing: BTreeSet<RecordId> =
            self.records.iter().filter_map(Record::id).collect();
        let pruned: BTreeSet<RecordId> = self
            .selection
            .get()
            .iter()
            .filter(|id| existing.contains(id))
            .cloned()
            .collect();
        if pruned.len() != self.selection.get().len() {
            self.selection.sync(pruned);
        }

        let pages = self.client_page_count();
        self.page_index = self.page_index.min(pages.saturating_sub(1));
        self.cursor = 0;
    }

    /// Install a page handed back by the server-mode caller. No intent is
    /// emitted; this is the caller answering one.
    pub fn set_server_page(&mut self, slice: PageSlice) {
        if !self.is_server() {
            debug!("ignoring server page while in client mode");
            return;
        }

        self.mode = PaginationMode::Server {
            page_count: slice.page_count,
            page_index: slice.page_index,
            total_items: slice.total_items,
        };
        self.records = slice.records;
        self.cursor = self.cursor.min(self.records.len().saturating_sub(1));
    }

    /// Switch to server-driven mode, discarding local data.
    pub fn set_mode_server(&mut self) {
        self.mode = PaginationMode::Server {
            page_count: 0,
            page_index: 0,
            total_items: 0,
        };
        self.records = Vec::new();
        self.cursor = 0;
    }

    /// Switch to client mode with the full record set.
    pub fn set_mode_client(&mut self, records: Vec<Record>) {
        self.mode = PaginationMode::Client;
        self.page_index = 0;
        self.set_records(records);
    }

    // ------------------------------------------------------------------
    // Derived view
    // ------------------------------------------------------------------

    /// Compute the exact rows to render plus page geometry. In server mode
    /// the supplied records pass through untouched.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        match &self.mode {
            PaginationMode::Client => {
                let working = self.working_view();
                let page_count = derived::page_count(working.len(), self.page_size);
                let page_index = self.page_index.min(page_count.saturating_sub(1));
                let rows = derived::page_slice(&working, page_index, self.page_size);

                TableView {
                    rows,
                    page_index,
                    page_count,
                    page_size: self.page_size,
                    total_items: working.len(),
                }
            }

            PaginationMode::Server {
                page_count,
                page_index,
                total_items,
            } => TableView {
                rows: self.records.iter().collect(),
                page_index: *page_index,
                page_count: *page_count,
                page_size: self.page_size,
                total_items: *total_items,
            },
        }
    }

    /// The filtered and sorted working view, before pagination.
    fn working_view(&self) -> Vec<&Record> {
        let mut working = derived::filter_view(
            &self.records,
            self.search.get(),
            &self.search_keys(),
            &self.filters,
        );
        if let Some(sort) = self.sort.get() {
            derived::sort_view(&mut working, sort);
        }
        working
    }

    // ------------------------------------------------------------------
    // Filter and search mutations (both reset the page index)
    // ------------------------------------------------------------------

    /// Set or clear one column filter. Unknown fields are ignored.
    pub fn set_filter(&mut self, field: &str, value: Option<String>) {
        if !self.spec.filters.iter().any(|f| f.field == field) {
            debug!(field, "ignoring unknown filter field");
            return;
        }

        self.filters.insert(field.to_string(), value);
        self.reset_page();
        self.intents
            .push(TableIntent::FiltersChanged(self.filters.clone()));
    }

    /// Step one filter through unset -> option 1 -> ... -> option n -> unset.
    pub fn cycle_filter(&mut self, field: &str) {
        let Some(spec) = self.spec.filters.iter().find(|f| f.field == field) else {
            return;
        };

        let current = self.filters.get(field).and_then(Clone::clone);
        let next = match current {
            None => spec.options.first().map(|o| o.value.clone()),
            Some(value) => {
                let position = spec.options.iter().position(|o| o.value == value);
                position
                    .and_then(|p| spec.options.get(p + 1))
                    .map(|o| o.value.clone())
            }
        };
        let field = spec.field.clone();

        self.set_filter(&field, next);
    }

    pub fn set_global_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.search.get() == &term {
            return;
        }

        self.search.set_local(term.clone());
        self.reset_page();
        self.intents.push(TableIntent::GlobalSearchChanged(term));
    }

    fn reset_page(&mut self) {
        self.page_index = 0;
        self.cursor = 0;
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Toggle sorting on a column: a new sortable column replaces the prior
    /// sort ascending; re-selecting the sorted column flips the direction.
    pub fn toggle_sort(&mut self, key: &str) {
        let sortable = self
            .spec
            .columns
            .iter()
            .any(|column| column.key == key && column.sortable);
        if !sortable {
            debug!(key, "ignoring sort on non-sortable column");
            return;
        }

        let next = match self.sort.get() {
            Some(current) if current.key == key => Some(SortKey {
                key: key.to_string(),
                direction: current.direction.toggled(),
            }),
            _ => Some(SortKey::ascending(key)),
        };

        self.sort.set_local(next.clone());
        self.intents.push(TableIntent::SortChanged(next));
    }

    /// Toggle sorting by column position (keyboard shortcut path).
    pub fn toggle_sort_column(&mut self, index: usize) {
        if let Some(key) = self.spec.columns.get(index).map(|c| c.key.clone()) {
            self.toggle_sort(&key);
        }
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// The page index the controls display (clamped in client mode,
    /// caller-supplied in server mode).
    #[must_use]
    pub fn display_page_index(&self) -> usize {
        match &self.mode {
            PaginationMode::Client => {
                let pages = self.client_page_count();
                self.page_index.min(pages.saturating_sub(1))
            }
            PaginationMode::Server { page_index, .. } => *page_index,
        }
    }

    pub fn next_page(&mut self) {
        self.request_page(self.display_page_index().saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.request_page(self.display_page_index().saturating_sub(1));
    }

    /// Request a page change. In client mode this moves the local page and
    /// announces it; in server mode it only emits the intent (the caller
    /// re-queries and hands a fresh slice back). With no pages the controls
    /// are inert.
    pub fn request_page(&mut self, requested: usize) {
        match &self.mode {
            PaginationMode::Client => {
                let pages = self.client_page_count();
                if pages == 0 {
                    return;
                }
                let clamped = requested.min(pages - 1);
                if clamped == self.page_index {
                    return;
                }
                self.page_index = clamped;
                self.cursor = 0;
                self.intents.push(TableIntent::PaginationChanged {
                    page_index: clamped,
                    page_size: self.page_size,
                });
            }

            PaginationMode::Server {
                page_count,
                page_index,
                ..
            } => {
                if *page_count == 0 {
                    return;
                }
                let clamped = requested.min(page_count - 1);
                if clamped == *page_index {
                    return;
                }
                self.intents.push(TableIntent::PaginationChanged {
                    page_index: clamped,
                    page_size: self.page_size,
                });
            }
        }
    }

    /// Step through the fixed page-size options, returning to page 0.
    pub fn cycle_page_size(&mut self) {
        let position = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        let next = PAGE_SIZE_OPTIONS[(position + 1) % PAGE_SIZE_OPTIONS.len()];

        self.page_size = next;
        self.page_index = 0;
        self.cursor = 0;
        self.intents.push(TableIntent::PaginationChanged {
            page_index: 0,
            page_size: next,
        });
    }

    fn client_page_count(&self) -> usize {
        derived::page_count(self.working_view().len(), self.page_size)
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let rows = self.view().rows.len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    /// Announce activation (e.g. Enter) of the highlighted row.
    pub fn activate_cursor_row(&mut self) {
        if let Some(record) = self.view().rows.get(self.cursor).map(|r| (*r).clone()) {
            self.intents.push(TableIntent::RowActivated(record));
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Add or remove a single identifier.
    pub fn toggle_row(&mut self, id: RecordId, checked: bool) {
        let mut next = self.selection.get().clone();
        if checked {
            next.insert(id);
        } else {
            next.remove(&id);
        }
        self.update_selection(next);
    }

    /// Flip the checked state of the highlighted row.
    pub fn toggle_cursor_row(&mut self) {
        let id = self
            .view()
            .rows
            .get(self.cursor)
            .and_then(|record| record.id());
        if let Some(id) = id {
            let checked = !self.selection.get().contains(&id);
            self.toggle_row(id, checked);
        }
    }

    /// Check or clear every record of the *current filtered view* — all pages
    /// of it in client mode, the supplied page in server mode; never the
    /// unfiltered universe.
    pub fn select_all(&mut self, checked: bool) {
        let next: BTreeSet<RecordId> = if checked {
            match &self.mode {
                PaginationMode::Client => self
                    .working_view()
                    .iter()
                    .filter_map(|record| record.id())
                    .collect(),
                PaginationMode::Server { .. } => {
                    self.records.iter().filter_map(Record::id).collect()
                }
            }
        } else {
            BTreeSet::new()
        };

        self.update_selection(next);
    }

    /// Header-checkbox behavior: clear when the filtered view is fully
    /// selected, otherwise select it all.
    pub fn toggle_select_all(&mut self) {
        let view_ids: BTreeSet<RecordId> = match &self.mode {
            PaginationMode::Client => self
                .working_view()
                .iter()
                .filter_map(|record| record.id())
                .collect(),
            PaginationMode::Server { .. } => {
                self.records.iter().filter_map(Record::id).collect()
            }
        };

        let all_checked =
            !view_ids.is_empty() && view_ids.iter().all(|id| self.selection.get().contains(id));
        self.select_all(!all_checked);
    }

    /// Hand the current selection to the caller for deletion, then clear it.
    /// The model performs no deletion itself.
    pub fn bulk_delete(&mut self) {
        if !self.spec.options.enable_bulk_delete {
            return;
        }

        let ids: Vec<RecordId> = self.selection.get().iter().cloned().collect();
        if ids.is_empty() {
            return;
        }

        self.intents.push(TableIntent::BulkDeleteRequested(ids));
        self.update_selection(BTreeSet::new());
    }

    /// Route every selection mutation through one place: local state is
    /// written only when uncontrolled, and the new set is mapped back to full
    /// record objects for the notification.
    fn update_selection(&mut self, next: BTreeSet<RecordId>) {
        let selected_records: Vec<Record> = self
            .records
            .iter()
            .filter(|record| record.id().is_some_and(|id| next.contains(&id)))
            .cloned()
            .collect();

        self.selection.set_local(next);
        self.intents
            .push(TableIntent::SelectionChanged(selected_records));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::{FilterOption, FilterSpec};
    use serde_json::json;

    fn column_spec() -> TableSpec {
        TableSpec::new(vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("group", "Group"),
        ])
        .filters(vec![FilterSpec::new(
            "group",
            "Group",
            vec![
                FilterOption::new("a", "Group A"),
                FilterOption::new("b", "Group B"),
            ],
        )])
    }

    fn record(id: i64, name: &str, group: &str) -> Record {
        Record::new(json!({"id": id, "name": name, "group": group}))
    }

    fn many(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| {
                let group = if i % 10 == 0 { "a" } else { "b" };
                record(i as i64, &format!("record {i:03}"), group)
            })
            .collect()
    }

    #[test]
    fn selection_persists_across_page_changes() {
        let mut spec = column_spec();
        spec.options.initial_page_size = 10;
        let mut model = TableModel::with_records(spec, many(25));

        model.toggle_row(RecordId::Int(3), true);
        model.next_page();
        model.prev_page();

        assert!(model.selected_ids().contains(&RecordId::Int(3)));
        assert_eq!(model.view().page_index, 0);
    }

    #[test]
    fn select_all_scopes_to_the_filtered_view() {
        let mut model = TableModel::with_records(column_spec(), many(100));

        model.set_filter("group", Some("a".to_string()));
        model.select_all(true);

        // Every 10th record is in group "a": exactly 10 of 100.
        assert_eq!(model.selected_ids().len(), 10);
        assert!(model.selected_ids().contains(&RecordId::Int(0)));
        assert!(!model.selected_ids().contains(&RecordId::Int(1)));
    }

    #[test]
    fn filter_mutation_resets_the_page_index() {
        let mut spec = column_spec();
        spec.options.initial_page_size = 10;
        let mut model = TableModel::with_records(spec, many(50));

        model.request_page(3);
        assert_eq!(model.view().page_index, 3);

        model.set_filter("group", Some("a".to_string()));
        assert_eq!(model.view().page_index, 0);
    }

    #[test]
    fn page_index_clamps_when_the_view_shrinks() {
        let mut spec = column_spec();
        spec.options.initial_page_size = 10;
        let mut model = TableModel::with_records(spec, many(50));

        model.request_page(4);
        model.set_records(many(12));

        let view = model.view();
        assert_eq!(view.page_count, 2);
        assert_eq!(view.page_index, 1);
    }

    #[test]
    fn server_mode_passes_data_through_and_forwards_page_requests() {
        let mut spec = column_spec();
        spec.options.initial_page_size = 5;
        let mut model = TableModel::server(spec);

        model.set_server_page(PageSlice {
            records: many(10),
            page_index: 2,
            page_count: 5,
            total_items: 47,
        });
        model.drain_intents();

        model.next_page();

        let intents = model.drain_intents();
        assert_eq!(
            intents,
            vec![TableIntent::PaginationChanged {
                page_index: 3,
                page_size: 5,
            }]
        );

        // The supplied page renders verbatim: no local re-slice to size 5.
        let view = model.view();
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.page_count, 5);
        assert_eq!(view.total_items, 47);
    }

    #[test]
    fn server_controls_are_inert_without_backing_data() {
        let mut model = TableModel::server(column_spec());

        model.next_page();
        model.prev_page();
        model.request_page(7);

        assert!(!model.has_intents());
        let view = model.view();
        assert_eq!(view.page_count, 0);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn bulk_delete_hands_over_ids_then_clears_selection() {
        let mut spec = column_spec();
        spec.options.enable_bulk_delete = true;
        let mut model = TableModel::with_records(spec, many(10));

        model.toggle_row(RecordId::Int(1), true);
        model.toggle_row(RecordId::Int(4), true);
        model.toggle_row(RecordId::Int(7), true);
        model.drain_intents();

        model.bulk_delete();

        let intents = model.drain_intents();
        assert_eq!(intents.len(), 2);
        assert_eq!(
            intents[0],
            TableIntent::BulkDeleteRequested(vec![
                RecordId::Int(1),
                RecordId::Int(4),
                RecordId::Int(7),
            ])
        );
        assert_eq!(intents[1], TableIntent::SelectionChanged(Vec::new()));
        assert!(model.selected_ids().is_empty());
    }

    #[test]
    fn bulk_delete_is_disabled_by_default() {
        let mut model = TableModel::with_records(column_spec(), many(10));
        model.toggle_row(RecordId::Int(1), true);
        model.drain_intents();

        model.bulk_delete();
        assert!(!model.has_intents());
    }

    #[test]
    fn controlled_selection_emits_without_local_mutation() {
        let mut model = TableModel::with_records(column_spec(), many(10))
            .controlled_selection([RecordId::Int(2)]);

        model.toggle_row(RecordId::Int(5), true);

        // The snapshot stays caller-owned until synced back in.
        assert_eq!(model.selected_ids().len(), 1);

        let intents = model.drain_intents();
        match &intents[..] {
            [TableIntent::SelectionChanged(records)] => {
                let ids: Vec<_> = records.iter().filter_map(Record::id).collect();
                assert_eq!(ids, vec![RecordId::Int(2), RecordId::Int(5)]);
            }
            other => panic!("unexpected intents: {other:?}"),
        }

        model.sync_selection([RecordId::Int(2), RecordId::Int(5)]);
        assert_eq!(model.selected_ids().len(), 2);
    }

    #[test]
    fn sort_toggles_direction_on_the_same_column() {
        let mut model = TableModel::with_records(column_spec(), many(10));

        model.toggle_sort("name");
        assert_eq!(
            model.sort_state(),
            Some(&SortKey::ascending("name"))
        );

        model.toggle_sort("name");
        assert_eq!(
            model.sort_state().map(|s| s.direction),
            Some(crate::model::derived::SortDirection::Descending)
        );

        // Non-sortable columns are ignored.
        model.drain_intents();
        model.toggle_sort("group");
        assert!(!model.has_intents());
    }

    #[test]
    fn repeating_the_same_search_term_is_a_noop() {
        let mut model = TableModel::with_records(column_spec(), many(10));

        model.set_global_search("rec");
        model.drain_intents();
        model.set_global_search("rec");

        assert!(!model.has_intents());
    }

    #[test]
    fn cycle_filter_walks_options_and_returns_to_unset() {
        let mut model = TableModel::with_records(column_spec(), many(10));

        model.cycle_filter("group");
        assert_eq!(model.filters()["group"], Some("a".to_string()));

        model.cycle_filter("group");
        assert_eq!(model.filters()["group"], Some("b".to_string()));

        model.cycle_filter("group");
        assert_eq!(model.filters()["group"], None);
    }

    #[test]
    fn replacing_records_prunes_dangling_selection() {
        let mut model = TableModel::with_records(column_spec(), many(10));
        model.toggle_row(RecordId::Int(8), true);
        model.toggle_row(RecordId::Int(2), true);

        model.set_records(many(5));

        assert_eq!(
            model.selected_ids().iter().cloned().collect::<Vec<_>>(),
            vec![RecordId::Int(2)]
        );
    }
}
