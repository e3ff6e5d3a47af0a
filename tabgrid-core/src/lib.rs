pub mod error;

pub mod config;

pub mod logging;

pub mod model {
    pub mod record;
    pub use record::{Record, RecordId};

    pub mod column;
    pub use column::{ColumnSpec, FilterOption, FilterSpec, HeaderStyle, RowHeight, TextAlign};

    pub mod derived;
    pub use derived::{SortDirection, SortKey};

    pub mod table_model;
    pub use table_model::{
        PAGE_SIZE_OPTIONS, PaginationMode, TableIntent, TableModel, TableOptions, TableSpec,
        TableView,
    };

    pub mod ui_state;
    pub use ui_state::{UIOverlay, UIState};
}

pub mod controller {
    pub mod actions;
    pub use actions::{Action, TaskResult};

    pub mod event_processor;
}

pub mod source {
    pub mod json;

    pub mod paged;
    pub use paged::{LocalPagedSource, PageQuery, PageSlice, PagedSource};
}

pub mod view {
    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod record_table;
        pub use record_table::RecordTable;

        pub mod filter_bar;
        pub use filter_bar::FilterBar;

        pub mod pagination_bar;
        pub use pagination_bar::PaginationBar;

        pub mod status_bar;
        pub use status_bar::StatusBar;

        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
    }

    pub use components::*;
}

pub use error::AppError;

pub use model::{
    column::{ColumnSpec, FilterSpec},
    record::{Record, RecordId},
    table_model::{TableIntent, TableModel},
};
