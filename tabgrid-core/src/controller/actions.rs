//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Viewer Commands
//!
//! The `Action` enum represents every user input the viewer responds to, so
//! event processing and dispatch stay behind one clear interface. Background
//! fetches report back as `TaskResult`s on the task channel.

use crate::source::paged::PageSlice;

/// A high-level command derived from a terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the viewer.
    Quit,

    /// Move the row cursor up.
    CursorUp,

    /// Move the row cursor down.
    CursorDown,

    /// Request the next page.
    NextPage,

    /// Request the previous page.
    PrevPage,

    /// Step through the fixed page-size options.
    CyclePageSize,

    /// Toggle sort on the n-th column (0-based).
    SortColumn(usize),

    /// Move keyboard focus to the next filter dropdown.
    NextFilter,

    /// Cycle the focused filter through its option values.
    CycleFilterValue,

    /// Toggle the checked state of the highlighted row.
    ToggleSelect,

    /// Select or clear the whole filtered view.
    ToggleSelectAll,

    /// Hand the selection to the bulk-delete path.
    BulkDelete,

    /// Activate (open) the highlighted row.
    Activate,

    /// Open the global search overlay.
    OpenSearch,

    /// Append a character to the search term (overlay open).
    SearchInput(char),

    /// Delete the last character of the search term (overlay open).
    SearchBackspace,

    /// Close the search overlay, optionally clearing the term.
    CloseSearch { clear: bool },

    /// Toggle the help overlay.
    ToggleHelp,

    /// Switch between client and server pagination mode.
    ToggleMode,

    /// Terminal resize; ratatui re-measures on the next draw.
    Resize(u16, u16),

    /// Event consumed, no state change needed.
    NoOp,
}

/// A result from a background task (server-mode fetch, deletion).
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    /// A page answered by the paged source.
    Page(PageSlice),

    /// A deletion finished.
    Deleted { count: usize },

    /// A background task failed; the message is surfaced in the status bar.
    Failed(String),
}
