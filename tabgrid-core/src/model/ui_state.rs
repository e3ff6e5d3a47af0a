//! src/model/ui_state.rs
//! ============================================================================
//! # Viewer UI State
//!
//! Transient chrome state of the viewer binary: which overlay is open, which
//! filter the keyboard cycles, whether a server-mode fetch is in flight. The
//! table component itself keeps its own state in [`TableModel`].
//!
//! [`TableModel`]: crate::model::table_model::TableModel

/// Overlays the viewer can show on top of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum UIOverlay {
    #[default]
    None = 0,
    Search = 1,
    Help = 2,
}

#[derive(Debug, Clone, Default)]
pub struct UIState {
    pub overlay: UIOverlay,

    /// Index into the table spec's filter descriptors; `f` cycles its value.
    pub active_filter: usize,

    /// True while a server-mode fetch is in flight; the table shows a busy
    /// affordance but owns no loading state itself.
    pub busy: bool,

    /// Last action feedback shown in the status bar.
    pub last_message: Option<String>,
}

impl UIState {
    pub fn message(&mut self, text: impl Into<String>) {
        self.last_message = Some(text.into());
    }

    /// Move keyboard focus to the next filter dropdown.
    pub fn next_filter(&mut self, filter_count: usize) {
        if filter_count > 0 {
            self.active_filter = (self.active_filter + 1) % filter_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_focus_wraps_around() {
        let mut ui = UIState::default();
        ui.next_filter(2);
        assert_eq!(ui.active_filter, 1);
        ui.next_filter(2);
        assert_eq!(ui.active_filter, 0);

        // No filters configured: stays put rather than dividing by zero.
        ui.next_filter(0);
        assert_eq!(ui.active_filter, 0);
    }
}
