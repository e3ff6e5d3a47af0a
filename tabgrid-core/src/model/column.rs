//! src/model/column.rs
//! ============================================================================
//! # Column and Filter Descriptors
//!
//! Static metadata supplied by the caller: how to extract and render each
//! column, and which closed-set equality filters to expose. Descriptors are
//! immutable for the table's lifetime.

use std::sync::Arc;

use ratatui::layout::{Alignment, Constraint};
use serde::{Deserialize, Serialize};

use crate::model::record::Record;

/// Custom cell renderer. Receives the whole record so derived cells (badges,
/// joined fields) are possible without widening the descriptor contract.
pub type CellRenderer = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl From<TextAlign> for Alignment {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => Self::Left,
            TextAlign::Center => Self::Center,
            TextAlign::Right => Self::Right,
        }
    }
}

/// Row height presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowHeight {
    #[default]
    Small,
    Medium,
    Large,
}

impl RowHeight {
    #[must_use]
    pub const fn lines(self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

/// Header bar styling presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    Light,
    #[default]
    Dark,
    Primary,
}

/// Describes how to extract and render one column.
#[derive(Clone)]
pub struct ColumnSpec {
    /// Dot-path into the record (`"name"`, `"commune.cercle.name"`).
    pub key: String,

    /// Header label.
    pub header: String,

    /// Whether the header toggles sorting on this column.
    pub sortable: bool,

    /// Fixed width; `Fill(1)` when unset.
    pub width: Option<Constraint>,

    pub align: TextAlign,

    /// Optional custom renderer; falls back to the field's cell text.
    pub render: Option<CellRenderer>,
}

impl ColumnSpec {
    #[must_use]
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            width: None,
            align: TextAlign::Left,
            render: None,
        }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn width(mut self, width: Constraint) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// The text shown in a cell for `record`, honoring the custom renderer.
    #[must_use]
    pub fn cell(&self, record: &Record) -> String {
        match &self.render {
            Some(render) => render(record),
            None => record.field_text(&self.key).into(),
        }
    }
}

impl std::fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("render", &self.render.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// One selectable value of a closed-set filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Value compared (after stringification) against the record field.
    pub value: String,

    /// Label shown in the dropdown.
    pub label: String,
}

impl FilterOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Describes one closed-set equality filter exposed as a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Dot-path of the filtered field.
    pub field: String,

    /// Display label.
    pub label: String,

    /// Enumerated option values.
    pub options: Vec<FilterOption>,
}

impl FilterSpec {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FilterOption>,
    ) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_uses_custom_renderer() {
        let record = Record::new(json!({"id": 1, "is_active": true}));
        let plain = ColumnSpec::new("is_active", "Active");
        let custom = ColumnSpec::new("is_active", "Active")
            .render(|r| match r.field("is_active").and_then(|v| v.as_bool()) {
                Some(true) => "yes".to_string(),
                _ => "no".to_string(),
            });

        assert_eq!(plain.cell(&record), "true");
        assert_eq!(custom.cell(&record), "yes");
    }

    #[test]
    fn cell_of_missing_field_is_empty() {
        let record = Record::new(json!({"id": 1}));
        let column = ColumnSpec::new("commune.cercle.name", "Cercle");
        assert_eq!(column.cell(&record), "");
    }
}
