//! src/model/derived.rs
//! ============================================================================
//! # Derived-View Pipeline
//!
//! Pure functions that turn the raw record set into the exact slice to render:
//! global text filter, then per-column equality filters, then a stable
//! single-column sort, then the page slice. Applied strictly in that order
//! every time any input changes.
//!
//! The same functions back both the client-mode [`TableModel`] and the
//! server-side [`LocalPagedSource`], so either side of the mode split computes
//! identical views.
//!
//! [`TableModel`]: crate::model::table_model::TableModel
//! [`LocalPagedSource`]: crate::source::paged::LocalPagedSource

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::record::Record;

/// Sort direction for a single-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A single `(key, direction)` sort state. The table supports single-column
/// sort only; a new sortable column replaces the prior sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub key: String,
    pub direction: SortDirection,
}

impl SortKey {
    #[must_use]
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// Active per-column filter values, keyed by field id in descriptor order.
/// `None` means "unset" (the filter matches everything).
pub type FilterValues = IndexMap<String, Option<String>>;

/// Apply the global text filter and the per-column equality filters, in that
/// order, returning references into `records`.
#[must_use]
pub fn filter_view<'a>(
    records: &'a [Record],
    search_term: &str,
    search_keys: &[String],
    filters: &FilterValues,
) -> Vec<&'a Record> {
    let term = search_term.trim().to_lowercase();

    records
        .iter()
        .filter(|record| term.is_empty() || matches_search(record, &term, search_keys))
        .filter(|record| matches_filters(record, filters))
        .collect()
}

fn matches_search(record: &Record, lowered_term: &str, search_keys: &[String]) -> bool {
    search_keys
        .iter()
        .any(|key| record.field_text(key).to_lowercase().contains(lowered_term))
}

fn matches_filters(record: &Record, filters: &FilterValues) -> bool {
    filters.iter().all(|(field, selected)| match selected {
        Some(value) => record.field_text(field).as_str() == value,
        None => true,
    })
}

/// Stable in-place sort of a filtered view. Values are stringified and
/// compared case-insensitively; missing values sort with empty-string
/// semantics. `sort_by` is stable, so records with equal keys keep their
/// input order.
pub fn sort_view(view: &mut [&Record], sort: &SortKey) {
    view.sort_by(|a, b| {
        let left = a.field_text(&sort.key).to_lowercase();
        let right = b.field_text(&sort.key).to_lowercase();

        let ordering = left.cmp(&right);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Total page count for a filtered set; 0 when the set is empty.
#[must_use]
pub const fn page_count(filtered_len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        filtered_len.div_ceil(page_size)
    }
}

/// Slice one page out of the filtered/sorted view.
#[must_use]
pub fn page_slice<'a>(view: &[&'a Record], page_index: usize, page_size: usize) -> Vec<&'a Record> {
    let start = page_index.saturating_mul(page_size).min(view.len());
    let end = start.saturating_add(page_size).min(view.len());

    view[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            Record::new(json!({"id": 1, "name": "Alpha", "group": "b", "rank": 2})),
            Record::new(json!({"id": 2, "name": "Beta", "group": "a", "rank": 1})),
            Record::new(json!({"id": 3, "name": "Gamma", "group": "a", "rank": 2})),
            Record::new(json!({"id": 4, "name": "alphonse", "group": "b", "rank": 1})),
        ]
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn global_search_is_case_insensitive_substring() {
        let data = vec![
            Record::new(json!({"id": 1, "name": "Alpha"})),
            Record::new(json!({"id": 2, "name": "Beta"})),
        ];
        let view = filter_view(&data, "al", &keys(&["name"]), &FilterValues::new());

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].field_text("name"), "Alpha");
    }

    #[test]
    fn column_filter_is_idempotent() {
        let data = records();
        let mut filters = FilterValues::new();
        filters.insert("group".to_string(), Some("a".to_string()));

        let once = filter_view(&data, "", &keys(&["name"]), &filters);
        let again: Vec<&Record> = once
            .iter()
            .copied()
            .filter(|r| r.field_text("group").as_str() == "a")
            .collect();

        assert_eq!(once, again);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn search_runs_before_column_filters() {
        let data = records();
        let mut filters = FilterValues::new();
        filters.insert("group".to_string(), Some("b".to_string()));

        let view = filter_view(&data, "alph", &keys(&["name"]), &filters);
        let names: Vec<_> = view.iter().map(|r| r.field_text("name")).collect();

        assert_eq!(names, vec!["Alpha", "alphonse"]);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let data = records();
        let mut view: Vec<&Record> = data.iter().collect();
        sort_view(&mut view, &SortKey::ascending("rank"));

        // rank 1: ids 2, 4 in input order; rank 2: ids 1, 3 in input order.
        let ids: Vec<_> = view.iter().map(|r| r.id().unwrap()).collect();
        let expected: Vec<_> = [2, 4, 1, 3]
            .iter()
            .map(|n| crate::model::record::RecordId::Int(*n))
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn descending_reverses_and_stays_stable() {
        let data = records();
        let mut view: Vec<&Record> = data.iter().collect();
        sort_view(
            &mut view,
            &SortKey {
                key: "rank".to_string(),
                direction: SortDirection::Descending,
            },
        );

        let ids: Vec<i64> = view
            .iter()
            .map(|r| match r.id().unwrap() {
                crate::model::record::RecordId::Int(n) => n,
                crate::model::record::RecordId::Text(_) => unreachable!(),
            })
            .collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn missing_sort_values_use_empty_string_semantics() {
        let data = vec![
            Record::new(json!({"id": 1, "name": "Zed"})),
            Record::new(json!({"id": 2})),
        ];
        let mut view: Vec<&Record> = data.iter().collect();
        sort_view(&mut view, &SortKey::ascending("name"));

        assert_eq!(view[0].id(), data[1].id());
    }

    #[test]
    fn pagination_covers_the_full_view_exactly_once() {
        let data: Vec<Record> = (0..23)
            .map(|i| Record::new(json!({"id": i, "name": format!("r{i:02}")})))
            .collect();
        let view: Vec<&Record> = data.iter().collect();

        let size = 5;
        let pages = page_count(view.len(), size);
        assert_eq!(pages, 5);

        let mut rebuilt: Vec<&Record> = Vec::new();
        for page in 0..pages {
            rebuilt.extend(page_slice(&view, page, size));
        }

        assert_eq!(rebuilt, view);
    }

    #[test]
    fn page_count_of_empty_set_is_zero() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn out_of_range_slice_is_empty_not_panicking() {
        let data = records();
        let view: Vec<&Record> = data.iter().collect();
        assert!(page_slice(&view, 99, 10).is_empty());
    }
}
