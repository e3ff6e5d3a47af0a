//! src/source/paged.rs
//! ============================================================================
//! # Paged Record Sources (server-driven mode)
//!
//! In server-driven mode the record universe is too large to transfer and
//! filter client-side, so the table only forwards intents and renders whatever
//! page the backing query hands back. [`PagedSource`] is that seam.
//!
//! [`LocalPagedSource`] is the in-process implementation the viewer uses: it
//! answers page queries by running the same derived-view pipeline the table
//! runs in client mode, standing in for a remote paginated endpoint.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::AppError;
use crate::model::{
    derived::{self, FilterValues, SortKey},
    record::{Record, RecordId},
};

/// One page request: the full view state the backing query needs.
#[derive(Debug, Clone)]
pub struct PageQuery {
    pub search: String,
    pub search_keys: Vec<String>,
    pub filters: FilterValues,
    pub sort: Option<SortKey>,
    pub page_index: usize,
    pub page_size: usize,
}

/// One page response.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice {
    pub records: Vec<Record>,
    pub page_index: usize,
    pub page_count: usize,

    /// Matching records across all pages, after filtering.
    pub total_items: usize,
}

/// A remote-shaped, paginated record source.
#[async_trait]
pub trait PagedSource: Send + Sync {
    async fn fetch(&self, query: PageQuery) -> Result<PageSlice, AppError>;

    /// Delete the given records, returning how many were removed.
    async fn delete(&self, ids: &[RecordId]) -> Result<usize, AppError>;
}

/// In-process paged source over a shared record set.
#[derive(Debug, Clone, Default)]
pub struct LocalPagedSource {
    records: Arc<RwLock<Vec<Record>>>,
}

impl LocalPagedSource {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// The full current record set (used when switching to client mode).
    pub async fn snapshot(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PagedSource for LocalPagedSource {
    async fn fetch(&self, query: PageQuery) -> Result<PageSlice, AppError> {
        let records = self.records.read().await;

        let mut working = derived::filter_view(
            &records,
            &query.search,
            &query.search_keys,
            &query.filters,
        );
        if let Some(sort) = &query.sort {
            derived::sort_view(&mut working, sort);
        }

        let total_items = working.len();
        let page_count = derived::page_count(total_items, query.page_size);
        let page_index = query.page_index.min(page_count.saturating_sub(1));
        let page: Vec<Record> = derived::page_slice(&working, page_index, query.page_size)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            total_items,
            page_count, page_index, "paged source answered query"
        );

        Ok(PageSlice {
            records: page,
            page_index,
            page_count,
            total_items,
        })
    }

    async fn delete(&self, ids: &[RecordId]) -> Result<usize, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();

        records.retain(|record| {
            record
                .id()
                .is_none_or(|id| !ids.contains(&id))
        });

        Ok(before - records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Record> {
        (0..23)
            .map(|i| {
                let group = if i % 2 == 0 { "even" } else { "odd" };
                Record::new(json!({"id": i, "name": format!("item {i:02}"), "group": group}))
            })
            .collect()
    }

    fn base_query() -> PageQuery {
        PageQuery {
            search: String::new(),
            search_keys: vec!["name".to_string(), "group".to_string()],
            filters: FilterValues::new(),
            sort: None,
            page_index: 0,
            page_size: 5,
        }
    }

    #[tokio::test]
    async fn fetch_filters_sorts_and_slices() {
        let source = LocalPagedSource::new(sample());

        let mut query = base_query();
        query.filters.insert("group".to_string(), Some("even".to_string()));
        query.sort = Some(SortKey::ascending("name"));
        query.page_index = 1;

        let slice = source.fetch(query).await.unwrap();

        assert_eq!(slice.total_items, 12);
        assert_eq!(slice.page_count, 3);
        assert_eq!(slice.page_index, 1);
        assert_eq!(slice.records.len(), 5);
        assert_eq!(slice.records[0].field_text("name"), "item 10");
    }

    #[tokio::test]
    async fn out_of_range_page_clamps_to_the_last() {
        let source = LocalPagedSource::new(sample());

        let mut query = base_query();
        query.page_index = 99;

        let slice = source.fetch(query).await.unwrap();
        assert_eq!(slice.page_index, 4);
        assert_eq!(slice.records.len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_given_ids() {
        let source = LocalPagedSource::new(sample());

        let removed = source
            .delete(&[RecordId::Int(0), RecordId::Int(1), RecordId::Int(99)])
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert_eq!(source.len().await, 21);
    }
}
