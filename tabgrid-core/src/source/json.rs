//! src/source/json.rs
//! ============================================================================
//! # JSON Record Loader
//!
//! Loads the viewer's record set from a JSON file holding an array of objects.
//! Records without a usable `id` field are kept (the grid renders them fine)
//! but logged, since selection and bulk delete need identifiers.

use std::path::Path;

use serde_json::Value;
use tokio::fs;
use tracing::{info, warn};

use crate::error::AppError;
use crate::model::record::Record;

/// Read and validate a record array from `path`.
pub async fn load_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let text = fs::read_to_string(path).await.map_err(|source| {
        AppError::record_source(path, format!("failed to read: {source}"))
    })?;

    let value: Value = serde_json::from_str(&text)?;
    let Value::Array(items) = value else {
        return Err(AppError::record_source(
            path,
            "expected a top-level JSON array of objects",
        ));
    };

    let records: Vec<Record> = items.into_iter().map(Record::new).collect();

    let missing_ids = records.iter().filter(|r| r.id().is_none()).count();
    if missing_ids > 0 {
        warn!(
            missing_ids,
            "records without an id field; selection will skip them"
        );
    }

    info!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "tabgrid-test-{}-{}.json",
            std::process::id(),
            contents.len()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_an_array_of_objects() {
        let path = temp_file(r#"[{"id": 1, "name": "Alpha"}, {"id": 2, "name": "Beta"}]"#);
        let records = load_records(&path).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field_text("name"), "Alpha");
    }

    #[tokio::test]
    async fn rejects_a_non_array_document() {
        let path = temp_file(r#"{"id": 1}"#);
        let result = load_records(&path).await;
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::RecordSource { .. })));
    }
}
