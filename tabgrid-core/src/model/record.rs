//! src/model/record.rs
//! ============================================================================
//! # Records and Field-Path Resolution
//!
//! A [`Record`] is one uniform row of caller-supplied data, carried as a JSON
//! object. The grid never creates, mutates or destroys records; it only reads
//! fields and marks rows as selected.
//!
//! Column keys and filter field ids are dot-paths (`"commune.cercle.name"`).
//! [`resolve_path`] is the single traversal utility for those paths; all
//! filtering, sorting and rendering route through it so flat and nested record
//! shapes are handled uniformly.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unique identifier of a record. The backing API uses integer ids for most
/// entities and string ids (codes) for a few, so both are supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One row of data. Wraps an arbitrary JSON value; field access goes through
/// dot-path resolution so nested shapes need no per-column special casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Value);

impl Record {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The record identifier, read from the `id` field. `None` when the field
    /// is absent or neither an integer nor a string.
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        match self.0.get("id")? {
            Value::Number(n) => n.as_i64().map(RecordId::Int),
            Value::String(s) => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    /// Resolve a dot-path against this record.
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&Value> {
        resolve_path(&self.0, path)
    }

    /// The display/compare text of the field at `path`.
    #[must_use]
    pub fn field_text(&self, path: &str) -> CompactString {
        cell_text(self.field(path))
    }
}

/// Walk a dot-separated path through nested objects, returning `None` at any
/// missing intermediate step rather than panicking.
#[must_use]
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// Stringify a resolved value for filtering, sorting and rendering.
///
/// Strings are taken verbatim (no quotes), `null` and missing values become
/// the empty string, everything else uses its JSON display form.
#[must_use]
pub fn cell_text(value: Option<&Value>) -> CompactString {
    match value {
        None | Some(Value::Null) => CompactString::const_new(""),
        Some(Value::String(s)) => CompactString::new(s),
        Some(other) => CompactString::new(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_path() {
        let value = json!({"a": {"b": {"c": 5}}});
        assert_eq!(resolve_path(&value, "a.b.c"), Some(&json!(5)));
    }

    #[test]
    fn missing_intermediate_yields_none() {
        let value = json!({"a": {"b": {"c": 5}}});
        assert_eq!(resolve_path(&value, "a.x.c"), None);
    }

    #[test]
    fn non_object_intermediate_yields_none() {
        let value = json!({"a": [1, 2, 3]});
        assert_eq!(resolve_path(&value, "a.0"), None);
        assert_eq!(resolve_path(&value, "a.b.c"), None);
    }

    #[test]
    fn cell_text_shapes() {
        assert_eq!(cell_text(Some(&json!("Alpha"))), "Alpha");
        assert_eq!(cell_text(Some(&json!(42))), "42");
        assert_eq!(cell_text(Some(&json!(true))), "true");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(None), "");
    }

    #[test]
    fn record_id_kinds() {
        assert_eq!(
            Record::new(json!({"id": 7, "name": "x"})).id(),
            Some(RecordId::Int(7))
        );
        assert_eq!(
            Record::new(json!({"id": "S-01"})).id(),
            Some(RecordId::Text("S-01".into()))
        );
        assert_eq!(Record::new(json!({"name": "x"})).id(), None);
    }
}
