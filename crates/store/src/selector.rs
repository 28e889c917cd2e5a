//! Rich query selectors
//!
//! Queries are JSON documents of the form `{"selector": {...}}`. An empty
//! selector matches every entry; otherwise each top-level field must equal
//! the corresponding field of the stored JSON object.

use serde_json::{Map, Value};

use crate::{StorageError, StorageResult};

/// The selector that matches every stored entry
pub const SELECT_ALL: &str = r#"{"selector":{}}"#;

/// A parsed query selector
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    fields: Map<String, Value>,
}

impl Selector {
    /// Parse a query string
    pub fn parse(query: &str) -> StorageResult<Self> {
        let document: Value = serde_json::from_str(query)
            .map_err(|e| StorageError::InvalidQuery(format!("{}: {}", query, e)))?;

        match document.get("selector") {
            Some(Value::Object(fields)) => Ok(Self {
                fields: fields.clone(),
            }),
            Some(_) => Err(StorageError::InvalidQuery(
                "selector must be a JSON object".to_string(),
            )),
            None => Err(StorageError::InvalidQuery(
                "query has no selector".to_string(),
            )),
        }
    }

    /// Whether this selector matches every entry
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check a stored value against the selector
    pub fn matches(&self, value: &[u8]) -> bool {
        if self.is_empty() {
            return true;
        }

        match serde_json::from_slice::<Value>(value) {
            Ok(Value::Object(object)) => self
                .fields
                .iter()
                .all(|(name, expected)| object.get(name) == Some(expected)),
            _ => false,
        }
    }
}
