// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable catalog store.

use std::sync::Arc;

use hashbrown::HashMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::record::{BookId, BookRecord};
use crate::view_list::ViewList;

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The input is not valid JSON.
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is valid JSON but not an array of records.
    #[error("catalog must be a JSON array of records, found {0}")]
    NotAnArray(&'static str),
}

/// The full, read-only list of records.
///
/// A catalog is built once at startup. Record ids are unique: when the input
/// contains the same id more than once, the first record wins and later ones
/// are dropped with a warning.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<Arc<BookRecord>>,
    positions: HashMap<BookId, usize>,
}

impl Catalog {
    /// Builds a catalog from records in their source order.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = BookRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            if catalog.positions.contains_key(record.id()) {
                warn!(id = %record.id(), "dropping record with duplicate id");
                continue;
            }
            catalog
                .positions
                .insert(record.id().clone(), catalog.records.len());
            catalog.records.push(Arc::new(record));
        }
        catalog
    }

    /// Parses a catalog from JSON.
    ///
    /// The input is either a bare JSON array or the same array assigned in a
    /// script (`window.booksData = [...];`). Records that cannot be used (for
    /// example, ones without an id) are skipped with a warning.
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(strip_script_assignment(input))?;
        let entries = match value {
            Value::Array(entries) => entries,
            other => return Err(CatalogError::NotAnArray(json_kind(&other))),
        };
        let total = entries.len();
        let records: Vec<BookRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(
                |(position, entry)| match serde_json::from_value::<BookRecord>(entry) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!(position, %err, "skipping unusable catalog record");
                        None
                    }
                },
            )
            .collect();
        let catalog = Self::new(records);
        debug!(total, kept = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Returns all records in source order.
    #[must_use]
    pub fn records(&self) -> &[Arc<BookRecord>] {
        &self.records
    }

    /// Returns an iterator over all records in source order.
    pub fn iter(&self) -> core::slice::Iter<'_, Arc<BookRecord>> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<BookRecord>> {
        self.positions.get(id).map(|&i| &self.records[i])
    }

    /// Returns the source-order position of the record with `id`.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Returns a view list containing every record in source order.
    #[must_use]
    pub fn view_all(&self) -> ViewList {
        ViewList::from(self.records.clone())
    }
}

fn strip_script_assignment(input: &str) -> &str {
    let trimmed = input.trim();
    let Some(rest) = trimmed.strip_prefix("window.booksData") else {
        return trimmed;
    };
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest);
    rest.trim().trim_end_matches(';').trim_end()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
