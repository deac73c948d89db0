// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use bookcase_catalog::{BookRecord, Catalog, ViewList, fold};
use tracing::debug;

use crate::config::SearchConfig;
use crate::query::Query;

/// Folded search text for every record of a catalog.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    entries: Vec<Entry>,
    config: SearchConfig,
}

#[derive(Clone, Debug)]
struct Entry {
    record: Arc<BookRecord>,
    corpus: String,
}

impl SearchIndex {
    /// Builds an index over `catalog` with the default configuration.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    /// Builds an index over `catalog` with `config`.
    #[must_use]
    pub fn with_config(catalog: &Catalog, config: SearchConfig) -> Self {
        let entries = catalog
            .iter()
            .map(|record| Entry {
                corpus: corpus_of(record),
                record: Arc::clone(record),
            })
            .collect();
        Self { entries, config }
    }

    /// Returns the configuration this index filters with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no records are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses `raw` with this index's configuration.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Query {
        Query::parse(raw, &self.config)
    }

    /// Returns the records matching `raw`, in catalog order.
    #[must_use]
    pub fn filter(&self, raw: &str) -> ViewList {
        self.filter_query(&self.parse(raw))
    }

    /// Returns the records matching an already parsed `query`, in catalog order.
    #[must_use]
    pub fn filter_query(&self, query: &Query) -> ViewList {
        if query.is_all() {
            return self.entries.iter().map(|e| Arc::clone(&e.record)).collect();
        }
        let view: ViewList = self
            .entries
            .iter()
            .filter(|e| query.matches(&e.corpus))
            .map(|e| Arc::clone(&e.record))
            .collect();
        debug!(matches = view.len(), of = self.entries.len(), "search filtered catalog");
        view
    }
}

fn corpus_of(record: &BookRecord) -> String {
    let mut text = String::with_capacity(record.title().len() + 32);
    text.push_str(record.title());
    text.push(' ');
    text.push_str(record.author().unwrap_or_default());
    fold(&text)
}
