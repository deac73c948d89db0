// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered projections of the catalog.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::record::{BookId, BookRecord};
use crate::sort::{Key, SortKey};

/// An ordered sequence of catalog records.
///
/// A view list is what the loader materializes and what every index in the
/// engine refers to. It is rebuilt wholesale whenever the query or the sort
/// key changes; the record `id` is the only identity that survives a rebuild.
#[derive(Clone, Debug, Default)]
pub struct ViewList {
    items: Vec<Arc<BookRecord>>,
    positions: HashMap<BookId, usize>,
}

impl ViewList {
    /// Creates an empty view list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<BookRecord>> {
        self.items.get(index)
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<BookRecord>] {
        &self.items
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> core::slice::Iter<'_, Arc<BookRecord>> {
        self.items.iter()
    }

    /// Returns the position of the record with `id`, if it is in this list.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Reorders the list by `key`.
    ///
    /// Title and author compare on the folded text first and the lower-cased
    /// text second. Year is descending with unknown years treated as 0. The
    /// sort is stable, so records with equal keys keep their relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        self.items
            .sort_by_cached_key(|record| Key::for_record(key, record));
        self.reindex();
    }

    /// Rebuilds the id lookup. The first occurrence of a repeated id wins.
    fn reindex(&mut self) {
        self.positions.clear();
        self.positions.reserve(self.items.len());
        for (index, record) in self.items.iter().enumerate() {
            self.positions.entry(record.id().clone()).or_insert(index);
        }
    }

    /// Returns a sorted copy of this list.
    #[must_use]
    pub fn sorted(mut self, key: SortKey) -> Self {
        self.sort_by(key);
        self
    }
}

impl From<Vec<Arc<BookRecord>>> for ViewList {
    fn from(items: Vec<Arc<BookRecord>>) -> Self {
        let mut list = Self {
            items,
            positions: HashMap::new(),
        };
        list.reindex();
        list
    }
}

impl FromIterator<Arc<BookRecord>> for ViewList {
    fn from_iter<I: IntoIterator<Item = Arc<BookRecord>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a ViewList {
    type Item = &'a Arc<BookRecord>;
    type IntoIter = core::slice::Iter<'a, Arc<BookRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
