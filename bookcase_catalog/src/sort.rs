// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sort keys and the comparators behind them.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fold::fold;
use crate::record::BookRecord;

/// The key a view list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by folded title.
    #[default]
    Title,
    /// Ascending by folded author; unknown authors sort as the empty string.
    Author,
    /// Descending by publication year; unknown years sort as year 0.
    Year,
}

impl SortKey {
    /// All keys, in the order a picker would list them.
    pub const ALL: [Self; 3] = [Self::Title, Self::Author, Self::Year];

    /// The identifier used in configuration and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`SortKey`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key `{0}`, expected one of: title, author, year")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            _ => Err(ParseSortKeyError(s.to_owned())),
        }
    }
}

/// Precomputed comparison key for one record.
///
/// Folding is not free, so keys are built once per record per sort.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Key {
    Text { folded: String, lowered: String },
    // Stored negated so a plain ascending sort yields newest first.
    Year(core::cmp::Reverse<i32>),
}

impl Key {
    pub(crate) fn for_record(key: SortKey, record: &BookRecord) -> Self {
        match key {
            SortKey::Title => Self::text(record.title()),
            SortKey::Author => Self::text(record.author().unwrap_or_default()),
            SortKey::Year => Self::Year(core::cmp::Reverse(record.published().unwrap_or(0))),
        }
    }

    fn text(value: &str) -> Self {
        Self::Text {
            folded: fold(value),
            lowered: value.to_lowercase(),
        }
    }
}

/// Compares two records under `key`.
///
/// This is the ordering [`ViewList::sort_by`](crate::ViewList::sort_by)
/// applies; it is exposed for hosts that keep their own record lists.
#[must_use]
pub fn compare(key: SortKey, a: &BookRecord, b: &BookRecord) -> Ordering {
    Key::for_record(key, a).cmp(&Key::for_record(key, b))
}
