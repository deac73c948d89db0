// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_search --heading-base-level=0

//! Bookcase Search: a typo-tolerant conjunctive filter over a book catalog.
//!
//! Searching narrows the catalog to the records whose title and author match
//! every word of the query. Matching is deliberately forgiving:
//!
//! - Text on both sides is folded with [`bookcase_catalog::fold`], so case,
//!   accents, and Turkish letters do not matter.
//! - A query word matches if it appears anywhere in the record's
//!   `title + " " + author` text, so partial words like `tolk` match.
//! - Otherwise it matches if some single word of that text is within a small
//!   edit distance: 1 for query words shorter than 5 characters, 2 for longer
//!   ones.
//! - Queries shorter than 3 characters (after trimming) do not filter at all.
//!
//! There is no ranking: matches keep catalog order, and callers re-sort the
//! result with [`ViewList::sort_by`](bookcase_catalog::ViewList::sort_by).
//!
//! ## Minimal example
//!
//! ```rust
//! use bookcase_catalog::{BookRecord, Catalog};
//! use bookcase_search::SearchIndex;
//!
//! let catalog = Catalog::new([
//!     BookRecord::new("lotr", "The Lord of the Rings").with_author("J.R.R. Tolkien"),
//!     BookRecord::new("hobbit", "The Hobbit").with_author("Someone Else"),
//! ]);
//! let index = SearchIndex::new(&catalog);
//!
//! let hits = index.filter("tolk ring");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits.get(0).map(|b| b.id().as_str()), Some("lotr"));
//!
//! // Two characters are not a query yet.
//! assert_eq!(index.filter("lo").len(), 2);
//! ```
//!
//! The index folds every record once when it is built; the catalog is
//! immutable, so the folded text never goes stale.

mod config;
mod index;
mod query;

pub use config::SearchConfig;
pub use index::SearchIndex;
pub use query::{Query, Word};
