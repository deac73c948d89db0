// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_catalog --heading-base-level=0

//! Bookcase Catalog: the immutable record store behind a book shelf.
//!
//! This crate owns the data side of the catalog engine:
//!
//! - [`BookRecord`]: one externally supplied record. Parsing is lenient; a field
//!   of the wrong type is treated as unknown instead of failing the record.
//! - [`Catalog`]: the full, read-only record list with an id index.
//! - [`ViewList`]: an ordered projection of the catalog (filtered and sorted)
//!   that the rest of the engine renders from.
//! - [`SortKey`] and [`ViewList::sort_by`]: the sort engine.
//! - [`fold`]: locale-tolerant text folding shared by sorting, search, and
//!   deep-link resolution.
//!
//! ## Minimal example
//!
//! ```rust
//! use bookcase_catalog::{Catalog, SortKey};
//!
//! let json = r#"[
//!     {"id": "b", "title": "Beloved", "author": "Toni Morrison", "published": 1987},
//!     {"id": "a", "title": "Austerlitz", "author": "W. G. Sebald", "published": "2001"}
//! ]"#;
//! let catalog = Catalog::from_json(json).unwrap();
//! assert_eq!(catalog.len(), 2);
//!
//! let mut view = catalog.view_all();
//! view.sort_by(SortKey::Year);
//! assert_eq!(view.get(0).map(|b| b.id().as_str()), Some("a"));
//! ```
//!
//! Records are shared behind [`Arc`](std::sync::Arc) so that view lists,
//! loaders, and hosts can hold them without copying.

mod catalog;
mod fold;
mod record;
mod sort;
mod view_list;

pub use catalog::{Catalog, CatalogError};
pub use fold::fold;
pub use record::{BookId, BookRecord, RecordError, SpinePalette};
pub use sort::{ParseSortKeyError, SortKey, compare};
pub use view_list::ViewList;
