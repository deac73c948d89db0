// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_virtual_list --heading-base-level=0

//! Bookcase Virtual List: incremental materialization for long lists.
//!
//! A catalog can hold thousands of records, and rendering them all up front is
//! not an option. This crate provides the small, renderer-agnostic core that
//! decides *how much* of an ordered list exists on screen:
//!
//! - [`IncrementalLoader`]: owns the current list, a load cursor, and the
//!   materialized prefix of the list. Items are materialized in fixed-size
//!   batches, either on demand ([`IncrementalLoader::ensure_loaded_through`])
//!   or when the host reports that the end-of-list [`Sentinel`] scrolled into
//!   view.
//! - [`RenderedItem`]: one materialized item plus its cached [`LayoutBox`].
//! - [`IncrementalLoader::visible_in`]: the culling window, yielding the
//!   materialized indices whose box intersects the viewport plus a buffer.
//!
//! The loader never un-materializes: the materialized prefix only grows until
//! the next [`IncrementalLoader::reset`], which starts a new generation.
//!
//! ## Minimal example
//!
//! ```rust
//! use bookcase_virtual_list::{IncrementalLoader, Sentinel};
//!
//! let mut loader = IncrementalLoader::new(50);
//! loader.reset((0..120).collect::<Vec<u32>>());
//! assert_eq!(loader.load_next(), 0..50);
//! assert_eq!(loader.sentinel(), Sentinel::Attached);
//!
//! // The host saw the sentinel: exactly one more batch.
//! assert_eq!(loader.on_sentinel_visible(), 50..100);
//!
//! // Jumping to an item far down the list materializes everything before it.
//! loader.ensure_loaded_through(110);
//! assert!(loader.is_exhausted());
//! assert_eq!(loader.sentinel(), Sentinel::Retired);
//! ```
//!
//! Layout boxes live in a caller-chosen 1D coordinate space along the scroll
//! axis (typically logical pixels).
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod loader;

pub use layout::LayoutBox;
pub use loader::{DEFAULT_BATCH_SIZE, IncrementalLoader, RenderedItem, Sentinel};
