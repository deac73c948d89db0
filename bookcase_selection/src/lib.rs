// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_selection --heading-base-level=0

//! Bookcase Selection: bookkeeping for the one active item.
//!
//! A catalog view highlights at most one record at a time: the one whose
//! details are open and whose id is mirrored into the page fragment. This
//! crate tracks that key and nothing else. It does not know how items are laid
//! out or ordered; callers decide when a click, a deep link, or a random pick
//! should change it.
//!
//! [`ActiveSelection`] tracks:
//! - The active key, if any.
//! - A monotonically increasing **revision** counter that bumps only when the
//!   active key actually changes.
//!
//! Mutations return a [`SelectionChange`] describing the previous and new key,
//! so hosts can un-highlight the old item and highlight the new one without
//! keeping their own copy.
//!
//! ## Minimal example
//!
//! ```rust
//! use bookcase_selection::ActiveSelection;
//!
//! let mut active = ActiveSelection::<&str>::new();
//!
//! let change = active.select("gatsby").unwrap();
//! assert_eq!(change.previous, None);
//! assert_eq!(active.get(), Some(&"gatsby"));
//!
//! // Selecting the same key again is a no-op.
//! assert!(active.select("gatsby").is_none());
//! assert_eq!(active.revision(), 1);
//!
//! let change = active.clear().unwrap();
//! assert_eq!(change.previous, Some("gatsby"));
//! assert!(active.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

/// The previous and new active key after a change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange<K> {
    /// The key that was active before.
    pub previous: Option<K>,
    /// The key that is active now.
    pub current: Option<K>,
}

/// The single active key plus a revision.
#[derive(Clone, Debug, Default)]
pub struct ActiveSelection<K> {
    active: Option<K>,
    revision: u64,
}

impl<K> ActiveSelection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: None,
            revision: 0,
        }
    }

    /// Returns the active key, if any.
    #[must_use]
    pub fn get(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Returns `true` if nothing is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when the active key changes; no-op calls leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: Clone + PartialEq> ActiveSelection<K> {
    /// Returns `true` if `key` is the active key.
    #[must_use]
    pub fn is_active(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }

    /// Makes `key` active.
    ///
    /// Returns `None` if it already was.
    pub fn select(&mut self, key: K) -> Option<SelectionChange<K>> {
        if self.is_active(&key) {
            return None;
        }
        let previous = self.active.replace(key.clone());
        self.bump_revision();
        Some(SelectionChange {
            previous,
            current: Some(key),
        })
    }

    /// Clears the active key.
    ///
    /// Returns `None` if nothing was active.
    pub fn clear(&mut self) -> Option<SelectionChange<K>> {
        let previous = self.active.take()?;
        self.bump_revision();
        Some(SelectionChange {
            previous: Some(previous),
            current: None,
        })
    }

    /// Makes `key` active, or clears the selection when `key` is `None`.
    pub fn set(&mut self, key: Option<K>) -> Option<SelectionChange<K>> {
        match key {
            Some(key) => self.select(key),
            None => self.clear(),
        }
    }
}
