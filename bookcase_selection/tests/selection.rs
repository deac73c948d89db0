// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `bookcase_selection` crate.
//!
//! These exercise how the active key, the returned changes, and the revision
//! counter interact.

use bookcase_selection::{ActiveSelection, SelectionChange};

#[test]
fn empty_selection_basics() {
    let sel = ActiveSelection::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.get(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_reports_previous_and_bumps_revision() {
    let mut sel = ActiveSelection::new();
    assert_eq!(
        sel.select(1),
        Some(SelectionChange {
            previous: None,
            current: Some(1),
        })
    );
    assert_eq!(
        sel.select(2),
        Some(SelectionChange {
            previous: Some(1),
            current: Some(2),
        })
    );
    assert!(sel.is_active(&2));
    assert!(!sel.is_active(&1));
    assert_eq!(sel.revision(), 2);
}

#[test]
fn repeated_select_is_a_no_op() {
    let mut sel = ActiveSelection::new();
    sel.select(7);
    assert_eq!(sel.select(7), None);
    assert_eq!(sel.revision(), 1);
}

#[test]
fn clear_bumps_revision_only_on_change() {
    let mut sel = ActiveSelection::<u32>::new();
    assert_eq!(sel.clear(), None);
    assert_eq!(sel.revision(), 0);

    sel.select(1);
    assert_eq!(
        sel.clear(),
        Some(SelectionChange {
            previous: Some(1),
            current: None,
        })
    );
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn set_dispatches_on_option() {
    let mut sel = ActiveSelection::new();
    assert!(sel.set(Some("a")).is_some());
    assert!(sel.set(Some("a")).is_none());
    assert!(sel.set(None).is_some());
    assert!(sel.set(None).is_none());
    assert_eq!(sel.revision(), 2);
}
