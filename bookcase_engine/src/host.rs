// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seams between the engine and whatever renders it.

use bookcase_catalog::BookRecord;
use bookcase_virtual_list::LayoutBox;

/// How a scroll request should move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target.
    #[default]
    Immediate,
    /// Animate toward the target.
    Smooth,
}

/// A smooth-scroll implementation driving the horizontal shelf.
///
/// The engine only creates one while the wide shelf is shown and destroys it
/// when leaving.
pub trait ScrollDelegate {
    /// Current scroll offset in px.
    fn scroll_offset(&self) -> f64;

    /// Requests a scroll to `offset`.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Recomputes internal dimensions after content changed.
    fn resize(&mut self);

    /// Releases the delegate. It is dropped right after.
    fn destroy(&mut self);
}

/// The surface the engine drives.
///
/// Every method is called synchronously from an engine entry point; none of
/// them may call back into the engine.
pub trait Host {
    /// The smooth-scroll delegate this host provides.
    type Delegate: ScrollDelegate;

    /// Current viewport width in px.
    fn viewport_width(&self) -> f64;

    /// Measures a materialized item on the shelf.
    ///
    /// Returns `None` when the item has no layout yet.
    fn measure_item(&mut self, index: usize, record: &BookRecord) -> Option<LayoutBox>;

    /// Native shelf scroll offset, used while no delegate exists.
    fn shelf_scroll(&self) -> f64;

    /// Sets the native shelf scroll offset.
    fn set_shelf_scroll(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Creates a smooth-scroll delegate for the shelf.
    fn create_delegate(&mut self) -> Self::Delegate;

    /// The navigation fragment present at startup, without the leading `#`.
    fn fragment(&self) -> Option<String>;

    /// Replaces the navigation fragment without navigating.
    ///
    /// Must not report the change back through
    /// [`Engine::on_fragment_changed`](crate::Engine::on_fragment_changed).
    fn set_fragment(&mut self, fragment: Option<&str>);

    /// Reads a session preference.
    fn preference(&self, key: &str) -> Option<String>;

    /// Writes a session preference.
    fn set_preference(&mut self, key: &str, value: &str);
}
