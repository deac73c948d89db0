// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// The horizontal shelf viewport.
///
/// Tracks the visible width and, when known, the full content extent, and
/// converts item boxes into scroll offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct ShelfViewport {
    width: f64,
    content_extent: Option<f64>,
}

impl ShelfViewport {
    /// Creates a viewport `width` px wide with unknown content extent.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width: sanitize(width),
            content_extent: None,
        }
    }

    /// Returns the visible width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the visible width.
    pub fn set_width(&mut self, width: f64) {
        self.width = sanitize(width);
    }

    /// Returns the content extent, if known.
    #[must_use]
    pub fn content_extent(&self) -> Option<f64> {
        self.content_extent
    }

    /// Sets the full scrollable extent of the content.
    pub fn set_content_extent(&mut self, extent: Option<f64>) {
        self.content_extent = extent.filter(|e| e.is_finite()).map(|e| e.max(0.0));
    }

    /// The largest valid scroll offset, if the content extent is known.
    #[must_use]
    pub fn max_scroll(&self) -> Option<f64> {
        self.content_extent.map(|e| (e - self.width).max(0.0))
    }

    /// Clamps `offset` into the scrollable range.
    #[must_use]
    pub fn clamp_scroll(&self, offset: f64) -> f64 {
        let offset = offset.max(0.0);
        match self.max_scroll() {
            Some(max) => offset.min(max),
            None => offset,
        }
    }

    /// The scroll offset that centers an item at `left` of `width`.
    #[must_use]
    pub fn center_on(&self, left: f64, width: f64) -> f64 {
        self.clamp_scroll(left - self.width / 2.0 + width / 2.0)
    }

    /// The span visible at `scroll`.
    #[must_use]
    pub fn visible_range(&self, scroll: f64) -> Range<f64> {
        scroll..scroll + self.width
    }
}

fn sanitize(width: f64) -> f64 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}
