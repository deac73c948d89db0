// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host without a screen: spines get deterministic widths and every
//! scroll lands immediately.

use std::collections::HashMap;

use bookcase_catalog::BookRecord;
use bookcase_engine::{Host, ScrollBehavior, ScrollDelegate};
use bookcase_virtual_list::LayoutBox;
use tracing::debug;

const MIN_SPINE: f64 = 28.0;
const MAX_SPINE: f64 = 64.0;
const SPINE_GAP: f64 = 4.0;

#[derive(Debug)]
pub(crate) struct HeadlessHost {
    width: f64,
    scroll: f64,
    next_left: Vec<f64>,
    fragment: Option<String>,
    preferences: HashMap<String, String>,
}

impl HeadlessHost {
    pub(crate) fn new(width: f64) -> Self {
        Self {
            width,
            scroll: 0.0,
            next_left: Vec::new(),
            fragment: None,
            preferences: HashMap::new(),
        }
    }

    pub(crate) fn with_fragment(mut self, fragment: Option<String>) -> Self {
        self.fragment = fragment;
        self
    }

    pub(crate) fn with_preference(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.preferences.insert(key.to_owned(), value);
        }
        self
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub(crate) fn fragment_value(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Spine width from the title length, so long titles get fat spines.
    fn spine_width(record: &BookRecord) -> f64 {
        let chars = record.title().chars().count();
        (MIN_SPINE + 1.5 * chars as f64).min(MAX_SPINE)
    }
}

impl Host for HeadlessHost {
    type Delegate = HeadlessDelegate;

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn measure_item(&mut self, index: usize, record: &BookRecord) -> Option<LayoutBox> {
        // Items are measured in order; a re-measure starts again at zero.
        if index == 0 {
            self.next_left.clear();
        }
        let left = self.next_left.last().copied().unwrap_or(0.0);
        let width = Self::spine_width(record);
        self.next_left.push(left + width + SPINE_GAP);
        Some(LayoutBox::new(left, width))
    }

    fn shelf_scroll(&self) -> f64 {
        self.scroll
    }

    fn set_shelf_scroll(&mut self, offset: f64, _behavior: ScrollBehavior) {
        self.scroll = offset.max(0.0);
    }

    fn create_delegate(&mut self) -> HeadlessDelegate {
        HeadlessDelegate {
            offset: self.scroll,
        }
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: Option<&str>) {
        debug!(?fragment, "fragment pushed");
        self.fragment = fragment.map(str::to_owned);
    }

    fn preference(&self, key: &str) -> Option<String> {
        self.preferences.get(key).cloned()
    }

    fn set_preference(&mut self, key: &str, value: &str) {
        self.preferences.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Debug)]
pub(crate) struct HeadlessDelegate {
    offset: f64,
}

impl ScrollDelegate for HeadlessDelegate {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
        self.offset = offset.max(0.0);
    }

    fn resize(&mut self) {}

    fn destroy(&mut self) {
        debug!(offset = self.offset, "delegate destroyed");
    }
}
