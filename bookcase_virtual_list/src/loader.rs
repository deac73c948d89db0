// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The incremental loader and its sentinel.

use alloc::vec::Vec;
use core::ops::Range;

use crate::LayoutBox;

/// Number of items materialized per batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// State of the end-of-list sentinel.
///
/// The sentinel is a marker the host places after the last materialized item.
/// When it scrolls into view the host calls
/// [`IncrementalLoader::on_sentinel_visible`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sentinel {
    /// No sentinel exists, because the list is empty.
    #[default]
    Detached,
    /// The sentinel is in place and more items remain.
    Attached,
    /// Every item is materialized; visibility signals are ignored.
    Retired,
}

/// One materialized item.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<T> {
    index: usize,
    item: T,
    layout: Option<LayoutBox>,
}

impl<T> RenderedItem<T> {
    /// Position of this item in the list.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The item itself.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The cached layout, if the item has been measured.
    #[must_use]
    pub fn layout(&self) -> Option<LayoutBox> {
        self.layout
    }

    /// The cached layout, or [`LayoutBox::UNMEASURED`] when there is none.
    #[must_use]
    pub fn layout_or_default(&self) -> LayoutBox {
        self.layout
            .map_or(LayoutBox::UNMEASURED, LayoutBox::or_unmeasured_width)
    }
}

/// Materializes a list in batches, front to back.
///
/// The loader owns the current list and a cursor (`next_index`) into it. Every
/// item before the cursor is materialized exactly once and in order; nothing
/// after it is. The cursor only moves forward until [`reset`](Self::reset)
/// installs a new list and bumps the generation.
#[derive(Clone, Debug)]
pub struct IncrementalLoader<T> {
    list: Vec<T>,
    rendered: Vec<RenderedItem<T>>,
    batch_size: usize,
    generation: u64,
    sentinel: Sentinel,
}

impl<T> Default for IncrementalLoader<T> {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl<T> IncrementalLoader<T> {
    /// Creates an empty loader that materializes `batch_size` items at a time.
    ///
    /// A batch size of zero is treated as one.
    #[must_use]
    pub fn new(batch_size: usize) -> Self {
        Self {
            list: Vec::new(),
            rendered: Vec::new(),
            batch_size: batch_size.max(1),
            generation: 0,
            sentinel: Sentinel::Detached,
        }
    }

    /// Returns the number of items per batch.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the generation, bumped by every [`reset`](Self::reset).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the sentinel state.
    #[must_use]
    pub fn sentinel(&self) -> Sentinel {
        self.sentinel
    }

    /// Returns the length of the whole list, materialized or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the index of the next item to materialize.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.rendered.len()
    }

    /// Returns `true` once every item is materialized.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rendered.len() >= self.list.len()
    }

    /// Returns the number of materialized items.
    #[must_use]
    pub fn materialized_len(&self) -> usize {
        self.rendered.len()
    }

    /// Returns the index of the last materialized item.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.rendered.len().checked_sub(1)
    }

    /// Returns the materialized items in list order.
    #[must_use]
    pub fn items(&self) -> &[RenderedItem<T>] {
        &self.rendered
    }

    /// Returns the materialized item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RenderedItem<T>> {
        self.rendered.get(index)
    }

    /// Returns the list item at `index`, materialized or not.
    #[must_use]
    pub fn list_item(&self, index: usize) -> Option<&T> {
        self.list.get(index)
    }

    /// Installs a new list.
    ///
    /// Everything materialized so far is dropped, the cursor returns to zero,
    /// and the generation is bumped. The sentinel is attached if the new list
    /// has any items.
    pub fn reset(&mut self, list: impl IntoIterator<Item = T>) {
        self.list.clear();
        self.list.extend(list);
        self.rendered.clear();
        self.generation = self.generation.wrapping_add(1);
        self.sentinel = if self.list.is_empty() {
            Sentinel::Detached
        } else {
            Sentinel::Attached
        };
    }

    /// Reports that the host saw the sentinel.
    ///
    /// Performs at most one batch. Once the list is exhausted the sentinel is
    /// retired and later signals return an empty range.
    pub fn on_sentinel_visible(&mut self) -> Range<usize>
    where
        T: Clone,
    {
        match self.sentinel {
            Sentinel::Attached => self.load_next(),
            Sentinel::Detached | Sentinel::Retired => {
                let end = self.rendered.len();
                end..end
            }
        }
    }
}

impl<T: Clone> IncrementalLoader<T> {
    /// Materializes the next batch.
    ///
    /// Returns the range of newly materialized indices, which is empty when the
    /// list is already exhausted.
    pub fn load_next(&mut self) -> Range<usize> {
        self.load_batch(self.batch_size)
    }

    /// Materializes up to `count` more items.
    pub fn load_batch(&mut self, count: usize) -> Range<usize> {
        let start = self.rendered.len();
        let end = start.saturating_add(count).min(self.list.len());
        self.rendered
            .extend(self.list[start..end].iter().enumerate().map(|(i, item)| {
                RenderedItem {
                    index: start + i,
                    item: item.clone(),
                    layout: None,
                }
            }));
        if self.is_exhausted() && self.sentinel == Sentinel::Attached {
            self.sentinel = Sentinel::Retired;
        }
        start..end
    }

    /// Materializes whole batches until `index` is materialized or the list is
    /// exhausted.
    ///
    /// Returns the range of newly materialized indices.
    pub fn ensure_loaded_through(&mut self, index: usize) -> Range<usize> {
        let start = self.rendered.len();
        while self.rendered.len() <= index && !self.is_exhausted() {
            self.load_next();
        }
        start..self.rendered.len()
    }
}

impl<T> IncrementalLoader<T> {
    /// Refreshes the cached layout of every materialized item.
    ///
    /// `measure` receives each item's index and value and returns its box, or
    /// `None` to leave the item unmeasured. Boxes with non-finite fields are
    /// discarded.
    pub fn measure(&mut self, mut measure: impl FnMut(usize, &T) -> Option<LayoutBox>) {
        for rendered in &mut self.rendered {
            rendered.layout = measure(rendered.index, &rendered.item).filter(LayoutBox::is_valid);
        }
    }

    /// Updates the cached layout of one materialized item.
    ///
    /// Returns `false` if `index` is not materialized or the box is invalid.
    pub fn set_layout(&mut self, index: usize, layout: LayoutBox) -> bool {
        match self.rendered.get_mut(index) {
            Some(rendered) if layout.is_valid() => {
                rendered.layout = Some(layout);
                true
            }
            _ => false,
        }
    }

    /// Returns the indices of materialized items inside the culling window.
    ///
    /// The window spans `[scroll - buffer, scroll - buffer + viewport + 2 * buffer]`.
    /// Unmeasured items use [`LayoutBox::UNMEASURED`].
    pub fn visible_in(
        &self,
        scroll: f64,
        viewport: f64,
        buffer: f64,
    ) -> impl Iterator<Item = usize> + '_ {
        let start = scroll - buffer;
        self.visible_between(start, start + viewport + 2.0 * buffer)
    }

    /// Returns the indices of materialized items intersecting `[start, end]`.
    pub fn visible_between(&self, start: f64, end: f64) -> impl Iterator<Item = usize> + '_ {
        self.rendered
            .iter()
            .filter(move |r| r.layout_or_default().intersects(start, end))
            .map(RenderedItem::index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn loader(len: usize, batch: usize) -> IncrementalLoader<usize> {
        let mut loader = IncrementalLoader::new(batch);
        loader.reset(0..len);
        loader
    }

    #[test]
    fn empty_list_detaches_sentinel() {
        let mut l = loader(0, 10);
        assert_eq!(l.sentinel(), Sentinel::Detached);
        assert!(l.is_exhausted());
        assert_eq!(l.load_next(), 0..0);
        assert_eq!(l.on_sentinel_visible(), 0..0);
        assert_eq!(l.last_index(), None);
    }

    #[test]
    fn last_partial_batch_retires_sentinel() {
        let mut l = loader(25, 10);
        assert_eq!(l.load_next(), 0..10);
        assert_eq!(l.on_sentinel_visible(), 10..20);
        assert_eq!(l.sentinel(), Sentinel::Attached);
        assert_eq!(l.on_sentinel_visible(), 20..25);
        assert_eq!(l.sentinel(), Sentinel::Retired);
        assert_eq!(l.on_sentinel_visible(), 25..25);
        assert_eq!(l.last_index(), Some(24));
    }

    #[test]
    fn reset_bumps_generation_and_clears() {
        let mut l = loader(5, 10);
        l.load_next();
        let generation = l.generation();
        l.reset(vec![7, 8]);
        assert_eq!(l.generation(), generation + 1);
        assert_eq!(l.next_index(), 0);
        assert_eq!(l.sentinel(), Sentinel::Attached);
        assert_eq!(l.list_item(1), Some(&8));
    }

    #[test]
    fn ensure_loaded_through_loads_whole_batches() {
        let mut l = loader(100, 10);
        assert_eq!(l.ensure_loaded_through(25), 0..30);
        assert_eq!(l.ensure_loaded_through(5), 30..30);
        assert_eq!(l.ensure_loaded_through(1_000), 30..100);
    }

    #[test]
    fn batch_size_zero_is_one() {
        let mut l = loader(3, 0);
        assert_eq!(l.load_next(), 0..1);
    }

    #[test]
    fn culling_window_uses_cached_layout() {
        let mut l = loader(10, 10);
        l.load_next();
        l.measure(|i, _| Some(LayoutBox::new(i as f64 * 100.0, 100.0)));
        let visible: Vec<usize> = l.visible_in(400.0, 200.0, 50.0).collect();
        // Window is [350, 650].
        assert_eq!(visible, vec![3, 4, 5, 6]);
    }

    #[test]
    fn unmeasured_items_sit_at_origin() {
        let mut l = loader(3, 10);
        l.load_next();
        assert!(l.set_layout(2, LayoutBox::new(5_000.0, 100.0)));
        assert!(!l.set_layout(9, LayoutBox::new(0.0, 1.0)));
        assert!(!l.set_layout(0, LayoutBox::new(f64::INFINITY, 1.0)));
        let visible: Vec<usize> = l.visible_in(0.0, 300.0, 0.0).collect();
        assert_eq!(visible, vec![0, 1]);
    }
}
