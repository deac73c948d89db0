// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use std::sync::Arc;

use bookcase_catalog::{BookId, BookRecord, SpinePalette};
use bookcase_physics::coverflow::Placement;
use bookcase_view::{PresentationFlags, ViewMode};

use crate::ScrollBehavior;

/// What the detail panels show for one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailDescriptor {
    /// The record's id.
    pub id: BookId,
    /// Title in display case.
    pub title: String,
    /// Author, if known.
    pub author: Option<String>,
    /// Translator, if known.
    pub translator: Option<String>,
    /// Publication year, if known.
    pub published: Option<i32>,
    /// Publisher, if known.
    pub publisher: Option<String>,
    /// Binding, if known.
    pub binding: Option<String>,
    /// ISBN as written in the catalog.
    pub isbn: Option<String>,
    /// Normalized cover path.
    pub cover: Option<String>,
    /// Explicit spine colors, if the record has both.
    pub palette: Option<SpinePalette>,
}

impl DetailDescriptor {
    /// Builds the descriptor for `record`.
    #[must_use]
    pub fn from_record(record: &BookRecord) -> Self {
        Self {
            id: record.id().clone(),
            title: record.display_title(),
            author: record.author().map(str::to_owned),
            translator: record.translator().map(str::to_owned),
            published: record.published(),
            publisher: record.publisher().map(str::to_owned),
            binding: record.binding().map(str::to_owned),
            isbn: record.isbn().map(str::to_owned),
            cover: record.cover().map(str::to_owned),
            palette: record.palette().cloned(),
        }
    }

    /// The metadata row: year, publisher, binding, then ISBN, skipping
    /// unknown values.
    #[must_use]
    pub fn meta(&self) -> Vec<String> {
        self.published
            .map(|year| year.to_string())
            .into_iter()
            .chain(self.publisher.clone())
            .chain(self.binding.clone())
            .chain(self.isbn.clone())
            .collect()
    }
}

/// A state change the render surface should apply.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// The view list was replaced; drop every materialized item.
    Rendered {
        /// Loader generation of the new list.
        generation: u64,
        /// Length of the new list.
        len: usize,
    },
    /// The view list is empty.
    NoResults,
    /// Items in `range` were materialized and should be added.
    Materialized {
        /// Loader generation the range belongs to.
        generation: u64,
        /// Newly materialized indices.
        range: Range<usize>,
    },
    /// Everything is materialized; the end-of-list sentinel can go.
    SentinelRetired,
    /// The presentation mode or its flags changed.
    Presentation {
        /// Mode the user asked for.
        requested: ViewMode,
        /// Mode actually shown.
        effective: ViewMode,
        /// Flags for the new state.
        flags: PresentationFlags,
    },
    /// The active selection changed.
    SelectionChanged {
        /// Previously active record.
        previous: Option<BookId>,
        /// Newly active record.
        current: Option<BookId>,
    },
    /// Show the detail panel for a record.
    DetailsShown(DetailDescriptor),
    /// Hide the detail panel.
    DetailsHidden,
    /// Scroll the item at `index` to the center of the page.
    ScrollIntoView {
        /// View-list index of the item.
        index: usize,
        /// How to move.
        behavior: ScrollBehavior,
    },
    /// Show the coverflow detail strip for the active item, or hide it.
    CoverflowDetails(Option<DetailDescriptor>),
    /// Show or hide the back-to-top control.
    BackToTop(bool),
    /// Scroll the page to the top.
    ScrollPageToTop,
}

/// Shelf state for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ShelfFrame {
    /// Shelf scroll offset after this frame's movement.
    pub scroll: f64,
    /// Tilt in degrees, applied to every item in `tilted`.
    pub tilt: f64,
    /// Materialized items near the viewport.
    pub tilted: Vec<usize>,
    /// Wheel multiplier for the smooth-scroll delegate.
    pub wheel_multiplier: f64,
}

/// The coverflow slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    /// Largest value: the view-list length minus one.
    pub max: f64,
    /// Current value: the continuous index.
    pub value: f64,
}

/// Coverflow state for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverflowFrame {
    /// Continuous index.
    pub index: f64,
    /// Velocity in items per frame.
    pub velocity: f64,
    /// Nearest item, if any is materialized.
    pub active: Option<usize>,
    /// Record of the nearest item, for the title and backdrop.
    pub active_record: Option<Arc<BookRecord>>,
    /// Placement of each item within the visible range.
    pub placements: Vec<Placement>,
    /// Slider position and range.
    pub slider: SliderState,
}

/// Output of one [`Engine::tick`](crate::Engine::tick).
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Frame timestamp in ms.
    pub now: f64,
    /// Clamped frame delta in seconds.
    pub dt: f64,
    /// Mode shown during this frame.
    pub mode: ViewMode,
    /// Shelf output, when the shelf is shown.
    pub shelf: Option<ShelfFrame>,
    /// Coverflow output, when the coverflow loop runs.
    pub coverflow: Option<CoverflowFrame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_skips_unknown_values() {
        let record = BookRecord::new("x", "the name of the rose")
            .with_published(1980)
            .with_isbn("978-0-15-144647-6");
        let details = DetailDescriptor::from_record(&record);
        assert_eq!(details.meta(), ["1980", "978-0-15-144647-6"]);
        assert_eq!(details.author, None);
    }
}
