// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;
use std::sync::Arc;

use bookcase_catalog::{BookId, BookRecord, Catalog, SortKey, ViewList};
use bookcase_input::keys::Key;
use bookcase_input::scrub::{Scrubber, Track};
use bookcase_physics::coverflow::{CoverflowPhysicsState, DetailsChange};
use bookcase_physics::shelf::ShelfPhysicsState;
use bookcase_search::SearchIndex;
use bookcase_selection::{ActiveSelection, SelectionChange};
use bookcase_timing::{FrameClock, TimerQueue};
use bookcase_view::{
    Continuity, PREFERENCE_KEY, PresentationFlags, ShelfViewport, Transition, ViewMode,
    ViewStateMachine,
};
use bookcase_virtual_list::{IncrementalLoader, RenderedItem, Sentinel};
use kurbo::Point;
use tracing::{debug, info, warn};

use crate::deep_link;
use crate::{
    CoverflowFrame, DetailDescriptor, EngineConfig, EngineError, EngineEvent, Frame, Host,
    ScrollBehavior, ScrollDelegate, ShelfFrame, SliderState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Resize,
    DeepLink,
}

/// The interactive catalog engine.
///
/// Owns the catalog, the current view list and its loader, the view state
/// machine, both physics simulations, and the active selection. Hosts drive
/// it through the `on_*` entry points and [`tick`](Self::tick), and apply the
/// [`EngineEvent`]s it queues and the [`Frame`]s it returns.
pub struct Engine<H: Host> {
    host: H,
    config: EngineConfig,
    catalog: Catalog,
    search: SearchIndex,
    query: String,
    sort: SortKey,
    list: ViewList,
    loader: IncrementalLoader<Arc<BookRecord>>,
    view: ViewStateMachine,
    viewport: ShelfViewport,
    delegate: Option<H::Delegate>,
    shelf: ShelfPhysicsState,
    coverflow: CoverflowPhysicsState,
    selection: ActiveSelection<BookId>,
    details_shown: bool,
    timers: TimerQueue<Timer>,
    pending_width: Option<f64>,
    startup_link: bool,
    now: f64,
    page_scroll: f64,
    back_to_top: bool,
    scrubber: Scrubber,
    events: Vec<EngineEvent>,
}

impl<H: Host> fmt::Debug for Engine<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("records", &self.catalog.len())
            .field("query", &self.query)
            .field("sort", &self.sort)
            .field("view", &self.view)
            .field("materialized", &self.loader.materialized_len())
            .field("selection", &self.selection.get())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Engine<H> {
    /// Builds an engine over `catalog` and renders the first batch.
    ///
    /// The initial mode comes from the host's viewport width and stored
    /// preference. The startup fragment is resolved shortly after the first
    /// [`tick`](Self::tick).
    pub fn new(catalog: Catalog, config: EngineConfig, host: H) -> Result<Self, EngineError> {
        config.validate()?;
        if catalog.is_empty() {
            warn!("catalog is empty, nothing to present");
            return Err(EngineError::NoContent);
        }
        let search = SearchIndex::with_config(&catalog, config.search);
        let width = host.viewport_width();
        let stored = host.preference(PREFERENCE_KEY);
        let view = ViewStateMachine::new(config.view, width, stored.as_deref());
        let shelf = ShelfPhysicsState::new(config.shelf)
            .with_clock(FrameClock::with_max_delta(config.timing.max_frame_delta));
        let mut engine = Self {
            loader: IncrementalLoader::new(config.loader.batch_size),
            coverflow: CoverflowPhysicsState::new(config.coverflow),
            sort: config.sort,
            viewport: ShelfViewport::new(width),
            query: String::new(),
            list: ViewList::new(),
            delegate: None,
            selection: ActiveSelection::new(),
            details_shown: false,
            timers: TimerQueue::new(),
            pending_width: None,
            startup_link: true,
            now: 0.0,
            page_scroll: 0.0,
            back_to_top: false,
            scrubber: Scrubber::new(Track::new(0.0, 0.0, 0.0)),
            events: Vec::new(),
            host,
            config,
            catalog,
            search,
            view,
            shelf,
        };
        engine.refresh();
        engine.emit_presentation();
        engine.sync_delegate();
        if engine.view.effective() == ViewMode::Coverflow {
            engine.start_coverflow();
        }
        info!(
            records = engine.catalog.len(),
            mode = %engine.view.effective(),
            sort = %engine.sort,
            "engine ready"
        );
        Ok(engine)
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the full catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the current view list.
    #[must_use]
    pub fn view_list(&self) -> &ViewList {
        &self.list
    }

    /// Returns the loader over the current view list.
    #[must_use]
    pub fn loader(&self) -> &IncrementalLoader<Arc<BookRecord>> {
        &self.loader
    }

    /// Returns the view state machine.
    #[must_use]
    pub fn view(&self) -> &ViewStateMachine {
        &self.view
    }

    /// Returns the shelf simulation.
    #[must_use]
    pub fn shelf(&self) -> &ShelfPhysicsState {
        &self.shelf
    }

    /// Returns the coverflow simulation.
    #[must_use]
    pub fn coverflow(&self) -> &CoverflowPhysicsState {
        &self.coverflow
    }

    /// Returns the smooth-scroll delegate, if one exists.
    #[must_use]
    pub fn delegate(&self) -> Option<&H::Delegate> {
        self.delegate.as_ref()
    }

    /// Returns the active record's id.
    #[must_use]
    pub fn selection(&self) -> Option<&BookId> {
        self.selection.get()
    }

    /// Returns the selection revision, bumped on every change.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection.revision()
    }

    /// Returns `true` while the detail panel is shown.
    #[must_use]
    pub fn details_visible(&self) -> bool {
        self.details_shown
    }

    /// Returns `true` while the back-to-top control is shown.
    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top
    }

    /// Returns the raw search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the sort key.
    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        core::mem::take(&mut self.events)
    }

    /// Advances one frame at `now` ms.
    ///
    /// Fires due timers, runs the simulation for the effective mode, and
    /// returns what to draw.
    pub fn tick(&mut self, now: f64) -> Frame {
        let dt = self.shelf.begin_frame(now);
        if now.is_finite() {
            self.now = now;
        }
        if core::mem::take(&mut self.startup_link) {
            self.timers.schedule(
                Timer::DeepLink,
                self.now + self.config.timing.deep_link_delay_ms,
            );
        }
        for timer in self.timers.poll(self.now) {
            match timer {
                Timer::Resize => self.apply_resize(),
                Timer::DeepLink => {
                    if let Some(fragment) = self.host.fragment() {
                        self.on_fragment_changed(&fragment);
                    }
                }
            }
        }
        let mode = self.view.effective();
        let shelf = (mode == ViewMode::Shelf).then(|| self.step_shelf(dt));
        let coverflow = self.step_coverflow(self.now);
        Frame {
            now: self.now,
            dt,
            mode,
            shelf,
            coverflow,
        }
    }

    /// Reports that the end-of-list sentinel became visible.
    ///
    /// Materializes at most one batch and returns its range.
    pub fn on_sentinel_visible(&mut self) -> Range<usize> {
        let before = self.loader.sentinel();
        let range = self.loader.on_sentinel_visible();
        self.after_load(before, &range, true);
        range
    }

    /// Reports a viewport resize. Applied once resizes stop for the debounce
    /// period.
    pub fn on_resize(&mut self, now: f64, width: f64) {
        self.pending_width = Some(width);
        self.timers
            .schedule(Timer::Resize, now + self.config.timing.resize_debounce_ms);
    }

    /// Resolves a navigation fragment and selects what it names.
    ///
    /// Returns the view-list index that was selected. An unresolvable fragment
    /// is logged and leaves every piece of state untouched.
    pub fn on_fragment_changed(&mut self, fragment: &str) -> Option<usize> {
        let trimmed = fragment.strip_prefix('#').unwrap_or(fragment);
        if trimmed.is_empty() {
            return None;
        }
        let Some(decoded) = deep_link::decode_fragment(trimmed) else {
            warn!(fragment, "deep link is not valid percent-encoded UTF-8");
            return None;
        };
        let Some(index) = deep_link::resolve(&decoded, &self.list) else {
            warn!(fragment = %decoded, "deep link not found");
            return None;
        };
        let id = self.list.get(index)?.id().clone();
        debug!(fragment = %decoded, index, id = %id, "deep link resolved");
        self.ensure_loaded_through(index);
        self.select(id.as_str(), true);
        Some(index)
    }

    /// Handles a key press.
    pub fn on_key_down(&mut self, key: Key) {
        match key {
            Key::Escape => {
                if !self.selection.is_empty() {
                    self.clear_selection();
                }
            }
            Key::Direction(dir) => match self.view.effective() {
                ViewMode::Shelf => self.shelf.press(dir),
                ViewMode::Coverflow => self.coverflow.press(dir),
                ViewMode::Stack => {}
            },
            Key::Other => {}
        }
    }

    /// Handles a key release.
    pub fn on_key_up(&mut self, key: Key) {
        if let Key::Direction(dir) = key {
            match self.view.effective() {
                ViewMode::Shelf => self.shelf.release(dir),
                ViewMode::Coverflow => self.coverflow.release(dir),
                ViewMode::Stack => {}
            }
        }
    }

    /// Handles a wheel event.
    ///
    /// Returns `true` if the engine consumed it and the host should not scroll
    /// natively.
    pub fn on_wheel(&mut self, now: f64, delta_x: f64, delta_y: f64) -> bool {
        match self.view.effective() {
            ViewMode::Coverflow => {
                let delta = if delta_y != 0.0 { delta_y } else { delta_x };
                self.coverflow.on_wheel(delta);
                true
            }
            ViewMode::Shelf => {
                self.shelf.on_wheel(now);
                false
            }
            ViewMode::Stack => false,
        }
    }

    /// Replaces the search query and re-renders.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.refresh();
        debug!(query, results = self.list.len(), "query applied");
    }

    /// Re-sorts the view list and re-renders.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.list.sort_by(key);
        self.render();
        debug!(sort = %key, "sort applied");
    }

    /// Requests a presentation mode.
    pub fn request_mode(&mut self, mode: ViewMode) -> Transition {
        let transition = self.view.request(mode);
        if transition.persist {
            self.host.set_preference(PREFERENCE_KEY, mode.as_str());
        }
        info!(requested = %mode, effective = %transition.to, "view mode requested");
        self.apply_transition(&transition);
        transition
    }

    /// Makes the record `id` active.
    ///
    /// Pushes its id as the fragment and shows its details unless the
    /// viewport is compact. With `center`, the item is also materialized and
    /// brought to the middle of the current mode. Selecting the active record
    /// again without centering does nothing.
    ///
    /// Returns `false` if nothing happened.
    pub fn select(&mut self, id: &str, center: bool) -> bool {
        let Some(record) = self.catalog.get(id).cloned() else {
            warn!(id, "cannot select unknown record");
            return false;
        };
        let key = record.id().clone();
        if self.selection.is_active(&key) && !center {
            return false;
        }
        if let Some(change) = self.selection.select(key.clone()) {
            self.emit_selection(change);
        }
        self.host.set_fragment(Some(key.as_str()));
        self.show_details(&record);
        if center {
            if let Some(index) = self.list.position_of(key.as_str()) {
                self.ensure_loaded_through(index);
                self.reveal(index, ScrollBehavior::Smooth);
            }
        }
        true
    }

    /// Clears the selection, the fragment, and the detail panel.
    pub fn clear_selection(&mut self) {
        if let Some(change) = self.selection.clear() {
            self.emit_selection(change);
        }
        self.host.set_fragment(None);
        self.hide_details();
    }

    /// Picks a record with `pick`, which receives the view-list length and
    /// returns an index.
    ///
    /// In coverflow the index is sought; elsewhere it is selected and
    /// centered. Returns the picked id, or `None` when the view list is empty.
    pub fn select_random(&mut self, pick: impl FnOnce(usize) -> usize) -> Option<BookId> {
        let len = self.list.len();
        if len == 0 {
            return None;
        }
        let index = pick(len).min(len - 1);
        let id = self.list.get(index)?.id().clone();
        self.ensure_loaded_through(index);
        if self.view.effective() == ViewMode::Coverflow {
            self.coverflow.seek(index_to_f64(index));
        } else {
            self.select(id.as_str(), true);
        }
        Some(id)
    }

    /// Handles a click on the materialized item at `index`.
    ///
    /// In coverflow a click on a side item seeks to it; elsewhere it selects
    /// and centers.
    pub fn click_item(&mut self, index: usize) {
        if self.view.effective() == ViewMode::Coverflow {
            if index != self.coverflow.rounded_index() {
                self.coverflow.seek(index_to_f64(index));
            }
            return;
        }
        if let Some(id) = self.list.get(index).map(|r| r.id().clone()) {
            self.select(id.as_str(), true);
        }
    }

    /// Sets the slider track geometry.
    pub fn set_slider_track(&mut self, left: f64, width: f64) {
        self.scrubber
            .set_track(Track::new(left, width, self.slider_max()));
    }

    /// Starts a slider drag at `pos`.
    pub fn on_slider_pointer_down(&mut self, pos: Point) {
        let track = *self.scrubber.track();
        self.scrubber
            .set_track(Track::new(track.left, track.width, self.slider_max()));
        let value = self.scrubber.start(pos);
        self.on_slider_input(value);
    }

    /// Continues a slider drag.
    pub fn on_slider_pointer_move(&mut self, pos: Point) {
        if let Some(value) = self.scrubber.update(pos) {
            self.on_slider_input(value);
        }
    }

    /// Ends a slider drag.
    pub fn on_slider_pointer_up(&mut self, now: f64) {
        if self.scrubber.end().is_some() {
            self.on_slider_change(now);
        }
    }

    /// Moves the coverflow to slider `value`.
    ///
    /// Materializes a few items beyond the value, stops all motion, and hides
    /// the coverflow details.
    pub fn on_slider_input(&mut self, value: f64) {
        if !self.coverflow.is_active() || !value.is_finite() {
            return;
        }
        let value = value.clamp(0.0, self.slider_max());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is finite, non-negative, and at most the list length"
        )]
        let whole = value as usize;
        let before = self.loader.sentinel();
        let range = self
            .loader
            .ensure_loaded_through(whole.saturating_add(self.config.page.scrub_lookahead));
        self.after_load(before, &range, false);
        if self.coverflow.scrub(value) {
            self.events.push(EngineEvent::CoverflowDetails(None));
        }
    }

    /// Reports that the slider settled, re-arming the idle reveal.
    pub fn on_slider_change(&mut self, now: f64) {
        if self.coverflow.is_active() {
            self.coverflow.scrub_end(now);
        }
    }

    /// Reports the page's vertical scroll offset.
    pub fn on_page_scroll(&mut self, offset: f64) {
        if offset.is_finite() {
            self.page_scroll = offset;
            self.update_back_to_top();
        }
    }

    /// Activates the back-to-top control: scrolls up and clears the
    /// selection.
    pub fn back_to_top(&mut self) {
        self.events.push(EngineEvent::ScrollPageToTop);
        self.clear_selection();
    }

    /// Re-measures every materialized item through the host.
    pub fn remeasure(&mut self) {
        let host = &mut self.host;
        self.loader
            .measure(|index, record| host.measure_item(index, record));
        let extent = self
            .loader
            .items()
            .iter()
            .filter_map(RenderedItem::layout)
            .map(|layout| layout.right())
            .reduce(f64::max);
        self.viewport.set_content_extent(extent);
    }

    fn refresh(&mut self) {
        let mut list = self.search.filter(&self.query);
        list.sort_by(self.sort);
        self.list = list;
        self.render();
    }

    fn render(&mut self) {
        self.loader.reset(self.list.iter().cloned());
        self.events.push(EngineEvent::Rendered {
            generation: self.loader.generation(),
            len: self.list.len(),
        });
        if self.list.is_empty() {
            debug!(query = %self.query, "no results");
            self.events.push(EngineEvent::NoResults);
            return;
        }
        self.load_next(true);
    }

    fn load_next(&mut self, measure: bool) -> Range<usize> {
        let before = self.loader.sentinel();
        let range = self.loader.load_next();
        self.after_load(before, &range, measure);
        range
    }

    fn ensure_loaded_through(&mut self, index: usize) {
        let before = self.loader.sentinel();
        let range = self.loader.ensure_loaded_through(index);
        self.after_load(before, &range, true);
    }

    fn after_load(&mut self, before: Sentinel, range: &Range<usize>, measure: bool) {
        if !range.is_empty() {
            debug!(
                generation = self.loader.generation(),
                start = range.start,
                end = range.end,
                "materialized"
            );
            self.events.push(EngineEvent::Materialized {
                generation: self.loader.generation(),
                range: range.clone(),
            });
            if measure {
                self.remeasure();
            }
            if let Some(delegate) = &mut self.delegate {
                delegate.resize();
            }
        }
        if before == Sentinel::Attached && self.loader.sentinel() == Sentinel::Retired {
            self.events.push(EngineEvent::SentinelRetired);
        }
    }

    fn apply_transition(&mut self, t: &Transition) {
        let captured = self.coverflow.rounded_index();
        if t.stops_coverflow() {
            let had_details = self.coverflow.details_visible();
            self.coverflow.stop();
            if had_details {
                self.events.push(EngineEvent::CoverflowDetails(None));
            }
        }
        if t.to != ViewMode::Shelf {
            self.shelf.halt();
        }
        self.emit_presentation();
        self.sync_delegate();
        if t.to != ViewMode::Coverflow {
            self.remeasure();
            if let Some(delegate) = &mut self.delegate {
                delegate.resize();
            }
        }
        if t.hide_details {
            self.hide_details();
        }
        if t.starts_coverflow() {
            self.start_coverflow();
        } else {
            match t.continuity() {
                Continuity::FromCoverflow if captured < self.loader.materialized_len() => {
                    self.reveal(captured, ScrollBehavior::Immediate);
                }
                Continuity::KeepSelection => {
                    if let Some(index) = self
                        .selected_index()
                        .filter(|&i| i < self.loader.materialized_len())
                    {
                        self.reveal(index, ScrollBehavior::Immediate);
                    }
                }
                _ => {}
            }
        }
        self.update_back_to_top();
    }

    fn start_coverflow(&mut self) {
        let seed = match self.selected_index() {
            Some(index) => {
                self.ensure_loaded_through(index);
                index_to_f64(index)
            }
            None => {
                let last = self.list.len().saturating_sub(1);
                self.ensure_loaded_through(self.coverflow.rounded_index().min(last));
                self.coverflow.index().min(index_to_f64(last))
            }
        };
        debug!(seed, "coverflow started");
        self.coverflow.start(seed);
    }

    fn sync_delegate(&mut self) {
        let wants = self.view.flags().contains(PresentationFlags::SMOOTH_DELEGATE);
        if wants && self.delegate.is_none() {
            self.delegate = Some(self.host.create_delegate());
            debug!("smooth scroll delegate created");
        } else if !wants {
            if let Some(mut delegate) = self.delegate.take() {
                delegate.destroy();
                debug!("smooth scroll delegate destroyed");
            }
        }
    }

    /// Brings the item at `index` to the middle of the current mode without
    /// selecting it.
    fn reveal(&mut self, index: usize, behavior: ScrollBehavior) {
        match self.view.effective() {
            ViewMode::Stack => self
                .events
                .push(EngineEvent::ScrollIntoView { index, behavior }),
            ViewMode::Shelf => match self.loader.get(index).and_then(RenderedItem::layout) {
                Some(layout) => {
                    let target = self.viewport.center_on(layout.left, layout.width);
                    self.scroll_shelf_to(target, behavior);
                }
                None => self
                    .events
                    .push(EngineEvent::ScrollIntoView { index, behavior }),
            },
            ViewMode::Coverflow => self.coverflow.seek(index_to_f64(index)),
        }
    }

    fn shelf_scroll(&self) -> f64 {
        self.delegate
            .as_ref()
            .map_or_else(|| self.host.shelf_scroll(), |d| d.scroll_offset())
    }

    fn scroll_shelf_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        match &mut self.delegate {
            Some(delegate) => delegate.scroll_to(offset, behavior),
            None => self.host.set_shelf_scroll(offset, behavior),
        }
    }

    fn step_shelf(&mut self, dt: f64) -> ShelfFrame {
        if let Some(delta) = self.shelf.momentum(dt) {
            let target = self.shelf_scroll() + delta;
            self.scroll_shelf_to(target, ScrollBehavior::Immediate);
        }
        if self.delegate.is_some() {
            self.shelf.decay_wheel_boost();
        }
        let scroll = self.shelf_scroll();
        let tilt = self.shelf.observe_scroll(scroll, dt);
        let (start, end) = self.shelf.cull_window(scroll, self.viewport.width());
        ShelfFrame {
            scroll,
            tilt,
            tilted: self.loader.visible_between(start, end).collect(),
            wheel_multiplier: self.shelf.wheel_multiplier(),
        }
    }

    fn step_coverflow(&mut self, now: f64) -> Option<CoverflowFrame> {
        let step = self.coverflow.step(now, self.loader.materialized_len())?;
        match step.details {
            Some(DetailsChange::Show) => {
                let details = step
                    .active
                    .and_then(|i| self.loader.get(i))
                    .map(|item| DetailDescriptor::from_record(item.item()));
                if details.is_some() {
                    self.events.push(EngineEvent::CoverflowDetails(details));
                } else {
                    self.coverflow.hide_details();
                }
            }
            Some(DetailsChange::Hide) => self.events.push(EngineEvent::CoverflowDetails(None)),
            None => {}
        }
        if self.coverflow.wants_prefetch(self.loader.materialized_len()) {
            self.load_next(false);
        }
        let materialized = self.loader.materialized_len();
        let active_record = step
            .active
            .and_then(|i| self.loader.get(i))
            .map(|item| Arc::clone(item.item()));
        Some(CoverflowFrame {
            index: step.index,
            velocity: step.velocity,
            active: step.active,
            active_record,
            placements: self.coverflow.placements(materialized).collect(),
            slider: SliderState {
                max: self.slider_max(),
                value: step.index,
            },
        })
    }

    fn apply_resize(&mut self) {
        let Some(width) = self.pending_width.take() else {
            return;
        };
        self.viewport.set_width(width);
        if let Some(transition) = self.view.set_width(width) {
            info!(width, effective = %transition.to, "viewport crossed breakpoint");
            self.apply_transition(&transition);
        }
        self.remeasure();
        if let Some(delegate) = &mut self.delegate {
            delegate.resize();
        }
        if self.view.is_compact() {
            self.hide_details();
        } else if let Some(record) = self
            .selection
            .get()
            .and_then(|id| self.catalog.get(id.as_str()))
            .cloned()
        {
            self.show_details(&record);
        }
        self.update_back_to_top();
    }

    fn show_details(&mut self, record: &BookRecord) {
        if self.view.is_compact() {
            self.hide_details();
            return;
        }
        self.details_shown = true;
        self.events
            .push(EngineEvent::DetailsShown(DetailDescriptor::from_record(record)));
    }

    fn hide_details(&mut self) {
        if core::mem::take(&mut self.details_shown) {
            self.events.push(EngineEvent::DetailsHidden);
        }
    }

    fn update_back_to_top(&mut self) {
        let stacked = self.view.requested() == ViewMode::Stack || self.view.is_compact();
        let visible = stacked && self.page_scroll > self.config.page.back_to_top_offset;
        if visible != self.back_to_top {
            self.back_to_top = visible;
            self.events.push(EngineEvent::BackToTop(visible));
        }
    }

    fn emit_presentation(&mut self) {
        self.events.push(EngineEvent::Presentation {
            requested: self.view.requested(),
            effective: self.view.effective(),
            flags: self.view.flags(),
        });
    }

    fn emit_selection(&mut self, change: SelectionChange<BookId>) {
        self.events.push(EngineEvent::SelectionChanged {
            previous: change.previous,
            current: change.current,
        });
    }

    fn selected_index(&self) -> Option<usize> {
        self.selection
            .get()
            .and_then(|id| self.list.position_of(id.as_str()))
    }

    fn slider_max(&self) -> f64 {
        index_to_f64(self.list.len().saturating_sub(1))
    }
}

// View lists stay far below 2^52 items.
fn index_to_f64(index: usize) -> f64 {
    index as f64
}
