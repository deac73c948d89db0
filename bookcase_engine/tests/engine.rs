// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of the engine against a recording host.

use std::cell::RefCell;
use std::rc::Rc;

use bookcase_catalog::{BookRecord, Catalog, SortKey};
use bookcase_engine::{
    Engine, EngineConfig, EngineError, EngineEvent, Host, ScrollBehavior, ScrollDelegate,
};
use bookcase_input::keys::{Direction, Key};
use bookcase_view::{PREFERENCE_KEY, ViewMode};
use bookcase_virtual_list::LayoutBox;
use kurbo::Point;

const FRAME_MS: f64 = 1000.0 / 60.0;
const SPINE: f64 = 40.0;

#[derive(Debug, Default)]
struct Log {
    fragment: Option<String>,
    fragment_writes: Vec<Option<String>>,
    preferences: Vec<(String, String)>,
    stored: Option<String>,
    delegates_created: usize,
    delegates_destroyed: usize,
    delegate_offset: f64,
}

#[derive(Debug)]
struct MockHost {
    width: f64,
    scroll: f64,
    log: Rc<RefCell<Log>>,
}

impl MockHost {
    fn new(width: f64) -> (Self, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        (
            Self {
                width,
                scroll: 0.0,
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

#[derive(Debug)]
struct MockDelegate {
    log: Rc<RefCell<Log>>,
}

impl ScrollDelegate for MockDelegate {
    fn scroll_offset(&self) -> f64 {
        self.log.borrow().delegate_offset
    }

    fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
        self.log.borrow_mut().delegate_offset = offset;
    }

    fn resize(&mut self) {}

    fn destroy(&mut self) {
        self.log.borrow_mut().delegates_destroyed += 1;
    }
}

impl Host for MockHost {
    type Delegate = MockDelegate;

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn measure_item(&mut self, index: usize, _record: &BookRecord) -> Option<LayoutBox> {
        Some(LayoutBox::new(index as f64 * SPINE, SPINE))
    }

    fn shelf_scroll(&self) -> f64 {
        self.scroll
    }

    fn set_shelf_scroll(&mut self, offset: f64, _behavior: ScrollBehavior) {
        self.scroll = offset;
    }

    fn create_delegate(&mut self) -> MockDelegate {
        self.log.borrow_mut().delegates_created += 1;
        MockDelegate {
            log: Rc::clone(&self.log),
        }
    }

    fn fragment(&self) -> Option<String> {
        self.log.borrow().fragment.clone()
    }

    fn set_fragment(&mut self, fragment: Option<&str>) {
        let mut log = self.log.borrow_mut();
        log.fragment = fragment.map(str::to_owned);
        log.fragment_writes.push(fragment.map(str::to_owned));
    }

    fn preference(&self, key: &str) -> Option<String> {
        assert_eq!(key, PREFERENCE_KEY);
        self.log.borrow().stored.clone()
    }

    fn set_preference(&mut self, key: &str, value: &str) {
        self.log
            .borrow_mut()
            .preferences
            .push((key.to_owned(), value.to_owned()));
    }
}

fn catalog() -> Catalog {
    let mut records: Vec<BookRecord> = (0..120)
        .map(|i| {
            BookRecord::new(format!("book-{i:03}"), format!("Volume {i:03}"))
                .with_author("Anonymous")
                .with_published(1900 + i)
        })
        .collect();
    records.push(
        BookRecord::new("great-gatsby", "The Great Gatsby")
            .with_author("F. Scott Fitzgerald")
            .with_published(1925),
    );
    Catalog::new(records)
}

fn engine(width: f64) -> (Engine<MockHost>, Rc<RefCell<Log>>) {
    let (host, log) = MockHost::new(width);
    let engine = Engine::new(catalog(), EngineConfig::default(), host).unwrap();
    (engine, log)
}

fn run_frames(engine: &mut Engine<MockHost>, now: &mut f64, frames: usize) {
    for _ in 0..frames {
        *now += FRAME_MS;
        engine.tick(*now);
    }
}

#[test]
fn empty_catalog_has_no_content() {
    let (host, _) = MockHost::new(1280.0);
    let err = Engine::new(Catalog::default(), EngineConfig::default(), host).unwrap_err();
    assert!(matches!(err, EngineError::NoContent));
}

#[test]
fn first_batch_is_rendered_on_startup() {
    let (mut engine, log) = engine(1280.0);
    let events = engine.drain_events();
    assert!(matches!(events[0], EngineEvent::Rendered { len: 121, .. }));
    assert!(events.iter().any(|e| matches!(
        e,
        EngineEvent::Materialized { range, .. } if *range == (0..50)
    )));
    assert!(events.iter().any(|e| matches!(
        e,
        EngineEvent::Presentation {
            effective: ViewMode::Shelf,
            ..
        }
    )));
    assert_eq!(engine.loader().materialized_len(), 50);
    assert_eq!(log.borrow().delegates_created, 1);
    assert!(engine.delegate().is_some());
}

#[test]
fn sentinel_loads_batches_then_retires() {
    let (mut engine, _) = engine(1280.0);
    engine.drain_events();
    assert_eq!(engine.on_sentinel_visible(), 50..100);
    assert_eq!(engine.on_sentinel_visible(), 100..121);
    let events = engine.drain_events();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, EngineEvent::SentinelRetired))
            .count(),
        1
    );
    assert!(engine.on_sentinel_visible().is_empty());
    assert!(engine.drain_events().is_empty());
}

#[test]
fn startup_fragment_selects_after_delay() {
    let (host, log) = MockHost::new(1280.0);
    log.borrow_mut().fragment = Some("#great-gatsby".to_owned());
    let mut engine = Engine::new(catalog(), EngineConfig::default(), host).unwrap();
    engine.drain_events();

    engine.tick(0.0);
    engine.tick(299.0);
    assert!(engine.selection().is_none());

    engine.tick(300.0);
    assert_eq!(
        engine.selection().map(|id| id.as_str()),
        Some("great-gatsby")
    );
    let index = engine.view_list().position_of("great-gatsby").unwrap();
    assert!(engine.loader().materialized_len() > index);
    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        EngineEvent::DetailsShown(d) if d.title == "The Great Gatsby"
    )));
    assert_eq!(log.borrow().fragment.as_deref(), Some("great-gatsby"));
}

#[test]
fn fragment_falls_back_to_title() {
    let (mut engine, _) = engine(1280.0);
    assert!(engine.on_fragment_changed("#great-gats").is_some());
    assert_eq!(
        engine.selection().map(|id| id.as_str()),
        Some("great-gatsby")
    );
}

#[test]
fn unknown_fragment_changes_nothing() {
    let (mut engine, log) = engine(1280.0);
    engine.drain_events();
    assert_eq!(engine.on_fragment_changed("#no-such-book"), None);
    assert_eq!(engine.on_fragment_changed("#ab"), None);
    assert!(engine.selection().is_none());
    assert!(engine.drain_events().is_empty());
    assert!(log.borrow().fragment_writes.is_empty());
}

#[test]
fn search_resets_loader_and_reports_no_results() {
    let (mut engine, _) = engine(1280.0);
    let generation = engine.loader().generation();
    engine.drain_events();

    engine.set_query("gatsby");
    assert_eq!(engine.view_list().len(), 1);
    assert!(engine.loader().generation() > generation);
    assert_eq!(engine.loader().materialized_len(), 1);

    engine.set_query("qqqqzzzz");
    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(e, EngineEvent::NoResults)));
    assert_eq!(engine.loader().materialized_len(), 0);

    engine.set_query("");
    assert_eq!(engine.view_list().len(), 121);
}

#[test]
fn sort_by_year_puts_newest_first() {
    let (mut engine, _) = engine(1280.0);
    engine.set_sort(SortKey::Year);
    let first = engine.view_list().get(0).unwrap();
    assert_eq!(first.id().as_str(), "book-119");
    assert_eq!(engine.loader().materialized_len(), 50);
}

#[test]
fn selecting_the_active_record_again_is_a_no_op() {
    let (mut engine, log) = engine(1280.0);
    assert!(engine.select("book-003", false));
    assert!(!engine.select("book-003", false));
    assert!(engine.select("book-003", true));
    assert!(!engine.select("missing", false));
    assert_eq!(engine.selection_revision(), 1);
    assert_eq!(log.borrow().fragment_writes.len(), 2);
}

#[test]
fn escape_clears_selection() {
    let (mut engine, log) = engine(1280.0);
    engine.select("book-010", false);
    assert!(engine.details_visible());
    engine.drain_events();

    engine.on_key_down(Key::Escape);
    assert!(engine.selection().is_none());
    assert!(!engine.details_visible());
    let events = engine.drain_events();
    assert!(events.contains(&EngineEvent::DetailsHidden));
    assert_eq!(log.borrow().fragment, None);
}

#[test]
fn held_arrow_scrolls_the_shelf() {
    let (mut engine, log) = engine(1280.0);
    let mut now = 0.0;
    engine.tick(now);
    engine.on_key_down(Key::Direction(Direction::Right));
    run_frames(&mut engine, &mut now, 30);
    let offset = log.borrow().delegate_offset;
    assert!(offset > 0.0);

    let frame = engine.tick(now + FRAME_MS);
    let shelf = frame.shelf.unwrap();
    assert!(shelf.tilt > 0.0);
    assert!(!shelf.tilted.is_empty());
    assert!(frame.coverflow.is_none());
}

#[test]
fn coverflow_round_trip_keeps_place() {
    let (mut engine, log) = engine(1280.0);
    let t = engine.request_mode(ViewMode::Coverflow);
    assert!(t.starts_coverflow());
    assert!(engine.coverflow().is_active());
    assert!(engine.delegate().is_none());
    assert_eq!(log.borrow().delegates_destroyed, 1);
    assert_eq!(
        log.borrow().preferences.last(),
        Some(&(PREFERENCE_KEY.to_owned(), "coverflow".to_owned()))
    );

    engine.click_item(8);
    let mut now = 0.0;
    run_frames(&mut engine, &mut now, 300);
    assert_eq!(engine.coverflow().rounded_index(), 8);
    let frame = engine.tick(now + FRAME_MS);
    let coverflow = frame.coverflow.unwrap();
    assert_eq!(coverflow.active, Some(8));
    assert_eq!(coverflow.slider.max, 120.0);
    assert!(frame.shelf.is_none());

    engine.request_mode(ViewMode::Shelf);
    assert!(!engine.coverflow().is_active());
    assert!(engine.delegate().is_some());
    // Item 8 is centered: 8 * 40 + 20 - 640 clamps to 0.
    assert_eq!(log.borrow().delegate_offset, 0.0);
}

#[test]
fn narrowing_out_of_coverflow_keeps_place() {
    let (mut engine, log) = engine(1280.0);
    engine.request_mode(ViewMode::Coverflow);
    engine.click_item(8);
    let mut now = 0.0;
    run_frames(&mut engine, &mut now, 300);
    assert_eq!(engine.coverflow().rounded_index(), 8);
    engine.drain_events();

    engine.on_resize(now, 400.0);
    engine.tick(now + 200.0);
    assert_eq!(engine.view().effective(), ViewMode::Stack);
    assert_eq!(engine.view().requested(), ViewMode::Coverflow);
    assert!(!engine.coverflow().is_active());

    let events = engine.drain_events();
    assert!(
        events
            .iter()
            .any(|e| matches!(e, EngineEvent::ScrollIntoView { index: 8, .. })),
        "{events:?}"
    );
    // Only the explicit coverflow request is remembered.
    assert_eq!(log.borrow().preferences.len(), 1);
}

#[test]
fn coverflow_reveals_details_when_idle() {
    let (mut engine, _) = engine(1280.0);
    engine.request_mode(ViewMode::Coverflow);
    engine.drain_events();
    let mut now = 0.0;
    run_frames(&mut engine, &mut now, 60);
    let events = engine.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, EngineEvent::CoverflowDetails(Some(_)))));
    assert!(engine.coverflow().details_visible());

    engine.on_wheel(now, 0.0, 400.0);
    now += FRAME_MS;
    engine.tick(now);
    let events = engine.drain_events();
    assert!(events.contains(&EngineEvent::CoverflowDetails(None)));
}

#[test]
fn slider_drag_materializes_ahead() {
    let (mut engine, _) = engine(1280.0);
    engine.request_mode(ViewMode::Coverflow);
    engine.set_slider_track(0.0, 1200.0);
    engine.on_slider_pointer_down(Point::new(600.0, 4.0));
    assert_eq!(engine.coverflow().index(), 60.0);
    assert!(engine.loader().materialized_len() >= 66);

    engine.on_slider_pointer_move(Point::new(1200.0, 4.0));
    assert_eq!(engine.coverflow().index(), 120.0);
    assert_eq!(engine.loader().materialized_len(), 121);
    engine.on_slider_pointer_up(1_000.0);
}

#[test]
fn random_pick_selects_and_materializes() {
    let (mut engine, _) = engine(1280.0);
    let picked = engine.select_random(|len| len - 1).unwrap();
    assert_eq!(engine.selection(), Some(&picked));
    assert_eq!(engine.loader().materialized_len(), 121);
}

#[test]
fn resize_is_debounced_and_forces_stack() {
    let (mut engine, log) = engine(1280.0);
    engine.select("book-001", false);
    engine.drain_events();

    engine.on_resize(0.0, 900.0);
    engine.on_resize(50.0, 600.0);
    engine.tick(100.0);
    assert_eq!(engine.view().effective(), ViewMode::Shelf);

    engine.tick(150.0);
    assert_eq!(engine.view().effective(), ViewMode::Stack);
    assert_eq!(engine.view().requested(), ViewMode::Shelf);
    assert!(engine.delegate().is_none());
    assert!(!engine.details_visible());
    assert!(log.borrow().preferences.is_empty());

    engine.on_resize(200.0, 1280.0);
    engine.tick(300.0);
    assert_eq!(engine.view().effective(), ViewMode::Shelf);
    assert!(engine.details_visible());
}

#[test]
fn back_to_top_tracks_page_scroll_in_stack() {
    let (mut engine, _) = engine(1280.0);
    engine.on_page_scroll(500.0);
    assert!(!engine.back_to_top_visible());

    engine.request_mode(ViewMode::Stack);
    assert!(engine.back_to_top_visible());
    engine.select("book-002", false);
    engine.drain_events();

    engine.back_to_top();
    let events = engine.drain_events();
    assert!(events.contains(&EngineEvent::ScrollPageToTop));
    assert!(engine.selection().is_none());

    engine.on_page_scroll(0.0);
    assert!(!engine.back_to_top_visible());
}

#[test]
fn stored_preference_picks_initial_mode() {
    let (host, log) = MockHost::new(1280.0);
    log.borrow_mut().stored = Some("coverflow".to_owned());
    let engine = Engine::new(catalog(), EngineConfig::default(), host).unwrap();
    assert_eq!(engine.view().effective(), ViewMode::Coverflow);
    assert!(engine.coverflow().is_active());
    assert_eq!(log.borrow().delegates_created, 0);
}
