// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bookcase_engine --heading-base-level=0

//! Bookcase Engine: a headless interactive catalog.
//!
//! [`Engine`] ties the other Bookcase crates together. It filters and sorts a
//! [`Catalog`](bookcase_catalog::Catalog) into a view list, materializes it in
//! batches, switches between the shelf, stack, and coverflow modes, runs the
//! shelf and coverflow simulations, and tracks the active record and the
//! navigation fragment that names it.
//!
//! The engine draws nothing. A [`Host`] answers questions about the render
//! surface (viewport width, item measurements, scroll offsets, stored
//! preferences) and the engine reports what changed through queued
//! [`EngineEvent`]s and the per-frame [`Frame`] returned by [`Engine::tick`].
//!
//! ## Driving the engine
//!
//! - Forward input with the `on_*` methods: keys, wheel, resize, the
//!   end-of-list sentinel, fragment changes, slider drags, page scroll.
//! - Call [`Engine::tick`] once per animation frame with a millisecond
//!   timestamp.
//! - After each call, apply [`Engine::drain_events`] to the render surface.
//!
//! ```rust
//! use bookcase_catalog::{BookRecord, Catalog};
//! use bookcase_engine::{Engine, EngineConfig, EngineEvent, Host, ScrollBehavior, ScrollDelegate};
//! use bookcase_view::ViewMode;
//! use bookcase_virtual_list::LayoutBox;
//!
//! #[derive(Default)]
//! struct Headless {
//!     scroll: f64,
//! }
//!
//! struct NoDelegate;
//!
//! impl ScrollDelegate for NoDelegate {
//!     fn scroll_offset(&self) -> f64 { 0.0 }
//!     fn scroll_to(&mut self, _: f64, _: ScrollBehavior) {}
//!     fn resize(&mut self) {}
//!     fn destroy(&mut self) {}
//! }
//!
//! impl Host for Headless {
//!     type Delegate = NoDelegate;
//!     fn viewport_width(&self) -> f64 { 1280.0 }
//!     fn measure_item(&mut self, index: usize, _: &BookRecord) -> Option<LayoutBox> {
//!         Some(LayoutBox::new(index as f64 * 40.0, 40.0))
//!     }
//!     fn shelf_scroll(&self) -> f64 { self.scroll }
//!     fn set_shelf_scroll(&mut self, offset: f64, _: ScrollBehavior) { self.scroll = offset; }
//!     fn create_delegate(&mut self) -> NoDelegate { NoDelegate }
//!     fn fragment(&self) -> Option<String> { None }
//!     fn set_fragment(&mut self, _: Option<&str>) {}
//!     fn preference(&self, _: &str) -> Option<String> { None }
//!     fn set_preference(&mut self, _: &str, _: &str) {}
//! }
//!
//! let catalog = Catalog::new([
//!     BookRecord::new("dune", "Dune"),
//!     BookRecord::new("emma", "Emma"),
//! ]);
//! let mut engine = Engine::new(catalog, EngineConfig::default(), Headless::default()).unwrap();
//! assert_eq!(engine.view().effective(), ViewMode::Shelf);
//! assert!(engine
//!     .drain_events()
//!     .iter()
//!     .any(|e| matches!(e, EngineEvent::Materialized { .. })));
//!
//! engine.set_query("emma");
//! assert_eq!(engine.view_list().len(), 1);
//!
//! let frame = engine.tick(0.0);
//! assert_eq!(frame.mode, ViewMode::Shelf);
//! ```

mod config;
pub mod deep_link;
mod engine;
mod error;
mod event;
mod host;

pub use config::{EngineConfig, LoaderConfig, PageConfig, TimingConfig};
pub use engine::Engine;
pub use error::EngineError;
pub use event::{
    CoverflowFrame, DetailDescriptor, EngineEvent, Frame, ShelfFrame, SliderState,
};
pub use host::{Host, ScrollBehavior, ScrollDelegate};
