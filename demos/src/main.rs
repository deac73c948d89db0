// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless catalog session.
//!
//! Loads a catalog, applies an optional query, sort, and mode, then plays a
//! short scripted session (hold the right arrow, let go, coast) against a
//! host without a screen. Engine events are logged; a summary goes to stdout.
//!
//! Run:
//! - `cargo run -p bookcase_demos -- --catalog demos/data/books.json`
//! - `cargo run -p bookcase_demos -- --mode coverflow --fragment great-gatsby`
//! - `RUST_LOG=bookcase_engine=debug cargo run -p bookcase_demos -- --query "tolk ring"`

mod host;

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use bookcase_catalog::{Catalog, SortKey};
use bookcase_engine::{Engine, EngineConfig, EngineEvent, Frame};
use bookcase_input::keys::{Direction, Key};
use bookcase_view::{PREFERENCE_KEY, ViewMode};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::host::HeadlessHost;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Parser)]
#[command(name = "bookcase_headless", version, about = "Drive the catalog engine without a screen")]
struct Args {
    /// Catalog JSON, either a bare array or a `window.booksData = [...]` script.
    #[arg(long, default_value = "demos/data/books.json")]
    catalog: PathBuf,
    /// Engine configuration in TOML.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Search query applied after startup.
    #[arg(long, short)]
    query: Option<String>,
    /// Sort key: title, author, or year.
    #[arg(long, short)]
    sort: Option<SortKey>,
    /// Mode to request after startup: shelf, stack, or coverflow.
    #[arg(long, short)]
    mode: Option<ViewMode>,
    /// Mode found in the preference store at startup.
    #[arg(long)]
    stored_mode: Option<String>,
    /// Viewport width in px.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    /// Width to resize to halfway through the session.
    #[arg(long)]
    resize_to: Option<f64>,
    /// Navigation fragment present at startup.
    #[arg(long)]
    fragment: Option<String>,
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 240)]
    frames: usize,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::from_toml(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(sort) = args.sort {
        config.sort = sort;
    }

    let text = fs::read_to_string(&args.catalog)
        .with_context(|| format!("reading catalog {}", args.catalog.display()))?;
    let catalog = Catalog::from_json(&text)?;
    let host = HeadlessHost::new(args.width)
        .with_fragment(args.fragment.clone())
        .with_preference(PREFERENCE_KEY, args.stored_mode.clone());
    let mut engine = Engine::new(catalog, config, host)?;
    log_events(&mut engine);

    if let Some(query) = &args.query {
        engine.set_query(query);
        log_events(&mut engine);
    }
    if let Some(mode) = args.mode {
        engine.request_mode(mode);
        log_events(&mut engine);
    }

    let mut now = 0.0;
    let mut last: Option<Frame> = None;
    let release_at = args.frames / 2;
    engine.on_key_down(Key::Direction(Direction::Right));
    for n in 0..args.frames {
        if n == release_at {
            engine.on_key_up(Key::Direction(Direction::Right));
            if let Some(width) = args.resize_to {
                engine.host_mut().set_width(width);
                engine.on_resize(now, width);
            }
        }
        now += FRAME_MS;
        let frame = engine.tick(now);
        if sentinel_in_view(&engine, &frame) {
            engine.on_sentinel_visible();
        }
        log_events(&mut engine);
        last = Some(frame);
    }

    print_summary(&engine, last.as_ref());
    Ok(())
}

/// Whether the end of the materialized shelf has scrolled into view.
fn sentinel_in_view(engine: &Engine<HeadlessHost>, frame: &Frame) -> bool {
    let Some(shelf) = &frame.shelf else {
        return false;
    };
    let end = engine
        .loader()
        .items()
        .last()
        .map_or(0.0, |item| item.layout_or_default().right());
    end <= shelf.scroll + engine.view().width()
}

fn log_events(engine: &mut Engine<HeadlessHost>) {
    for event in engine.drain_events() {
        match event {
            EngineEvent::Rendered { generation, len } => info!(generation, len, "rendered"),
            EngineEvent::NoResults => info!("no results"),
            EngineEvent::Materialized { generation, range } => {
                info!(generation, start = range.start, end = range.end, "materialized");
            }
            EngineEvent::SentinelRetired => info!("sentinel retired"),
            EngineEvent::Presentation {
                requested,
                effective,
                flags,
            } => info!(%requested, %effective, ?flags, "presentation"),
            EngineEvent::SelectionChanged { previous, current } => {
                info!(?previous, ?current, "selection changed");
            }
            EngineEvent::DetailsShown(details) => {
                info!(title = %details.title, meta = ?details.meta(), "details shown");
            }
            EngineEvent::DetailsHidden => info!("details hidden"),
            EngineEvent::ScrollIntoView { index, behavior } => {
                info!(index, ?behavior, "scroll into view");
            }
            EngineEvent::CoverflowDetails(Some(details)) => {
                info!(title = %details.title, "coverflow details");
            }
            EngineEvent::CoverflowDetails(None) => info!("coverflow details hidden"),
            EngineEvent::BackToTop(visible) => info!(visible, "back to top"),
            EngineEvent::ScrollPageToTop => info!("scroll page to top"),
        }
    }
}

fn print_summary(engine: &Engine<HeadlessHost>, frame: Option<&Frame>) {
    let view = engine.view();
    println!("records:      {}", engine.catalog().len());
    println!("view list:    {}", engine.view_list().len());
    println!("materialized: {}", engine.loader().materialized_len());
    println!("sort:         {}", engine.sort());
    println!("mode:         {} (requested {})", view.effective(), view.requested());
    println!(
        "selection:    {}",
        engine.selection().map_or("none", |id| id.as_str())
    );
    println!(
        "fragment:     {}",
        engine.host().fragment_value().unwrap_or("none")
    );
    let Some(frame) = frame else {
        return;
    };
    if let Some(shelf) = &frame.shelf {
        println!(
            "shelf:        scroll {:.1}px, tilt {:.2}deg on {} items",
            shelf.scroll,
            shelf.tilt,
            shelf.tilted.len()
        );
    }
    if let Some(coverflow) = &frame.coverflow {
        let title = coverflow
            .active_record
            .as_ref()
            .map_or_else(String::new, |record| record.display_title());
        println!(
            "coverflow:    index {:.3} of {}, front \"{}\" ({} placed)",
            coverflow.index,
            coverflow.slider.max,
            title,
            coverflow.placements.len()
        );
    }
    if view.effective() == ViewMode::Stack {
        println!("stack:        native scrolling");
    }
}
