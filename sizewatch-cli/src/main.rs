//! sizewatch CLI
//!
//! Replays a layout fixture through the box-size calculation and reports the
//! results from a frame-aligned notification, the way a resize observer
//! would deliver them.

mod fixture;
mod report;

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use sizewatch_common::warning::clear_warnings;
use sizewatch_geometry::{BoxSizeCache, EngineProfile, ObservedBox, StaticLayoutHost};
use sizewatch_scheduler::{EventLoop, NotificationScheduler};

use fixture::Fixture;
use report::{ReportEntry, measure, print_table};

/// sizewatch: resize observer box sizes for a layout fixture
#[derive(Parser, Debug)]
#[command(name = "sizewatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Report content boxes for every element
    sizewatch layout.json

    # Report border boxes on a 2x display
    sizewatch layout.json --box border-box --dpr 2

    # Pretend to be a legacy engine and emit JSON
    sizewatch layout.json --legacy --json
"#)]
struct Cli {
    /// Path to a JSON layout fixture
    #[arg(value_name = "FIXTURE")]
    fixture: PathBuf,

    /// Observed box: content-box, border-box, scroll-box, device-pixel-border-box
    #[arg(
        long = "box",
        value_name = "KIND",
        default_value = "content-box",
        value_parser = ObservedBox::from_str
    )]
    observed_box: ObservedBox,

    /// Override the fixture's device pixel ratio
    #[arg(long, value_name = "RATIO")]
    dpr: Option<f64>,

    /// Override the fixture's user-agent string (used for engine detection)
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Force the legacy engine profile (computed sizes ignore box-sizing)
    #[arg(long)]
    legacy: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn engine_profile(&self, fixture: &Fixture) -> EngineProfile {
        if self.legacy {
            return EngineProfile::LEGACY;
        }
        self.user_agent
            .as_deref()
            .or(fixture.user_agent.as_deref())
            .map_or(EngineProfile::MODERN, EngineProfile::detect)
    }

    /// The fixture's host, with `--dpr` taking precedence over the fixture.
    fn build_host(&self, fixture: &Fixture) -> StaticLayoutHost {
        let mut host = fixture.build_host();
        if let Some(ratio) = self.dpr {
            host.set_device_pixel_ratio(ratio);
        }
        host
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let text = fs::read_to_string(&cli.fixture)
        .with_context(|| format!("reading {}", cli.fixture.display()))?;
    let fixture = Fixture::from_json(&text)
        .with_context(|| format!("parsing fixture {}", cli.fixture.display()))?;

    let profile = cli.engine_profile(&fixture);
    let observed_box = cli.observed_box;
    let host = cli.build_host(&fixture);

    // Measure from inside a notification so the report reflects the same
    // point in the frame an observer callback would see.
    let event_loop = Rc::new(EventLoop::new());
    let scheduler = NotificationScheduler::new(Rc::clone(&event_loop));
    let outcome: Rc<RefCell<Option<Result<Vec<ReportEntry>>>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&outcome);
    scheduler.schedule(move || {
        let mut cache = BoxSizeCache::new();
        *slot.borrow_mut() = Some(measure(&host, profile, &mut cache, observed_box));
    });

    let _microtasks = event_loop.perform_microtask_checkpoint();
    let _callbacks = event_loop.run_animation_frame(0.0);

    let entries = outcome
        .borrow_mut()
        .take()
        .context("notification did not fire")??;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_table(&entries);
    }
    Ok(())
}
