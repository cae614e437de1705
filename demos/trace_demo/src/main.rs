// Copyright 2026 the Herald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated announcement bar that exercises the tracing and diagnostics
//! pipeline.
//!
//! Runs a three-slide bar with a five second autoplay interval on the
//! simulated host: a few ticks, a hover, a hidden page, a resize to a wide
//! viewport and back, then detach. Every event goes to both a
//! [`PrettyPrintSink`](herald_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](herald_debug::recorder::RecorderSink), and the recording
//! is exported as a Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use herald_core::config::{AutoplayConfig, BarConfig, HiddenPolicy};
use herald_core::time::HostTime;
use herald_debug::pretty::PrettyPrintSink;
use herald_debug::recorder::RecorderSink;
use herald_debug::tee::TeeSink;
use herald_harness::Simulation;
use kurbo::Size;

const SLIDES: usize = 3;
const PHONE: Size = Size::new(390.0, 844.0);
const DESKTOP: Size = Size::new(1440.0, 900.0);

fn main() {
    // -- sinks -------------------------------------------------------------
    let sink = TeeSink::new(
        PrettyPrintSink::new(Box::new(std::io::stdout())),
        RecorderSink::new(),
    );

    // -- bar ---------------------------------------------------------------
    // Suspend on hidden pages so playback picks up again when the tab returns.
    let config = BarConfig::new(AutoplayConfig::from_attribute(Some("5")))
        .with_hidden_policy(HiddenPolicy::Suspend);
    let mut sim = Simulation::with_sink(SLIDES, PHONE, config, sink);

    // -- simulated session -------------------------------------------------
    sim.start();
    sim.advance_to(HostTime(12_000));

    // Pointer rests on the bar for three seconds.
    sim.set_hovered(true);
    sim.advance_to(HostTime(15_000));
    sim.set_hovered(false);

    sim.advance_to(HostTime(21_000));

    // Tab goes to the background, then comes back.
    sim.set_foreground(false);
    sim.advance_to(HostTime(40_000));
    sim.set_foreground(true);
    sim.advance_to(HostTime(46_000));

    // Device rotates into a wide layout and back.
    sim.resize(DESKTOP);
    sim.advance_to(HostTime(55_000));
    sim.resize(PHONE);
    sim.advance_to(HostTime(61_000));

    sim.bar_mut().pause();
    sim.advance_to(HostTime(70_000));
    sim.stop();

    let shown = sim.bar().display_index();
    let recorder = &sim.bar().sink().second;

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    herald_debug::chrome::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    println!(
        "Wrote {path} ({} events, last slide {shown:?})",
        recorder.events().count()
    );
}
