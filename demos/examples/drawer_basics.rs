// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer basics.
//!
//! Script a few pointer gestures against a headless `understory_drawer::Drawer`
//! and print where the panel settles.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example drawer_basics`

use kurbo::Point;
use understory_drawer::{Drawer, DrawerConfig};

fn describe(label: &str, drawer: &Drawer, now: u64) {
    let presentation = drawer.presentation();
    println!(
        "{label:<28} phase={:<10} target={:>7.1} drawn={:>7.1} scrim={:.2}",
        phase_name(drawer),
        presentation.offset,
        drawer.offset_at(now),
        presentation.overlay_opacity,
    );
}

fn phase_name(drawer: &Drawer) -> &'static str {
    if drawer.is_dragging() {
        "dragging"
    } else if drawer.is_peeking() {
        "peeking"
    } else if drawer.is_open() {
        "open"
    } else {
        "closed"
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut drawer = match Drawer::new(DrawerConfig::default()) {
        Ok(drawer) => drawer,
        Err(err) => {
            eprintln!("invalid drawer config: {err}");
            return;
        }
    };
    let y = 320.0;
    let mut now = 0;
    describe("initial", &drawer, now);

    // Hover near the left edge to peek.
    drawer.pointer_move(Point::new(12.0, y), now);
    describe("hover at edge", &drawer, now);
    now += 150;
    describe("peek transition (150ms)", &drawer, now);
    now += 200;

    // Grab the handle and drag slowly past the halfway mark.
    drawer.pointer_down(Point::new(36.0, y), now);
    for step in 1..=10 {
        now += 16;
        drawer.pointer_move(Point::new(36.0 + f64::from(step) * 17.0, y), now);
    }
    describe("dragged 170px", &drawer, now);
    let snap = drawer.pointer_up(now);
    println!("release -> {snap:?}");
    describe("after release", &drawer, now);
    now += 300;

    // Flick it closed: short, fast drag to the left.
    drawer.pointer_down(Point::new(270.0, y), now);
    now += 8;
    drawer.pointer_move(Point::new(250.0, y), now);
    now += 8;
    drawer.pointer_move(Point::new(225.0, y), now);
    let snap = drawer.pointer_up(now);
    println!("flick left -> {snap:?}");
    describe("after flick", &drawer, now);
    now += 300;

    // The menu button toggles it; the scrim closes it.
    drawer.toggle(now);
    describe("toggle", &drawer, now + 300);
    now += 300;
    drawer.overlay_click(now);
    describe("scrim click", &drawer, now + 300);
}
