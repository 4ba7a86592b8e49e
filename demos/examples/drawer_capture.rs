// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer pointer capture.
//!
//! Show `DrawerHost` acquiring surface-wide pointer routing for the lifetime
//! of a drag, and giving it back on release, on capture loss, and on drop.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example drawer_capture`

use kurbo::Point;
use understory_drawer::{Drawer, DrawerHost, PointerCapture};

/// Stands in for window-level `pointermove`/`pointerup` listeners.
#[derive(Debug, Default)]
struct WindowListeners {
    attached: bool,
    attach_count: u32,
}

impl PointerCapture for WindowListeners {
    fn acquire(&mut self) {
        self.attached = true;
        self.attach_count += 1;
        println!("  + listeners attached");
    }

    fn release(&mut self) {
        self.attached = false;
        println!("  - listeners detached");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut listeners = WindowListeners::default();
    {
        let mut host = DrawerHost::new(Drawer::default(), &mut listeners);

        println!("drag and release:");
        host.begin_drag(Point::new(0.0, 200.0), 0);
        host.pointer_move(Point::new(220.0, 200.0), 120);
        println!("  released -> {:?}", host.pointer_up(130));

        println!("drag, then a modal steals capture:");
        host.begin_drag(Point::new(270.0, 200.0), 500);
        host.pointer_move(Point::new(90.0, 200.0), 560);
        host.capture_lost(600);
        println!("  restored open = {}", host.drawer().is_open());

        println!("drag, then the host is torn down mid-drag:");
        host.begin_drag(Point::new(270.0, 200.0), 1_000);
        host.pointer_move(Point::new(200.0, 200.0), 1_016);
    }
    log::info!(
        "listeners attached {} times, attached now: {}",
        listeners.attach_count,
        listeners.attached
    );
}
