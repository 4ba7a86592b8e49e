// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: a headless drag-to-reveal side panel.
//!
//! A drawer rests fully closed (offset `-width`) or fully open (offset `0`).
//! Users open it by dragging a handle on its trailing edge, flicking it, or
//! through an external toggle; hovering near the leading edge while it is
//! closed reveals a small peek. This crate owns the interaction state and the
//! decisions; it does not draw anything.
//!
//! The pieces, leaf first:
//!
//! - Pointer tracking: [`understory_event_state::drag::DragState`] records the
//!   start sample and a per-sample velocity.
//! - [`resolve`]: clamps `base + delta` into `[-width, 0]` and derives the
//!   live open preview.
//! - [`snap`]: the release decision, combining a distance threshold with a
//!   velocity-projected momentum offset.
//! - [`peek`]: edge proximity with hysteresis.
//! - [`Presentation`]: target offset, [`Motion`] mode, and scrim state, plus
//!   an eased [`transition`] between resting offsets.
//! - [`Drawer`]: the state machine tying them together, and [`DrawerHost`] to
//!   hold pointer capture for exactly the lifetime of a drag.
//!
//! Transitions between [`DrawerPhase`]s:
//!
//! ```text
//! Closed   -> Peeking   pointer enters the edge zone
//! Peeking  -> Closed    pointer leaves the zone (past the hysteresis margin)
//! any rest -> Dragging  pointer down on the handle
//! Dragging -> Open      release past the snap threshold, or flicked open
//! Dragging -> Closed    any other release
//! Dragging -> origin    cancel (e.g. pointer capture lost)
//! Open    <-> Closed    external toggle, scrim click
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_drawer::{Drawer, DrawerPhase, Motion, Snap};
//!
//! let mut drawer = Drawer::default();
//!
//! // Hovering at the left edge reveals a peek.
//! drawer.pointer_move(Point::new(8.0, 300.0), 0);
//! assert!(drawer.is_peeking());
//!
//! // Wait for the peek transition, then grab the handle and drag right.
//! assert!(drawer.pointer_down(Point::new(40.0, 300.0), 400));
//! drawer.pointer_move(Point::new(140.0, 300.0), 420);
//! drawer.pointer_move(Point::new(220.0, 300.0), 440);
//! assert_eq!(drawer.presentation().motion, Motion::Direct);
//!
//! // Releasing past the halfway mark snaps open.
//! assert_eq!(drawer.pointer_up(450), Some(Snap::Open));
//! assert_eq!(drawer.phase(), &DrawerPhase::Open);
//! assert!(drawer.presentation().overlay_interactive);
//! ```
//!
//! ## Timing
//!
//! Every input takes the host's current time in milliseconds. The crate never
//! reads a clock, so it stays deterministic under test and works unchanged on
//! `no_std` targets. Events may arrive at any rate; each step depends only on
//! the session start and the two most recent samples.
//!
//! ## Logging
//!
//! Drag start, release, cancellation and capture changes are reported through
//! the [`log`] facade at `debug` level, and individual drag samples at `trace`.
//! No logger is installed by this crate.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: use `libm` for `kurbo`'s float math on `no_std` targets.

#![no_std]

mod config;
mod drawer;
mod host;
mod phase;
mod present;

pub mod peek;
pub mod resolve;
pub mod snap;
pub mod transition;

pub use config::{ConfigError, DrawerConfig};
pub use drawer::Drawer;
pub use host::{DrawerHost, PointerCapture};
pub use phase::{DragSession, DrawerPhase};
pub use present::{Motion, Presentation, present, reads_open, rendered_offset};
pub use snap::Snap;
pub use transition::{Easing, TransitionSpec};
