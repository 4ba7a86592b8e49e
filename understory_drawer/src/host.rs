// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped pointer capture around a [`Drawer`].
//!
//! A drag must keep receiving move/up events after the pointer leaves the
//! handle, so hosts route surface-wide pointer events to the drawer for the
//! duration of the drag. [`DrawerHost`] holds that routing as a resource: it
//! acquires capture when a drag starts and releases it when the drag ends by
//! release, cancellation, or the host being dropped (including during unwind).
//!
//! ```
//! use kurbo::Point;
//! use understory_drawer::{Drawer, DrawerHost, PointerCapture};
//!
//! #[derive(Default)]
//! struct Listeners {
//!     attached: bool,
//! }
//!
//! impl PointerCapture for Listeners {
//!     fn acquire(&mut self) {
//!         self.attached = true;
//!     }
//!     fn release(&mut self) {
//!         self.attached = false;
//!     }
//! }
//!
//! let mut host = DrawerHost::new(Drawer::default(), Listeners::default());
//! host.begin_drag(Point::new(0.0, 100.0), 0);
//! assert!(host.capture().attached);
//! host.pointer_up(16);
//! assert!(!host.capture().attached);
//! ```

use kurbo::Point;

use crate::drawer::Drawer;
use crate::snap::Snap;

/// Something that can route surface-wide pointer events to the drawer.
///
/// In a browser this would add and remove window `pointermove`/`pointerup`
/// listeners; in a native shell it might call the platform's pointer grab.
pub trait PointerCapture {
    /// Start routing pointer events to the drawer.
    fn acquire(&mut self);
    /// Stop routing pointer events to the drawer.
    fn release(&mut self);
}

impl<C: PointerCapture + ?Sized> PointerCapture for &mut C {
    fn acquire(&mut self) {
        (**self).acquire();
    }

    fn release(&mut self) {
        (**self).release();
    }
}

/// A [`Drawer`] paired with the capture resource its drags hold.
///
/// Capture is held exactly while the drawer is dragging.
#[derive(Debug)]
pub struct DrawerHost<C: PointerCapture> {
    drawer: Drawer,
    capture: C,
    captured: bool,
}

impl<C: PointerCapture> DrawerHost<C> {
    /// Wraps `drawer`, which must not be mid-drag.
    ///
    /// A drawer that is already dragging has its drag cancelled, since no
    /// capture was held for it.
    pub fn new(mut drawer: Drawer, capture: C) -> Self {
        drawer.cancel(0);
        Self {
            drawer,
            capture,
            captured: false,
        }
    }

    /// The wrapped drawer.
    #[must_use]
    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    /// The capture resource.
    #[must_use]
    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Whether capture is currently held.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// See [`Drawer::pointer_down`].
    pub fn pointer_down(&mut self, pos: Point, now: u64) -> bool {
        let started = self.drawer.pointer_down(pos, now);
        self.sync();
        started
    }

    /// See [`Drawer::begin_drag`].
    pub fn begin_drag(&mut self, pos: Point, now: u64) -> bool {
        let started = self.drawer.begin_drag(pos, now);
        self.sync();
        started
    }

    /// See [`Drawer::pointer_move`].
    pub fn pointer_move(&mut self, pos: Point, now: u64) {
        self.drawer.pointer_move(pos, now);
    }

    /// See [`Drawer::pointer_up`].
    pub fn pointer_up(&mut self, now: u64) -> Option<Snap> {
        let snap = self.drawer.pointer_up(now);
        self.sync();
        snap
    }

    /// The platform revoked capture; the drag is cancelled without a release call.
    pub fn capture_lost(&mut self, now: u64) -> bool {
        self.captured = false;
        self.drawer.cancel(now)
    }

    /// See [`Drawer::set_open`].
    pub fn set_open(&mut self, open: bool, now: u64) -> bool {
        self.drawer.set_open(open, now)
    }

    /// See [`Drawer::toggle`].
    pub fn toggle(&mut self, now: u64) -> bool {
        self.drawer.toggle(now)
    }

    /// See [`Drawer::overlay_click`].
    pub fn overlay_click(&mut self, now: u64) -> bool {
        self.drawer.overlay_click(now)
    }

    fn sync(&mut self) {
        let dragging = self.drawer.is_dragging();
        if dragging && !self.captured {
            log::debug!("drawer capture acquired");
            self.capture.acquire();
            self.captured = true;
        } else if !dragging && self.captured {
            log::debug!("drawer capture released");
            self.capture.release();
            self.captured = false;
        }
    }
}

impl<C: PointerCapture> Drop for DrawerHost<C> {
    fn drop(&mut self) {
        if self.captured {
            log::debug!("drawer capture released on drop");
            self.capture.release();
        }
    }
}
