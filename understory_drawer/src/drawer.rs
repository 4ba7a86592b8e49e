// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::config::{ConfigError, DrawerConfig};
use crate::peek::EdgePeek;
use crate::phase::{DragSession, DrawerPhase};
use crate::present::{Presentation, present, reads_open, rendered_offset};
use crate::snap::{Snap, decide};
use crate::transition::OffsetTransition;

/// A headless drag-to-reveal drawer anchored to the leading edge.
///
/// Feed it pointer events and external open/close requests, each stamped with
/// the host's current time in milliseconds. Read back [`Drawer::presentation`]
/// for the target state and [`Drawer::offset_at`] for the eased offset to draw.
///
/// All inputs are total: out-of-range or out-of-order events are clamped or
/// ignored, never rejected.
#[derive(Clone, Debug)]
pub struct Drawer {
    config: DrawerConfig,
    phase: DrawerPhase,
    peek: EdgePeek,
    transition: OffsetTransition,
    revision: u64,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::with_valid_config(DrawerConfig::default())
    }
}

impl Drawer {
    /// Creates a closed drawer after validating `config`.
    pub fn new(config: DrawerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: DrawerConfig) -> Self {
        Self {
            config,
            phase: DrawerPhase::Closed,
            peek: EdgePeek::new(config.edge_zone, config.edge_hysteresis),
            transition: OffsetTransition::new(config.closed_offset(), config.transition),
            revision: 0,
        }
    }

    /// The configuration this drawer was built with.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> &DrawerPhase {
        &self.phase
    }

    /// Whether the drawer reads as open.
    ///
    /// During a drag this is the live preview, which flips at the (more eager)
    /// live-open threshold rather than the release threshold.
    #[must_use]
    pub fn is_open(&self) -> bool {
        reads_open(&self.phase)
    }

    /// Returns `true` between a drag start and its release or cancellation.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Returns `true` while the closed drawer is peeking.
    #[must_use]
    pub fn is_peeking(&self) -> bool {
        matches!(self.phase, DrawerPhase::Peeking)
    }

    /// Target offset: the live drag offset while dragging, otherwise the
    /// resting offset for the current phase.
    #[must_use]
    pub fn offset(&self) -> f64 {
        rendered_offset(&self.phase, &self.config)
    }

    /// Offset to draw at `now`, including any running transition.
    #[must_use]
    pub fn offset_at(&self, now: u64) -> f64 {
        self.transition.value_at(now)
    }

    /// Whether a resting-state transition is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: u64) -> bool {
        self.transition.is_running(now)
    }

    /// Target presentation for the current phase.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        present(&self.phase, &self.config)
    }

    /// Increments whenever [`Drawer::presentation`] changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `x` falls on the grab strip along the panel's trailing edge, as
    /// drawn at `now`.
    #[must_use]
    pub fn hits_handle(&self, x: f64, now: u64) -> bool {
        let trailing = self.offset_at(now) + self.config.width;
        x >= trailing - self.config.handle_width && x <= trailing
    }

    /// Starts a drag if `pos` hits the handle. Returns whether a drag began.
    pub fn pointer_down(&mut self, pos: Point, now: u64) -> bool {
        if !self.hits_handle(pos.x, now) {
            return false;
        }
        self.begin_drag(pos, now)
    }

    /// Starts a drag at `pos` without hit testing.
    ///
    /// The drag begins from the offset currently drawn, so grabbing the panel
    /// mid-transition does not make it jump. Returns `false` if a drag is
    /// already active.
    pub fn begin_drag(&mut self, pos: Point, now: u64) -> bool {
        if self.is_dragging() {
            return false;
        }
        let origin = if matches!(self.phase, DrawerPhase::Open) {
            Snap::Open
        } else {
            Snap::Closed
        };
        let base = self.offset_at(now);
        let session = DragSession::begin(pos, now, base, origin, &self.config);
        log::debug!(
            "drawer drag start x={} base_offset={} origin={origin:?}",
            pos.x,
            session.base_offset()
        );
        self.peek.reset();
        self.commit(DrawerPhase::Dragging(session), now);
        true
    }

    /// Handles a pointer move anywhere on the host surface.
    ///
    /// While dragging this updates the offset; while closed it drives the edge
    /// peek; while open it does nothing.
    pub fn pointer_move(&mut self, pos: Point, now: u64) {
        let next = match self.phase {
            DrawerPhase::Dragging(mut session) => {
                session.track(pos, now, &self.config);
                DrawerPhase::Dragging(session)
            }
            DrawerPhase::Open => return,
            DrawerPhase::Closed | DrawerPhase::Peeking => {
                if self.peek.update(pos.x) {
                    DrawerPhase::Peeking
                } else {
                    DrawerPhase::Closed
                }
            }
        };
        self.commit(next, now);
    }

    /// Ends the active drag and snaps the panel open or closed.
    ///
    /// Returns `None` (and changes nothing) when no drag is active.
    pub fn pointer_up(&mut self, now: u64) -> Option<Snap> {
        let session = *self.phase.session()?;
        let snap = decide(session.offset(), session.velocity(), &self.config);
        log::debug!(
            "drawer drag release offset={} velocity={} -> {snap:?}",
            session.offset(),
            session.velocity()
        );
        self.settle(snap, now);
        Some(snap)
    }

    /// Abandons the active drag, restoring the resting state it started from.
    ///
    /// Use this when pointer capture is lost. Returns whether a drag was active.
    pub fn cancel(&mut self, now: u64) -> bool {
        let Some(session) = self.phase.session() else {
            return false;
        };
        let origin = session.origin();
        log::debug!("drawer drag cancelled, restoring {origin:?}");
        self.settle(origin, now);
        true
    }

    /// Forces the drawer open or closed.
    ///
    /// Ignored while dragging, since the drag owns the offset until release.
    /// Returns whether the request was applied.
    pub fn set_open(&mut self, open: bool, now: u64) -> bool {
        if self.is_dragging() {
            log::debug!("drawer set_open({open}) ignored during drag");
            return false;
        }
        self.settle(if open { Snap::Open } else { Snap::Closed }, now);
        true
    }

    /// Opens the drawer. See [`Drawer::set_open`].
    pub fn open(&mut self, now: u64) -> bool {
        self.set_open(true, now)
    }

    /// Closes the drawer. See [`Drawer::set_open`].
    pub fn close(&mut self, now: u64) -> bool {
        self.set_open(false, now)
    }

    /// Flips the open state, as a menu button would. See [`Drawer::set_open`].
    pub fn toggle(&mut self, now: u64) -> bool {
        self.set_open(!self.is_open(), now)
    }

    /// Handles a click on the scrim. Closes the drawer if the scrim is interactive.
    pub fn overlay_click(&mut self, now: u64) -> bool {
        if !self.presentation().overlay_interactive {
            return false;
        }
        self.close(now)
    }

    fn settle(&mut self, snap: Snap, now: u64) {
        self.peek.reset();
        let phase = match snap {
            Snap::Open => DrawerPhase::Open,
            Snap::Closed => DrawerPhase::Closed,
        };
        self.commit(phase, now);
    }

    fn commit(&mut self, phase: DrawerPhase, now: u64) {
        let before = self.presentation();
        self.phase = phase;
        let after = self.presentation();
        if self.phase.is_dragging() {
            self.transition.snap_to(after.offset);
        } else {
            self.transition.animate_to(after.offset, now);
        }
        if before != after {
            self.revision += 1;
        }
    }
}
