// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_event_state::drag::DragState;

use crate::config::DrawerConfig;
use crate::resolve::{live_open, resolve_offset};
use crate::snap::Snap;

/// The drawer's interaction state.
///
/// Exactly one variant describes the panel at any instant, so combinations
/// such as "dragging while peeking" cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DrawerPhase {
    /// Resting fully hidden.
    #[default]
    Closed,
    /// Resting fully revealed.
    Open,
    /// Closed, with a sliver revealed because the pointer is near the edge.
    Peeking,
    /// A pointer drag owns the offset.
    Dragging(DragSession),
}

impl DrawerPhase {
    /// Returns `true` for [`DrawerPhase::Dragging`].
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }
}

/// State of one drag, from pointer-down on the handle to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    tracker: DragState,
    base_offset: f64,
    offset: f64,
    live_open: bool,
    origin: Snap,
}

impl DragSession {
    pub(crate) fn begin(
        pos: Point,
        time: u64,
        base_offset: f64,
        origin: Snap,
        config: &DrawerConfig,
    ) -> Self {
        let mut tracker = DragState::default();
        tracker.start(pos, time);
        let offset = resolve_offset(base_offset, 0.0, config.width);
        Self {
            tracker,
            base_offset: offset,
            offset,
            live_open: live_open(offset, config.width, config.live_open_threshold()),
            origin,
        }
    }

    /// Feeds one pointer sample, updating velocity, offset and the live preview.
    pub(crate) fn track(&mut self, pos: Point, time: u64, config: &DrawerConfig) {
        if self.tracker.update(pos, time).is_none() {
            return;
        }
        let delta_x = self.tracker.total_offset(pos).map_or(0.0, |total| total.x);
        self.offset = resolve_offset(self.base_offset, delta_x, config.width);
        self.live_open = live_open(self.offset, config.width, config.live_open_threshold());
        log::trace!(
            "drawer drag sample x={} offset={} velocity={}",
            pos.x,
            self.offset,
            self.velocity()
        );
    }

    /// Pointer x coordinate at pointer-down.
    #[must_use]
    pub fn start_x(&self) -> f64 {
        self.tracker.start_pos.map_or(0.0, |pos| pos.x)
    }

    /// Timestamp of pointer-down, in milliseconds.
    #[must_use]
    pub fn start_time(&self) -> u64 {
        self.tracker.start_time.unwrap_or_default()
    }

    /// Panel offset when the drag began.
    #[must_use]
    pub fn base_offset(&self) -> f64 {
        self.base_offset
    }

    /// Current clamped panel offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Most recent horizontal velocity in pixels per millisecond.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.tracker.velocity().x
    }

    /// Whether enough of the panel is revealed to preview it as open.
    #[must_use]
    pub fn live_open(&self) -> bool {
        self.live_open
    }

    /// Resting state the drag started from; restored on cancel.
    #[must_use]
    pub fn origin(&self) -> Snap {
        self.origin
    }
}
