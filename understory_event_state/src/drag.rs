// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: compute movement deltas, total offsets, and velocity from
//! timestamped position changes.
//!
//! ## Usage
//!
//! 1) Start a drag operation by calling [`DragState::start`] with the initial position and time.
//! 2) On each move event, call [`DragState::update`] to get the movement delta since the last update.
//! 3) Optionally call [`DragState::total_offset`] to get the cumulative offset from the start position.
//! 4) Read [`DragState::velocity`] for the most recent per-sample velocity in pixels per millisecond.
//! 5) End the drag operation with [`DragState::end`] to reset state.
//!
//! Velocity is estimated from the two most recent samples only. When two samples
//! share a timestamp (or the clock steps backwards) the sample carries no timing
//! information, so the previous velocity is kept.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging at (10, 20)
//! drag.start(Point::new(10.0, 20.0), 100);
//! assert!(drag.is_dragging());
//!
//! // Move to (15, 25) 10ms later - delta is (5, 5)
//! let delta = drag.update(Point::new(15.0, 25.0), 110).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 5.0);
//! assert_eq!(drag.velocity().x, 0.5);
//!
//! // Total offset from start is also (5, 5)
//! let total = drag.total_offset(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(total.x, 5.0);
//! assert_eq!(total.y, 5.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Start position of the drag operation
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during drag
    pub last_pos: Option<Point>,
    /// Timestamp (milliseconds) at which the drag started
    pub start_time: Option<u64>,
    /// Timestamp (milliseconds) of the last recorded sample
    pub last_time: Option<u64>,
    /// Most recent velocity estimate in pixels per millisecond
    pub velocity: Vec2,
}

impl DragState {
    /// Start tracking a new drag operation from the given position and time.
    ///
    /// Any previous drag is discarded and the velocity resets to zero.
    pub fn start(&mut self, pos: Point, time: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.start_time = Some(time);
        self.last_time = Some(time);
        self.velocity = Vec2::ZERO;
    }

    /// Update the drag state with a new sample, returning the movement delta since last update.
    ///
    /// The velocity is refreshed from this delta and the time since the previous
    /// sample. A zero (or negative) time step leaves the velocity unchanged.
    pub fn update(&mut self, pos: Point, time: u64) -> Option<Vec2> {
        self.start_pos?;
        let Some(last_pos) = self.last_pos else {
            self.last_pos = Some(pos);
            self.last_time = Some(time);
            return None;
        };
        let delta = pos - last_pos;
        if let Some(last_time) = self.last_time {
            let dt = time.saturating_sub(last_time);
            if dt > 0 {
                self.velocity = delta / dt as f64;
            }
        }
        self.last_pos = Some(pos);
        // Keep the clock monotonic so a backwards step cannot inflate the next interval.
        self.last_time = Some(self.last_time.map_or(time, |last| last.max(time)));
        Some(delta)
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Milliseconds elapsed since the drag started, or `None` when idle.
    pub fn elapsed(&self, now: u64) -> Option<u64> {
        self.start_time.map(|start| now.saturating_sub(start))
    }

    /// Most recent velocity estimate in pixels per millisecond.
    ///
    /// Zero when idle or before the first timed sample.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(drag.start_pos.is_some() == drag.last_pos.is_some());
        assert_eq!(drag.velocity(), Vec2::ZERO);
    }

    #[test]
    fn start_sets_dragging_state() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(start, 500);

        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
        assert_eq!(drag.start_time, Some(500));
        assert_eq!(drag.last_time, Some(500));
    }

    #[test]
    fn update_returns_delta_when_dragging() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 0);

        let new_pos = Point::new(15.0, 25.0);
        let delta = drag.update(new_pos, 5);

        assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.last_pos, Some(new_pos));
        assert_eq!(drag.velocity(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        let delta = drag.update(Point::new(15.0, 25.0), 10);

        assert_eq!(delta, None);
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.velocity(), Vec2::ZERO);
    }

    #[test]
    fn update_with_no_last_position_returns_none() {
        let mut drag = DragState {
            start_pos: Some(Point::new(10.0, 20.0)),
            ..DragState::default()
        };

        let new_pos = Point::new(15.0, 25.0);
        let delta = drag.update(new_pos, 10);

        assert_eq!(delta, None);
        assert_eq!(drag.last_pos, Some(new_pos));
        assert_eq!(drag.last_time, Some(10));
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);

        let delta1 = drag.update(Point::new(5.0, 3.0), 10);
        assert_eq!(delta1, Some(Vec2::new(5.0, 3.0)));

        let delta2 = drag.update(Point::new(8.0, 7.0), 20);
        assert_eq!(delta2, Some(Vec2::new(3.0, 4.0)));

        let delta3 = drag.update(Point::new(10.0, 10.0), 30);
        assert_eq!(delta3, Some(Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn velocity_uses_only_the_latest_interval() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);

        // Slow first, then fast: velocity reflects the last pair of samples.
        drag.update(Point::new(10.0, 0.0), 100);
        assert_eq!(drag.velocity().x, 0.1);
        drag.update(Point::new(30.0, 0.0), 110);
        assert_eq!(drag.velocity().x, 2.0);
    }

    #[test]
    fn identical_timestamps_keep_previous_velocity() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(20.0, 0.0), 10);
        let before = drag.velocity();

        for x in [25.0, 40.0, -300.0] {
            let delta = drag.update(Point::new(x, 0.0), 10);
            assert!(delta.is_some(), "delta is still reported at dt = 0");
            assert_eq!(drag.velocity(), before);
        }
        assert!(drag.velocity().x.is_finite());
    }

    #[test]
    fn backwards_timestamp_is_treated_as_zero_interval() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 100);
        drag.update(Point::new(10.0, 0.0), 110);

        drag.update(Point::new(50.0, 0.0), 90);
        assert_eq!(drag.velocity().x, 1.0);
        assert_eq!(drag.last_time, Some(110));

        // The next forward sample measures from the latest time seen.
        drag.update(Point::new(60.0, 0.0), 120);
        assert_eq!(drag.velocity().x, 1.0);
    }

    #[test]
    fn total_offset_calculates_from_start() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 0);

        drag.update(Point::new(15.0, 25.0), 1);

        let total = drag.total_offset(Point::new(20.0, 35.0));

        assert_eq!(total, Some(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn total_offset_returns_none_when_not_dragging() {
        let drag = DragState::default();

        let total = drag.total_offset(Point::new(100.0, 200.0));

        assert_eq!(total, None);
    }

    #[test]
    fn elapsed_counts_from_start() {
        let mut drag = DragState::default();
        assert_eq!(drag.elapsed(50), None);

        drag.start(Point::ZERO, 1_000);
        assert_eq!(drag.elapsed(1_250), Some(250));
        assert_eq!(drag.elapsed(900), Some(0));
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 0);
        drag.update(Point::new(15.0, 25.0), 5);

        drag.end();

        assert!(drag.start_pos.is_none());
        assert!(drag.last_pos.is_none());
        assert!(drag.start_time.is_none());
        assert_eq!(drag.velocity(), Vec2::ZERO);
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut drag = DragState::default();

        drag.end();

        assert!(!drag.is_dragging());
        assert!(drag.start_pos.is_some() == drag.last_pos.is_some());
    }

    #[test]
    fn negative_movement_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0), 0);

        let delta = drag.update(Point::new(90.0, 85.0), 5);

        assert_eq!(delta, Some(Vec2::new(-10.0, -15.0)));
        assert_eq!(drag.velocity(), Vec2::new(-2.0, -3.0));
    }

    #[test]
    fn fractional_coordinates() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.5, 2.7), 0);

        let delta = drag.update(Point::new(3.2, 4.1), 1);

        let expected_delta = Vec2::new(1.7, 1.4);
        assert!((delta.unwrap().x - expected_delta.x).abs() < f64::EPSILON * 10.0);
        assert!((delta.unwrap().y - expected_delta.y).abs() < f64::EPSILON * 10.0);

        let total = drag.total_offset(Point::new(3.2, 4.1));
        assert!((total.unwrap().x - expected_delta.x).abs() < f64::EPSILON * 10.0);
        assert!((total.unwrap().y - expected_delta.y).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();

        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(10.0, 10.0), 10);

        let new_start = Point::new(50.0, 60.0);
        drag.start(new_start, 40);

        assert_eq!(drag.start_pos, Some(new_start));
        assert_eq!(drag.start_pos, drag.last_pos);
        assert_eq!(drag.velocity(), Vec2::ZERO);

        let total = drag.total_offset(Point::new(55.0, 65.0));
        assert_eq!(total, Some(Vec2::new(5.0, 5.0)));
    }
}
