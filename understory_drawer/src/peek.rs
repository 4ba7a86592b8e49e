// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge peek detection with hysteresis.
//!
//! A closed drawer shows a sliver of itself when the pointer hovers near the
//! leading edge. The peek turns on at `x <= zone` and only turns off again at
//! `x > zone + hysteresis`, so a pointer resting on the boundary does not
//! flicker.
//!
//! ```
//! use understory_drawer::peek::EdgePeek;
//!
//! let mut peek = EdgePeek::new(30.0, 50.0);
//! assert!(peek.update(12.0));
//! // Inside the hysteresis band: still peeking.
//! assert!(peek.update(60.0));
//! assert!(!peek.update(81.0));
//! ```

/// Hysteresis-based edge proximity detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgePeek {
    zone: f64,
    hysteresis: f64,
    active: bool,
}

impl EdgePeek {
    /// Creates an inactive detector.
    #[must_use]
    pub fn new(zone: f64, hysteresis: f64) -> Self {
        Self {
            zone,
            hysteresis,
            active: false,
        }
    }

    /// Whether the pointer is currently considered near the edge.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feeds a pointer x coordinate and returns the new state.
    ///
    /// A non-finite coordinate leaves the state unchanged.
    pub fn update(&mut self, x: f64) -> bool {
        if x <= self.zone {
            self.active = true;
        } else if x > self.zone + self.hysteresis {
            self.active = false;
        }
        self.active
    }

    /// Forces the detector inactive, e.g. when the drawer opens or a drag starts.
    pub fn reset(&mut self) {
        self.active = false;
    }
}
