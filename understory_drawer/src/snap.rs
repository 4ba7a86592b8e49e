// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-time snap decision.
//!
//! When a drag ends, the panel settles either fully open or fully closed. Two
//! signals can open it:
//!
//! - the revealed amount already exceeds the snap threshold, or
//! - projecting the last velocity over the momentum window lands past that
//!   threshold (a flick).
//!
//! Everything else closes it. There is no partial rest state.
//!
//! ```
//! use understory_drawer::DrawerConfig;
//! use understory_drawer::snap::{Snap, decide};
//!
//! let config = DrawerConfig::default();
//! // 180px revealed out of 280 is past the halfway mark.
//! assert_eq!(decide(-100.0, 0.0, &config), Snap::Open);
//! // 30px revealed, flicked at 0.5 px/ms, only projects to 130px.
//! assert_eq!(decide(-250.0, 0.5, &config), Snap::Closed);
//! ```

use crate::config::DrawerConfig;
use crate::resolve::revealed;

/// Where a released drawer comes to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Snap {
    /// Fully revealed, offset `0`.
    Open,
    /// Fully hidden, offset `-width`.
    Closed,
}

impl Snap {
    /// Returns `true` for [`Snap::Open`].
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Resting offset for this outcome.
    #[must_use]
    pub fn offset(self, width: f64) -> f64 {
        match self {
            Self::Open => 0.0,
            Self::Closed => -width,
        }
    }
}

/// Projects `offset` forward by `window_ms` at `velocity` (px/ms).
///
/// A non-finite velocity contributes nothing.
#[must_use]
pub fn momentum_offset(offset: f64, velocity: f64, window_ms: f64) -> f64 {
    if velocity.is_finite() {
        offset + velocity * window_ms
    } else {
        offset
    }
}

/// Decides the resting state for a drag released at `offset` with `velocity`.
#[must_use]
pub fn decide(offset: f64, velocity: f64, config: &DrawerConfig) -> Snap {
    let threshold = config.snap_threshold();
    let crossed = revealed(offset, config.width) > threshold;
    let projected = momentum_offset(offset, velocity, config.momentum_window_ms);
    let flicked = projected > config.closed_offset() + threshold;
    if crossed || flicked {
        Snap::Open
    } else {
        Snap::Closed
    }
}
