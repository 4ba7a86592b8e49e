// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position resolution: map a pointer delta onto a clamped panel offset.
//!
//! Offsets run from `-width` (fully closed) to `0` (fully open). The
//! "revealed" amount is `offset + width`, i.e. how much of the panel is on
//! screen.

/// Clamps `base_offset + delta_x` into `[-width, 0]`.
///
/// Non-finite deltas are treated as "no movement" so the offset is always a
/// legal, finite value for a finite `base_offset`.
///
/// ```
/// use understory_drawer::resolve::resolve_offset;
///
/// assert_eq!(resolve_offset(-280.0, 100.0, 280.0), -180.0);
/// assert_eq!(resolve_offset(-280.0, 1_000.0, 280.0), 0.0);
/// assert_eq!(resolve_offset(0.0, -1_000.0, 280.0), -280.0);
/// ```
#[must_use]
pub fn resolve_offset(base_offset: f64, delta_x: f64, width: f64) -> f64 {
    let delta_x = if delta_x.is_finite() { delta_x } else { 0.0 };
    let offset = base_offset + delta_x;
    if offset.is_nan() {
        return -width;
    }
    offset.clamp(-width, 0.0)
}

/// How much of the panel is revealed at `offset`: `0` closed, `width` open.
#[must_use]
pub fn revealed(offset: f64, width: f64) -> f64 {
    offset + width
}

/// Live open preview used while dragging.
///
/// The panel reads as open once at least `threshold` of it is revealed. This
/// is deliberately more eager than the release snap threshold.
#[must_use]
pub fn live_open(offset: f64, width: f64, threshold: f64) -> bool {
    revealed(offset, width) >= threshold
}
