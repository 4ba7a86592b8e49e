// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased transitions between resting offsets.
//!
//! [`OffsetTransition`] is a tiny host-clocked tween: it never reads a clock
//! itself, callers pass the current time in milliseconds to every query.

/// Timing curve applied to a transition's linear progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Arbitrary cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    ///
    /// Inputs outside the unit interval are clamped.
    #[must_use]
    pub fn apply(self, fraction: f64) -> f64 {
        match self {
            Self::Linear if fraction.is_nan() => 0.0,
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction.is_nan() || fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let derivative = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson on x(t) = fraction, falling back to bisection.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            converged = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let (mut lo, mut hi) = (0.0, 1.0);
        t = fraction;
        for _ in 0..24 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-7 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Duration and easing of a resting-state transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    /// Duration in milliseconds. Zero jumps straight to the target.
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl TransitionSpec {
    /// Creates a transition with the given duration and easing.
    #[must_use]
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// A transition that completes immediately.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(0, Easing::Linear)
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new(300, Easing::EaseOut)
    }
}

/// A retargetable tween over a single offset value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetTransition {
    spec: TransitionSpec,
    from: f64,
    to: f64,
    start: u64,
}

impl OffsetTransition {
    /// Creates a transition resting at `value`.
    #[must_use]
    pub fn new(value: f64, spec: TransitionSpec) -> Self {
        Self {
            spec,
            from: value,
            to: value,
            start: 0,
        }
    }

    /// The value the transition is heading towards.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Samples the transition at `now`.
    #[must_use]
    pub fn value_at(&self, now: u64) -> f64 {
        if self.from == self.to || self.spec.duration_ms == 0 {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.start);
        if elapsed >= self.spec.duration_ms {
            return self.to;
        }
        let progress = self
            .spec
            .easing
            .apply(elapsed as f64 / self.spec.duration_ms as f64);
        self.from + (self.to - self.from) * progress
    }

    /// Returns `true` while the value at `now` has not yet reached the target.
    #[must_use]
    pub fn is_running(&self, now: u64) -> bool {
        self.from != self.to
            && self.spec.duration_ms > 0
            && now.saturating_sub(self.start) < self.spec.duration_ms
    }

    /// Starts an eased transition from the current value towards `target`.
    ///
    /// Retargeting to the current target is a no-op, so repeated calls do not
    /// restart a running transition.
    pub fn animate_to(&mut self, target: f64, now: u64) {
        if target == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.start = now;
    }

    /// Jumps to `value` with no easing.
    pub fn snap_to(&mut self, value: f64) {
        self.from = value;
        self.to = value;
    }
}
