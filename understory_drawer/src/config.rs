// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration and validation.

use core::fmt;

use crate::transition::TransitionSpec;

/// Geometry and gesture tuning for a [`Drawer`](crate::Drawer).
///
/// All lengths are logical pixels measured along the drawer's horizontal axis,
/// with the drawer anchored to the leading (left) edge of the host surface.
/// The defaults reproduce a 280px sidebar with a 30px edge-peek zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Panel width. The offset of a closed panel is `-width`.
    pub width: f64,
    /// Fraction of `width` that must be revealed on release for the panel to snap open.
    pub snap_fraction: f64,
    /// Fraction of `width` that must be revealed during a drag for the live
    /// open preview (overlay, `is_open`) to turn on.
    pub live_open_fraction: f64,
    /// Distance from the leading edge within which a hovering pointer triggers a peek.
    pub edge_zone: f64,
    /// Extra distance past `edge_zone` the pointer must travel before a peek ends.
    pub edge_hysteresis: f64,
    /// How much of the panel a peek reveals.
    pub peek_width: f64,
    /// Look-ahead window for the momentum projection on release, in milliseconds.
    pub momentum_window_ms: f64,
    /// Width of the grab strip along the panel's trailing edge.
    pub handle_width: f64,
    /// Scrim opacity while the panel is open.
    pub overlay_opacity: f64,
    /// Transition used between resting states.
    pub transition: TransitionSpec,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            width: 280.0,
            snap_fraction: 0.5,
            live_open_fraction: 0.4,
            edge_zone: 30.0,
            edge_hysteresis: 50.0,
            peek_width: 48.0,
            momentum_window_ms: 200.0,
            handle_width: 24.0,
            overlay_opacity: 0.5,
            transition: TransitionSpec::default(),
        }
    }
}

impl DrawerConfig {
    /// Returns a copy with the given panel width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Returns a copy with the given release snap fraction.
    #[must_use]
    pub fn with_snap_fraction(mut self, fraction: f64) -> Self {
        self.snap_fraction = fraction;
        self
    }

    /// Returns a copy with the given edge zone and hysteresis margin.
    #[must_use]
    pub fn with_edge_zone(mut self, zone: f64, hysteresis: f64) -> Self {
        self.edge_zone = zone;
        self.edge_hysteresis = hysteresis;
        self
    }

    /// Returns a copy with the given peek width.
    #[must_use]
    pub fn with_peek_width(mut self, peek_width: f64) -> Self {
        self.peek_width = peek_width;
        self
    }

    /// Returns a copy with the given momentum look-ahead window.
    #[must_use]
    pub fn with_momentum_window(mut self, window_ms: f64) -> Self {
        self.momentum_window_ms = window_ms;
        self
    }

    /// Returns a copy with the given resting-state transition.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = transition;
        self
    }

    /// Distance the panel must be revealed on release to snap open.
    #[must_use]
    pub fn snap_threshold(&self) -> f64 {
        self.width * self.snap_fraction
    }

    /// Distance the panel must be revealed during a drag for the live open preview.
    #[must_use]
    pub fn live_open_threshold(&self) -> f64 {
        self.width * self.live_open_fraction
    }

    /// Offset of a fully closed panel.
    #[must_use]
    pub fn closed_offset(&self) -> f64 {
        -self.width
    }

    /// Offset of a peeking panel.
    #[must_use]
    pub fn peek_offset(&self) -> f64 {
        -self.width + self.peek_width
    }

    /// Checks that every field describes a usable drawer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::InvalidWidth);
        }
        for (field, value) in [
            ("snap_fraction", self.snap_fraction),
            ("live_open_fraction", self.live_open_fraction),
            ("overlay_opacity", self.overlay_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange(field));
            }
        }
        for (field, value) in [
            ("edge_zone", self.edge_zone),
            ("edge_hysteresis", self.edge_hysteresis),
            ("peek_width", self.peek_width),
            ("momentum_window_ms", self.momentum_window_ms),
            ("handle_width", self.handle_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeLength(field));
            }
        }
        if self.peek_width > self.width {
            return Err(ConfigError::PeekWiderThanPanel);
        }
        if self.handle_width > self.width {
            return Err(ConfigError::HandleWiderThanPanel);
        }
        Ok(())
    }
}

/// Reasons a [`DrawerConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `width` is not a finite, strictly positive number.
    InvalidWidth,
    /// The named fraction or opacity lies outside `0.0..=1.0`.
    OutOfUnitRange(&'static str),
    /// The named length is negative or not finite.
    NegativeLength(&'static str),
    /// `peek_width` exceeds `width`.
    PeekWiderThanPanel,
    /// `handle_width` exceeds `width`.
    HandleWiderThanPanel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth => f.write_str("drawer width must be finite and positive"),
            Self::OutOfUnitRange(field) => write!(f, "`{field}` must lie in 0.0..=1.0"),
            Self::NegativeLength(field) => write!(f, "`{field}` must be finite and non-negative"),
            Self::PeekWiderThanPanel => f.write_str("peek width exceeds drawer width"),
            Self::HandleWiderThanPanel => f.write_str("handle width exceeds drawer width"),
        }
    }
}

impl core::error::Error for ConfigError {}
