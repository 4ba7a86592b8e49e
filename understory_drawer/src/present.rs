// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::DrawerConfig;
use crate::phase::DrawerPhase;

/// How the renderer should move the panel to its new offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Track the offset 1:1 with no smoothing (active drag).
    Direct,
    /// Ease towards the offset using the configured transition.
    Animated,
}

/// Everything a renderer needs to draw the drawer and its scrim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    /// Target horizontal translation of the panel, in `[-width, 0]`.
    pub offset: f64,
    /// Whether to animate towards `offset` or jump to it.
    pub motion: Motion,
    /// Scrim opacity behind the panel.
    pub overlay_opacity: f64,
    /// Whether the scrim intercepts clicks (which close the drawer).
    pub overlay_interactive: bool,
}

/// Target offset for `phase`.
///
/// The live drag offset wins while dragging; otherwise the offset follows
/// from the resting state.
#[must_use]
pub fn rendered_offset(phase: &DrawerPhase, config: &DrawerConfig) -> f64 {
    match phase {
        DrawerPhase::Dragging(session) => session.offset(),
        DrawerPhase::Open => 0.0,
        DrawerPhase::Peeking => config.peek_offset(),
        DrawerPhase::Closed => config.closed_offset(),
    }
}

/// Whether `phase` reads as open to the host (and the scrim).
#[must_use]
pub fn reads_open(phase: &DrawerPhase) -> bool {
    match phase {
        DrawerPhase::Open => true,
        DrawerPhase::Dragging(session) => session.live_open(),
        DrawerPhase::Closed | DrawerPhase::Peeking => false,
    }
}

/// Full presentation for `phase`.
#[must_use]
pub fn present(phase: &DrawerPhase, config: &DrawerConfig) -> Presentation {
    let open = reads_open(phase);
    Presentation {
        offset: rendered_offset(phase, config),
        motion: if phase.is_dragging() {
            Motion::Direct
        } else {
            Motion::Animated
        },
        overlay_opacity: if open { config.overlay_opacity } else { 0.0 },
        overlay_interactive: open,
    }
}
