// SPDX-License-Identifier: MPL-2.0
//! Hamburger icon open/close animation state.
//!
//! Toggling tilts the outer bars about their leading edge (±48°) and
//! collapses the middle bar to nothing, with an eased transition.

use crate::effects::anim::Animated;
use std::time::Duration;

/// Tilt of the outer bars when open, in degrees.
pub const BAR_TILT_DEGREES: f32 = 48.0;

/// Rate tuned to feel like the original's interpolating spring.
const TILT_RATE: f32 = 18.0;

/// Animated hamburger icon state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HamburgerState {
    open: bool,
    /// 0 = closed, 1 = open.
    transition: Animated,
}

impl HamburgerState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            transition: Animated::new(0.0).with_rate(TILT_RATE),
        }
    }

    /// Toggles between the open and closed poses.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.transition.set_target(if self.open { 1.0 } else { 0.0 });
    }

    /// Advances the transition. Returns `true` while still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.transition.tick(dt)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transition.is_settled()
    }

    /// Tilt of the top bar in degrees; the bottom bar uses the negation.
    #[must_use]
    pub fn outer_tilt_degrees(&self) -> f32 {
        BAR_TILT_DEGREES * self.transition.value()
    }

    /// Scale of the middle bar, 1 → 0 as the icon opens.
    #[must_use]
    pub fn middle_scale(&self) -> f32 {
        1.0 - self.transition.value()
    }

    /// Opacity of the middle bar, mirroring its scale.
    #[must_use]
    pub fn middle_opacity(&self) -> f32 {
        self.middle_scale()
    }
}

impl Default for HamburgerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(state: &mut HamburgerState) {
        for _ in 0..200 {
            if !state.tick(FRAME) {
                break;
            }
        }
    }

    #[test]
    fn starts_closed_and_still() {
        let state = HamburgerState::new();
        assert!(!state.is_open());
        assert!(!state.is_animating());
        assert_eq!(state.outer_tilt_degrees(), 0.0);
        assert_eq!(state.middle_scale(), 1.0);
    }

    #[test]
    fn toggle_animates_to_open_pose() {
        let mut state = HamburgerState::new();
        state.toggle();
        assert!(state.is_open());
        assert!(state.is_animating());
        settle(&mut state);
        assert_eq!(state.outer_tilt_degrees(), BAR_TILT_DEGREES);
        assert_eq!(state.middle_scale(), 0.0);
        assert_eq!(state.middle_opacity(), 0.0);
    }

    #[test]
    fn toggle_back_returns_to_closed_pose() {
        let mut state = HamburgerState::new();
        state.toggle();
        settle(&mut state);
        state.toggle();
        settle(&mut state);
        assert!(!state.is_open());
        assert_eq!(state.outer_tilt_degrees(), 0.0);
        assert_eq!(state.middle_scale(), 1.0);
    }

    #[test]
    fn rapid_double_toggle_heads_back_mid_flight() {
        let mut state = HamburgerState::new();
        state.toggle();
        for _ in 0..3 {
            state.tick(FRAME);
        }
        let tilt_before = state.outer_tilt_degrees();
        state.toggle();
        state.tick(FRAME);
        assert!(state.outer_tilt_degrees() < tilt_before);
    }
}
