// SPDX-License-Identifier: MPL-2.0
//! Floating action button expansion state.
//!
//! The main button morphs (plus → cross, slight shrink) while satellite
//! buttons fan out along a 90° arc. Selecting a satellite collapses the fan
//! and records the chosen action for the screen title.

use crate::effects::anim::Animated;
use std::time::Duration;

/// Distance the satellites travel from the main button when fully open.
pub const SATELLITE_RADIUS: f32 = 190.0;

/// Arc the satellites are spread across, in degrees.
pub const ARC_DEGREES: f32 = 90.0;

/// Rotation of the main button when open, in degrees.
pub const MAIN_ROTATION_DEGREES: f32 = 45.0;

/// Scale of the main button when open.
const MAIN_OPEN_SCALE: f32 = 0.75;

/// Expansion animation rate, a soft spring-like settle.
const EXPANSION_RATE: f32 = 12.0;

/// Floating action button state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabState {
    opened: bool,
    /// 0 = collapsed, 1 = fully fanned out.
    expansion: Animated,
    satellite_count: usize,
    selected: Option<usize>,
}

impl FabState {
    /// Creates a collapsed fan with `satellite_count` satellites.
    #[must_use]
    pub fn new(satellite_count: usize) -> Self {
        Self {
            opened: false,
            expansion: Animated::new(0.0).with_rate(EXPANSION_RATE),
            satellite_count: satellite_count.max(2),
            selected: None,
        }
    }

    /// Toggles the fan open or closed.
    pub fn toggle(&mut self) {
        self.opened = !self.opened;
        self.expansion.set_target(if self.opened { 1.0 } else { 0.0 });
    }

    /// Records a satellite selection and collapses the fan.
    pub fn select(&mut self, index: usize) {
        if index >= self.satellite_count || !self.opened {
            return;
        }
        self.selected = Some(index);
        self.opened = false;
        self.expansion.set_target(0.0);
    }

    /// Advances the expansion. Returns `true` while still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.expansion.tick(dt)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.opened
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.expansion.is_settled()
    }

    /// Index of the most recently chosen satellite, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn satellite_count(&self) -> usize {
        self.satellite_count
    }

    /// Angle of the satellite at `index` along the arc, in degrees.
    /// Satellites are spaced evenly across [`ARC_DEGREES`].
    #[must_use]
    pub fn satellite_angle_degrees(&self, index: usize) -> f32 {
        ARC_DEGREES / (self.satellite_count as f32 - 1.0) * index as f32
    }

    /// Current distance of the satellites from the main button.
    #[must_use]
    pub fn satellite_radius(&self) -> f32 {
        SATELLITE_RADIUS * self.expansion.value()
    }

    /// Opacity of the satellites, fading with the expansion.
    #[must_use]
    pub fn satellite_opacity(&self) -> f32 {
        self.expansion.value()
    }

    /// Rotation of the main button in degrees.
    #[must_use]
    pub fn main_rotation_degrees(&self) -> f32 {
        MAIN_ROTATION_DEGREES * self.expansion.value()
    }

    /// Scale of the main button, shrinking slightly as it opens.
    #[must_use]
    pub fn main_scale(&self) -> f32 {
        1.0 - (1.0 - MAIN_OPEN_SCALE) * self.expansion.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(state: &mut FabState) {
        for _ in 0..300 {
            if !state.tick(FRAME) {
                break;
            }
        }
    }

    #[test]
    fn starts_collapsed() {
        let state = FabState::new(3);
        assert!(!state.is_open());
        assert_eq!(state.satellite_radius(), 0.0);
        assert_eq!(state.satellite_opacity(), 0.0);
        assert_eq!(state.main_scale(), 1.0);
    }

    #[test]
    fn satellites_are_spread_evenly() {
        let state = FabState::new(3);
        assert_eq!(state.satellite_angle_degrees(0), 0.0);
        assert_eq!(state.satellite_angle_degrees(1), 45.0);
        assert_eq!(state.satellite_angle_degrees(2), 90.0);
    }

    #[test]
    fn opening_expands_fully() {
        let mut state = FabState::new(3);
        state.toggle();
        settle(&mut state);
        assert_eq!(state.satellite_radius(), SATELLITE_RADIUS);
        assert_eq!(state.satellite_opacity(), 1.0);
        assert_eq!(state.main_rotation_degrees(), MAIN_ROTATION_DEGREES);
        assert!((state.main_scale() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn selecting_a_satellite_collapses_and_records() {
        let mut state = FabState::new(3);
        state.toggle();
        settle(&mut state);
        state.select(1);
        assert_eq!(state.selected(), Some(1));
        assert!(!state.is_open());
        settle(&mut state);
        assert_eq!(state.satellite_radius(), 0.0);
    }

    #[test]
    fn selection_requires_an_open_fan_and_valid_index() {
        let mut state = FabState::new(3);
        state.select(0);
        assert_eq!(state.selected(), None);

        state.toggle();
        settle(&mut state);
        state.select(7);
        assert_eq!(state.selected(), None);
        assert!(state.is_open());
    }

    #[test]
    fn satellite_count_has_a_floor_for_arc_spacing() {
        // A single satellite would divide the arc by zero.
        let state = FabState::new(1);
        assert_eq!(state.satellite_count(), 2);
        assert!(state.satellite_angle_degrees(1).is_finite());
    }
}
