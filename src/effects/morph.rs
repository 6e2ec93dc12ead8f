// SPDX-License-Identifier: MPL-2.0
//! Shape-morph ramp for the image transformation screen.
//!
//! Picking a new shape drives a timer ramp: an internal radius climbs from 0
//! to 40 in fixed steps, the displayed shape swaps at the midpoint, and the
//! ramp stops and rewinds at the top. The effective blur the view renders
//! rises 0 → 20 and falls back to 0, so the swap happens while the shape is
//! fully obscured.

/// Ramp increment applied on every tick.
const RAMP_STEP: f32 = 0.5;

/// Ramp value at which the displayed shape swaps.
const RAMP_MIDPOINT: f32 = 20.0;

/// Ramp value at which the animation completes.
const RAMP_TOP: f32 = 40.0;

/// Shapes the morph can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphShape {
    Star,
    Heart,
    Moon,
    Person,
}

impl MorphShape {
    /// All shapes, in picker order.
    pub const ALL: [MorphShape; 4] = [
        MorphShape::Star,
        MorphShape::Heart,
        MorphShape::Moon,
        MorphShape::Person,
    ];

    /// Display label for the picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MorphShape::Star => "Star",
            MorphShape::Heart => "Heart",
            MorphShape::Moon => "Moon",
            MorphShape::Person => "Person",
        }
    }
}

/// Timer-driven morph state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphState {
    current: MorphShape,
    picked: MorphShape,
    ramp: f32,
    animating: bool,
}

impl MorphState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: MorphShape::Star,
            picked: MorphShape::Star,
            ramp: 0.0,
            animating: false,
        }
    }

    /// Records a picker selection and starts the ramp on an actual change.
    pub fn pick(&mut self, shape: MorphShape) {
        if shape == self.picked {
            return;
        }
        self.picked = shape;
        self.animating = true;
    }

    /// Advances the ramp by one tick. Returns `true` while still animating.
    pub fn tick(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        if self.ramp <= RAMP_TOP {
            self.ramp += RAMP_STEP;
            if self.ramp.round() == RAMP_MIDPOINT {
                self.current = self.picked;
            }
        }
        if self.ramp.round() >= RAMP_TOP {
            self.animating = false;
            self.ramp = 0.0;
        }
        self.animating
    }

    /// Shape currently displayed.
    #[must_use]
    pub fn current(&self) -> MorphShape {
        self.current
    }

    /// Shape selected in the picker.
    #[must_use]
    pub fn picked(&self) -> MorphShape {
        self.picked
    }

    /// Whether the ramp is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Blur the view should render: rises to the midpoint, then falls back.
    #[must_use]
    pub fn effective_blur(&self) -> f32 {
        if self.ramp >= RAMP_MIDPOINT {
            RAMP_MIDPOINT - (self.ramp - RAMP_MIDPOINT)
        } else {
            self.ramp
        }
    }

    /// How visible the displayed shape is, in [0, 1]. Zero at the swap point.
    #[must_use]
    pub fn reveal(&self) -> f32 {
        1.0 - (self.effective_blur() / RAMP_MIDPOINT).clamp(0.0, 1.0)
    }
}

impl Default for MorphState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut MorphState) -> u32 {
        let mut ticks = 0;
        while state.tick() {
            ticks += 1;
            assert!(ticks < 1000, "ramp never completed");
        }
        ticks + 1
    }

    #[test]
    fn idle_state_does_not_tick() {
        let mut state = MorphState::new();
        assert!(!state.tick());
        assert_eq!(state.effective_blur(), 0.0);
        assert_eq!(state.reveal(), 1.0);
    }

    #[test]
    fn picking_same_shape_is_a_no_op() {
        let mut state = MorphState::new();
        state.pick(MorphShape::Star);
        assert!(!state.is_animating());
    }

    #[test]
    fn shape_swaps_at_the_midpoint() {
        let mut state = MorphState::new();
        state.pick(MorphShape::Heart);
        while state.current() == MorphShape::Star {
            assert!(state.tick(), "ramp ended before the swap");
        }
        // At the swap point the shape must be fully obscured.
        assert!(state.effective_blur() >= RAMP_MIDPOINT - RAMP_STEP);
        assert_eq!(state.current(), MorphShape::Heart);
    }

    #[test]
    fn ramp_completes_and_rewinds() {
        let mut state = MorphState::new();
        state.pick(MorphShape::Moon);
        run_to_completion(&mut state);
        assert!(!state.is_animating());
        assert_eq!(state.effective_blur(), 0.0);
        assert_eq!(state.reveal(), 1.0);
        assert_eq!(state.current(), MorphShape::Moon);
    }

    #[test]
    fn effective_blur_is_symmetric() {
        let mut state = MorphState::new();
        state.pick(MorphShape::Person);
        let mut peak: f32 = 0.0;
        while state.tick() {
            peak = peak.max(state.effective_blur());
            assert!(state.effective_blur() >= 0.0);
            assert!(state.effective_blur() <= RAMP_MIDPOINT);
        }
        assert!((peak - RAMP_MIDPOINT).abs() <= RAMP_STEP);
    }

    #[test]
    fn repick_during_ramp_updates_target() {
        let mut state = MorphState::new();
        state.pick(MorphShape::Heart);
        for _ in 0..10 {
            state.tick();
        }
        state.pick(MorphShape::Moon);
        run_to_completion(&mut state);
        assert_eq!(state.current(), MorphShape::Moon);
    }
}
