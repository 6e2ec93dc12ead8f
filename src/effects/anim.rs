// SPDX-License-Identifier: MPL-2.0
//! Eased animated value shared by the effect screens.
//!
//! An [`Animated`] approaches its target exponentially on each tick, which
//! gives the spring-like settle the original designs use without carrying a
//! full physics integrator.

use std::time::Duration;

/// Distance below which the value snaps to its target.
const SETTLE_EPSILON: f32 = 0.001;

/// Default approach rate (per second). Roughly a 250 ms perceived transition.
const DEFAULT_RATE: f32 = 14.0;

/// A scalar that eases toward a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    current: f32,
    target: f32,
    rate: f32,
}

impl Animated {
    /// Creates a value at rest at `initial`.
    #[must_use]
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            rate: DEFAULT_RATE,
        }
    }

    /// Overrides the approach rate (per second). Higher is snappier.
    #[must_use]
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate.max(SETTLE_EPSILON);
        self
    }

    /// Starts easing toward `target`.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps to `value` without animating.
    pub fn jump_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Advances the animation by `dt`. Returns `true` while still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_settled() {
            return false;
        }
        let step = 1.0 - (-self.rate * dt.as_secs_f32()).exp();
        self.current += (self.target - self.current) * step;
        if (self.target - self.current).abs() < SETTLE_EPSILON {
            self.current = self.target;
        }
        !self.is_settled()
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Target the value is moving toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the value has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn starts_settled() {
        let mut anim = Animated::new(1.0);
        assert!(anim.is_settled());
        assert!(!anim.tick(FRAME));
        assert_eq!(anim.value(), 1.0);
    }

    #[test]
    fn moves_toward_target() {
        let mut anim = Animated::new(0.0);
        anim.set_target(1.0);
        assert!(anim.tick(FRAME));
        assert!(anim.value() > 0.0);
        assert!(anim.value() < 1.0);
    }

    #[test]
    fn settles_within_a_second() {
        let mut anim = Animated::new(0.0);
        anim.set_target(1.0);
        for _ in 0..63 {
            anim.tick(FRAME);
        }
        assert!(anim.is_settled());
        assert_eq!(anim.value(), 1.0);
    }

    #[test]
    fn jump_to_skips_animation() {
        let mut anim = Animated::new(0.0);
        anim.set_target(1.0);
        anim.tick(FRAME);
        anim.jump_to(0.5);
        assert!(anim.is_settled());
        assert_eq!(anim.value(), 0.5);
    }

    #[test]
    fn retarget_mid_flight_changes_direction() {
        let mut anim = Animated::new(0.0);
        anim.set_target(1.0);
        for _ in 0..5 {
            anim.tick(FRAME);
        }
        let before = anim.value();
        anim.set_target(0.0);
        anim.tick(FRAME);
        assert!(anim.value() < before);
    }
}
