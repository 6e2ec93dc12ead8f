// SPDX-License-Identifier: MPL-2.0
//! Shimmer phase state for loading placeholders.
//!
//! The highlight band sweeps from one side of a placeholder to the other and
//! restarts, matching the original effect's repeating `-0.7 → 0.7` travel.

use std::time::Duration;

/// Phase value at the start of a sweep.
pub const PHASE_START: f32 = -0.7;

/// Phase value at the end of a sweep.
pub const PHASE_END: f32 = 0.7;

/// Repeating sweep phase for the shimmer highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShimmerPhase {
    phase: f32,
    /// Seconds per full sweep.
    speed: f32,
}

impl ShimmerPhase {
    /// Creates a phase at the start of a sweep. `speed` is seconds per sweep,
    /// clamped to the configurable range.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self {
            phase: PHASE_START,
            speed: speed.clamp(
                crate::config::MIN_SHIMMER_SPEED_SECS,
                crate::config::MAX_SHIMMER_SPEED_SECS,
            ),
        }
    }

    /// Advances the sweep by `dt`, wrapping back to the start.
    pub fn tick(&mut self, dt: Duration) {
        let span = PHASE_END - PHASE_START;
        self.phase += span * dt.as_secs_f32() / self.speed;
        while self.phase > PHASE_END {
            self.phase -= span;
        }
    }

    /// Current phase in `[PHASE_START, PHASE_END]`.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.phase
    }

    /// Phase remapped to `[0, 1]` across the sweep, for positioning the band.
    #[must_use]
    pub fn normalized(&self) -> f32 {
        (self.phase - PHASE_START) / (PHASE_END - PHASE_START)
    }
}

impl Default for ShimmerPhase {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SHIMMER_SPEED_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_phase_start() {
        let phase = ShimmerPhase::default();
        assert_eq!(phase.value(), PHASE_START);
        assert_eq!(phase.normalized(), 0.0);
    }

    #[test]
    fn advances_with_time() {
        let mut phase = ShimmerPhase::new(1.0);
        phase.tick(Duration::from_millis(500));
        assert!((phase.value() - 0.0).abs() < 1e-3);
        assert!((phase.normalized() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn wraps_after_a_full_sweep() {
        let mut phase = ShimmerPhase::new(1.0);
        phase.tick(Duration::from_millis(1100));
        assert!(phase.value() >= PHASE_START);
        assert!(phase.value() <= PHASE_END);
        assert!((phase.value() - (PHASE_START + 0.14)).abs() < 1e-2);
    }

    #[test]
    fn speed_is_clamped() {
        let phase = ShimmerPhase::new(0.0);
        assert_eq!(
            ShimmerPhase {
                speed: crate::config::MIN_SHIMMER_SPEED_SECS,
                ..phase
            },
            phase
        );
    }

    #[test]
    fn phase_never_leaves_range_over_many_ticks() {
        let mut phase = ShimmerPhase::new(2.0);
        for _ in 0..1000 {
            phase.tick(Duration::from_millis(16));
            assert!(phase.value() >= PHASE_START - 1e-4);
            assert!(phase.value() <= PHASE_END + 1e-4);
        }
    }
}
