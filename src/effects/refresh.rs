// SPDX-License-Identifier: MPL-2.0
//! Pull-refresh controller.
//!
//! Tracks the vertical drag of a scrollable surface, derives a normalized
//! progress value, decides at release time whether the gesture is eligible to
//! trigger a refresh, and runs the asynchronous refresh sequence at most once
//! per qualifying drag. The controller owns no rendering and no input
//! delivery: an event source feeds it offsets through [`Controller::on_drag`]
//! and [`Controller::on_drag_end`], and the orchestrator turns the returned
//! generation token into an async task whose completion is handed back via
//! [`Controller::finish`].
//!
//! Completions are guarded by a generation counter: any completion produced
//! before an unmount or a reset carries a stale generation and is discarded,
//! so a destroyed or recycled state object is never written to.

use crate::error::RefreshError;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Each controller instance starts its generations in a distinct block, so a
/// completion raced across a remount can never match a fresh controller.
static GENERATION_SEED: AtomicU64 = AtomicU64::new(0);

/// Tunables for the controller. Inputs, not baked-in constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshConfig {
    /// Drag distance the gesture must exceed at release to arm a refresh.
    pub threshold: f32,
    /// Pause before the refresh callback runs, so the indicator is visible.
    pub settle_delay: Duration,
    /// Duration of the presentation-layer collapse back to rest.
    pub reset_transition: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            threshold: crate::config::DEFAULT_REFRESH_THRESHOLD,
            settle_delay: Duration::from_millis(crate::config::DEFAULT_SETTLE_DELAY_MS),
            reset_transition: Duration::from_millis(crate::config::DEFAULT_RESET_TRANSITION_MS),
        }
    }
}

/// Read-only view of the controller state, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapshot {
    /// Raw drag distance recorded while progress was still live.
    pub scroll_offset: f32,
    /// Live drag distance, still updated after progress latches.
    pub content_offset: f32,
    /// Normalized progress toward the threshold, in [0, 1].
    pub progress: f32,
    /// The gesture crossed the threshold at release time.
    pub eligible: bool,
    /// A refresh sequence is in flight.
    pub refreshing: bool,
}

/// State machine for one scrollable surface.
pub struct Controller {
    threshold: f32,
    scroll_offset: f32,
    content_offset: f32,
    progress: f32,
    eligible: bool,
    refreshing: bool,
    /// Bumped on every reset and on unmount; stale completions are discarded.
    generation: u64,
    mounted: bool,
}

impl Controller {
    /// Creates a mounted controller. The threshold is clamped to a sane
    /// minimum so a zero or negative value cannot divide progress by zero.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(1.0),
            scroll_offset: 0.0,
            content_offset: 0.0,
            progress: 0.0,
            eligible: false,
            refreshing: false,
            generation: GENERATION_SEED.fetch_add(1, Ordering::Relaxed) << 32,
            mounted: true,
        }
    }

    /// Records a drag position update.
    ///
    /// Progress is recomputed only while the gesture is not yet eligible;
    /// once eligible it stays latched until the sequence resets. The live
    /// `content_offset` keeps tracking either way, for the indicator.
    pub fn on_drag(&mut self, offset: f32) {
        if !self.mounted {
            return;
        }
        self.content_offset = offset;
        if self.eligible {
            return;
        }
        self.scroll_offset = offset;
        self.progress = (offset / self.threshold).clamp(0.0, 1.0);
    }

    /// Records the end of a drag gesture.
    ///
    /// Returns the generation token of the refresh sequence to start, or
    /// `None` when the gesture did not qualify or a sequence is already in
    /// flight (`refreshing` is the single-flight latch).
    #[must_use]
    pub fn on_drag_end(&mut self) -> Option<u64> {
        if !self.mounted || self.refreshing {
            return None;
        }
        self.eligible = self.scroll_offset > self.threshold;
        if self.eligible {
            self.refreshing = true;
            Some(self.generation)
        } else {
            None
        }
    }

    /// Applies the completion of a refresh sequence.
    ///
    /// Success and failure take the identical reset path. Returns `false`
    /// when the completion was discarded because the controller unmounted or
    /// already reset since the sequence started.
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.mounted || generation != self.generation || !self.refreshing {
            return false;
        }
        self.reset();
        true
    }

    /// Releases the controller. Idempotent; any in-flight completion is
    /// discarded from here on.
    pub fn on_unmount(&mut self) {
        self.mounted = false;
        self.generation = self.generation.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.scroll_offset = 0.0;
        self.content_offset = 0.0;
        self.progress = 0.0;
        self.eligible = false;
        self.refreshing = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Read-only snapshot for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scroll_offset: self.scroll_offset,
            content_offset: self.content_offset,
            progress: self.progress,
            eligible: self.eligible,
            refreshing: self.refreshing,
        }
    }

    /// Normalized progress toward the threshold, in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the last release crossed the threshold.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Whether a refresh sequence is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Whether the controller is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Configured activation threshold.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("progress", &self.progress)
            .field("eligible", &self.eligible)
            .field("refreshing", &self.refreshing)
            .field("mounted", &self.mounted)
            .finish()
    }
}

/// Runs one refresh sequence: settle delay, then the caller's callback.
///
/// A failed callback surfaces as [`RefreshError::CallbackFailed`]; the caller
/// still funnels the completion through [`Controller::finish`] so the state
/// machine can never get stuck in `refreshing`.
pub async fn run_sequence<F, Fut, E>(
    settle_delay: Duration,
    on_refresh: F,
) -> Result<(), RefreshError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: fmt::Display,
{
    tokio::time::sleep(settle_delay).await;
    on_refresh()
        .await
        .map_err(|e| RefreshError::CallbackFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(100.0)
    }

    #[test]
    fn progress_follows_drag_below_threshold() {
        let mut c = controller();
        c.on_drag(60.0);
        assert!((c.progress() - 0.6).abs() < f32::EPSILON);
        assert!(!c.is_eligible());
        assert!(!c.is_refreshing());
    }

    #[test]
    fn progress_is_clamped_to_unit_range() {
        let mut c = controller();
        c.on_drag(-50.0);
        assert_eq!(c.progress(), 0.0);
        c.on_drag(250.0);
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn release_below_threshold_never_arms() {
        let mut c = controller();
        c.on_drag(100.0); // exactly at threshold does not qualify
        assert_eq!(c.on_drag_end(), None);
        assert!(!c.is_eligible());
        assert!(!c.is_refreshing());
    }

    #[test]
    fn release_past_threshold_arms_exactly_once() {
        let mut c = controller();
        c.on_drag(110.0);
        let generation = c.on_drag_end();
        assert!(generation.is_some());
        assert!(c.is_eligible());
        assert!(c.is_refreshing());

        // Second release while refreshing has no effect.
        assert_eq!(c.on_drag_end(), None);
        assert!(c.is_refreshing());
    }

    #[test]
    fn progress_latches_once_eligible() {
        let mut c = controller();
        c.on_drag(110.0);
        let _ = c.on_drag_end();
        assert_eq!(c.progress(), 1.0);

        c.on_drag(10.0);
        assert_eq!(c.progress(), 1.0);
        c.on_drag(-300.0);
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn content_offset_stays_live_while_latched() {
        let mut c = controller();
        c.on_drag(110.0);
        let _ = c.on_drag_end();
        c.on_drag(140.0);
        let snap = c.snapshot();
        assert_eq!(snap.content_offset, 140.0);
        assert_eq!(snap.scroll_offset, 110.0);
    }

    #[test]
    fn finish_resets_all_fields() {
        let mut c = controller();
        c.on_drag(150.0);
        let generation = c.on_drag_end().expect("sequence armed");
        assert!(c.finish(generation));

        let snap = c.snapshot();
        assert_eq!(snap, Snapshot::default());
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut c = controller();
        c.on_drag(150.0);
        let generation = c.on_drag_end().expect("sequence armed");
        assert!(c.finish(generation));

        // A duplicate completion from the same sequence must not re-reset
        // or disturb a following gesture.
        c.on_drag(80.0);
        assert!(!c.finish(generation));
        assert!((c.progress() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn unmount_discards_pending_completion() {
        let mut c = controller();
        c.on_drag(150.0);
        let generation = c.on_drag_end().expect("sequence armed");

        c.on_unmount();
        let before = c.snapshot();
        assert!(!c.finish(generation));
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn unmount_is_idempotent_and_silences_input() {
        let mut c = controller();
        c.on_unmount();
        c.on_unmount();
        c.on_drag(500.0);
        assert_eq!(c.on_drag_end(), None);
        assert_eq!(c.snapshot(), Snapshot::default());
    }

    #[test]
    fn full_cycle_can_repeat() {
        let mut c = controller();
        for _ in 0..3 {
            c.on_drag(120.0);
            let generation = c.on_drag_end().expect("sequence armed");
            assert!(c.finish(generation));
            assert_eq!(c.snapshot(), Snapshot::default());
        }
    }

    #[test]
    fn separate_controllers_never_share_generations() {
        let mut a = controller();
        let mut b = controller();
        a.on_drag(150.0);
        b.on_drag(150.0);
        assert_ne!(a.on_drag_end(), b.on_drag_end());
    }

    #[test]
    fn threshold_is_clamped_to_a_positive_minimum() {
        let mut c = Controller::new(0.0);
        assert_eq!(c.threshold(), 1.0);
        c.on_drag(0.5);
        assert_eq!(c.progress(), 0.5);
    }

    #[tokio::test]
    async fn sequence_success_passes_through() {
        let result = run_sequence(Duration::ZERO, || async { Ok::<(), String>(()) }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn sequence_failure_surfaces_callback_error() {
        let result =
            run_sequence(Duration::ZERO, || async { Err("feed offline".to_string()) }).await;
        assert_eq!(
            result,
            Err(RefreshError::CallbackFailed("feed offline".into()))
        );
    }

    #[tokio::test]
    async fn sequence_waits_out_the_settle_delay() {
        let started = std::time::Instant::now();
        let settle = Duration::from_millis(50);
        let result = run_sequence(settle, || async { Ok::<(), String>(()) }).await;
        assert!(result.is_ok());
        assert!(started.elapsed() >= settle);
    }
}
