// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for the tunables exposed through `settings.toml`.

// ==========================================================================
// Pull-Refresh Defaults
// ==========================================================================

/// Drag distance (logical pixels) a gesture must exceed to arm a refresh.
pub const DEFAULT_REFRESH_THRESHOLD: f32 = 100.0;

/// Minimum allowed refresh threshold.
pub const MIN_REFRESH_THRESHOLD: f32 = 20.0;

/// Maximum allowed refresh threshold.
pub const MAX_REFRESH_THRESHOLD: f32 = 400.0;

/// Pause before the refresh callback runs, so the indicator is visible.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Maximum allowed settle delay.
pub const MAX_SETTLE_DELAY_MS: u64 = 5000;

/// Duration of the eased collapse back to rest after a refresh completes.
pub const DEFAULT_RESET_TRANSITION_MS: u64 = 250;

// ==========================================================================
// Shimmer Defaults
// ==========================================================================

/// Seconds per sweep of the shimmer highlight band.
pub const DEFAULT_SHIMMER_SPEED_SECS: f32 = 2.0;

/// Minimum allowed shimmer sweep duration.
pub const MIN_SHIMMER_SPEED_SECS: f32 = 0.5;

/// Maximum allowed shimmer sweep duration.
pub const MAX_SHIMMER_SPEED_SECS: f32 = 10.0;
