// SPDX-License-Identifier: MPL-2.0
//! Effect state machines, separated from rendering.
//!
//! Each module owns the animation/gesture state of one catalog entry and
//! exposes read-only accessors for the presentation layer. The pull-refresh
//! controller in [`refresh`] is the only component with multi-step state and
//! an async obligation; the rest are small timer- or toggle-driven models.

pub mod anim;
pub mod floating_button;
pub mod hamburger;
pub mod morph;
pub mod rating;
pub mod refresh;
pub mod shimmer;

pub use anim::Animated;
pub use refresh::{Controller as RefreshController, RefreshConfig};
