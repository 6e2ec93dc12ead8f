// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{floating_button, hamburger, morph, rating, refresh};
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Refresh(refresh::Message),
    Morph(morph::Message),
    Rating(rating::Message),
    FloatingButton(floating_button::Message),
    Hamburger(hamburger::Message),
    /// Periodic tick driving the active screen's animations.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme mode override (`light`, `dark`, `system`).
    pub theme: Option<String>,
    /// Optional start screen by slug (e.g. `refresh`).
    pub screen: Option<String>,
}
