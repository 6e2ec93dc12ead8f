// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native mouse events to the pull-to-refresh screen (the drag gesture
//! is window-level, not tied to a single widget) and runs the animation tick
//! only while the active screen actually animates.

use super::{Message, Screen};
use crate::ui::refresh;
use iced::{event, time, Subscription};

/// Raw mouse events feed the refresh screen's drag source. Events a widget
/// already captured (the navbar back button) are not forwarded, so clicking
/// through the chrome never starts a drag.
pub fn events(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Refresh => event::listen_with(|event, status, _window| {
            if !matches!(event, event::Event::Mouse(_)) {
                return None;
            }
            match status {
                event::Status::Ignored => {
                    Some(Message::Refresh(refresh::Message::RawEvent(event)))
                }
                event::Status::Captured => None,
            }
        }),
        _ => Subscription::none(),
    }
}

/// Animation tick, active only when something on screen is moving.
pub fn tick(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(refresh::TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
