// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: navbar plus the active screen's content.

use super::{App, Message, Screen};
use crate::ui::{
    borders, floating_button, gallery, glassmorphism, hamburger, morph, navbar, rating, refresh,
    shimmer,
};
use iced::widget::column;
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let screen = app.screen();
    let content: Element<'_, Message> = match screen {
        Screen::Gallery => gallery::view(
            Screen::EFFECTS
                .into_iter()
                .map(|effect| (effect.title().to_string(), Message::SwitchScreen(effect)))
                .collect(),
        ),
        Screen::Borders => borders::view(),
        Screen::Morph => morph::view(app.morph()).map(Message::Morph),
        Screen::Refresh => app.refresh().view().map(Message::Refresh),
        Screen::Shimmer => shimmer::view(app.shimmer()),
        Screen::Rating => rating::view(app.rating()).map(Message::Rating),
        Screen::Glassmorphism => glassmorphism::view(),
        Screen::FloatingButton => {
            floating_button::view(app.floating_button()).map(Message::FloatingButton)
        }
        Screen::Hamburger => hamburger::view(app.hamburger()).map(Message::Hamburger),
    };

    let on_back = (screen != Screen::Gallery).then_some(Message::SwitchScreen(Screen::Gallery));

    column![navbar::view(screen_title(app, screen), on_back), content]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Screen title, extended with the chosen action on the floating button
/// screen so selections are visible without extra chrome.
fn screen_title(app: &App, screen: Screen) -> String {
    if screen == Screen::FloatingButton {
        if let Some(index) = app.floating_button().selected() {
            if let Some(action) = floating_button::ACTIONS.get(index) {
                return format!("{} ({})", screen.title(), action.label);
            }
        }
    }
    screen.title().to_string()
}
