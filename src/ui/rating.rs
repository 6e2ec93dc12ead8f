// SPDX-License-Identifier: MPL-2.0
//! Star rating screen.

use crate::effects::rating::{RatingState, STAR_COUNT};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    StarPressed(u8),
}

pub fn update(state: &mut RatingState, message: Message) {
    match message {
        Message::StarPressed(index) => state.set(index),
    }
}

pub fn view(state: &RatingState) -> Element<'_, Message> {
    let mut stars = row![].spacing(spacing::XS);
    for index in 1..=STAR_COUNT {
        let glyph = if state.is_filled(index) { "★" } else { "☆" };
        stars = stars.push(
            button(
                text(glyph)
                    .size(typography::TITLE_LG)
                    .color(palette::ACCENT_500),
            )
            .style(button::text)
            .on_press(Message::StarPressed(index)),
        );
    }

    let caption = match state.rating() {
        Some(rating) => format!("{rating} of {STAR_COUNT}"),
        None => "Tap a star".to_string(),
    };

    container(
        column![
            stars,
            text(caption)
                .size(typography::CAPTION)
                .color(palette::GRAY_400)
        ]
        .spacing(spacing::MD)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_press_updates_state() {
        let mut state = RatingState::default();
        update(&mut state, Message::StarPressed(4));
        assert_eq!(state.rating(), Some(4));
    }
}
