// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar shared by the effect screens.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// Renders the navbar. A `Some(on_back)` shows the back control; the gallery
/// root passes `None`.
pub fn view<'a, Message: Clone + 'a>(
    title: String,
    on_back: Option<Message>,
) -> Element<'a, Message> {
    let mut bar = row![].spacing(spacing::SM).align_y(Alignment::Center);

    if let Some(message) = on_back {
        bar = bar.push(
            button(text("‹ Back").size(typography::BODY))
                .style(button::text)
                .on_press(message),
        );
    }

    bar = bar
        .push(text(title).size(typography::TITLE_MD))
        .push(Space::with_width(Length::Fill));

    container(bar)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}
