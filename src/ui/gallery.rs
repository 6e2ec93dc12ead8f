// SPDX-License-Identifier: MPL-2.0
//! Gallery list: the navigable catalog of effect screens.

use crate::ui::design_tokens::{palette, radius, spacing, typography, with_alpha};
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Border, Element, Length, Theme};

/// Renders the catalog list from `(label, message)` rows.
pub fn view<'a, Message: Clone + 'a>(
    entries: Vec<(String, Message)>,
) -> Element<'a, Message> {
    let mut list = column![].spacing(spacing::XS).padding(spacing::MD);

    for (label, message) in entries {
        list = list.push(
            button(
                row![
                    text(label).size(typography::BODY),
                    Space::with_width(Length::Fill),
                    text("›").size(typography::TITLE_SM),
                ]
                .align_y(Alignment::Center),
            )
            .style(entry_style)
            .width(Length::Fill)
            .padding([spacing::SM, spacing::MD])
            .on_press(message),
        );
    }

    scrollable(list).width(Length::Fill).height(Length::Fill).into()
}

fn entry_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            with_alpha(palette::ACCENT_500, 0.15)
        }
        _ => base.background.weak.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: base.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
