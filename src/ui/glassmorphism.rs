// SPDX-License-Identifier: MPL-2.0
//! Glassmorphism card screen: gradient backdrop, soft decoration slabs, and
//! a translucent card.

use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography, with_alpha};
use iced::widget::canvas::{self, Canvas};
use iced::widget::{column, container, row, text, Space, Stack};
use iced::{
    gradient, mouse, Alignment, Background, Border, Color, Element, Gradient, Length, Point,
    Radians, Rectangle, Renderer, Size, Theme, Vector,
};
use std::f32::consts::PI;

const CARD_BODY: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting \
industry. Lorem Ipsum has been the industry's standard filler text since the 1500s...";

pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    Stack::new()
        .push(backdrop())
        .push(
            Canvas::new(Decorations)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            container(card())
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Alignment::Center)
                .padding([0.0, spacing::LG]),
        )
        .into()
}

fn backdrop<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fill))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Gradient(Gradient::Linear(
                gradient::Linear::new(Radians(PI / 4.0))
                    .add_stop(0.0, with_alpha(palette::PINK_400, 0.6))
                    .add_stop(1.0, with_alpha(palette::ACCENT_500, 0.3)),
            ))),
            ..container::Style::default()
        })
        .into()
}

fn card<'a, Message: 'a>() -> Element<'a, Message> {
    let header = row![
        text("CARD TITLE").size(typography::TITLE_SM),
        Space::with_width(Length::Fill),
        text("♥").size(typography::TITLE_SM),
    ]
    .align_y(Alignment::Center);

    let actions = row![
        action_column("♡", "FAVORITES"),
        Space::with_width(Length::Fill),
        action_column("💬", "ANSWERS"),
        Space::with_width(Length::Fill),
        action_column("⇪", "SHARED"),
        Space::with_width(Length::Fill),
        action_column("▦", "STATISTICS"),
    ];

    container(
        column![
            header,
            text(CARD_BODY).size(typography::CAPTION),
            actions,
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::MD)
    .style(|_theme: &Theme| container::Style {
        text_color: Some(with_alpha(palette::BLACK, 0.8)),
        background: Some(with_alpha(palette::WHITE, opacity::GLASS_SURFACE).into()),
        border: Border {
            color: with_alpha(palette::WHITE, 0.4),
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..container::Style::default()
    })
    .into()
}

fn action_column<'a, Message: 'a>(glyph: &'a str, label: &'a str) -> Element<'a, Message> {
    column![
        text(glyph).size(typography::TITLE_MD),
        text(label).size(typography::CAPTION),
    ]
    .spacing(spacing::XXS)
    .align_x(Alignment::Center)
    .into()
}

/// Rotated translucent slabs behind the card. Each slab is layered with
/// growing size and fading alpha to fake the original's 20px blur.
struct Decorations;

struct Slab {
    center: Vector,
    size: Size,
    color: Color,
}

impl<Message> canvas::Program<Message> for Decorations {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let mid = Vector::new(bounds.width / 2.0, bounds.height / 2.0);

        let slabs = [
            Slab {
                center: mid + Vector::new(-180.0, 0.0),
                size: Size::new(250.0, 250.0),
                color: with_alpha(palette::PURPLE_400, 0.4),
            },
            Slab {
                center: mid + Vector::new(200.0, -200.0),
                size: Size::new(450.0, 450.0),
                color: with_alpha(palette::ACCENT_500, 0.4),
            },
            Slab {
                center: mid + Vector::new(200.0, 200.0),
                size: Size::new(450.0, 450.0),
                color: with_alpha(palette::PINK_400, 0.3),
            },
        ];

        for slab in slabs {
            for (grow, fade) in [(1.1, 0.3), (1.05, 0.6), (1.0, 1.0)] {
                let size = Size::new(slab.size.width * grow, slab.size.height * grow);
                frame.with_save(|frame| {
                    frame.translate(slab.center);
                    frame.rotate(Radians(PI / 4.0));
                    let top_left =
                        Point::new(-size.width / 2.0, -size.height / 2.0);
                    frame.fill(
                        &canvas::Path::rectangle(top_left, size),
                        with_alpha(slab.color, slab.color.a * fade * 0.5),
                    );
                });
            }
        }

        vec![frame.into_geometry()]
    }
}
