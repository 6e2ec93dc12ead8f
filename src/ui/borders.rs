// SPDX-License-Identifier: MPL-2.0
//! Border catalog screen: plain, rounded, and dashed-capsule outlines.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::canvas::{self, path, Canvas, Stroke};
use iced::widget::{column, container, text, Stack};
use iced::{
    mouse, Alignment, Border, Element, Length, Point, Radians, Rectangle, Renderer, Theme,
};
use std::f32::consts::PI;

const SWATCH_WIDTH: f32 = 160.0;
const SWATCH_HEIGHT: f32 = 52.0;
const DASH_SEGMENTS: [f32; 2] = [8.0, 8.0];

pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    column![
        swatch("Button 1", |b| Border {
            color: palette::ACCENT_500,
            width: 1.0,
            ..b
        }),
        swatch("Button 2", |b| Border {
            color: palette::ACCENT_500,
            width: 1.0,
            radius: radius::MD.into(),
            ..b
        }),
        dashed_capsule_swatch("Button 3"),
    ]
    .spacing(spacing::MD)
    .padding(spacing::XL)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn swatch<'a, Message: 'a>(
    label: &'a str,
    border: impl Fn(Border) -> Border + 'a,
) -> Element<'a, Message> {
    let border = border(Border::default());
    container(
        text(label)
            .size(typography::BODY)
            .color(palette::ACCENT_500),
    )
    .width(Length::Fixed(SWATCH_WIDTH))
    .height(Length::Fixed(SWATCH_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(move |_theme: &Theme| container::Style {
        border,
        ..container::Style::default()
    })
    .into()
}

/// Iced borders cannot be dashed, so the third swatch strokes its capsule
/// outline on a canvas behind the label.
fn dashed_capsule_swatch<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    Stack::new()
        .push(
            Canvas::new(DashedCapsule)
                .width(Length::Fixed(SWATCH_WIDTH))
                .height(Length::Fixed(SWATCH_HEIGHT)),
        )
        .push(
            container(
                text(label)
                    .size(typography::BODY)
                    .color(palette::ACCENT_500),
            )
            .width(Length::Fixed(SWATCH_WIDTH))
            .height(Length::Fixed(SWATCH_HEIGHT))
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
        )
        .into()
}

struct DashedCapsule;

impl<Message> canvas::Program<Message> for DashedCapsule {
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

        let r = bounds.height / 2.0 - 2.0;
        let left = Point::new(r + 2.0, bounds.height / 2.0);
        let right = Point::new(bounds.width - r - 2.0, bounds.height / 2.0);

        let capsule = {
            let mut builder = path::Builder::new();
            builder.move_to(Point::new(left.x, left.y - r));
            builder.line_to(Point::new(right.x, right.y - r));
            builder.arc(path::Arc {
                center: right,
                radius: r,
                start_angle: Radians(-PI / 2.0),
                end_angle: Radians(PI / 2.0),
            });
            builder.line_to(Point::new(left.x, left.y + r));
            builder.arc(path::Arc {
                center: left,
                radius: r,
                start_angle: Radians(PI / 2.0),
                end_angle: Radians(3.0 * PI / 2.0),
            });
            builder.close();
            builder.build()
        };

        frame.stroke(
            &capsule,
            Stroke {
                line_dash: canvas::LineDash {
                    segments: &DASH_SEGMENTS,
                    offset: 0,
                },
                ..Stroke::default()
                    .with_width(2.0)
                    .with_color(palette::ACCENT_500)
            },
        );

        vec![frame.into_geometry()]
    }
}
