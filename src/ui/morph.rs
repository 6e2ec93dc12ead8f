// SPDX-License-Identifier: MPL-2.0
//! Shape morph screen: canvas shape plus the format picker.

use crate::effects::morph::{MorphShape, MorphState};
use crate::ui::design_tokens::{palette, radius, spacing, typography, with_alpha};
use iced::widget::canvas::{self, path, Canvas};
use iced::widget::{button, column, container, row, text};
use iced::{
    mouse, Alignment, Border, Element, Length, Point, Radians, Rectangle, Renderer, Theme,
};
use std::f32::consts::PI;

const CANVAS_HEIGHT: f32 = 400.0;
const SHAPE_RADIUS: f32 = 110.0;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Picked(MorphShape),
}

pub fn update(state: &mut MorphState, message: Message) {
    match message {
        Message::Picked(shape) => state.pick(shape),
    }
}

pub fn view(state: &MorphState) -> Element<'_, Message> {
    let mut picker = row![].spacing(spacing::XS);
    for shape in MorphShape::ALL {
        let selected = shape == state.picked();
        picker = picker.push(
            button(text(shape.label()).size(typography::CAPTION))
                .style(move |theme: &Theme, status| picker_style(theme, status, selected))
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::Picked(shape)),
        );
    }

    column![
        Canvas::new(ShapeCanvas {
            shape: state.current(),
            reveal: state.reveal(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(CANVAS_HEIGHT)),
        container(picker).width(Length::Fill).align_x(Alignment::Center),
    ]
    .spacing(spacing::MD)
    .padding(spacing::MD)
    .into()
}

fn picker_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let base = theme.extended_palette();
    let background = if selected {
        with_alpha(palette::ACCENT_500, 0.25)
    } else if matches!(status, button::Status::Hovered) {
        with_alpha(palette::ACCENT_500, 0.1)
    } else {
        base.background.weak.color
    };
    button::Style {
        background: Some(background.into()),
        text_color: base.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Draws the current shape, faded and slightly shrunk while the morph ramp
/// is obscuring it.
struct ShapeCanvas {
    shape: MorphShape,
    reveal: f32,
}

impl<Message> canvas::Program<Message> for ShapeCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let color = with_alpha(palette::ACCENT_500, self.reveal.max(0.02));
        let scale = 0.8 + 0.2 * self.reveal;
        let r = SHAPE_RADIUS * scale;

        match self.shape {
            MorphShape::Star => frame.fill(&star_path(center, r), color),
            MorphShape::Heart => frame.fill(&heart_path(center, r), color),
            MorphShape::Moon => {
                frame.fill(&canvas::Path::circle(center, r), color);
                // Carve the crescent with a background-colored cutout.
                let cutout = Point::new(center.x + r * 0.45, center.y - r * 0.25);
                frame.fill(
                    &canvas::Path::circle(cutout, r * 0.85),
                    theme.palette().background,
                );
            }
            MorphShape::Person => {
                let head = Point::new(center.x, center.y - r * 0.45);
                frame.fill(&canvas::Path::circle(head, r * 0.35), color);
                frame.fill(&shoulders_path(center, r), color);
            }
        }

        vec![frame.into_geometry()]
    }
}

fn star_path(center: Point, r: f32) -> canvas::Path {
    let mut builder = path::Builder::new();
    let inner = r * 0.42;
    for point in 0..10 {
        let radius = if point % 2 == 0 { r } else { inner };
        let angle = -PI / 2.0 + point as f32 * PI / 5.0;
        let vertex = Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        if point == 0 {
            builder.move_to(vertex);
        } else {
            builder.line_to(vertex);
        }
    }
    builder.close();
    builder.build()
}

fn heart_path(center: Point, r: f32) -> canvas::Path {
    let mut builder = path::Builder::new();
    let top = Point::new(center.x, center.y - r * 0.35);
    let bottom = Point::new(center.x, center.y + r * 0.9);
    builder.move_to(top);
    builder.bezier_curve_to(
        Point::new(center.x + r * 1.1, center.y - r * 1.1),
        Point::new(center.x + r * 1.2, center.y + r * 0.25),
        bottom,
    );
    builder.bezier_curve_to(
        Point::new(center.x - r * 1.2, center.y + r * 0.25),
        Point::new(center.x - r * 1.1, center.y - r * 1.1),
        top,
    );
    builder.close();
    builder.build()
}

fn shoulders_path(center: Point, r: f32) -> canvas::Path {
    let mut builder = path::Builder::new();
    let base_y = center.y + r * 0.85;
    builder.move_to(Point::new(center.x - r * 0.75, base_y));
    builder.arc(path::Arc {
        center: Point::new(center.x, base_y),
        radius: r * 0.75,
        start_angle: Radians(PI),
        end_angle: Radians(2.0 * PI),
    });
    builder.close();
    builder.build()
}
