// SPDX-License-Identifier: MPL-2.0
//! Canvas arc spinner used while a refresh sequence is in flight.

use iced::widget::canvas::{self, path, Canvas, Stroke};
use iced::{mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Sweep of the animated arc.
const ARC_SWEEP: f32 = 1.5 * PI;

/// Ring stroke width.
const STROKE_WIDTH: f32 = 3.0;

/// Rotating arc spinner.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    diameter: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at `rotation` radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32, diameter: f32) -> Self {
        Self {
            rotation: rotation % TAU,
            color,
            diameter,
        }
    }

    /// Wraps the spinner in a fixed-size canvas element.
    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let diameter = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        // Faint full ring behind the moving arc.
        frame.stroke(
            &canvas::Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
        );

        let start = self.rotation - PI / 2.0;
        let arc = {
            let mut builder = path::Builder::new();
            builder.move_to(Point::new(
                center.x + radius * start.cos(),
                center.y + radius * start.sin(),
            ));
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + ARC_SWEEP),
            });
            builder.build()
        };
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color),
        );

        vec![frame.into_geometry()]
    }
}
