// SPDX-License-Identifier: MPL-2.0
//! Animated hamburger icon screen.

use crate::effects::hamburger::HamburgerState;
use crate::ui::design_tokens::{sizing, with_alpha};
use iced::widget::canvas::{self, Canvas};
use iced::{event, mouse, Alignment, Element, Length, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};

const BAR_SPACING: f32 = 14.0;
const CANVAS_SIZE: f32 = 180.0;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Toggled,
}

pub fn update(state: &mut HamburgerState, message: Message) {
    match message {
        Message::Toggled => state.toggle(),
    }
}

pub fn view(state: &HamburgerState) -> Element<'_, Message> {
    iced::widget::container(
        Canvas::new(Icon { state: *state })
            .width(Length::Fixed(CANVAS_SIZE))
            .height(Length::Fixed(CANVAS_SIZE)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}

struct Icon {
    state: HamburgerState,
}

impl canvas::Program<Message> for Icon {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if cursor.position_in(bounds).is_some() {
                return (event::Status::Captured, Some(Message::Toggled));
            }
        }
        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let color = theme.palette().text;
        let center = frame.center();
        let width = sizing::HAMBURGER_BAR_WIDTH;
        let height = sizing::HAMBURGER_BAR_HEIGHT;
        let pitch = height + BAR_SPACING;
        let tilt = self.state.outer_tilt_degrees().to_radians();

        // Bars rotate and scale about their leading (left) edge, like the
        // original's `.leading` anchor.
        let leading_x = center.x - width / 2.0;

        // Top bar.
        frame.with_save(|frame| {
            frame.translate(Vector::new(leading_x, center.y - pitch));
            frame.rotate(Radians(tilt));
            frame.fill(
                &canvas::Path::rectangle(
                    Point::new(0.0, -height / 2.0),
                    Size::new(width, height),
                ),
                color,
            );
        });

        // Middle bar collapses toward the leading edge.
        let middle_scale = self.state.middle_scale();
        if middle_scale > 0.0 {
            frame.fill(
                &canvas::Path::rectangle(
                    Point::new(leading_x, center.y - (height * middle_scale) / 2.0),
                    Size::new(width * middle_scale, height * middle_scale),
                ),
                with_alpha(color, self.state.middle_opacity()),
            );
        }

        // Bottom bar.
        frame.with_save(|frame| {
            frame.translate(Vector::new(leading_x, center.y + pitch));
            frame.rotate(Radians(-tilt));
            frame.fill(
                &canvas::Path::rectangle(
                    Point::new(0.0, -height / 2.0),
                    Size::new(width, height),
                ),
                color,
            );
        });

        vec![frame.into_geometry()]
    }
}
