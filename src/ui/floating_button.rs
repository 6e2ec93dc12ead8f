// SPDX-License-Identifier: MPL-2.0
//! Floating action button screen with a fan of satellite actions.

use crate::effects::floating_button::FabState;
use crate::ui::design_tokens::{palette, sizing, with_alpha};
use iced::widget::canvas::{self, Canvas};
use iced::{
    event, mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Size, Theme, Vector,
};

/// Margin between the main button and the canvas edge.
const EDGE_MARGIN: f32 = 24.0;

/// Stroke thickness of the plus/cross glyph on the main button.
const GLYPH_STROKE: f32 = 6.0;

/// A satellite action: label for the title, glyph and disc color.
pub struct SatelliteAction {
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: Color,
}

/// The three actions of the original design.
pub const ACTIONS: [SatelliteAction; 3] = [
    SatelliteAction {
        label: "Delete",
        glyph: "🗑",
        color: palette::RED_500,
    },
    SatelliteAction {
        label: "Edit",
        glyph: "✎",
        color: palette::BLUE_500,
    },
    SatelliteAction {
        label: "Share",
        glyph: "⇩",
        color: palette::GRAY_700,
    },
];

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Toggled,
    Selected(usize),
}

pub fn update(state: &mut FabState, message: Message) {
    match message {
        Message::Toggled => state.toggle(),
        Message::Selected(index) => state.select(index),
    }
}

pub fn view(state: &FabState) -> Element<'_, Message> {
    Canvas::new(Fan { state: *state })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct Fan {
    state: FabState,
}

impl Fan {
    fn main_center(bounds: Size) -> Point {
        Point::new(
            bounds.width - EDGE_MARGIN - sizing::FAB_MAIN / 2.0,
            bounds.height - EDGE_MARGIN - sizing::FAB_MAIN / 2.0,
        )
    }

    /// Satellite position along the fan arc: straight left at 0°, straight
    /// up at 90°.
    fn satellite_center(&self, main: Point, index: usize) -> Point {
        let angle = self.state.satellite_angle_degrees(index).to_radians();
        let radius = self.state.satellite_radius();
        Point::new(
            main.x - radius * angle.cos(),
            main.y - radius * angle.sin(),
        )
    }
}

impl canvas::Program<Message> for Fan {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event
        else {
            return (event::Status::Ignored, None);
        };
        let Some(position) = cursor.position_in(bounds) else {
            return (event::Status::Ignored, None);
        };

        let main = Self::main_center(bounds.size());
        if distance(position, main) <= sizing::FAB_MAIN / 2.0 {
            return (event::Status::Captured, Some(Message::Toggled));
        }

        if self.state.is_open() {
            for index in 0..self.state.satellite_count().min(ACTIONS.len()) {
                let center = self.satellite_center(main, index);
                if distance(position, center) <= sizing::FAB_SATELLITE / 2.0 {
                    return (event::Status::Captured, Some(Message::Selected(index)));
                }
            }
        }

        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let main = Self::main_center(bounds.size());
        let opacity = self.state.satellite_opacity();

        // Satellites first, so the main button sits on top of the fan.
        if opacity > 0.0 {
            for (index, action) in ACTIONS
                .iter()
                .enumerate()
                .take(self.state.satellite_count())
            {
                let center = self.satellite_center(main, index);
                frame.fill(
                    &canvas::Path::circle(center, sizing::FAB_SATELLITE / 2.0),
                    with_alpha(action.color, opacity),
                );
                frame.fill_text(canvas::Text {
                    content: action.glyph.to_string(),
                    position: center,
                    color: with_alpha(palette::WHITE, opacity),
                    size: iced::Pixels(26.0),
                    horizontal_alignment: iced::alignment::Horizontal::Center,
                    vertical_alignment: iced::alignment::Vertical::Center,
                    ..canvas::Text::default()
                });
            }
        }

        // Main button: white disc with a plus that morphs into a cross.
        let scale = self.state.main_scale();
        let rotation = self.state.main_rotation_degrees().to_radians();
        let expansion = opacity; // same curve drives the glyph morph

        frame.with_save(|frame| {
            frame.translate(Vector::new(main.x, main.y));
            frame.rotate(Radians(rotation));

            let disc_radius = sizing::FAB_MAIN / 2.0 * scale;
            frame.fill(&canvas::Path::circle(Point::ORIGIN, disc_radius), palette::WHITE);

            let arm = GLYPH_STROKE + 24.0 * expansion;

            // Left arm grows toward the center as the fan opens.
            frame.fill(
                &canvas::Path::rectangle(
                    Point::new(-arm / 2.0 - 10.0 * (1.0 - expansion), -GLYPH_STROKE / 2.0),
                    Size::new(arm, GLYPH_STROKE),
                ),
                palette::BLACK,
            );

            // Vertical arm.
            frame.fill(
                &canvas::Path::rectangle(
                    Point::new(-GLYPH_STROKE / 2.0, -arm / 2.0),
                    Size::new(GLYPH_STROKE, arm),
                ),
                palette::BLACK,
            );

            // Right dot fades out while the arms merge.
            if expansion < 1.0 {
                frame.fill(
                    &canvas::Path::rectangle(
                        Point::new(
                            10.0 * (1.0 - expansion) - GLYPH_STROKE / 2.0,
                            -GLYPH_STROKE / 2.0,
                        ),
                        Size::new(GLYPH_STROKE, GLYPH_STROKE),
                    ),
                    with_alpha(palette::BLACK, 1.0 - expansion),
                );
            }
        });

        vec![frame.into_geometry()]
    }
}

fn distance(a: Point, b: Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_match_the_satellite_count() {
        let state = FabState::new(ACTIONS.len());
        assert_eq!(state.satellite_count(), ACTIONS.len());
    }

    #[test]
    fn selection_message_records_the_action() {
        let mut state = FabState::new(ACTIONS.len());
        update(&mut state, Message::Toggled);
        update(&mut state, Message::Selected(0));
        assert_eq!(state.selected(), Some(0));
        assert_eq!(ACTIONS[0].label, "Delete");
    }
}
