// SPDX-License-Identifier: MPL-2.0
//! Shimmer loading-placeholder screen.
//!
//! Three placeholder groups, each swept by a slanted highlight band whose
//! position comes from the shared [`ShimmerPhase`].

use crate::effects::shimmer::ShimmerPhase;
use crate::ui::design_tokens::{palette, with_alpha};
use iced::widget::canvas::{self, Canvas};
use iced::{mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};

const TILE_SIZE: f32 = 80.0;
const AVATAR_RADIUS: f32 = 27.5;
const BAR_HEIGHT: f32 = 12.0;
const BAND_WIDTH: f32 = 46.0;
const BAND_TILT: f32 = -0.35; // radians, the original's slanted sweep

pub fn view<'a, Message: 'a>(phase: &ShimmerPhase) -> Element<'a, Message> {
    Canvas::new(Placeholders { phase: *phase })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct Placeholders {
    phase: ShimmerPhase,
}

impl Placeholders {
    /// Sweeps the highlight across a group that spans `width`.
    fn band_x(&self, width: f32) -> f32 {
        // Start fully off the left edge, end fully off the right.
        -BAND_WIDTH + (width + 2.0 * BAND_WIDTH) * self.phase.normalized()
    }

    fn band(&self, frame: &mut canvas::Frame, region: Rectangle, tint: Color) {
        let x = region.x + self.band_x(region.width);
        let center = Point::new(x + BAND_WIDTH / 2.0, region.center_y());

        // Layered strips stand in for the original's gaussian-blurred band.
        for (scale, alpha) in [(1.6, 0.12), (1.2, 0.2), (0.7, 0.35)] {
            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(Radians(BAND_TILT));
                let width = BAND_WIDTH * scale;
                frame.fill(
                    &canvas::Path::rectangle(
                        Point::new(-width / 2.0, -region.height / 2.0),
                        Size::new(width, region.height),
                    ),
                    with_alpha(tint, alpha),
                );
            });
        }
    }

    fn avatar_row(
        &self,
        frame: &mut canvas::Frame,
        region: Rectangle,
        base: Color,
        tint: Color,
    ) {
        let center = Point::new(region.x + AVATAR_RADIUS, region.center_y());
        frame.fill(&canvas::Path::circle(center, AVATAR_RADIUS), base);

        let bar_x = region.x + AVATAR_RADIUS * 2.0 + 16.0;
        let long = region.width - bar_x - 16.0;
        for (offset, width) in [(-BAR_HEIGHT, long), (BAR_HEIGHT, long - 40.0)] {
            frame.fill(
                &canvas::Path::rectangle(
                    Point::new(bar_x, region.center_y() + offset - BAR_HEIGHT / 2.0),
                    Size::new(width, BAR_HEIGHT),
                ),
                base,
            );
        }

        self.band(frame, region, tint);
    }
}

impl<Message> canvas::Program<Message> for Placeholders {
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
        let width = bounds.width;

        // Group 1: accent tile with a bright sweep.
        let tile_region = Rectangle {
            x: (width - TILE_SIZE) / 2.0,
            y: 40.0,
            width: TILE_SIZE,
            height: TILE_SIZE,
        };
        frame.fill(
            &canvas::Path::rectangle(
                Point::new(tile_region.x, tile_region.y),
                tile_region.size(),
            ),
            palette::ACCENT_500,
        );
        frame.fill_text(canvas::Text {
            content: "★".to_string(),
            position: Point::new(tile_region.center_x(), tile_region.center_y()),
            color: with_alpha(palette::WHITE, 0.4),
            size: iced::Pixels(40.0),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Center,
            ..canvas::Text::default()
        });
        self.band(&mut frame, tile_region, palette::WHITE);

        // Divider.
        frame.fill(
            &canvas::Path::rectangle(
                Point::new(20.0, 180.0),
                Size::new(width - 40.0, 1.0),
            ),
            with_alpha(palette::GRAY_400, 0.4),
        );

        // Group 2: gray placeholders with a white sweep.
        self.avatar_row(
            &mut frame,
            Rectangle {
                x: 20.0,
                y: 220.0,
                width: width - 40.0,
                height: AVATAR_RADIUS * 2.0,
            },
            with_alpha(palette::GRAY_400, 0.4),
            palette::WHITE,
        );

        // Group 3: gray placeholders with an accent-tinted sweep.
        self.avatar_row(
            &mut frame,
            Rectangle {
                x: 20.0,
                y: 320.0,
                width: width - 40.0,
                height: AVATAR_RADIUS * 2.0,
            },
            with_alpha(palette::GRAY_400, 0.4),
            with_alpha(palette::ACCENT_500, 0.8),
        );

        vec![frame.into_geometry()]
    }
}
