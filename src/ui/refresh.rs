// SPDX-License-Identifier: MPL-2.0
//! Pull-to-refresh screen component.
//!
//! Wires the window-level mouse events the app subscription routes here into
//! the [`Controller`] state machine, and renders the drag indicator (arrow
//! while armed, spinner while refreshing) above demo content. The controller
//! itself stays presentation-free; everything visual lives here.

use crate::effects::anim::Animated;
use crate::effects::refresh::{Controller, RefreshConfig};
use crate::error::RefreshError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography, with_alpha};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::canvas::{self, Canvas, Stroke};
use iced::widget::{column, container, text, Space, Stack};
use iced::{
    mouse, Alignment, Element, Length, Point, Radians, Rectangle, Renderer, Theme, Vector,
};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Spinner advance per animation tick, in radians.
const SPINNER_SPEED: f32 = 0.12;

/// Animation tick the subscription drives us with.
pub const TICK: Duration = Duration::from_millis(16);

/// Screen state: the controller plus the synthetic drag source and the
/// indicator's presentation state.
pub struct State {
    controller: Controller,
    config: RefreshConfig,
    dragging: bool,
    press_anchor: Option<f32>,
    cursor_y: f32,
    spinner_rotation: f32,
    /// Eased height of the gap the content is pushed down by.
    top_inset: Animated,
    last_error: Option<String>,
    completed_refreshes: u32,
}

/// Messages routed from the app subscription and the async sequence.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw window event; the subscription filters to mouse events.
    RawEvent(iced::Event),
    /// Animation tick while the indicator is live.
    Tick,
    /// Completion of the refresh sequence started at `generation`.
    SequenceFinished {
        generation: u64,
        result: Result<(), RefreshError>,
    },
}

/// Effects the orchestrator turns into tasks.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Start the refresh sequence for the armed gesture.
    StartSequence {
        generation: u64,
        settle_delay: Duration,
    },
}

impl State {
    /// Creates a freshly mounted screen.
    #[must_use]
    pub fn new(config: RefreshConfig) -> Self {
        let reset_rate = transition_rate(config.reset_transition);
        Self {
            controller: Controller::new(config.threshold),
            config,
            dragging: false,
            press_anchor: None,
            cursor_y: 0.0,
            spinner_rotation: 0.0,
            top_inset: Animated::new(0.0).with_rate(reset_rate),
            last_error: None,
            completed_refreshes: 0,
        }
    }

    /// Releases the drag source and discards any in-flight completion.
    pub fn unmount(&mut self) {
        self.dragging = false;
        self.press_anchor = None;
        self.controller.on_unmount();
    }

    /// Whether the subscription should keep ticking this screen.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_refreshing() || !self.top_inset.is_settled()
    }

    /// Number of completed refresh cycles, shown in the demo content.
    #[must_use]
    pub fn completed_refreshes(&self) -> u32 {
        self.completed_refreshes
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::RawEvent(event) => self.handle_event(&event),
            Message::Tick => {
                if self.controller.is_refreshing() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > TAU {
                        self.spinner_rotation -= TAU;
                    }
                }
                self.top_inset.tick(TICK);
                Effect::None
            }
            Message::SequenceFinished { generation, result } => {
                // A discarded completion (stale generation or unmounted)
                // must not touch the screen either.
                if self.controller.finish(generation) {
                    match result {
                        Ok(()) => {
                            self.last_error = None;
                            self.completed_refreshes += 1;
                        }
                        Err(err) => self.last_error = Some(err.to_string()),
                    }
                    self.spinner_rotation = 0.0;
                    self.top_inset.set_target(0.0);
                }
                Effect::None
            }
        }
    }

    fn handle_event(&mut self, event: &iced::Event) -> Effect {
        let iced::Event::Mouse(mouse_event) = event else {
            return Effect::None;
        };
        match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                self.dragging = true;
                self.press_anchor = Some(self.cursor_y);
                Effect::None
            }
            mouse::Event::CursorMoved { position } => {
                self.cursor_y = position.y;
                if self.dragging {
                    if let Some(anchor) = self.press_anchor {
                        let offset = position.y - anchor;
                        self.controller.on_drag(offset);
                        if !self.controller.is_eligible() {
                            // Track the finger directly while the gesture is live.
                            self.top_inset
                                .jump_to(self.config.threshold * self.controller.progress());
                        }
                    }
                }
                Effect::None
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                if !self.dragging {
                    return Effect::None;
                }
                self.dragging = false;
                self.press_anchor = None;
                if let Some(generation) = self.controller.on_drag_end() {
                    self.spinner_rotation = 0.0;
                    self.top_inset.set_target(self.config.threshold);
                    Effect::StartSequence {
                        generation,
                        settle_delay: self.config.settle_delay,
                    }
                } else {
                    // Not eligible: the source settles back to rest and the
                    // content eases up again.
                    self.controller.on_drag(0.0);
                    self.top_inset.set_target(0.0);
                    Effect::None
                }
            }
            _ => Effect::None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let snapshot = self.controller.snapshot();

        let mut content = column![
            Space::with_height(Length::Fixed(self.top_inset.value().max(0.0))),
            demo_block(palette::RED_500),
            demo_block(palette::YELLOW_500),
            text(format!("Refreshed {} times", self.completed_refreshes))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        ]
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .align_x(Alignment::Center);

        if let Some(error) = &self.last_error {
            content = content.push(
                text(error.clone())
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        let indicator: Element<'_, Message> = if snapshot.refreshing {
            AnimatedSpinner::new(
                palette::WHITE,
                self.spinner_rotation,
                sizing::REFRESH_INDICATOR,
            )
            .into_element()
        } else {
            Canvas::new(ArrowIndicator {
                progress: snapshot.progress,
            })
            .width(Length::Fixed(sizing::REFRESH_INDICATOR))
            .height(Length::Fixed(sizing::REFRESH_INDICATOR))
            .into()
        };

        let indicator_inset = (self.top_inset.value()
            - sizing::REFRESH_INDICATOR
            - spacing::XS)
            .max(spacing::XXS);

        Stack::new()
            .push(content)
            .push(
                container(
                    container(indicator)
                        .padding(spacing::XXS)
                        .style(move |_theme: &Theme| container::Style {
                            background: Some(
                                with_alpha(palette::GRAY_900, snapshot.progress.max(0.05))
                                    .into(),
                            ),
                            border: iced::Border {
                                radius: (sizing::REFRESH_INDICATOR).into(),
                                ..iced::Border::default()
                            },
                            ..container::Style::default()
                        }),
                )
                .width(Length::Fill)
                .align_x(Alignment::Center)
                .padding([indicator_inset, 0.0]),
            )
            .into()
    }
}

fn demo_block<'a>(color: iced::Color) -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fixed(200.0)))
        .style(move |_theme: &Theme| container::Style {
            background: Some(color.into()),
            border: iced::Border {
                radius: crate::ui::design_tokens::radius::MD.into(),
                ..iced::Border::default()
            },
            ..container::Style::default()
        })
        .width(Length::Fill)
        .into()
}

/// Rate that makes an [`Animated`] settle in roughly `transition`.
fn transition_rate(transition: Duration) -> f32 {
    // Exponential approach covers ~99.9% of the distance after 7 time
    // constants; pick the rate so that happens within the transition.
    7.0 / transition.as_secs_f32().max(0.05)
}

/// Downward arrow that rotates half a turn as the drag approaches the
/// threshold, fading in with progress.
struct ArrowIndicator {
    progress: f32,
}

impl<Message> canvas::Program<Message> for ArrowIndicator {
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
        let color = with_alpha(palette::WHITE, self.progress.max(0.0));
        let stroke = Stroke::default().with_width(2.5).with_color(color);
        let len = bounds.height * 0.28;

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(Radians(self.progress * PI));

            let shaft = canvas::Path::line(Point::new(0.0, -len), Point::new(0.0, len));
            frame.stroke(&shaft, stroke.clone());

            let head_left =
                canvas::Path::line(Point::new(-len * 0.6, len * 0.4), Point::new(0.0, len));
            let head_right =
                canvas::Path::line(Point::new(len * 0.6, len * 0.4), Point::new(0.0, len));
            frame.stroke(&head_left, stroke.clone());
            frame.stroke(&head_right, stroke);
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(RefreshConfig {
            threshold: 100.0,
            settle_delay: Duration::from_millis(10),
            reset_transition: Duration::from_millis(100),
        })
    }

    fn press(state: &mut State, y: f32) {
        let _ = state.handle(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::CursorMoved {
                position: Point::new(0.0, y),
            },
        )));
        let _ = state.handle(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::ButtonPressed(mouse::Button::Left),
        )));
    }

    fn drag_to(state: &mut State, y: f32) {
        let _ = state.handle(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::CursorMoved {
                position: Point::new(0.0, y),
            },
        )));
    }

    fn release(state: &mut State) -> Effect {
        state.handle(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::ButtonReleased(mouse::Button::Left),
        )))
    }

    #[test]
    fn short_drag_releases_without_a_sequence() {
        let mut s = state();
        press(&mut s, 10.0);
        drag_to(&mut s, 70.0);
        assert!(matches!(release(&mut s), Effect::None));
        assert!(!s.controller.is_refreshing());
        // The synthetic source settles the progress back to rest.
        assert_eq!(s.controller.progress(), 0.0);
    }

    #[test]
    fn long_drag_starts_exactly_one_sequence() {
        let mut s = state();
        press(&mut s, 10.0);
        drag_to(&mut s, 130.0);
        let effect = release(&mut s);
        assert!(matches!(effect, Effect::StartSequence { .. }));
        assert!(s.controller.is_refreshing());

        // A stray release while refreshing does nothing.
        press(&mut s, 10.0);
        assert!(matches!(release(&mut s), Effect::None));
    }

    #[test]
    fn completion_resets_and_counts() {
        let mut s = state();
        press(&mut s, 0.0);
        drag_to(&mut s, 150.0);
        let Effect::StartSequence { generation, .. } = release(&mut s) else {
            panic!("expected a sequence start");
        };
        let _ = s.handle(Message::SequenceFinished {
            generation,
            result: Ok(()),
        });
        assert!(!s.controller.is_refreshing());
        assert_eq!(s.completed_refreshes(), 1);
        assert!(s.last_error.is_none());
    }

    #[test]
    fn failed_completion_still_resets_but_keeps_the_error() {
        let mut s = state();
        press(&mut s, 0.0);
        drag_to(&mut s, 150.0);
        let Effect::StartSequence { generation, .. } = release(&mut s) else {
            panic!("expected a sequence start");
        };
        let _ = s.handle(Message::SequenceFinished {
            generation,
            result: Err(RefreshError::CallbackFailed("offline".into())),
        });
        assert!(!s.controller.is_refreshing());
        assert_eq!(s.completed_refreshes(), 0);
        assert!(s.last_error.as_deref().is_some_and(|e| e.contains("offline")));
    }

    #[test]
    fn completion_after_unmount_changes_nothing() {
        let mut s = state();
        press(&mut s, 0.0);
        drag_to(&mut s, 150.0);
        let Effect::StartSequence { generation, .. } = release(&mut s) else {
            panic!("expected a sequence start");
        };
        s.unmount();
        let _ = s.handle(Message::SequenceFinished {
            generation,
            result: Ok(()),
        });
        assert_eq!(s.completed_refreshes(), 0);
        assert!(s.controller.snapshot().refreshing, "state frozen, not reset");
        assert!(!s.controller.is_mounted());
    }

    #[test]
    fn tick_spins_only_while_refreshing() {
        let mut s = state();
        let _ = s.handle(Message::Tick);
        assert_eq!(s.spinner_rotation, 0.0);

        press(&mut s, 0.0);
        drag_to(&mut s, 150.0);
        let _ = release(&mut s);
        let _ = s.handle(Message::Tick);
        assert!(s.spinner_rotation > 0.0);
    }
}
