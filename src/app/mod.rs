// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog screens.
//!
//! The `App` struct owns one state value per effect screen and translates
//! top-level messages into screen updates or side effects like the async
//! refresh sequence. Policy decisions (window size, which screen animates,
//! when the refresh screen mounts and unmounts) live here so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::effects::floating_button::FabState;
use crate::effects::hamburger::HamburgerState;
use crate::effects::morph::MorphState;
use crate::effects::rating::RatingState;
use crate::effects::refresh::{self as refresh_effects, RefreshConfig};
use crate::effects::shimmer::ShimmerPhase;
use crate::ui::{floating_button, hamburger, morph, rating, refresh};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const APP_NAME: &str = "IcedGallery";

/// Simulated refresh work used by the pull-to-refresh demo screen.
const DEMO_REFRESH_WORK: Duration = Duration::from_millis(600);

/// Root Iced application state for the effect catalog.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    config: Config,
    refresh: refresh::State,
    morph: MorphState,
    shimmer: ShimmerPhase,
    rating: RatingState,
    fab: FabState,
    hamburger: HamburgerState,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window_settings())
        .run_with(move || App::new(flags))
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags. CLI overrides win over the config file but are not saved.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(ThemeMode::parse)
            .or_else(|| config.theme.as_deref().and_then(ThemeMode::parse))
            .unwrap_or_default();

        let screen = flags
            .screen
            .as_deref()
            .and_then(Screen::from_slug)
            .unwrap_or(Screen::Gallery);

        let refresh_config = refresh_config_from(&config);
        let shimmer = ShimmerPhase::new(config.shimmer_speed());

        let app = App {
            screen,
            theme_mode,
            config,
            refresh: refresh::State::new(refresh_config),
            morph: MorphState::new(),
            shimmer,
            rating: RatingState::default(),
            fab: FabState::new(floating_button::ACTIONS.len()),
            hamburger: HamburgerState::new(),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Gallery => APP_NAME.to_string(),
            screen => format!("{} - {APP_NAME}", screen.title()),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::events(self.screen),
            subscription::tick(self.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchScreen(target) => {
                if self.screen == Screen::Refresh && target != Screen::Refresh {
                    // Any in-flight completion must find a dead letter box.
                    self.refresh.unmount();
                }
                if target == Screen::Refresh && self.screen != Screen::Refresh {
                    self.refresh = refresh::State::new(refresh_config_from(&self.config));
                }
                self.screen = target;
                Task::none()
            }
            Message::Refresh(refresh_message) => {
                match self.refresh.handle(refresh_message) {
                    refresh::Effect::None => Task::none(),
                    refresh::Effect::StartSequence {
                        generation,
                        settle_delay,
                    } => Task::perform(
                        refresh_effects::run_sequence(settle_delay, demo_refresh),
                        move |result| {
                            Message::Refresh(refresh::Message::SequenceFinished {
                                generation,
                                result,
                            })
                        },
                    ),
                }
            }
            Message::Morph(morph_message) => {
                morph::update(&mut self.morph, morph_message);
                Task::none()
            }
            Message::Rating(rating_message) => {
                rating::update(&mut self.rating, rating_message);
                Task::none()
            }
            Message::FloatingButton(fab_message) => {
                floating_button::update(&mut self.fab, fab_message);
                Task::none()
            }
            Message::Hamburger(hamburger_message) => {
                hamburger::update(&mut self.hamburger, hamburger_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                match self.screen {
                    Screen::Refresh => {
                        let _ = self.refresh.handle(refresh::Message::Tick);
                    }
                    Screen::Morph => {
                        let _ = self.morph.tick();
                    }
                    Screen::Shimmer => self.shimmer.tick(refresh::TICK),
                    Screen::FloatingButton => {
                        let _ = self.fab.tick(refresh::TICK);
                    }
                    Screen::Hamburger => {
                        let _ = self.hamburger.tick(refresh::TICK);
                    }
                    _ => {}
                }
                Task::none()
            }
        }
    }

    /// Whether the active screen needs the animation tick.
    fn is_animating(&self) -> bool {
        match self.screen {
            Screen::Refresh => self.refresh.is_animating(),
            Screen::Morph => self.morph.is_animating(),
            Screen::Shimmer => true,
            Screen::FloatingButton => self.fab.is_animating(),
            Screen::Hamburger => self.hamburger.is_animating(),
            _ => false,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub(crate) fn screen(&self) -> Screen {
        self.screen
    }

    pub(crate) fn refresh(&self) -> &refresh::State {
        &self.refresh
    }

    pub(crate) fn morph(&self) -> &MorphState {
        &self.morph
    }

    pub(crate) fn shimmer(&self) -> &ShimmerPhase {
        &self.shimmer
    }

    pub(crate) fn rating(&self) -> &RatingState {
        &self.rating
    }

    pub(crate) fn floating_button(&self) -> &FabState {
        &self.fab
    }

    pub(crate) fn hamburger(&self) -> &HamburgerState {
        &self.hamburger
    }
}

fn refresh_config_from(config: &Config) -> RefreshConfig {
    RefreshConfig {
        threshold: config.refresh_threshold(),
        settle_delay: Duration::from_millis(config.settle_delay_ms()),
        ..RefreshConfig::default()
    }
}

async fn demo_refresh() -> Result<(), crate::error::Error> {
    tokio::time::sleep(DEMO_REFRESH_WORK).await;
    Ok(())
}
