// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection with system detection.

use iced::Theme;

/// User-selectable theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop environment's preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Parses the `settings.toml` / `--theme` spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Spelling persisted to the config file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Next mode in the light → dark → system cycle.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Resolves the mode to a concrete Iced theme.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        }
    }

    /// Whether the resolved theme has a dark background.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}
