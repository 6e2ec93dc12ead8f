// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for catalog navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Borders,
    Morph,
    Refresh,
    Shimmer,
    Rating,
    Glassmorphism,
    FloatingButton,
    Hamburger,
}

impl Screen {
    /// Effect screens in gallery order.
    pub const EFFECTS: [Screen; 8] = [
        Screen::Borders,
        Screen::Morph,
        Screen::Refresh,
        Screen::Shimmer,
        Screen::Rating,
        Screen::Glassmorphism,
        Screen::FloatingButton,
        Screen::Hamburger,
    ];

    /// Human-readable title shown in the navbar and gallery list.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Gallery => "Effects",
            Screen::Borders => "Borders",
            Screen::Morph => "Shape Morph",
            Screen::Refresh => "Pull to Refresh",
            Screen::Shimmer => "Shimmer",
            Screen::Rating => "Rating",
            Screen::Glassmorphism => "Glassmorphism",
            Screen::FloatingButton => "Floating Button",
            Screen::Hamburger => "Hamburger Icon",
        }
    }

    /// Stable identifier usable from the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Screen::Gallery => "gallery",
            Screen::Borders => "borders",
            Screen::Morph => "morph",
            Screen::Refresh => "refresh",
            Screen::Shimmer => "shimmer",
            Screen::Rating => "rating",
            Screen::Glassmorphism => "glassmorphism",
            Screen::FloatingButton => "floating-button",
            Screen::Hamburger => "hamburger",
        }
    }

    /// Parses a slug, e.g. from the `--screen` flag.
    pub fn from_slug(slug: &str) -> Option<Self> {
        [Screen::Gallery]
            .into_iter()
            .chain(Self::EFFECTS)
            .find(|screen| screen.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for screen in [Screen::Gallery].into_iter().chain(Screen::EFFECTS) {
            assert_eq!(Screen::from_slug(screen.slug()), Some(screen));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(Screen::from_slug("settings"), None);
    }

    #[test]
    fn gallery_is_not_listed_as_an_effect() {
        assert!(!Screen::EFFECTS.contains(&Screen::Gallery));
    }
}
