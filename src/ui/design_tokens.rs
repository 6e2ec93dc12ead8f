// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralized design tokens shared by every effect screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent (orange scale, the catalog's signature color)
    pub const ACCENT_300: Color = Color::from_rgb(1.0, 0.72, 0.42);
    pub const ACCENT_500: Color = Color::from_rgb(1.0, 0.58, 0.0);
    pub const ACCENT_700: Color = Color::from_rgb(0.85, 0.45, 0.0);

    // Decorative colors used by the glassmorphism and refresh screens
    pub const PINK_400: Color = Color::from_rgb(0.96, 0.45, 0.62);
    pub const PURPLE_400: Color = Color::from_rgb(0.62, 0.4, 0.85);
    pub const RED_500: Color = Color::from_rgb(0.88, 0.25, 0.22);
    pub const YELLOW_500: Color = Color::from_rgb(0.98, 0.8, 0.18);
    pub const BLUE_500: Color = Color::from_rgb(0.25, 0.5, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Translucent surface used by the glassmorphism card.
    pub const GLASS_SURFACE: f32 = 0.55;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Diameter of the pull-refresh indicator disc.
    pub const REFRESH_INDICATOR: f32 = 38.0;

    /// Diameter of the main floating action button.
    pub const FAB_MAIN: f32 = 80.0;

    /// Diameter of a floating action button satellite.
    pub const FAB_SATELLITE: f32 = 60.0;

    /// Width of a hamburger icon bar.
    pub const HAMBURGER_BAR_WIDTH: f32 = 64.0;

    /// Height of a hamburger icon bar.
    pub const HAMBURGER_BAR_HEIGHT: f32 = 10.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - navbar, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Body text
    pub const BODY: f32 = 16.0;

    /// Caption - secondary, supporting text
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 20.0;
    /// Large enough to render any reasonably sized box as a capsule.
    pub const CAPSULE: f32 = 500.0;
}

/// Applies an opacity to a palette color.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
