// SPDX-License-Identifier: MPL-2.0
//! Screen components and shared presentation helpers.

pub mod borders;
pub mod design_tokens;
pub mod floating_button;
pub mod gallery;
pub mod glassmorphism;
pub mod hamburger;
pub mod morph;
pub mod navbar;
pub mod rating;
pub mod refresh;
pub mod shimmer;
pub mod theming;
pub mod widgets;
