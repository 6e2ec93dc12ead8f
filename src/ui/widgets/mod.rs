// SPDX-License-Identifier: MPL-2.0
//! Reusable canvas widgets.

pub mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
