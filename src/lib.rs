// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a catalog of isolated UI visual effects built with the
//! Iced GUI framework.
//!
//! Each effect is a self-contained screen backed by a small, tested state
//! model in [`effects`]; the centerpiece is the pull-to-refresh controller,
//! a pure state machine decoupled from rendering.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod effects;
pub mod error;
pub mod ui;
