// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.theme = Some("dark".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme mode: "light", "dark" or "system".
    pub theme: Option<String>,
    /// Drag distance that arms the pull-refresh gesture.
    #[serde(default)]
    pub refresh_threshold: Option<f32>,
    /// Pause before the refresh callback runs, in milliseconds.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,
    /// Seconds per sweep of the shimmer highlight band.
    #[serde(default)]
    pub shimmer_speed: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            refresh_threshold: Some(DEFAULT_REFRESH_THRESHOLD),
            settle_delay_ms: Some(DEFAULT_SETTLE_DELAY_MS),
            shimmer_speed: Some(DEFAULT_SHIMMER_SPEED_SECS),
        }
    }
}

impl Config {
    /// Refresh threshold clamped to its valid range.
    #[must_use]
    pub fn refresh_threshold(&self) -> f32 {
        self.refresh_threshold
            .unwrap_or(DEFAULT_REFRESH_THRESHOLD)
            .clamp(MIN_REFRESH_THRESHOLD, MAX_REFRESH_THRESHOLD)
    }

    /// Settle delay clamped to its valid range.
    #[must_use]
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
            .unwrap_or(DEFAULT_SETTLE_DELAY_MS)
            .min(MAX_SETTLE_DELAY_MS)
    }

    /// Shimmer sweep duration clamped to its valid range.
    #[must_use]
    pub fn shimmer_speed(&self) -> f32 {
        self.shimmer_speed
            .unwrap_or(DEFAULT_SHIMMER_SPEED_SECS)
            .clamp(MIN_SHIMMER_SPEED_SECS, MAX_SHIMMER_SPEED_SECS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
