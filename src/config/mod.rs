// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode used when the host sends no theme
//! - `[display]` - Grid layout, thumbnail size and the focus border toggle
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `IMAGE_SELECTOR_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_selector::config;
//!
//! let (mut config, _warning) = config::load();
//! config.display.focus_border = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Theme mode used until (or unless) the host supplies a theme.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Grid display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Draw a primary-colour border while a figure has focus.
    #[serde(default = "default_focus_border", skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<bool>,

    /// Longest thumbnail side when inlining local files.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,

    /// Width of one figure in the grid.
    #[serde(
        default = "default_figure_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub figure_width: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            focus_border: default_focus_border(),
            thumbnail_size: default_thumbnail_size(),
            figure_width: default_figure_width(),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn focus_border(&self) -> bool {
        self.focus_border.unwrap_or(DEFAULT_FOCUS_BORDER)
    }

    /// Thumbnail size clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Figure width clamped to the supported range.
    #[must_use]
    pub fn figure_width(&self) -> f32 {
        self.figure_width
            .unwrap_or(DEFAULT_FIGURE_WIDTH)
            .clamp(MIN_FIGURE_WIDTH, MAX_FIGURE_WIDTH)
    }
}

/// Widget configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_focus_border() -> Option<bool> {
    Some(DEFAULT_FOCUS_BORDER)
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_figure_width() -> Option<f32> {
    Some(DEFAULT_FIGURE_WIDTH)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
