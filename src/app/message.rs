// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::host;
use crate::ui::selector;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Selector(selector::Message),
    Host(host::Event),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IMAGE_SELECTOR_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Forces the focus-reactive border on, regardless of settings.
    pub focus_border: bool,
    /// Overrides the configured thumbnail size for local files.
    pub thumbnail_size: Option<u32>,
    /// Local image files to show instead of listening to a host.
    pub demo_files: Vec<PathBuf>,
}
