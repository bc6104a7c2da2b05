// SPDX-License-Identifier: MPL-2.0
//! Read-only user preferences from a `settings.toml` file.
//!
//! The app never writes this file; users edit it by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[window]` - Initial window size
//! - `[controller]` - Camera mode at startup and camera-close behavior
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `REC_CONTROLLER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use rec_controller::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! let settle = config.controller.settle_on_camera_close.unwrap_or(false);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Window settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: Option<f32>,

    #[serde(default = "default_window_height")]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowConfig {
    /// Window size with missing values defaulted and minimums enforced.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (
            self.width
                .unwrap_or(DEFAULT_WINDOW_WIDTH)
                .max(MIN_WINDOW_WIDTH),
            self.height
                .unwrap_or(DEFAULT_WINDOW_HEIGHT)
                .max(MIN_WINDOW_HEIGHT),
        )
    }
}

/// Floating controller settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ControllerConfig {
    /// Open the camera preview at startup.
    #[serde(default = "default_start_with_camera")]
    pub start_with_camera: Option<bool>,

    /// Pull the panel back inside the canvas when the camera preview closes.
    #[serde(default = "default_settle_on_camera_close")]
    pub settle_on_camera_close: Option<bool>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            start_with_camera: default_start_with_camera(),
            settle_on_camera_close: default_settle_on_camera_close(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub controller: ControllerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn default_start_with_camera() -> Option<bool> {
    Some(DEFAULT_START_WITH_CAMERA)
}

fn default_settle_on_camera_close() -> Option<bool> {
    Some(DEFAULT_SETTLE_ON_CAMERA_CLOSE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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

// =============================================================================
// Tests
// =============================================================================
