// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::controller;
use iced::Size;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the floating controller.
    Controller(controller::Message),
    /// The window (and with it the canvas) was opened or resized.
    ContainerResized(Size),
    /// Record button pressed.
    ToggleRecording,
    /// Mount or unmount the floating controller.
    ToggleController,
    /// Keyboard shortcut for the camera preview.
    ToggleCamera,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `REC_CONTROLLER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Open the camera preview at startup regardless of the config file.
    pub camera: bool,
}
