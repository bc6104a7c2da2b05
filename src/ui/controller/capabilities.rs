// SPDX-License-Identifier: MPL-2.0
//! Capabilities handed to the controller's child content.
//!
//! Children never touch the controller state. They receive a value that
//! builds the messages for the two things they may ask for: starting a drag
//! and switching camera mode.

use super::Message;
use crate::domain::CameraMode;

/// Operations the controller exposes to the content it wraps.
pub trait ControllerCapabilities<M> {
    /// Message to attach to a drag handle's press event.
    fn start_drag(&self) -> M;

    /// Message announcing that the camera preview was opened or closed.
    fn set_camera_mode(&self, enabled: bool) -> M;
}

/// Capabilities bound to a parent message type.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities<M> {
    wrap: fn(Message) -> M,
    camera_mode: CameraMode,
}

impl<M> Capabilities<M> {
    pub(super) fn new(wrap: fn(Message) -> M, camera_mode: CameraMode) -> Self {
        Self { wrap, camera_mode }
    }

    /// Camera mode at the time the view was built.
    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    /// Message flipping the current camera mode.
    #[must_use]
    pub fn toggle_camera(&self) -> M {
        self.set_camera_mode(!self.camera_mode.is_on())
    }
}

impl<M> ControllerCapabilities<M> for Capabilities<M> {
    fn start_drag(&self) -> M {
        (self.wrap)(Message::StartDrag)
    }

    fn set_camera_mode(&self, enabled: bool) -> M {
        (self.wrap)(Message::SetCameraMode(enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Parent {
        Controller(Message),
    }

    #[test]
    fn start_drag_wraps_controller_message() {
        let caps = Capabilities::new(Parent::Controller, CameraMode::Off);
        assert!(matches!(
            caps.start_drag(),
            Parent::Controller(Message::StartDrag)
        ));
    }

    #[test]
    fn set_camera_mode_carries_flag() {
        let caps = Capabilities::new(Parent::Controller, CameraMode::Off);
        assert!(matches!(
            caps.set_camera_mode(true),
            Parent::Controller(Message::SetCameraMode(true))
        ));
    }

    #[test]
    fn toggle_camera_inverts_current_mode() {
        let caps = Capabilities::new(Parent::Controller, CameraMode::On);
        assert!(matches!(
            caps.toggle_camera(),
            Parent::Controller(Message::SetCameraMode(false))
        ));
    }
}
