// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::ui::controller;
use iced::{Size, Task};

impl App {
    /// Routes a top-level message to its handler.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controller(msg) => self.handle_controller_message(msg),
            Message::ContainerResized(size) => self.handle_container_resized(size),
            Message::ToggleRecording => {
                self.recording = !self.recording;
                tracing::info!(recording = self.recording, "recording toggled");
                Task::none()
            }
            Message::ToggleController => self.handle_toggle_controller(),
            Message::ToggleCamera => {
                let enabled = self
                    .controller
                    .as_ref()
                    .map(|state| !state.camera_mode().is_on());
                match enabled {
                    Some(enabled) => {
                        self.handle_controller_message(controller::Message::SetCameraMode(enabled))
                    }
                    None => Task::none(),
                }
            }
        }
    }

    fn handle_controller_message(&mut self, message: controller::Message) -> Task<Message> {
        let Some(state) = self.controller.as_mut() else {
            return Task::none();
        };

        match state.handle(message) {
            controller::Effect::Repositioned { from, to } => {
                tracing::debug!(?from, ?to, "controller moved back inside the canvas");
            }
            controller::Effect::ScrollLockChanged(locked) => {
                tracing::trace!(locked, "canvas scroll lock changed");
            }
            controller::Effect::None => {}
        }
        Task::none()
    }

    fn handle_container_resized(&mut self, size: Size) -> Task<Message> {
        self.container_size = Some(size);
        self.handle_controller_message(controller::Message::ContainerResized(size))
    }

    /// Mounts a fresh controller or tears the current one down.
    fn handle_toggle_controller(&mut self) -> Task<Message> {
        if let Some(mut state) = self.controller.take() {
            let effect = state.unmount();
            tracing::debug!(?effect, "controller unmounted");
            return Task::none();
        }

        let mut state = controller::State::new(self.controller_options);
        if let Some(size) = self.container_size {
            state.handle(controller::Message::ContainerResized(size));
        }
        tracing::debug!("controller mounted");
        self.controller = Some(state);
        Task::none()
    }
}
