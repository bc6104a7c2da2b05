// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct hosts a scrollable canvas and the floating recording
//! controller above it, and translates window and keyboard events into
//! controller messages.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::controller;
use iced::{window, Element, Size, Subscription, Task};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Floating controller; `None` while hidden.
    controller: Option<controller::State>,
    controller_options: controller::Options,
    /// Last reported canvas size, kept so a remounted controller can attach.
    container_size: Option<Size>,
    recording: bool,
    /// i18n key of a startup warning shown on the canvas.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller_mounted", &self.controller.is_some())
            .field("recording", &self.recording)
            .finish()
    }
}

/// Builds the window settings from the config.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let (config, warning) = config::load();
    let settings = window_settings(&config);

    let boot = move || App::new(flags.clone(), &config, warning.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the loaded config.
    fn new(flags: Flags, config: &Config, warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);

        let controller_options = controller::Options {
            settle_on_camera_close: config
                .controller
                .settle_on_camera_close
                .unwrap_or(config::DEFAULT_SETTLE_ON_CAMERA_CLOSE),
        };

        let mut state = controller::State::new(controller_options);
        let start_with_camera = flags.camera
            || config
                .controller
                .start_with_camera
                .unwrap_or(config::DEFAULT_START_WITH_CAMERA);
        if start_with_camera {
            state.handle(controller::Message::SetCameraMode(true));
        }

        if let Some(key) = &warning {
            tracing::warn!(%key, "startup warning");
        }

        let app = App {
            i18n,
            controller: Some(state),
            controller_options,
            container_size: None,
            recording: false,
            status: warning,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: self.controller.as_ref(),
            recording: self.recording,
            status: self.status.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![subscription::create_event_subscription()];
        if let Some(state) = &self.controller {
            subscriptions.push(state.subscription().map(Message::Controller));
        }
        Subscription::batch(subscriptions)
    }
}
