// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The canvas fills the window and scrolls; the floating controller is a
//! second layer stacked on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::controller::{self, Capabilities, ControllerCapabilities};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::widget::{
    button, column, container, mouse_area, row, scrollable, text, tooltip, Column, Stack,
};
use iced::{mouse, Alignment, Element, Length};

/// Height of the scrollable canvas content.
const CANVAS_HEIGHT: f32 = 2400.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: Option<&'a controller::State>,
    pub recording: bool,
    pub status: Option<&'a str>,
}

/// Renders the canvas and, when mounted, the controller above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let locked = ctx.controller.is_some_and(controller::State::scroll_locked);
    let mut layers = Stack::new()
        .push(view_canvas(ctx.i18n, ctx.status, locked))
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(state) = ctx.controller {
        let i18n = ctx.i18n;
        let recording = ctx.recording;
        layers = layers.push(state.view(Message::Controller, move |capabilities| {
            controller_content(capabilities, i18n, recording)
        }));
    }

    layers.into()
}

fn view_canvas<'a>(i18n: &'a I18n, status: Option<&'a str>, locked: bool) -> Element<'a, Message> {
    let mut content = Column::new()
        .push(text(i18n.tr("canvas-title")).size(typography::TITLE_MD))
        .push(text(i18n.tr("canvas-hint")).size(typography::BODY))
        .spacing(spacing::SM)
        .padding(spacing::XXL)
        .width(Length::Fill)
        .height(Length::Fixed(CANVAS_HEIGHT));

    if let Some(key) = status {
        content = content.push(text(i18n.tr(key)).size(typography::CAPTION));
    }

    scroll_lock(
        scrollable(content).width(Length::Fill).height(Length::Fill),
        locked,
    )
    .into()
}

/// Panel content: drag handle, record toggle, camera toggle and, in camera
/// mode, the preview surface.
fn controller_content<'a>(
    capabilities: Capabilities<Message>,
    i18n: &'a I18n,
    recording: bool,
) -> Element<'a, Message> {
    let handle = mouse_area(
        container(text("⠿").size(typography::TITLE_MD))
            .padding([0.0, spacing::XXS])
            .style(styles::overlay::drag_handle),
    )
    .on_press(capabilities.start_drag())
    .interaction(mouse::Interaction::Grab);
    let handle = tooltip(
        handle,
        container(text(i18n.tr("controller-handle-tooltip")).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::panel),
        tooltip::Position::Bottom,
    );

    let record_label = if recording {
        i18n.tr("controller-stop")
    } else {
        i18n.tr("controller-record")
    };
    let record = button(text(record_label).size(typography::BODY))
        .on_press(Message::ToggleRecording)
        .style(styles::button::record(recording));

    let camera_on = capabilities.camera_mode().is_on();
    let camera_label = if camera_on {
        i18n.tr("controller-camera-on")
    } else {
        i18n.tr("controller-camera-off")
    };
    let camera = button(text(camera_label).size(typography::BODY))
        .on_press(capabilities.toggle_camera())
        .style(styles::button::primary);

    let controls = row![handle, record, camera]
        .spacing(spacing::XS)
        .align_y(Alignment::Center);

    if camera_on {
        let preview = container(text(i18n.tr("controller-camera-preview")).size(typography::CAPTION))
            .center(Length::Fill)
            .style(styles::overlay::camera_preview);

        column![controls, preview].spacing(spacing::XS).into()
    } else {
        controls.into()
    }
}
