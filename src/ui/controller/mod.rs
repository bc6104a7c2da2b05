// SPDX-License-Identifier: MPL-2.0
//! Floating recording controller.
//!
//! Keeps a panel at an absolute position inside the canvas, lets the user
//! drag it around by a handle, and puts it back inside the canvas when a
//! gesture ends or the camera preview opens.
//!
//! ## Gesture lifecycle
//!
//! ```text
//! Idle ──StartDrag──▶ Dragging ──DragEnd──▶ Idle (settle pass)
//!   ▲                    │
//!   └── pointer tracking └── DragMove (position = pointer + offset)
//! ```
//!
//! While idle, [`State::subscription`] only tracks the pointer. The drag
//! listener exists only as long as a [`DragSession`] does, so dropping the
//! session (release or [`State::unmount`]) also drops the listener.

pub mod bounds;
pub mod capabilities;
mod view;

pub use capabilities::{Capabilities, ControllerCapabilities};

use crate::domain::{CameraMode, ContainerBounds, PanelSize, Position};
use crate::ui::state::DragSession;
use iced::{event, mouse, window, Event, Point, Size, Subscription};

/// Behavior switches for the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Run the settle pass when camera mode is switched off.
    pub settle_on_camera_close: bool,
}

/// Controller state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Panel top-left; `None` until the container has been measured.
    position: Option<Position>,
    container: Option<ContainerBounds>,
    camera_mode: CameraMode,
    drag: Option<DragSession>,
    /// Last pointer position seen while idle.
    pointer: Option<Point>,
    scroll_locked: bool,
    options: Options,
}

/// Messages for the controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved while no gesture is active.
    PointerTracked(Point),
    /// Drag handle pressed.
    StartDrag,
    /// Pointer moved during a gesture.
    DragMove(Point),
    /// Left button released during a gesture.
    DragEnd,
    /// Camera preview opened (`true`) or closed (`false`).
    SetCameraMode(bool),
    /// Container was measured.
    ContainerResized(Size),
}

/// Effects produced by controller operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Background scrolling was blocked (`true`) or allowed again.
    ScrollLockChanged(bool),
    /// A bounds pass moved the panel. When returned for a release, the
    /// scroll lock has been released as well.
    Repositioned { from: Position, to: Position },
}

impl State {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Handle a controller message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PointerTracked(pointer) => {
                self.pointer = Some(pointer);
                Effect::None
            }
            Message::StartDrag => {
                self.begin_drag();
                Effect::None
            }
            Message::DragMove(pointer) => self.drag_move(pointer),
            Message::DragEnd => self.end_drag(),
            Message::SetCameraMode(enabled) => self.set_camera_mode(enabled),
            Message::ContainerResized(size) => {
                let container = ContainerBounds::new(size.width, size.height);
                self.container = Some(container);
                if self.position.is_none() {
                    let mut initial = Position::initial(container);
                    if self.camera_mode.is_on() {
                        initial = bounds::camera_overflow(initial, container);
                    }
                    tracing::debug!(?initial, mode = ?self.camera_mode, "controller attached");
                    self.position = Some(initial);
                }
                Effect::None
            }
        }
    }

    fn begin_drag(&mut self) {
        if self.drag.is_some() {
            return;
        }
        let (Some(pointer), Some(position), Some(_)) = (self.pointer, self.position, self.container)
        else {
            tracing::debug!("drag ignored: controller not attached");
            return;
        };

        let session = DragSession::begin(pointer, Point::new(position.x, position.y));
        tracing::debug!(offset = ?session.offset, "drag started");
        self.drag = Some(session);
    }

    fn drag_move(&mut self, pointer: Point) -> Effect {
        self.pointer = Some(pointer);
        let Some(session) = self.drag else {
            return Effect::None;
        };
        if self.position.is_none() || self.container.is_none() {
            return Effect::None;
        }

        let origin = session.panel_origin(pointer);
        self.position = Some(Position::new(origin.x, origin.y));

        if self.scroll_locked {
            return Effect::None;
        }
        self.scroll_locked = true;
        tracing::debug!("scroll lock engaged");
        Effect::ScrollLockChanged(true)
    }

    fn end_drag(&mut self) -> Effect {
        if self.drag.take().is_none() {
            return Effect::None;
        }
        let released = self.release_scroll_lock();
        tracing::debug!("drag ended");
        match self.settle() {
            Effect::None if released => Effect::ScrollLockChanged(false),
            effect => effect,
        }
    }

    fn set_camera_mode(&mut self, enabled: bool) -> Effect {
        let mode = CameraMode::from_enabled(enabled);
        if mode == self.camera_mode {
            return Effect::None;
        }
        self.camera_mode = mode;
        tracing::debug!(?mode, "camera mode changed");

        match mode {
            CameraMode::On => self.reposition(bounds::camera_overflow),
            CameraMode::Off if self.options.settle_on_camera_close => self.settle(),
            CameraMode::Off => Effect::None,
        }
    }

    /// Runs the settle pass against the current container.
    fn settle(&mut self) -> Effect {
        let panel = self.panel_size();
        let mode = self.camera_mode;
        self.reposition(|position, container| bounds::settle(position, panel, container, mode))
    }

    fn reposition(&mut self, rule: impl FnOnce(Position, ContainerBounds) -> Position) -> Effect {
        let (Some(from), Some(container)) = (self.position, self.container) else {
            return Effect::None;
        };

        let to = rule(from, container);
        if to == from {
            return Effect::None;
        }

        self.position = Some(to);
        Effect::Repositioned { from, to }
    }

    /// Returns whether the lock was held.
    fn release_scroll_lock(&mut self) -> bool {
        if !self.scroll_locked {
            return false;
        }
        self.scroll_locked = false;
        tracing::debug!("scroll lock released");
        true
    }

    /// Tears down gesture state before the controller is removed.
    ///
    /// Unlike a release, this does not run the settle pass.
    pub fn unmount(&mut self) -> Effect {
        if self.drag.take().is_some() {
            tracing::debug!("drag session dropped on unmount");
        }
        if self.release_scroll_lock() {
            Effect::ScrollLockChanged(false)
        } else {
            Effect::None
        }
    }

    /// Native event listener for the current gesture phase.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_dragging() {
            event::listen_with(drag_listener)
        } else {
            event::listen_with(pointer_listener)
        }
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether background scrolling must be blocked.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[must_use]
    pub fn container(&self) -> Option<ContainerBounds> {
        self.container
    }

    #[must_use]
    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    /// Size the panel is rendered at in the current camera mode.
    #[must_use]
    pub fn panel_size(&self) -> PanelSize {
        self.camera_mode.panel_size()
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }
}

fn pointer_listener(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerTracked(position))
        }
        _ => None,
    }
}

/// Listens globally so the gesture survives the pointer leaving the panel.
fn drag_listener(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::DragMove(position)),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Message::DragEnd),
        _ => None,
    }
}
