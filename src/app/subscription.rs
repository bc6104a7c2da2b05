// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events feed the canvas size; unmodified `H` and `C` key presses
//! toggle the controller and its camera preview. Pointer events belong to
//! the controller's own subscription.

use super::Message;
use iced::keyboard::{self, Key, Modifiers};
use iced::{event, window, Event, Subscription};

/// Creates the window and keyboard subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::ContainerResized(size))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Character(c),
            modifiers,
            ..
        }) if status == event::Status::Ignored => shortcut(c.as_str(), modifiers),
        _ => None,
    }
}

fn shortcut(key: &str, modifiers: Modifiers) -> Option<Message> {
    if !modifiers.is_empty() {
        return None;
    }
    match key {
        "h" | "H" => Some(Message::ToggleController),
        "c" | "C" => Some(Message::ToggleCamera),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{mouse, Point, Size};

    #[test]
    fn resize_reports_container_size() {
        let event = Event::Window(window::Event::Resized(Size::new(640.0, 480.0)));
        assert!(matches!(
            route_event(event, event::Status::Ignored, window::Id::unique()),
            Some(Message::ContainerResized(size)) if size == Size::new(640.0, 480.0)
        ));
    }

    #[test]
    fn pointer_events_are_left_to_the_controller() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(1.0, 1.0),
        });
        assert!(route_event(event, event::Status::Ignored, window::Id::unique()).is_none());
    }

    #[test]
    fn shortcuts_toggle_controller_and_camera() {
        assert!(matches!(
            shortcut("h", Modifiers::empty()),
            Some(Message::ToggleController)
        ));
        assert!(matches!(
            shortcut("C", Modifiers::empty()),
            Some(Message::ToggleCamera)
        ));
        assert!(shortcut("x", Modifiers::empty()).is_none());
    }

    #[test]
    fn shortcuts_ignore_modified_keys() {
        assert!(shortcut("c", Modifiers::CTRL).is_none());
        assert!(shortcut("h", Modifiers::SHIFT).is_none());
    }
}
