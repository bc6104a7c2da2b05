// SPDX-License-Identifier: MPL-2.0
//! Scroll lock for the canvas behind the floating controller.
//!
//! Wheel events are dropped only while `locked` is set, which the app ties
//! to an active controller drag. When unlocked the wrapper is transparent,
//! so the canvas scrolls normally between gestures.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Canvas wrapper whose wheel handling follows the controller's lock flag.
pub struct ScrollLock<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    locked: bool,
}

impl<'a, Message, Theme, Renderer> ScrollLock<'a, Message, Theme, Renderer> {
    /// `locked` is read once per view; a new wrapper is built each frame.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, locked: bool) -> Self {
        Self {
            content: content.into(),
            locked,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollLock<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        // Pointer moves and button releases must still pass while locked.
        if self.locked && is_wheel_event(event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollLock<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: ScrollLock<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Wraps `content`, swallowing wheel scrolling while `locked` is set.
pub fn scroll_lock<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    locked: bool,
) -> ScrollLock<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollLock::new(content, locked)
}

fn is_wheel_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_and_line_scrolling_are_wheel_events() {
        let lines = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 },
        });
        let pixels = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Pixels { x: 4.0, y: 0.0 },
        });
        assert!(is_wheel_event(&lines));
        assert!(is_wheel_event(&pixels));
    }

    #[test]
    fn drag_events_are_not_wheel_events() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: iced::Point::new(1.0, 2.0),
        });
        let released = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(!is_wheel_event(&moved));
        assert!(!is_wheel_event(&released));
    }

    #[test]
    fn resize_is_not_a_wheel_event() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(!is_wheel_event(&event));
    }
}
