// SPDX-License-Identifier: MPL-2.0
//! A full-size layer that draws one child at an arbitrary offset.
//!
//! The child is laid out without limits, so a fixed-size panel keeps its
//! size when the offset pushes it past the right or bottom edge, or past
//! the origin while a drag is in progress. Content outside the layer is
//! clipped when drawn.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size, Vector};

/// Places its content at `offset` inside a layer that fills the parent.
pub struct PanelLayer<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: Point,
}

impl<'a, Message, Theme, Renderer> PanelLayer<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, offset: Point) -> Self {
        Self {
            content: content.into(),
            offset,
        }
    }
}

/// Layout limits for the child: anything from nothing to unbounded.
const UNBOUNDED: layout::Limits =
    layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, f32::INFINITY));

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PanelLayer<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    // The layer owns no state: the tree belongs to the child.
    fn tag(&self) -> widget::tree::Tag {
        self.content.as_widget().tag()
    }

    fn state(&self) -> widget::tree::State {
        self.content.as_widget().state()
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.content.as_widget().children()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        self.content.as_widget().diff(tree);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let child = self
            .content
            .as_widget_mut()
            .layout(tree, renderer, &UNBOUNDED)
            .move_to(self.offset);
        let size = limits.resolve(Length::Fill, Length::Fill, Size::ZERO);

        layout::Node::with_children(size, vec![child])
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
        if let Some(child) = layout.children().next() {
            self.content.as_widget_mut().update(
                tree, event, child, cursor, renderer, clipboard, shell, viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        layout
            .children()
            .next()
            .map_or(mouse::Interaction::None, |child| {
                self.content
                    .as_widget()
                    .mouse_interaction(tree, child, cursor, viewport, renderer)
            })
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
        let (Some(child), Some(clipped)) = (
            layout.children().next(),
            layout.bounds().intersection(viewport),
        ) else {
            return;
        };

        self.content
            .as_widget()
            .draw(tree, renderer, theme, style, child, cursor, &clipped);
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(child) = layout.children().next() {
            self.content
                .as_widget_mut()
                .operate(tree, child, renderer, operation);
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let child = layout.children().next()?;
        self.content
            .as_widget_mut()
            .overlay(tree, child, renderer, viewport, translation)
    }
}

impl<'a, Message, Theme, Renderer> From<PanelLayer<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(layer: PanelLayer<'a, Message, Theme, Renderer>) -> Self {
        Self::new(layer)
    }
}

/// Places `content` at `offset` inside a layer filling its parent.
pub fn panel_layer<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    offset: Point,
) -> PanelLayer<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    PanelLayer::new(content, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::{container, Column};
    use iced::Theme;

    /// Lays out a 380×50 panel at `offset` in a 1000×800 layer with the
    /// headless renderer and returns the panel's bounds.
    fn panel_bounds(offset: Point) -> Rectangle {
        let panel: Element<'_, (), Theme, ()> = container(Column::new())
            .width(Length::Fixed(380.0))
            .height(Length::Fixed(50.0))
            .into();
        let mut layer: Element<'_, (), Theme, ()> = panel_layer(panel, offset).into();
        let mut tree = widget::Tree::new(&layer);
        let limits = layout::Limits::new(Size::ZERO, Size::new(1000.0, 800.0));

        let node = layer.as_widget_mut().layout(&mut tree, &(), &limits);

        assert_eq!(node.size(), Size::new(1000.0, 800.0));
        let bounds = Layout::new(&node)
            .children()
            .next()
            .expect("panel node")
            .bounds();
        bounds
    }

    #[test]
    fn panel_near_the_right_edge_keeps_its_size() {
        assert_eq!(
            panel_bounds(Point::new(990.0, 10.0)),
            Rectangle {
                x: 990.0,
                y: 10.0,
                width: 380.0,
                height: 50.0,
            }
        );
    }

    #[test]
    fn panel_past_the_bottom_edge_keeps_its_size() {
        let bounds = panel_bounds(Point::new(100.0, 790.0));
        assert_eq!(bounds.size(), Size::new(380.0, 50.0));
        assert_eq!(bounds.y, 790.0);
    }

    #[test]
    fn negative_offsets_are_not_clamped() {
        let bounds = panel_bounds(Point::new(-40.0, -5.0));
        assert_eq!(bounds.position(), Point::new(-40.0, -5.0));
        assert_eq!(bounds.size(), Size::new(380.0, 50.0));
    }
}
