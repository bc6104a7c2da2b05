// SPDX-License-Identifier: MPL-2.0
//! Rendering of the floating panel layer.

use super::{Capabilities, Message, State};
use crate::domain::geometry::INDENT;
use crate::domain::Position;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::widgets::panel_layer;
use iced::widget::container;
use iced::{Element, Length, Point};

impl State {
    /// Renders a full-size layer with the panel at its current position.
    ///
    /// `wrap` lifts controller messages into the parent's message type and
    /// `content` builds what goes inside the panel from the capabilities.
    pub fn view<'a, M: 'a>(
        &self,
        wrap: fn(Message) -> M,
        content: impl FnOnce(Capabilities<M>) -> Element<'a, M>,
    ) -> Element<'a, M> {
        let capabilities = Capabilities::new(wrap, self.camera_mode);
        let size = self.panel_size();

        let panel = container(content(capabilities))
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .padding(spacing::XS)
            .style(styles::overlay::panel);

        let origin = panel_origin(self.position);
        panel_layer(panel, Point::new(origin.x, origin.y)).into()
    }
}

/// Offset of the panel inside its layer. Before the container is measured
/// the panel sits one indent from the top-left corner.
fn panel_origin(position: Option<Position>) -> Position {
    position.unwrap_or(Position::new(INDENT, INDENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unattached_panel_renders_at_indent() {
        assert_eq!(panel_origin(None), Position::new(INDENT, INDENT));
    }

    #[test]
    fn mid_drag_positions_are_rendered_as_is() {
        assert_eq!(
            panel_origin(Some(Position::new(-40.0, 790.0))),
            Position::new(-40.0, 790.0)
        );
    }
}
