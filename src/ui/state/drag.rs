// SPDX-License-Identifier: MPL-2.0
//! Drag session state
//!
//! Holds what a single press-move-release gesture needs to move the panel.

use iced::{Point, Vector};

/// State of one drag gesture, alive from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position when the gesture started.
    pub start_position: Point,

    /// Panel top-left minus pointer, captured once at the start.
    pub offset: Vector,
}

impl DragSession {
    /// Starts a session for a pointer pressed at `pointer` while the panel's
    /// top-left sits at `panel_origin`.
    #[must_use]
    pub fn begin(pointer: Point, panel_origin: Point) -> Self {
        Self {
            start_position: pointer,
            offset: panel_origin - pointer,
        }
    }

    /// Panel top-left for the current pointer position.
    #[must_use]
    pub fn panel_origin(&self, pointer: Point) -> Point {
        pointer + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_captures_offset_from_pointer_to_panel() {
        let session = DragSession::begin(Point::new(120.0, 40.0), Point::new(100.0, 20.0));

        assert_eq!(session.start_position, Point::new(120.0, 40.0));
        assert_eq!(session.offset, Vector::new(-20.0, -20.0));
    }

    #[test]
    fn panel_origin_follows_pointer_without_drift() {
        let session = DragSession::begin(Point::new(200.0, 150.0), Point::new(180.0, 140.0));

        // Pointer moved left/up by 30 and 15 pixels
        let origin = session.panel_origin(Point::new(170.0, 135.0));
        assert_eq!(origin, Point::new(150.0, 125.0));

        // Returning to the start restores the original origin
        let origin = session.panel_origin(Point::new(200.0, 150.0));
        assert_eq!(origin, Point::new(180.0, 140.0));
    }
}
