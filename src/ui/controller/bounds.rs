// SPDX-License-Identifier: MPL-2.0
//! Boundary arithmetic for the floating controller.
//!
//! Two independent rules exist and they intentionally differ:
//!
//! - [`settle`] runs after a drag ends and uses the camera-dependent
//!   [`Threshold`](crate::domain::Threshold) plus the panel's rendered size.
//! - [`camera_overflow`] runs when camera mode turns on and uses the fixed
//!   controller footprint, except for the vertical target which comes from
//!   the camera threshold.
//!
//! Both evaluate every condition against the incoming position. When two
//! conditions hit the same axis, the later one wins.

use crate::domain::geometry::{thresholds, CONTROLLER_HEIGHT, CONTROLLER_WIDTH, INDENT};
use crate::domain::{CameraMode, ContainerBounds, PanelSize, Position};

/// Clamps the panel back inside the container's padded bounds.
#[must_use]
pub fn settle(
    position: Position,
    panel: PanelSize,
    container: ContainerBounds,
    mode: CameraMode,
) -> Position {
    let threshold = mode.threshold();
    let mut settled = position;

    if position.x <= INDENT {
        settled.x = INDENT;
    }
    if position.y <= INDENT {
        settled.y = INDENT;
    }
    if position.x + threshold.x >= container.width {
        settled.x = container.width - (panel.width + INDENT);
    }
    if position.y + threshold.y >= container.height {
        settled.y = container.height - (panel.height + INDENT);
    }

    settled
}

/// Pushes the panel away from the far edges when the camera preview opens.
#[must_use]
pub fn camera_overflow(position: Position, container: ContainerBounds) -> Position {
    let mut adjusted = position;

    if position.x + CONTROLLER_WIDTH >= container.width {
        adjusted.x = container.width - CONTROLLER_WIDTH;
    }
    if position.y + CONTROLLER_HEIGHT >= container.height {
        adjusted.y = container.height - thresholds::WITH_CAMERA.y;
    }

    adjusted
}
