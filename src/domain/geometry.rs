// SPDX-License-Identifier: MPL-2.0
//! Geometry value objects for the floating controller.
//!
//! All coordinates are pixels in the container's space, with the origin at
//! the container's top-left corner.

// =============================================================================
// Constants
// =============================================================================

/// Padding kept between the panel and the container's edges.
pub const INDENT: f32 = 20.0;

/// Footprint width checked when camera mode is switched on.
pub const CONTROLLER_WIDTH: f32 = 700.0;

/// Footprint height checked when camera mode is switched on.
pub const CONTROLLER_HEIGHT: f32 = 500.0;

/// Horizontal placement of a freshly attached panel, as a share of the
/// container width.
pub const INITIAL_LEFT_RATIO: f32 = 0.33;

/// Vertical placement of a freshly attached panel.
pub const INITIAL_TOP: f32 = 20.0;

/// Far-edge thresholds per camera size class.
pub mod thresholds {
    use super::Threshold;

    /// Threshold while the camera preview is shown.
    pub const WITH_CAMERA: Threshold = Threshold { x: 700.0, y: 230.0 };

    /// Threshold for the compact controller.
    pub const WITHOUT_CAMERA: Threshold = Threshold { x: 400.0, y: 70.0 };
}

/// Rendered panel sizes per camera size class.
pub mod panel_sizes {
    use super::PanelSize;

    /// Panel with the camera preview.
    pub const WITH_CAMERA: PanelSize = PanelSize {
        width: 680.0,
        height: 210.0,
    };

    /// Compact panel.
    pub const WITHOUT_CAMERA: PanelSize = PanelSize {
        width: 380.0,
        height: 50.0,
    };
}

const _: () = {
    assert!(INDENT > 0.0);
    assert!(INITIAL_LEFT_RATIO >= 0.0 && INITIAL_LEFT_RATIO < 1.0);

    // Each threshold is the rendered panel plus one indent.
    assert!(panel_sizes::WITH_CAMERA.width + INDENT == thresholds::WITH_CAMERA.x);
    assert!(panel_sizes::WITH_CAMERA.height + INDENT == thresholds::WITH_CAMERA.y);
    assert!(panel_sizes::WITHOUT_CAMERA.width + INDENT == thresholds::WITHOUT_CAMERA.x);
    assert!(panel_sizes::WITHOUT_CAMERA.height + INDENT == thresholds::WITHOUT_CAMERA.y);
};

// =============================================================================
// Position
// =============================================================================

/// Top-left corner of the panel inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Placement used the first time the container is measured.
    #[must_use]
    pub fn initial(container: ContainerBounds) -> Self {
        Self {
            x: container.width * INITIAL_LEFT_RATIO,
            y: INITIAL_TOP,
        }
    }
}

// =============================================================================
// ContainerBounds
// =============================================================================

/// Current rendered size of the container.
///
/// Negative sizes reported by the host are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Returns whether a panel of the given size fits with an indent on
    /// every side.
    #[must_use]
    pub fn fits(self, panel: PanelSize) -> bool {
        panel.width + 2.0 * INDENT <= self.width && panel.height + 2.0 * INDENT <= self.height
    }
}

// =============================================================================
// PanelSize / Threshold
// =============================================================================

/// Rendered width and height of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

/// Distance from the panel's top-left at which the far container edge
/// counts as overflowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub x: f32,
    pub y: f32,
}

// =============================================================================
// CameraMode
// =============================================================================

/// Whether the embedded camera preview is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Off,
    On,
}

impl CameraMode {
    #[must_use]
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::On
        } else {
            Self::Off
        }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Far-edge threshold used by the settle pass.
    #[must_use]
    pub fn threshold(self) -> Threshold {
        match self {
            Self::On => thresholds::WITH_CAMERA,
            Self::Off => thresholds::WITHOUT_CAMERA,
        }
    }

    /// Size the panel is rendered at.
    #[must_use]
    pub fn panel_size(self) -> PanelSize {
        match self {
            Self::On => panel_sizes::WITH_CAMERA,
            Self::Off => panel_sizes::WITHOUT_CAMERA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_sits_at_a_third_of_the_width() {
        let position = Position::initial(ContainerBounds::new(900.0, 600.0));
        assert!((position.x - 297.0).abs() < 1e-3);
        assert_eq!(position.y, INITIAL_TOP);
    }

    #[test]
    fn negative_container_sizes_become_zero() {
        let bounds = ContainerBounds::new(-10.0, 50.0);
        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, 50.0);
    }

    #[test]
    fn camera_mode_selects_size_class() {
        assert_eq!(CameraMode::On.threshold(), thresholds::WITH_CAMERA);
        assert_eq!(CameraMode::Off.threshold(), thresholds::WITHOUT_CAMERA);
        assert_eq!(CameraMode::On.panel_size(), panel_sizes::WITH_CAMERA);
        assert_eq!(CameraMode::default(), CameraMode::Off);
    }

    #[test]
    fn from_enabled_maps_flag() {
        assert!(CameraMode::from_enabled(true).is_on());
        assert!(!CameraMode::from_enabled(false).is_on());
    }

    #[test]
    fn fits_accounts_for_both_indents() {
        let panel = panel_sizes::WITHOUT_CAMERA;
        assert!(ContainerBounds::new(420.0, 90.0).fits(panel));
        assert!(!ContainerBounds::new(419.0, 90.0).fits(panel));
        assert!(!ContainerBounds::new(420.0, 89.0).fits(panel));
    }
}
