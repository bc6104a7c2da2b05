// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Controller**: Startup camera mode and camera-close behavior

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window width. Leaves room for the camera controller plus indents.
pub const MIN_WINDOW_WIDTH: f32 = 760.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

// ==========================================================================
// Controller Defaults
// ==========================================================================

/// Whether the camera preview is open when the application starts.
pub const DEFAULT_START_WITH_CAMERA: bool = false;

/// Whether closing the camera preview runs the settle pass.
pub const DEFAULT_SETTLE_ON_CAMERA_CLOSE: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::{thresholds, INDENT};

    #[test]
    fn window_defaults_are_valid() {
        assert_eq!(DEFAULT_WINDOW_WIDTH, 1000.0);
        assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn minimum_window_fits_camera_controller() {
        assert!(MIN_WINDOW_WIDTH >= thresholds::WITH_CAMERA.x + INDENT);
        assert!(MIN_WINDOW_HEIGHT >= thresholds::WITH_CAMERA.y + INDENT);
    }
}
