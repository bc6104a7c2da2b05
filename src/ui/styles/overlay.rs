// SPDX-License-Identifier: MPL-2.0
//! Styles for the floating controller panel and its camera preview.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_900, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn panel_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn panel_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Floating controller panel.
#[must_use]
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(panel_background())),
        text_color: Some(WHITE),
        border: Border {
            color: panel_border(),
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Grip area the user presses to move the panel.
#[must_use]
pub fn drag_handle(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Placeholder surface where the camera feed is shown.
#[must_use]
pub fn camera_preview(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        text_color: Some(Color {
            a: opacity::OVERLAY_HOVER,
            ..WHITE
        }),
        border: Border {
            color: panel_border(),
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
