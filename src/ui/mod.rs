// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own a
//! `State`, react to a `Message` in `handle()`, and report `Effect`s back to
//! the application.
//!
//! - [`controller`] - Draggable recording controller kept inside the canvas
//! - [`state`] - Gesture state shared by components (drag session)
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, panel)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controller;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod widgets;
