// SPDX-License-Identifier: MPL-2.0
//! Domain layer - controller geometry with ZERO external dependencies.
//!
//! This module contains pure value objects and constants. It has no
//! dependencies on external crates (except `std`) so the positioning rules can
//! be tested without a running GUI.
//!
//! # Modules
//!
//! - [`geometry`]: [`Position`](geometry::Position),
//!   [`ContainerBounds`](geometry::ContainerBounds),
//!   [`PanelSize`](geometry::PanelSize), [`CameraMode`](geometry::CameraMode)

pub mod geometry;

pub use geometry::{CameraMode, ContainerBounds, PanelSize, Position, Threshold};
