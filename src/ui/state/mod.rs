// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Gesture state kept apart from the components that own it.

pub mod drag;

pub use drag::DragSession;
