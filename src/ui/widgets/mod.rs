// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod panel_layer;
pub mod scroll_lock;

pub use panel_layer::panel_layer;
pub use scroll_lock::scroll_lock;
