// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for UI components.

pub mod button;
pub mod overlay;
