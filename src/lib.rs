// SPDX-License-Identifier: MPL-2.0
//! `rec_controller` is a floating recording controller built with the Iced GUI framework.
//!
//! The controller is a panel that floats above a scrollable canvas. It can be
//! dragged by its handle and is put back inside the canvas when a drag ends or
//! when the camera preview makes it larger.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
