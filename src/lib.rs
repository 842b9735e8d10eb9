// SPDX-License-Identifier: MPL-2.0
//! `dog_grid` is a pin-and-shuffle gallery of random dog photos built with the
//! Iced GUI framework.
//!
//! Nine random images are shown in a 3×3 grid. Clicking a cell pins it;
//! shuffling replaces every unpinned cell with a fresh random image. The grid
//! can be exported as a single 616×616 PNG.
//!
//! The library half exposes the parts that do not need a window:
//! - [`gallery`] - session state and the load/shuffle/export-snapshot operations
//! - [`media`] - the HTTP image source, previews and the PNG exporter
//! - [`application::port`] - the [`ImageSource`](application::port::ImageSource) seam

#![doc(html_root_url = "https://docs.rs/dog_grid/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
