// SPDX-License-Identifier: MPL-2.0
//! Image I/O for the gallery.
//!
//! - [`fetcher`]: random image lookup and image downloads over HTTP
//! - [`preview`]: decoding downloaded images into on-screen previews
//! - [`export`]: compositing the grid into a PNG file

pub mod export;
pub mod fetcher;
pub mod preview;

pub use export::{export_grid, EXPORT_FILENAME};
pub use fetcher::{DogApiClient, OfflineSource, DEFAULT_ENDPOINT};
pub use preview::{load_preview, ImageData};
