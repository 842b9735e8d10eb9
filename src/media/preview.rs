// SPDX-License-Identifier: MPL-2.0
//! On-screen previews for slot images.
//!
//! Previews are a display concern only. They are downloaded after a slot
//! group settles, keyed by URL, and never feed back into the slot store.

use crate::application::port::ImageSource;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

/// Longest edge of a decoded preview. Cells are never drawn larger.
pub const PREVIEW_MAX_EDGE: u32 = 400;

/// Decoded preview ready for an Iced `image` widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes encoded bytes, shrinking large images to [`PREVIEW_MAX_EDGE`].
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image.
pub fn decode_preview(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has no pixels".into()));
    }

    let preview = if width > PREVIEW_MAX_EDGE || height > PREVIEW_MAX_EDGE {
        decoded.thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE)
    } else {
        decoded
    };
    let (width, height) = preview.dimensions();
    Ok(ImageData::from_rgba(width, height, preview.to_rgba8().into_vec()))
}

/// Downloads and decodes the preview for `url`.
///
/// # Errors
///
/// Returns an error if the download or the decode fails.
pub async fn load_preview(source: &dyn ImageSource, url: &str) -> Result<ImageData> {
    let bytes = source.image_bytes(url).await?;
    tokio::task::spawn_blocking(move || decode_preview(&bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}
