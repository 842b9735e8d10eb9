// SPDX-License-Identifier: MPL-2.0
//! Image source port definition.
//!
//! The gallery never talks to the network directly. It asks an
//! [`ImageSource`] for random image URLs and, for previews and export, for
//! the bytes behind a URL.

use crate::error::Result;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Supplier of random images.
pub trait ImageSource: Send + Sync {
    /// Returns the URL of a random image.
    ///
    /// Never fails: any failure is logged by the implementation and reported
    /// as an empty string.
    fn random_image_url(&self) -> BoxFuture<'_, String>;

    /// Downloads the raw (still encoded) bytes of the image at `url`.
    fn image_bytes<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>>;
}

/// Reference-counted handle used to move a source into async tasks.
pub type SharedImageSource = Arc<dyn ImageSource>;
