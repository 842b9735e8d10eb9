// SPDX-License-Identifier: MPL-2.0
//! Test doubles shared by unit tests.

use crate::application::port::ImageSource;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::collections::{HashMap, VecDeque};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// [`ImageSource`] that replays scripted answers.
///
/// `random_image_url` pops the next scripted URL (an empty string simulates
/// a failed fetch) and returns `""` once the script runs out. `image_bytes`
/// serves from a URL → bytes map and fails for unknown URLs.
#[derive(Default)]
pub struct ScriptedSource {
    urls: Mutex<VecDeque<String>>,
    images: HashMap<String, Vec<u8>>,
    url_calls: AtomicUsize,
    byte_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn with_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: Mutex::new(urls.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(url.to_string(), bytes);
        self
    }

    pub fn url_calls(&self) -> usize {
        self.url_calls.load(Ordering::SeqCst)
    }

    pub fn byte_calls(&self) -> usize {
        self.byte_calls.load(Ordering::SeqCst)
    }
}

impl ImageSource for ScriptedSource {
    fn random_image_url(&self) -> BoxFuture<'_, String> {
        self.url_calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .urls
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or_default();
        async move { next }.boxed()
    }

    fn image_bytes<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        self.byte_calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .images
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Http(format!("no scripted image for {url}")));
        async move { result }.boxed()
    }
}

/// Encodes a solid-color PNG of the given size.
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("failed to encode test png");
    bytes.into_inner()
}
