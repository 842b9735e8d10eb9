// SPDX-License-Identifier: MPL-2.0
//! Shared test doubles for integration tests.

#![allow(dead_code)]

use dog_grid::application::port::ImageSource;
use dog_grid::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::{HashMap, VecDeque};
use std::io::Cursor;
use std::sync::Mutex;

/// Image source answering from fixed queues. An empty queue behaves like a
/// failed fetch.
#[derive(Default)]
pub struct FakeDogApi {
    urls: Mutex<VecDeque<String>>,
    images: HashMap<String, Vec<u8>>,
}

impl FakeDogApi {
    pub fn new<I: IntoIterator<Item = &'static str>>(urls: I) -> Self {
        Self {
            urls: Mutex::new(urls.into_iter().map(String::from).collect()),
            images: HashMap::new(),
        }
    }

    pub fn serving(mut self, url: &str, color: [u8; 4]) -> Self {
        self.images.insert(url.to_string(), png(50, 30, color));
        self
    }
}

impl ImageSource for FakeDogApi {
    fn random_image_url(&self) -> BoxFuture<'_, String> {
        let next = self
            .urls
            .lock()
            .expect("url queue poisoned")
            .pop_front()
            .unwrap_or_default();
        futures_util::future::ready(next).boxed()
    }

    fn image_bytes<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        let result = self
            .images
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Http(format!("HTTP status: 404 Not Found ({url})")));
        futures_util::future::ready(result).boxed()
    }
}

/// Encodes a solid-color PNG.
pub fn png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba(color));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("encode test png");
    bytes
}
