// SPDX-License-Identifier: MPL-2.0
//! Remote image fetcher backed by the public Dog CEO API.
//!
//! One call to [`DogApiClient::fetch_random_image`] issues exactly one GET to
//! the configured endpoint and returns the image URL from the JSON body:
//!
//! ```json
//! { "message": "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg", "status": "success" }
//! ```
//!
//! Every failure (transport, non-2xx status, malformed body) is logged and
//! turned into an empty string. There is no retry and no caching; two slots
//! may end up with the same URL.

use crate::application::port::ImageSource;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use std::time::Duration;

/// Default endpoint returning one random dog image URL.
pub const DEFAULT_ENDPOINT: &str = "https://dog.ceo/api/breeds/image/random";

/// Body returned by the random image endpoint.
#[derive(Debug, Deserialize)]
struct RandomImageResponse {
    message: String,
}

/// Extracts the image URL from a response body.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not JSON, has no string
/// `message` field, or the field is empty.
pub fn parse_random_image(body: &[u8]) -> Result<String> {
    let response: RandomImageResponse = serde_json::from_slice(body)?;
    if response.message.is_empty() {
        return Err(Error::Decode("response carried an empty image URL".into()));
    }
    Ok(response.message)
}

/// HTTP client for the random image API and the image hosts it points to.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DogApiClient {
    /// Builds a client for `endpoint`.
    ///
    /// `timeout` bounds each request. `None` waits forever.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the TLS backend cannot be initialized.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("dog_grid/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches one random image URL, or `""` on any failure.
    pub async fn fetch_random_image(&self) -> String {
        match self.try_fetch_random_image().await {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(endpoint = %self.endpoint, error = %err, "failed to fetch dog image");
                String::new()
            }
        }
    }

    async fn try_fetch_random_image(&self) -> Result<String> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("HTTP status: {status}")));
        }
        let body = response.bytes().await?;
        parse_random_image(&body)
    }

    /// Downloads the encoded bytes of an image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failures or a non-2xx status.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("HTTP status: {status}")));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl ImageSource for DogApiClient {
    fn random_image_url(&self) -> BoxFuture<'_, String> {
        self.fetch_random_image().boxed()
    }

    fn image_bytes<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        self.download_image(url).boxed()
    }
}

/// Stand-in used when no HTTP client could be built. Behaves like a source
/// whose every request fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSource;

impl ImageSource for OfflineSource {
    fn random_image_url(&self) -> BoxFuture<'_, String> {
        tracing::warn!("failed to fetch dog image: no HTTP client");
        futures_util::future::ready(String::new()).boxed()
    }

    fn image_bytes<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        let err = Error::Http(format!("no HTTP client to download {url}"));
        futures_util::future::ready(Err(err)).boxed()
    }
}
