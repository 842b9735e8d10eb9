// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Network**: Endpoint and request timeout bounds
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Endpoint used when the config file does not name one.
pub const DEFAULT_ENDPOINT: &str = crate::media::fetcher::DEFAULT_ENDPOINT;

/// Minimum request timeout (in seconds) when one is configured.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds) when one is configured.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 940.0;

/// The grid uses fixed-size cells, so the window never shrinks below it.
pub const MIN_WINDOW_WIDTH: f32 = 680.0;
pub const MIN_WINDOW_HEIGHT: f32 = 900.0;
