// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`image_source`]: Random image lookup and image byte download
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared across Iced tasks
//! - Methods return boxed futures; callers wrap them in `Task::perform`

pub mod image_source;

pub use image_source::{ImageSource, SharedImageSource};
