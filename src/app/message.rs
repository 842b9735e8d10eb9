// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::{SlotIndex, Slots};
use crate::error::Error;
use crate::media::ImageData;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A grid cell was clicked or its number key pressed.
    CellClicked(SlotIndex),
    ShuffleRequested,
    ExportRequested,
    /// All nine startup fetches settled; carries the merged slots.
    InitialLoadCompleted(Slots),
    /// Every unpinned fetch of a shuffle settled; carries the merged slots.
    ShuffleCompleted(Slots),
    /// Result from downloading the on-screen preview for `url`.
    PreviewLoaded {
        url: String,
        result: Result<ImageData, Error>,
    },
    ExportCompleted(Result<PathBuf, Error>),
    Tick(Instant), // Spinner animation while loading
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DOG_GRID_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional export directory override.
    /// Takes precedence over `DOG_GRID_EXPORT_DIR` environment variable.
    pub export_dir: Option<String>,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}
