// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Config directory:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`DOG_GRID_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! Export directory:
//! 1. **CLI argument** (`--export-dir`)
//! 2. **Environment variable** (`DOG_GRID_EXPORT_DIR`)
//! 3. **Config file** (`[export] directory`)
//! 4. **Platform download directory**, else the current directory
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.export_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "DogGrid";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "DOG_GRID_CONFIG_DIR";

/// Environment variable to override the export directory.
pub const ENV_EXPORT_DIR: &str = "DOG_GRID_EXPORT_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for export directory (set once at startup).
static CLI_EXPORT_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and export directories.
///
/// Later calls are ignored; the first value wins.
pub fn init_cli_overrides(config_dir: Option<String>, export_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
    if CLI_EXPORT_DIR.set(export_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("export dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_export_dir() -> Option<PathBuf> {
    CLI_EXPORT_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/DogGrid/`
/// - macOS: `~/Library/Application Support/DogGrid/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\DogGrid\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory exported grids are written to.
///
/// `configured` is the `[export] directory` value from the config file.
#[must_use]
pub fn resolve_export_dir(configured: Option<PathBuf>) -> PathBuf {
    get_cli_export_dir()
        .or_else(|| non_empty_env(ENV_EXPORT_DIR))
        .or(configured)
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
