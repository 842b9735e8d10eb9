// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery controller to the window: it turns
//! clicks and key presses into gallery operations, runs fetch plans and
//! exports as background tasks, and keeps the preview cache in step with the
//! slots.

pub mod config;
mod message;
pub mod paths;
pub mod previews;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::shortcut_for;
pub use view::{shuffle_label, status_line};

use crate::application::port::SharedImageSource;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::media::{DogApiClient, OfflineSource};
use iced::{window, Element, Subscription, Task, Theme};
use previews::PreviewCache;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: Gallery,
    previews: PreviewCache,
    source: SharedImageSource,
    export_dir: PathBuf,
    /// Resolved once at startup; system detection is a blocking query.
    theme: Theme,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("previews", &self.previews.len())
            .field("export_dir", &self.export_dir)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, picks the image source and starts the initial load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "ignoring invalid config file");
        }

        let i18n = I18n::new(flags.lang, &config);
        let export_dir = paths::resolve_export_dir(config.export.directory.clone());

        let source: SharedImageSource =
            match DogApiClient::new(config.endpoint(), config.request_timeout()) {
                Ok(client) => Arc::new(client),
                Err(err) => {
                    tracing::error!(error = %err, "failed to build HTTP client");
                    Arc::new(OfflineSource)
                }
            };

        tracing::info!(
            endpoint = config.endpoint(),
            locale = %i18n.current_locale(),
            export_dir = %export_dir.display(),
            "starting gallery"
        );

        let theme = config.general.theme_mode.theme();
        Self::with_source(i18n, source, export_dir, theme)
    }

    /// Builds the app around `source` and returns the initial load task.
    pub fn with_source(
        i18n: I18n,
        source: SharedImageSource,
        export_dir: PathBuf,
        theme: Theme,
    ) -> (Self, Task<Message>) {
        let app = Self {
            i18n,
            gallery: Gallery::new(),
            previews: PreviewCache::new(),
            source,
            export_dir,
            theme,
            spinner_rotation: 0.0,
        };
        let plan = app.gallery.begin_initial_load();
        let task = update::fetch_task(plan, &app.source, Message::InitialLoadCompleted);
        (app, task)
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn previews(&self) -> &PreviewCache {
        &self.previews
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    /// Whether any cell currently shows the spinner.
    fn is_animating(&self) -> bool {
        self.gallery.is_loading()
            || self
                .gallery
                .slots()
                .iter()
                .any(|slot| matches!(self.previews.get(&slot.url), Some(previews::Preview::Loading)))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            previews: &mut self.previews,
            source: &self.source,
            export_dir: &self.export_dir,
            spinner_rotation: &mut self.spinner_rotation,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            previews: &self.previews,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::previews::Preview;
    use crate::domain::gallery::{Slot, SlotIndex, Slots};
    use crate::error::Error;
    use crate::media::ImageData;
    use crate::test_utils::ScriptedSource;
    use std::time::Instant;

    fn build_app() -> App {
        let (app, _task) = App::with_source(
            I18n::new(Some("en-US".into()), &config::Config::default()),
            Arc::new(ScriptedSource::with_urls(Vec::<String>::new())),
            PathBuf::from("exports"),
            Theme::Light,
        );
        app
    }

    fn idx(i: usize) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn resolved(prefix: &str) -> Slots {
        std::array::from_fn(|i| Slot::resolved(format!("{prefix}{i}")))
    }

    #[test]
    fn new_app_starts_loading_every_slot() {
        let app = build_app();
        assert!(app.gallery().slots().iter().all(|slot| slot.loading));
        assert!(!app.gallery().is_busy());
        assert!(app.is_animating());
    }

    #[test]
    fn title_is_localized() {
        let app = build_app();
        assert_eq!(app.title(), "Dog Gallery");
    }

    #[test]
    fn initial_load_marks_previews_loading() {
        let mut app = build_app();
        let _ = app.update(Message::InitialLoadCompleted(resolved("u")));

        assert!(app.gallery().slots().iter().all(|slot| !slot.loading));
        assert_eq!(app.previews().len(), 9);
        assert!(matches!(app.previews().get("u0"), Some(Preview::Loading)));
    }

    #[test]
    fn cell_click_toggles_pin_only() {
        let mut app = build_app();
        let _ = app.update(Message::InitialLoadCompleted(resolved("u")));
        let before = app.gallery().slots().clone();

        let _ = app.update(Message::CellClicked(idx(4)));
        assert!(app.gallery().is_pinned(idx(4)));
        assert_eq!(app.gallery().slots(), &before);

        let _ = app.update(Message::CellClicked(idx(4)));
        assert!(!app.gallery().is_pinned(idx(4)));
    }

    #[test]
    fn shuffle_sets_busy_until_completion() {
        let mut app = build_app();
        let _ = app.update(Message::InitialLoadCompleted(resolved("u")));
        let _ = app.update(Message::CellClicked(idx(2)));

        let _ = app.update(Message::ShuffleRequested);
        assert!(app.gallery().is_busy());

        // Second trigger while busy changes nothing
        let _ = app.update(Message::ShuffleRequested);
        assert!(app.gallery().is_busy());

        let mut merged = resolved("v");
        merged[2] = Slot::resolved("u2");
        let _ = app.update(Message::ShuffleCompleted(merged));

        assert!(!app.gallery().is_busy());
        assert_eq!(app.gallery().slot(idx(2)).url, "u2");
        assert_eq!(app.gallery().slot(idx(0)).url, "v0");
    }

    #[test]
    fn shuffle_prunes_replaced_previews() {
        let mut app = build_app();
        let _ = app.update(Message::InitialLoadCompleted(resolved("u")));
        let _ = app.update(Message::CellClicked(idx(0)));
        let _ = app.update(Message::ShuffleRequested);

        let mut merged = resolved("v");
        merged[0] = Slot::resolved("u0");
        let _ = app.update(Message::ShuffleCompleted(merged));

        assert!(app.previews().get("u0").is_some());
        assert!(app.previews().get("u1").is_none());
        assert!(app.previews().get("v1").is_some());
    }

    #[test]
    fn preview_results_are_stored() {
        let mut app = build_app();
        let _ = app.update(Message::InitialLoadCompleted(resolved("u")));

        let _ = app.update(Message::PreviewLoaded {
            url: "u0".into(),
            result: Ok(ImageData::from_rgba(1, 1, vec![0; 4])),
        });
        let _ = app.update(Message::PreviewLoaded {
            url: "u1".into(),
            result: Err(Error::Http("404".into())),
        });

        assert!(matches!(app.previews().get("u0"), Some(Preview::Ready(_))));
        assert!(matches!(app.previews().get("u1"), Some(Preview::Failed)));
    }

    #[test]
    fn tick_advances_spinner() {
        let mut app = build_app();
        let before = app.spinner_rotation();
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner_rotation() > before);
    }

    #[test]
    fn export_does_not_touch_gallery_state() {
        let mut app = build_app();
        let _ = app.update(Message::InitialLoadCompleted(resolved("u")));
        let _ = app.update(Message::CellClicked(idx(1)));
        let before = app.gallery().clone();

        let _ = app.update(Message::ExportRequested);
        let _ = app.update(Message::ExportCompleted(Err(Error::Io("disk full".into()))));

        assert_eq!(app.gallery().slots(), before.slots());
        assert_eq!(app.gallery().selection(), before.selection());
        assert!(!app.gallery().is_busy());
    }

    #[test]
    fn startup_theme_is_kept_across_updates() {
        let (mut app, _task) = App::with_source(
            I18n::new(Some("en-US".into()), &config::Config::default()),
            Arc::new(ScriptedSource::with_urls(Vec::<String>::new())),
            PathBuf::from("exports"),
            Theme::Dark,
        );
        assert_eq!(app.theme(), Theme::Dark);

        for _ in 0..3 {
            let _ = app.update(Message::Tick(Instant::now()));
        }
        let _ = app.update(Message::InitialLoadCompleted(resolved("u")));
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn min_window_fits_the_grid() {
        use crate::ui::design_tokens::{sizing, spacing, typography};

        let grid = sizing::CELL * 3.0 + spacing::SM * 2.0;
        let width = grid + spacing::LG * 2.0;
        // Header (title + subtitle), grid, controls and status line, with
        // the column spacing between them and the outer padding
        let height = typography::TITLE_LG * 1.3
            + spacing::XS
            + typography::BODY * 1.3
            + grid
            + sizing::BUTTON_HEIGHT
            + typography::CAPTION * 1.3
            + spacing::LG * 3.0
            + spacing::LG * 2.0;

        assert!(config::MIN_WINDOW_WIDTH >= width, "{} < {width}", config::MIN_WINDOW_WIDTH);
        assert!(config::MIN_WINDOW_HEIGHT >= height, "{} < {height}", config::MIN_WINDOW_HEIGHT);
    }
}
