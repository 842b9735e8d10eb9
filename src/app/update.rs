// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler runs on the UI thread and only mutates state synchronously;
//! network and disk work is handed to `Task::perform` and comes back as a
//! completion message.

use super::previews::{Preview, PreviewCache};
use super::Message;
use crate::application::port::SharedImageSource;
use crate::domain::gallery::{SlotIndex, Slots};
use crate::error::Error;
use crate::gallery::{FetchPlan, Gallery};
use crate::media::{self, ImageData};
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Mutable state the update loop works on.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub previews: &'a mut PreviewCache,
    pub source: &'a SharedImageSource,
    pub export_dir: &'a Path,
    pub spinner_rotation: &'a mut f32,
}

/// Main update function that routes messages to their handlers.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::CellClicked(index) => handle_cell_clicked(ctx, index),
        Message::ShuffleRequested => handle_shuffle_requested(ctx),
        Message::ExportRequested => handle_export_requested(ctx),
        Message::InitialLoadCompleted(slots) => handle_initial_load_completed(ctx, slots),
        Message::ShuffleCompleted(slots) => handle_shuffle_completed(ctx, slots),
        Message::PreviewLoaded { url, result } => handle_preview_loaded(ctx, &url, result),
        Message::ExportCompleted(result) => handle_export_completed(result),
        Message::Tick(_) => {
            *ctx.spinner_rotation = AnimatedSpinner::advance(*ctx.spinner_rotation);
            Task::none()
        }
    }
}

/// Runs a fetch plan in the background and reports the merged slots.
pub fn fetch_task(
    plan: FetchPlan,
    source: &SharedImageSource,
    on_done: fn(Slots) -> Message,
) -> Task<Message> {
    let source = Arc::clone(source);
    Task::perform(async move { plan.fetch(source.as_ref()).await }, on_done)
}

// =============================================================================
// Gallery handlers
// =============================================================================

fn handle_cell_clicked(ctx: &mut UpdateContext<'_>, index: SlotIndex) -> Task<Message> {
    ctx.gallery.toggle_cell(index);
    Task::none()
}

fn handle_shuffle_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.gallery.begin_shuffle() {
        Some(plan) => fetch_task(plan, ctx.source, Message::ShuffleCompleted),
        None => Task::none(),
    }
}

fn handle_initial_load_completed(ctx: &mut UpdateContext<'_>, slots: Slots) -> Task<Message> {
    ctx.gallery.apply_initial_load(slots);
    tracing::info!(
        loaded = ctx.gallery.slots().iter().filter(|s| s.has_image()).count(),
        "initial load finished"
    );
    sync_previews(ctx)
}

fn handle_shuffle_completed(ctx: &mut UpdateContext<'_>, slots: Slots) -> Task<Message> {
    ctx.gallery.finish_shuffle(slots);
    tracing::info!(pinned = ctx.gallery.pinned_count(), "shuffle finished");
    sync_previews(ctx)
}

// =============================================================================
// Previews
// =============================================================================

fn sync_previews(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let missing = ctx.previews.sync(ctx.gallery.slots());
    Task::batch(missing.into_iter().map(|url| {
        let source = Arc::clone(ctx.source);
        Task::perform(
            async move {
                let result = media::load_preview(source.as_ref(), &url).await;
                (url, result)
            },
            |(url, result)| Message::PreviewLoaded { url, result },
        )
    }))
}

fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    let preview = match result {
        Ok(data) => Preview::Ready(data),
        Err(err) => {
            tracing::warn!(url, error = %err, "failed to load preview");
            Preview::Failed
        }
    };
    if !ctx.previews.resolve(url, preview) {
        tracing::debug!(url, "dropped preview for a replaced image");
    }
    Task::none()
}

// =============================================================================
// Export
// =============================================================================

fn handle_export_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let urls = ctx.gallery.export_snapshot();
    let dir = ctx.export_dir.to_path_buf();
    let source = Arc::clone(ctx.source);
    tracing::info!(dir = %dir.display(), "export started");

    Task::perform(
        async move { media::export_grid(source.as_ref(), urls, dir).await },
        Message::ExportCompleted,
    )
}

fn handle_export_completed(result: Result<PathBuf, Error>) -> Task<Message> {
    match result {
        Ok(path) => tracing::info!(path = %path.display(), "grid exported"),
        Err(err) => tracing::error!(error = %err, "failed to export grid"),
    }
    Task::none()
}
