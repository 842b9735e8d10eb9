// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a single screen: header, the 3×3 grid, the two action
//! buttons and the pinned-count status line.

use super::previews::{Preview, PreviewCache};
use super::Message;
use crate::domain::gallery::{SlotIndex, GRID_SIZE};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Button, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub previews: &'a PreviewCache,
    pub spinner_rotation: f32,
}

/// Renders the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(view_header(ctx.i18n))
        .push(view_grid(&ctx))
        .push(view_controls(ctx.i18n, ctx.gallery.is_busy()));

    if let Some(status) = status_line(ctx.i18n, ctx.gallery.pinned_count()) {
        content = content.push(
            Text::new(status)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    Container::new(content)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Pinned-count line, shown only when something is pinned.
pub fn status_line(i18n: &I18n, pinned: usize) -> Option<String> {
    (pinned > 0).then(|| i18n.tr_with_args("saved-count", &[("count", &pinned.to_string())]))
}

/// Label of the shuffle button.
pub fn shuffle_label(i18n: &I18n, busy: bool) -> String {
    if busy {
        i18n.tr("shuffle-button-busy")
    } else {
        i18n.tr("shuffle-button")
    }
}

fn view_header(i18n: &I18n) -> Element<'_, Message> {
    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("♥")
                .size(typography::TITLE_LG)
                .color(palette::HEART_500),
        )
        .push(Text::new(i18n.tr("gallery-title")).size(typography::TITLE_LG));

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(
            Text::new(i18n.tr("gallery-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .into()
}

fn view_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::SM);
    let mut indices = SlotIndex::all();

    for _ in 0..GRID_SIZE {
        let mut row = Row::new().spacing(spacing::SM);
        for index in indices.by_ref().take(GRID_SIZE as usize) {
            row = row.push(view_cell(ctx, index));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn view_cell<'a>(ctx: &ViewContext<'a>, index: SlotIndex) -> Element<'a, Message> {
    let slot = ctx.gallery.slot(index);
    let pinned = ctx.gallery.is_pinned(index);
    let waiting = slot.loading
        || ctx.gallery.is_busy()
        || matches!(ctx.previews.get(&slot.url), Some(Preview::Loading));

    let body: Element<'a, Message> = if waiting {
        Container::new(
            AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element(),
        )
        .center(Length::Fill)
        .style(styles::container::placeholder)
        .into()
    } else if let Some(Preview::Ready(data)) = ctx.previews.get(&slot.url) {
        Image::new(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into()
    } else {
        // Empty URL or failed download
        let alt = ctx
            .i18n
            .tr_with_args("gallery-cell-alt", &[("number", &(index.value() + 1).to_string())]);
        Container::new(Text::new(alt).size(typography::BODY))
            .center(Length::Fill)
            .into()
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body);
    if pinned {
        layers = layers.push(view_badge());
    }

    Button::new(layers)
        .padding(0)
        .width(Length::Fixed(sizing::CELL))
        .height(Length::Fixed(sizing::CELL))
        .style(styles::button::cell(pinned))
        .on_press(Message::CellClicked(index))
        .into()
}

fn view_badge<'a>() -> Element<'a, Message> {
    let heart = Container::new(Text::new("♥").size(typography::CAPTION))
        .center(Length::Fixed(sizing::BADGE))
        .style(styles::container::badge);

    Container::new(heart)
        .padding(spacing::XS)
        .align_right(Length::Fill)
        .align_top(Length::Fill)
        .into()
}

fn view_controls(i18n: &I18n, busy: bool) -> Element<'_, Message> {
    let shuffle = Button::new(
        Text::new(shuffle_label(i18n, busy))
            .size(typography::BODY_LG)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::LG])
    .style(styles::button_primary)
    // No press handler while busy renders the button disabled
    .on_press_maybe((!busy).then_some(Message::ShuffleRequested));

    let export = Button::new(
        Text::new(i18n.tr("export-button"))
            .size(typography::BODY_LG)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::LG])
    .style(styles::button_primary)
    .on_press(Message::ExportRequested);

    Row::new()
        .spacing(spacing::MD)
        .push(shuffle)
        .push(export)
        .into()
}
