// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (shuffle, export).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Grayed out, non-interactive button.
#[must_use]
pub fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grid cell. Pinned cells get a blue ring and glow; hovering darkens slightly.
pub fn cell(pinned: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let overlay_alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
            _ => opacity::TRANSPARENT,
        };
        let (ring, width, glow) = if pinned {
            (palette::PRIMARY_400, border::WIDTH_LG, shadow::PINNED)
        } else {
            let edge = if matches!(theme, Theme::Light) {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            };
            (edge, border::WIDTH_SM, shadow::SM)
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: overlay_alpha,
                ..BLACK
            })),
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                color: ring,
                width,
                radius: radius::LG.into(),
            },
            shadow: glow,
            snap: true,
        }
    }
}
