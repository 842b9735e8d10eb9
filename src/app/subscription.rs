// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts mirror the on-screen controls:
//! - `1`-`9` toggle the pin on the matching cell (row by row)
//! - `Space` or `S` shuffles
//! - `E` exports

use super::Message;
use crate::domain::gallery::SlotIndex;
use iced::keyboard::{self, key, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Spinner frame interval.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes unhandled key presses to gallery actions.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Keys already consumed by a focused widget are ignored
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(&key, modifiers)
            }
            _ => None,
        }
    })
}

/// Drives the spinner only while something is loading.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a key press to the gallery action it triggers.
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key {
        Key::Named(key::Named::Space) => Some(Message::ShuffleRequested),
        Key::Character(c) => match c.as_str() {
            "s" | "S" => Some(Message::ShuffleRequested),
            "e" | "E" => Some(Message::ExportRequested),
            digit => digit
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(SlotIndex::new)
                .map(Message::CellClicked),
        },
        _ => None,
    }
}
