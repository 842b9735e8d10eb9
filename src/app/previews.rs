// SPDX-License-Identifier: MPL-2.0
//! Preview cache keyed by image URL.
//!
//! Entries only follow the slot store: new URLs are requested after a merge
//! and URLs no longer on screen are dropped. Nothing here writes to slots.

use crate::domain::gallery::Slots;
use crate::media::ImageData;
use std::collections::HashMap;

/// Display state of one URL.
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(ImageData),
    Failed,
}

#[derive(Debug, Default)]
pub struct PreviewCache {
    entries: HashMap<String, Preview>,
}

impl PreviewCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Preview> {
        self.entries.get(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops entries for URLs no longer held by any slot, then marks every
    /// new non-empty URL as loading.
    ///
    /// Returns the URLs that need downloading, without duplicates.
    pub fn sync(&mut self, slots: &Slots) -> Vec<String> {
        self.entries
            .retain(|url, _| slots.iter().any(|slot| slot.url == *url));

        let mut missing = Vec::new();
        for slot in slots.iter().filter(|slot| slot.has_image()) {
            if !self.entries.contains_key(&slot.url) {
                self.entries.insert(slot.url.clone(), Preview::Loading);
                missing.push(slot.url.clone());
            }
        }
        missing
    }

    /// Stores a download result. Results for URLs dropped in the meantime are
    /// discarded.
    pub fn resolve(&mut self, url: &str, preview: Preview) -> bool {
        match self.entries.get_mut(url) {
            Some(entry) => {
                *entry = preview;
                true
            }
            None => false,
        }
    }
}
