// SPDX-License-Identifier: MPL-2.0
//! Slot records held by the gallery.

use super::grid::SLOT_COUNT;
use super::SlotIndex;

/// One grid position: the image URL to display and whether a fetch is
/// outstanding for it.
///
/// An empty `url` means "no image". A failed fetch and a slot that was never
/// filled look the same.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slot {
    pub url: String,
    pub loading: bool,
}

impl Slot {
    /// Slot at startup: no URL yet, fetch in flight.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            url: String::new(),
            loading: true,
        }
    }

    /// Slot whose fetch has settled. An empty `url` records a failure.
    #[must_use]
    pub fn resolved(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            loading: false,
        }
    }

    /// Returns `true` if the slot has an image URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.url.is_empty()
    }
}

/// The full ordered slot sequence. Always replaced as a whole.
pub type Slots = [Slot; SLOT_COUNT];

/// Returns a slot sequence where every slot is [`Slot::pending`].
#[must_use]
pub fn pending_slots() -> Slots {
    std::array::from_fn(|_| Slot::pending())
}

/// Looks up a slot by typed index.
#[must_use]
pub fn slot_at(slots: &Slots, index: SlotIndex) -> &Slot {
    &slots[index.value()]
}
