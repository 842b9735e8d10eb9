// SPDX-License-Identifier: MPL-2.0
//! Fetch plans: one fan-out/fan-in group of random-image requests.

use crate::application::port::ImageSource;
use crate::domain::gallery::{Slot, SlotIndex, Slots};
use futures_util::future::join_all;

/// What a plan was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    InitialLoad,
    Shuffle,
}

/// Snapshot of the slots at issuance plus the indices to re-fetch.
///
/// The pin check happens once, when the plan is built. Slots not listed in
/// `targets` are carried forward exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    kind: PlanKind,
    base: Slots,
    targets: Vec<SlotIndex>,
}

impl FetchPlan {
    pub(crate) fn new(kind: PlanKind, base: Slots, targets: Vec<SlotIndex>) -> Self {
        Self {
            kind,
            base,
            targets,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PlanKind {
        self.kind
    }

    /// Indices that will receive a fresh image.
    #[must_use]
    pub fn targets(&self) -> &[SlotIndex] {
        &self.targets
    }

    /// Issues one request per target concurrently, waits for all of them to
    /// settle, and returns the merged slot sequence.
    ///
    /// Failed requests come back as `""` from the source, so the group
    /// always completes with every target resolved (not loading).
    pub async fn fetch(self, source: &dyn ImageSource) -> Slots {
        let urls = join_all(self.targets.iter().map(|_| source.random_image_url())).await;

        let mut slots = self.base;
        for (index, url) in self.targets.into_iter().zip(urls) {
            slots[index.value()] = Slot::resolved(url);
        }
        slots
    }
}
