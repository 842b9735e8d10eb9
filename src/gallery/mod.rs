// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: the single owner of the session state.
//!
//! The session is nine [`Slot`]s, the [`Selection`] of pinned slots and a
//! busy flag that serializes shuffles. Network work is split into a
//! synchronous *begin* step that returns a [`FetchPlan`], the async
//! [`FetchPlan::fetch`], and a synchronous *finish* step that swaps in the
//! whole merged slot sequence. Callers therefore only ever observe the state
//! before a group and the state after it.
//!
//! ```no_run
//! # async fn demo(source: &dyn dog_grid::application::port::ImageSource) {
//! use dog_grid::gallery::Gallery;
//!
//! let mut gallery = Gallery::new();
//! gallery.load_all(source).await;
//! gallery.toggle_cell(dog_grid::domain::gallery::SlotIndex::new(4).unwrap());
//! gallery.shuffle(source).await;
//! # }
//! ```

mod plan;

pub use plan::{FetchPlan, PlanKind};

use crate::application::port::ImageSource;
use crate::domain::gallery::slot::{pending_slots, slot_at};
use crate::domain::gallery::{Selection, Slot, SlotIndex, Slots};

/// Session state for one gallery window.
#[derive(Debug, Clone)]
pub struct Gallery {
    slots: Slots,
    selection: Selection,
    busy: bool,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    /// Nine pending slots, nothing pinned, not busy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: pending_slots(),
            selection: Selection::new(),
            busy: false,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    #[must_use]
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, index: SlotIndex) -> &Slot {
        slot_at(&self.slots, index)
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn is_pinned(&self, index: SlotIndex) -> bool {
        self.selection.contains(index)
    }

    #[must_use]
    pub fn pinned_count(&self) -> usize {
        self.selection.len()
    }

    /// Whether a shuffle is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether anything on screen should show a loading placeholder.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.busy || self.slots.iter().any(|slot| slot.loading)
    }

    // =========================================================================
    // Cell toggle
    // =========================================================================

    /// Flips the pin on `index`. No other state changes.
    ///
    /// Returns `true` if the slot is now pinned.
    pub fn toggle_cell(&mut self, index: SlotIndex) -> bool {
        let pinned = self.selection.toggle(index);
        tracing::debug!(slot = %index, pinned, "toggled pin");
        pinned
    }

    // =========================================================================
    // Initial load
    // =========================================================================

    /// Plan that fetches all nine slots.
    #[must_use]
    pub fn begin_initial_load(&self) -> FetchPlan {
        tracing::debug!("initial load started");
        FetchPlan::new(
            PlanKind::InitialLoad,
            pending_slots(),
            SlotIndex::all().collect(),
        )
    }

    /// Replaces every slot with the result of the initial load.
    pub fn apply_initial_load(&mut self, slots: Slots) {
        let failed = slots.iter().filter(|slot| !slot.has_image()).count();
        tracing::debug!(failed, "initial load merged");
        self.slots = slots;
    }

    // =========================================================================
    // Shuffle
    // =========================================================================

    /// Starts a shuffle.
    ///
    /// Returns `None` without touching any state when a shuffle is already in
    /// flight. Otherwise marks the gallery busy before returning, so a second
    /// trigger is rejected, and returns a plan covering every unpinned slot.
    pub fn begin_shuffle(&mut self) -> Option<FetchPlan> {
        if self.busy {
            tracing::debug!("shuffle ignored: already shuffling");
            return None;
        }
        self.busy = true;

        let targets: Vec<SlotIndex> = SlotIndex::all()
            .filter(|index| !self.selection.contains(*index))
            .collect();
        tracing::debug!(
            refetch = targets.len(),
            pinned = self.selection.len(),
            "shuffle started"
        );

        Some(FetchPlan::new(
            PlanKind::Shuffle,
            self.slots.clone(),
            targets,
        ))
    }

    /// Swaps in the merged shuffle result and clears the busy flag.
    ///
    /// A slot the plan carried forward while it was still pending (pinned
    /// before the initial load settled) keeps its current settled value.
    pub fn finish_shuffle(&mut self, mut slots: Slots) {
        for (incoming, current) in slots.iter_mut().zip(self.slots.iter()) {
            if incoming.loading && !current.loading {
                *incoming = current.clone();
            }
        }
        let failed = slots.iter().filter(|slot| !slot.has_image()).count();
        tracing::debug!(failed, "shuffle merged");
        self.slots = slots;
        self.busy = false;
    }

    // =========================================================================
    // Sequential helpers
    // =========================================================================

    /// Runs the initial load to completion.
    pub async fn load_all(&mut self, source: &dyn ImageSource) {
        let slots = self.begin_initial_load().fetch(source).await;
        self.apply_initial_load(slots);
    }

    /// Runs a shuffle to completion. No-op while another shuffle is in flight.
    pub async fn shuffle(&mut self, source: &dyn ImageSource) {
        if let Some(plan) = self.begin_shuffle() {
            let slots = plan.fetch(source).await;
            self.finish_shuffle(slots);
        }
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Copies the nine URLs as they are right now.
    ///
    /// The exporter works from this copy, so a shuffle finishing while an
    /// export is in progress does not change what gets exported.
    #[must_use]
    pub fn export_snapshot(&self) -> [String; 9] {
        std::array::from_fn(|i| self.slots[i].url.clone())
    }
}
