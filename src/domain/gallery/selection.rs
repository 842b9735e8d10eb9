// SPDX-License-Identifier: MPL-2.0
//! Set of pinned slots.

use super::SlotIndex;
use std::collections::BTreeSet;

/// Slots the user pinned. Pinned slots are carried forward untouched by a
/// shuffle. Pins live for the whole session; only toggling removes one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pinned: BTreeSet<SlotIndex>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `index`. Returns `true` if the slot is now pinned.
    pub fn toggle(&mut self, index: SlotIndex) -> bool {
        if self.pinned.remove(&index) {
            false
        } else {
            self.pinned.insert(index);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, index: SlotIndex) -> bool {
        self.pinned.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pinned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }

    /// Pinned indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.pinned.iter().copied()
    }
}

impl FromIterator<SlotIndex> for Selection {
    fn from_iter<I: IntoIterator<Item = SlotIndex>>(iter: I) -> Self {
        Self {
            pinned: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    #[test]
    fn toggle_pins_then_unpins() {
        let mut selection = Selection::new();
        assert!(selection.toggle(idx(3)));
        assert!(selection.contains(idx(3)));
        assert!(!selection.toggle(idx(3)));
        assert!(!selection.contains(idx(3)));
        assert!(selection.is_empty());
    }

    #[test]
    fn pinned_iff_toggled_an_odd_number_of_times() {
        for toggles in 0..8 {
            let mut selection = Selection::new();
            for _ in 0..toggles {
                selection.toggle(idx(6));
            }
            assert_eq!(selection.contains(idx(6)), toggles % 2 == 1, "toggles = {toggles}");
        }
    }

    #[test]
    fn toggling_one_index_leaves_others_alone() {
        let mut selection: Selection = [idx(0), idx(8)].into_iter().collect();
        selection.toggle(idx(4));
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![idx(0), idx(4), idx(8)]);
        assert_eq!(selection.len(), 3);
    }
}
