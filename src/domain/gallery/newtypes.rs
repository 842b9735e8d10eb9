// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery values,
//! ensuring they are always within valid ranges.

use super::grid::{GRID_SIZE, SLOT_COUNT};
use std::fmt;

// =============================================================================
// SlotIndex
// =============================================================================

/// Position of a slot in the grid, guaranteed to be in `0..=8`.
///
/// Row-major: row = index / 3, column = index % 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Creates a slot index, returning `None` when out of range.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            #[allow(clippy::cast_possible_truncation)] // index < 9
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the raw index.
    #[must_use]
    pub fn value(self) -> usize {
        usize::from(self.0)
    }

    /// Zero-based grid row.
    #[must_use]
    pub fn row(self) -> u32 {
        u32::from(self.0) / GRID_SIZE
    }

    /// Zero-based grid column.
    #[must_use]
    pub fn column(self) -> u32 {
        u32::from(self.0) % GRID_SIZE
    }

    /// All slot indices in grid order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT).filter_map(SlotIndex::new)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
