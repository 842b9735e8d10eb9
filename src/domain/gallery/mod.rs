// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Pure value objects for the 3×3 pin-and-shuffle grid. Nothing here performs
//! I/O; the controller in [`crate::gallery`] drives these types.

pub mod grid;
pub mod newtypes;
pub mod selection;
pub mod slot;

// Re-export commonly used types
pub use grid::{CELL_EDGE, CELL_GAP, GRID_EDGE, GRID_SIZE, SLOT_COUNT};
pub use newtypes::SlotIndex;
pub use selection::Selection;
pub use slot::{Slot, Slots};
