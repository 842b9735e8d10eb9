// SPDX-License-Identifier: MPL-2.0
//! Grid geometry shared by the on-screen gallery and the exporter.

use super::SlotIndex;

// ==========================================================================
// Layout
// ==========================================================================

/// Number of rows and columns.
pub const GRID_SIZE: u32 = 3;

/// Number of slots in the grid.
pub const SLOT_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

// ==========================================================================
// Export Raster
// ==========================================================================

/// Edge length of one exported cell, in pixels.
pub const CELL_EDGE: u32 = 200;

/// Gap between two exported cells, in pixels.
pub const CELL_GAP: u32 = 8;

/// Edge length of the exported square image (616 px).
pub const GRID_EDGE: u32 = GRID_SIZE * CELL_EDGE + (GRID_SIZE - 1) * CELL_GAP;

/// Top-left pixel of a cell in the exported raster.
#[must_use]
pub fn cell_origin(index: SlotIndex) -> (u32, u32) {
    let stride = CELL_EDGE + CELL_GAP;
    (index.column() * stride, index.row() * stride)
}
