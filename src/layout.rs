//! Grid geometry for the emoji slots, shared by both frontends.

use crate::config::AppearanceConfig;

/// Padding around the grid, in pixels.
pub const WINDOW_PADDING: u32 = 12;

/// Rows, columns and window size for a number of equally sized slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub width: u32,
    pub height: u32,
}

impl GridLayout {
    pub fn new(appearance: &AppearanceConfig, slot_count: usize) -> Self {
        let slots = slot_count.max(1) as u32;
        let columns = appearance.columns.clamp(1, slots);
        let rows = slots.div_ceil(columns);

        let extent = |n: u32| {
            n * appearance.button_size + n.saturating_sub(1) * appearance.spacing + 2 * WINDOW_PADDING
        };

        Self {
            columns,
            rows,
            width: extent(columns),
            height: extent(rows),
        }
    }

    /// Row and column of slot `index`.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        (index / self.columns, index % self.columns)
    }
}
