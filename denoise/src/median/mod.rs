//! Exact median of a 3x3 window.


use crate::kernel::WINDOW_LEN;

/// Position of the median in a sorted 9-element window.
pub const MEDIAN_INDEX: usize = 4;

/// Median of nine samples: the 5th smallest value, selected without
/// interpolation. Only the median position is put in order, the rest of the
/// window is left partitioned around it.
#[inline]
pub fn median9<T: Ord + Copy>(mut window: [T; WINDOW_LEN]) -> T {
    let (_, median, _) = window.select_nth_unstable(MEDIAN_INDEX);
    *median
}
