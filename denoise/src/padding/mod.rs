//! Edge-replicate border padding.
//!
//! Every cell of the padded grid, border or interior, is read from the source
//! through the same clamp-to-edge index mapping, so rows, columns and corners
//! need no separate handling. A 1-wide or 1-tall source works the same way:
//! its single row (or column) is both the first and the last edge.


use crate::grid::Grid;
use crate::kernel::WINDOW_LEN;
use crate::sample::Sample;

/// Border width added on every side.
pub const BORDER: usize = 1;

/// A grid extended by [`BORDER`] cells on each side, border cells replicating
/// the nearest source edge cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedGrid<T> {
    grid: Grid<T>,
}

pub fn pad<T: Sample>(source: &Grid<T>) -> PaddedGrid<T> {
    let width = source.width() + 2 * BORDER;
    let height = source.height() + 2 * BORDER;

    let mut samples = Vec::with_capacity(width * height);
    for py in 0..height {
        let row = source.row(clamp_to_edge(py, source.height()));
        samples.extend((0..width).map(|px| row[clamp_to_edge(px, source.width())]));
    }

    PaddedGrid {
        grid: Grid::from_raw_parts(width, height, samples),
    }
}

/// Source index for padded coordinate `p` along an axis of `len` cells.
#[inline]
fn clamp_to_edge(p: usize, len: usize) -> usize {
    p.saturating_sub(BORDER).min(len - 1)
}

impl<T: Sample> PaddedGrid<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn source_width(&self) -> usize {
        self.grid.width() - 2 * BORDER
    }

    #[inline]
    pub fn source_height(&self) -> usize {
        self.grid.height() - 2 * BORDER
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.grid.get(x, y)
    }

    pub fn as_grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Row-major 3x3 neighborhood of source cell `(x, y)`: padded rows
    /// `y..=y+2`, columns `x..=x+2`.
    ///
    /// Requires `x < source_width()` and `y < source_height()`.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `(x, y)` lies outside the source grid. Release
    /// builds panic on an out-of-range `y` and may return cells wrapped from the
    /// next row on an out-of-range `x`.
    #[inline]
    pub fn window(&self, x: usize, y: usize) -> [T; WINDOW_LEN] {
        debug_assert!(x < self.source_width() && y < self.source_height());

        let width = self.grid.width();
        let s = self.grid.samples();
        let top = y * width + x;
        let mid = top + width;
        let bot = mid + width;

        [
            s[top],
            s[top + 1],
            s[top + 2],
            s[mid],
            s[mid + 1],
            s[mid + 2],
            s[bot],
            s[bot + 1],
            s[bot + 2],
        ]
    }
}
