//! The windowed-reduction driver.
//!
//! Pads the grid once, then maps every source cell's 3x3 window through the
//! reducer into a fresh output grid. Cells are independent, so the output
//! buffer can be split into disjoint row chunks and filled in parallel while
//! the padded grid and kernel are shared read-only.


use std::time::Instant;

use common::parallel::par_rows_mut;
use rayon::prelude::*;

use crate::config::{DenoiseConfig, Execution};
use crate::error::Result;
use crate::grid::Grid;
use crate::padding::{pad, PaddedGrid};
use crate::reducer::{FilterKind, Reducer};
use crate::sample::Sample;

/// Applies one configured filter to whole grids.
///
/// Holds no state between calls; padded and output grids live only for the
/// duration of one [`remove_noise`](Self::remove_noise).
#[derive(Debug, Clone, Default)]
pub struct NoiseRemover {
    config: DenoiseConfig,
}

impl NoiseRemover {
    pub fn new(filter: FilterKind) -> Self {
        Self::from_config(DenoiseConfig::default().with_filter(filter))
    }

    pub fn from_config(config: DenoiseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DenoiseConfig {
        &self.config
    }

    /// Filter `grid`, returning a grid of the same shape and sample type.
    pub fn remove_noise<T: Sample>(&self, grid: &Grid<T>) -> Grid<T> {
        let start = Instant::now();
        tracing::debug!(
            "Removing noise: filter={}, size={}x{}, execution={}",
            self.config.filter,
            grid.width(),
            grid.height(),
            self.config.execution
        );

        let reducer = Reducer::new(self.config.filter);
        let output = match reducer {
            Reducer::Identity => grid.clone(),
            _ => {
                let padded = pad(grid);
                match self.config.execution {
                    Execution::Sequential => filter_sequential(&padded, &reducer),
                    Execution::Parallel => filter_parallel(&padded, &reducer),
                }
            }
        };

        tracing::debug!(
            "Noise removal ({}) finished in {:.2?}",
            self.config.filter,
            start.elapsed()
        );
        output
    }

    /// Validate a raw 2-D array and filter it.
    ///
    /// Empty or ragged input is rejected before any padding happens.
    pub fn remove_noise_rows<T: Sample, R: AsRef<[T]>>(&self, rows: &[R]) -> Result<Vec<Vec<T>>> {
        let grid = Grid::from_rows(rows)?;
        Ok(self.remove_noise(&grid).to_rows())
    }
}

/// Filter `grid` with `filter` using the default configuration otherwise.
pub fn remove_noise<T: Sample>(grid: &Grid<T>, filter: FilterKind) -> Grid<T> {
    NoiseRemover::new(filter).remove_noise(grid)
}

fn filter_sequential<T: Sample>(padded: &PaddedGrid<T>, reducer: &Reducer) -> Grid<T> {
    let width = padded.source_width();
    let height = padded.source_height();

    let mut samples = vec![T::default(); width * height];
    for (y, row) in samples.chunks_exact_mut(width).enumerate() {
        filter_row(padded, reducer, y, row);
    }

    Grid::from_raw_parts(width, height, samples)
}

fn filter_parallel<T: Sample>(padded: &PaddedGrid<T>, reducer: &Reducer) -> Grid<T> {
    let width = padded.source_width();
    let height = padded.source_height();

    let mut samples = vec![T::default(); width * height];
    par_rows_mut(&mut samples, width).for_each(|(chunk_start_row, chunk)| {
        for (local_y, row) in chunk.chunks_exact_mut(width).enumerate() {
            filter_row(padded, reducer, chunk_start_row + local_y, row);
        }
    });

    Grid::from_raw_parts(width, height, samples)
}

#[inline]
fn filter_row<T: Sample>(padded: &PaddedGrid<T>, reducer: &Reducer, y: usize, out: &mut [T]) {
    for (x, out) in out.iter_mut().enumerate() {
        *out = reducer.reduce(&padded.window(x, y));
    }
}
