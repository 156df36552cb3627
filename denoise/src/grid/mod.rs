//! Immutable rectangular sample grid.


use std::ops::Index;
use std::slice;

use crate::error::{InvalidInput, Result};
use crate::sample::Sample;

/// Row-major 2-D grid of intensity samples.
///
/// Always at least 1x1. Once built it cannot be mutated; filters read it and
/// produce a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    samples: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Sample> Grid<T> {
    /// Build a grid from a flat row-major sample buffer.
    pub fn new(width: usize, height: usize, samples: Vec<T>) -> Result<Self> {
        ensure_not_empty(width, height)?;
        if width.checked_mul(height) != Some(samples.len()) {
            return Err(InvalidInput::SampleCount {
                width,
                height,
                actual: samples.len(),
            }
            .into());
        }

        Ok(Self::from_raw_parts(width, height, samples))
    }

    pub fn filled(width: usize, height: usize, value: T) -> Result<Self> {
        ensure_not_empty(width, height)?;
        let len = width
            .checked_mul(height)
            .ok_or(InvalidInput::TooLarge { width, height })?;
        Ok(Self::from_raw_parts(width, height, vec![value; len]))
    }

    /// Build a grid from a slice of rows, rejecting empty or ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        ensure_not_empty(width, height)?;

        let mut samples = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(InvalidInput::NonRectangular {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                }
                .into());
            }
            samples.extend_from_slice(row);
        }

        Ok(Self::from_raw_parts(width, height, samples))
    }

    pub(crate) fn from_raw_parts(width: usize, height: usize, samples: Vec<T>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(samples.len(), width * height);
        Self {
            samples,
            width,
            height,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.width && y < self.height);
        self.samples[y * self.width + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        &self.samples[y * self.width..(y + 1) * self.width]
    }

    #[inline]
    pub fn rows(&self) -> slice::ChunksExact<'_, T> {
        self.samples.chunks_exact(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    #[inline]
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

fn ensure_not_empty(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(InvalidInput::Empty { width, height }.into());
    }
    Ok(())
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.samples[y * self.width + x]
    }
}

impl<T> AsRef<[T]> for Grid<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.samples
    }
}

impl<T> From<Grid<T>> for Vec<T> {
    #[inline]
    fn from(grid: Grid<T>) -> Self {
        grid.samples
    }
}
