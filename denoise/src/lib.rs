//! Denoise - 3x3 spatial noise reduction for grayscale sample grids.
//!
//! The engine takes a fully materialized 2-D [`Grid`] of unsigned intensity
//! samples and one [`FilterKind`], and returns a new grid of the same shape
//! and sample type. It never touches files; decoding and encoding images is
//! the caller's business.
//!
//! Every filter works the same way:
//! - the grid is padded by one edge-replicated cell on each side,
//! - a 3x3 window is taken around every original cell,
//! - a [`Reducer`] collapses each window to one sample.
//!
//! # Quick Start
//!
//! ```rust
//! use denoise::{remove_noise, FilterKind, Grid};
//!
//! let grid = Grid::from_rows(&[[10u8, 10, 10], [10, 255, 10], [10, 10, 10]])?;
//! let clean = remove_noise(&grid, FilterKind::Median);
//! assert_eq!(clean.get(1, 1), 10);
//! # Ok::<(), denoise::Error>(())
//! ```

mod config;
mod error;
mod grid;
mod kernel;
mod median;
mod padding;
mod reducer;
mod remover;
mod sample;

pub mod prelude;

pub use config::{DenoiseConfig, Execution};
pub use error::{Error, InvalidInput, Result};
pub use grid::Grid;
pub use kernel::{
    gaussian_window, Kernel, GAUSSIAN_SIGMA, WINDOW_CENTER, WINDOW_LEN, WINDOW_SIDE,
};
pub use median::{median9, MEDIAN_INDEX};
pub use padding::{pad, PaddedGrid, BORDER};
pub use reducer::{FilterKind, Reducer};
pub use remover::{remove_noise, NoiseRemover};
pub use sample::Sample;
