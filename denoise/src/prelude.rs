//! Everything needed to filter a grid.

pub use crate::{
    remove_noise, DenoiseConfig, Error, Execution, FilterKind, Grid, NoiseRemover, Result,
    Sample,
};
