//! The closed set of 3x3 window reducers.


use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::kernel::{Kernel, GAUSSIAN_SIGMA, WINDOW_CENTER, WINDOW_LEN};
use crate::median::median9;
use crate::sample::Sample;

/// Which noise filter to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilterKind {
    /// Returns the input unchanged.
    #[default]
    Identity,
    /// 3x3 box average.
    Mean,
    /// 3x3 median.
    Median,
    /// 3x3 Gaussian-weighted sum.
    Gaussian,
}

/// A [`FilterKind`] ready to run: kernels are built once here and shared
/// read-only by every cell of one invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reducer {
    Identity,
    Mean(Kernel),
    Median,
    Gaussian(Kernel),
}

impl Reducer {
    pub fn new(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Identity => Self::Identity,
            FilterKind::Mean => Self::Mean(Kernel::mean()),
            FilterKind::Median => Self::Median,
            FilterKind::Gaussian => Self::Gaussian(Kernel::gaussian(GAUSSIAN_SIGMA)),
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Identity => FilterKind::Identity,
            Self::Mean(_) => FilterKind::Mean,
            Self::Median => FilterKind::Median,
            Self::Gaussian(_) => FilterKind::Gaussian,
        }
    }

    /// Collapse a row-major 3x3 window to one output sample.
    #[inline]
    pub fn reduce<T: Sample>(&self, window: &[T; WINDOW_LEN]) -> T {
        match self {
            // The center cell, so a windowed identity pass is still a no-op.
            Self::Identity => window[WINDOW_CENTER],
            Self::Mean(kernel) | Self::Gaussian(kernel) => {
                T::from_f64_clamped(kernel.apply(window))
            }
            Self::Median => median9(*window),
        }
    }
}

impl From<FilterKind> for Reducer {
    fn from(kind: FilterKind) -> Self {
        Self::new(kind)
    }
}
