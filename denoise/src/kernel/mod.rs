//! 3x3 convolution kernels for the Mean and Gaussian filters.


use crate::sample::Sample;

/// Number of samples in a 3x3 window.
pub const WINDOW_LEN: usize = 9;

/// Side length of the window.
pub const WINDOW_SIDE: usize = 3;

/// Row-major index of the center cell.
pub const WINDOW_CENTER: usize = 4;

/// Standard deviation of the Gaussian window the Gaussian kernel is sampled from.
pub const GAUSSIAN_SIGMA: f64 = 1.0;

/// Row-major 3x3 weight matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [f64; WINDOW_LEN],
}

impl Kernel {
    /// Unweighted box average, every weight `1/9`.
    pub fn mean() -> Self {
        Self {
            weights: [1.0 / WINDOW_LEN as f64; WINDOW_LEN],
        }
    }

    /// A 9-sample 1-D Gaussian window, normalized to sum to 1 and laid out
    /// row-major into 3x3. The peak lands on the center cell; the middle row
    /// carries most of the weight.
    ///
    /// # Panics
    ///
    /// Panics if `sigma` is not positive.
    pub fn gaussian(sigma: f64) -> Self {
        let mut weights = gaussian_window(sigma);
        let sum: f64 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }
        Self { weights }
    }

    #[inline]
    pub fn weights(&self) -> &[f64; WINDOW_LEN] {
        &self.weights
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < WINDOW_SIDE && col < WINDOW_SIDE);
        self.weights[row * WINDOW_SIDE + col]
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Weighted sum of a row-major window.
    #[inline]
    pub fn apply<T: Sample>(&self, window: &[T; WINDOW_LEN]) -> f64 {
        self.weights
            .iter()
            .zip(window)
            .map(|(&w, &s)| w * s.as_f64())
            .sum()
    }
}

/// Symmetric 1-D Gaussian window of [`WINDOW_LEN`] samples centered on the
/// middle sample: `exp(-0.5 * ((n - 4) / sigma)^2)`. Not normalized.
///
/// # Panics
///
/// Panics if `sigma` is not positive.
pub fn gaussian_window(sigma: f64) -> [f64; WINDOW_LEN] {
    assert!(sigma > 0.0, "Sigma must be positive");

    let center = (WINDOW_LEN - 1) as f64 / 2.0;
    let mut window = [0.0; WINDOW_LEN];
    for (i, w) in window.iter_mut().enumerate() {
        let x = (i as f64 - center) / sigma;
        *w = (-0.5 * x * x).exp();
    }
    window
}
