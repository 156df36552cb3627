use thiserror::Error;

/// Why a grid was rejected before any filtering began.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("grid must have at least one row and one column, got {width}x{height}")]
    Empty { width: usize, height: usize },

    #[error("row {row} has {actual} samples, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{actual} samples do not fill a {width}x{height} grid")]
    SampleCount {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("a {width}x{height} grid has more samples than fit in memory")]
    TooLarge { width: usize, height: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

pub type Result<T> = std::result::Result<T, Error>;
