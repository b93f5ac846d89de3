use thiserror::Error;

/// Errors produced by grid construction, presets and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A named pattern was requested on a grid smaller than it supports.
    #[error("grid {width}x{height} is too small, both sides must be at least {min}")]
    InvalidDimension {
        width: usize,
        height: usize,
        min: usize,
    },

    /// Center of mass is undefined when no cell is alive.
    #[error("center of mass is undefined for an empty population")]
    EmptyPopulation,

    /// Grid extents must be positive.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    /// `width * height` does not fit in `usize`.
    #[error("grid {width}x{height} has too many cells")]
    TooLarge { width: usize, height: usize },

    /// Row `row` has a different length than the first row.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("expected {expected} cells for the given dimensions, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}
