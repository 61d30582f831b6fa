use thiserror::Error;

/// Errors produced by the maze core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid must have at least one row and one column.
    #[error("invalid maze dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The dimension is not one of the recognized size options.
    #[error("unsupported maze dimension {0}")]
    UnsupportedDimension(usize),

    /// The number of search steps per frame is out of range.
    #[error("step rate {0} is out of range")]
    InvalidStepRate(usize),

    /// Path reconstruction could not find how `cell` was discovered.
    /// This means the maze is not a spanning tree or the trace was corrupted.
    #[error("discovery trace has no predecessor for cell {cell}")]
    BrokenTrace { cell: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
