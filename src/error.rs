//! Error type shared by board loading, configuration, and genetic operators.

use std::path::PathBuf;

use crate::geometry::Point;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// Crossover parents carry a different number of paths.
    #[error("crossover parents differ in path count: {left} vs {right}")]
    ParentSizeMismatch { left: usize, right: usize },

    /// The board file does not exist.
    #[error("board configuration not found: {}", path.display())]
    BoardNotFound { path: PathBuf },

    /// Reading the board file failed for a reason other than absence.
    #[error("failed to read board configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The board text is malformed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Board width or height is not positive.
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// A required point lies outside the grid.
    #[error("point {point} of pair {pair} lies outside the board")]
    PointOutOfBounds { pair: usize, point: Point },

    /// A GA or routing parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
