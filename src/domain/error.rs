use thiserror::Error;

/// Errors returned by grid edits, pattern lookups and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
    #[error("grid size must be positive")]
    EmptyGrid,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
