//! Error types for the risk matrix pipeline

use thiserror::Error;

/// Errors produced while building or rendering a risk matrix
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Population of {size} records is too small to form 5 quantile groups")]
    PopulationTooSmall { size: usize },

    #[error("Risk score of record {index} is not a finite number")]
    NonFiniteScore { index: usize },

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for risk matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
