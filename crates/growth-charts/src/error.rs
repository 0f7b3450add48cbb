//! Error types for the charts crate

use thiserror::Error;

/// Errors that can occur while building chart scales or views
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Categorical domain cannot produce bands (e.g. no categories)
    #[error("Domain error: {0}")]
    Domain(String),

    /// Configuration rejected at construction time
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
