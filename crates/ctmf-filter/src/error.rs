//! Error types for ctmf-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ctmf_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Unknown filter method name
    #[error("unknown median method '{0}' (expected naive, huang or constant)")]
    UnknownMethod(String),

    /// A median was requested from a window with no values.
    ///
    /// The filters always fill the window before extracting, so this
    /// signals a broken internal invariant.
    #[error("empty window at ({x}, {y})")]
    EmptyWindow { x: usize, y: usize },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
