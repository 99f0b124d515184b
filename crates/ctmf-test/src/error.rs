//! Error types for the test harness

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// Failed to build a synthetic image
    #[error("failed to build image: {0}")]
    ImageBuild(#[from] ctmf_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
