//! I/O error types
//!
//! The PNG codec maps its library errors into `IoError` variants so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a PNG, or the PNG layout is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. buffer size mismatch)
    #[error("core error: {0}")]
    Core(#[from] ctmf_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
