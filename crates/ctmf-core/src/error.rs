//! Error types for ctmf-core
//!
//! Provides a unified error type for image construction and pixel access.
//! Filters never see these for out-of-range reads: [`crate::PixelGrid`]
//! substitutes the border value instead.

use thiserror::Error;

/// ctmf core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer does not cover the image
    #[error("dimension mismatch: {width}x{height} needs {expected} pixels, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
