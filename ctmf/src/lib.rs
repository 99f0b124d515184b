//! ctmf - Windowed median filtering
//!
//! Replaces every pixel of an image with the median of the square window
//! around it. Three implementations of the same filter are provided to
//! contrast their cost:
//!
//! - naive: O(r²) fetches per pixel
//! - Huang: O(r) fetches per pixel, sliding a kernel along each row
//! - constant-time: O(1) amortized column updates per pixel, reusing one
//!   vertical histogram per column across rows
//!
//! All three sort the window to extract the median, and all three give the
//! same output. Pixels are ranked as whole `(r, g, b, a)` tuples in
//! lexicographic order; outside the image the window is padded with
//! transparent black.
//!
//! # Example
//!
//! ```
//! use ctmf::{ColorMode, Image, MedianMethod, PixelValue, median_filter};
//!
//! let image = Image::filled(5, 5, ColorMode::Rgba, PixelValue::gray(200)).unwrap();
//! let out = median_filter(&image, 1, MedianMethod::ConstantTime).unwrap();
//! assert_eq!(out.len(), 25);
//! assert_eq!(out[12], PixelValue::gray(200));
//! ```

// Re-export core types (used everywhere)
pub use ctmf_core::*;

// Re-export the other member crates as modules
pub use ctmf_filter as filter;
pub use ctmf_io as io;

pub use ctmf_filter::{BenchmarkReport, MedianMethod, median_filter, median_filter_image};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the file-to-file pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading or writing the image failed
    #[error(transparent)]
    Io(#[from] ctmf_io::IoError),

    /// Filtering failed
    #[error(transparent)]
    Filter(#[from] ctmf_filter::FilterError),
}

/// Filter the image at `input` and write `{base_name}_r{radius}.png` next
/// to it, keeping the input's color mode. Returns the output path.
pub fn filter_image_file(
    input: &Path,
    radius: u32,
    method: MedianMethod,
) -> std::result::Result<PathBuf, PipelineError> {
    let image = ctmf_io::read_image(input)?;
    let filtered = median_filter_image(&image, radius, method)?;
    let output = ctmf_io::output_path(input, radius);
    ctmf_io::write_image(&filtered, &output)?;
    log::info!(
        "{} -> {} ({} filter, radius {})",
        input.display(),
        output.display(),
        method,
        radius
    );
    Ok(output)
}
