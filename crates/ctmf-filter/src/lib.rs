//! ctmf-filter - Windowed median filtering
//!
//! Three interchangeable implementations of one contract: replace every
//! pixel with the lexicographic median of the `(2r+1) x (2r+1)` window
//! around it, padding outside the image with [`ctmf_core::BORDER`].
//!
//! - [`naive_median_filter`] - rebuilds the window for every pixel
//! - [`huang_median_filter`] - slides a kernel of column slices along each row
//! - [`constant_time_median_filter`] - reuses per-column histograms across rows
//!
//! All three produce identical output for the same radius. A radius so
//! large that border padding outnumbers the image in every window yields
//! an all-[`BORDER`] output without building any window, so no radius
//! allocates more than a small multiple of the image. Each call owns
//! its own sliding state, so concurrent passes over different images or
//! radii never interfere.
//!
//! The [`bench`] module times the three against each other and renders
//! the results as CSV.

pub mod bench;
pub mod constant;
mod error;
pub mod huang;
pub mod naive;
pub mod rank;
pub mod window;

pub use bench::{BenchmarkReport, benchmark};
pub use constant::{ColumnBank, ColumnHistogram, constant_time_median_filter};
pub use error::{FilterError, FilterResult};
pub use huang::huang_median_filter;
pub use naive::naive_median_filter;
pub use rank::{RankBuffer, median};
pub use window::SlidingWindow;

use ctmf_core::{BORDER, Image, PixelValue};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Side length `2r+1` of the kernel for `radius`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if a `(2r+1)²` window of
/// pixels cannot be allocated.
pub(crate) fn kernel_dim(radius: u32) -> FilterResult<usize> {
    (radius as usize)
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .filter(|d| {
            d.checked_mul(*d)
                .and_then(|n| n.checked_mul(std::mem::size_of::<PixelValue>()))
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| FilterError::InvalidParameters(format!("radius {} is too large", radius)))
}

/// Output for a radius where no window can hold an in-image majority.
///
/// A `d x d` window (`d = 2r+1`) covers at most `min(w, d) * min(h, d)`
/// image pixels. Once that is no more than `(d² - 1) / 2`, [`BORDER`]
/// fills rank `d² / 2` of every sorted window and the whole output is
/// border. Returns `None` when the filter has to run.
pub(crate) fn border_dominated(image: &Image, radius: u32) -> Option<Vec<PixelValue>> {
    let d = 2 * u128::from(radius) + 1;
    let inside = u128::from(image.width()).min(d) * u128::from(image.height()).min(d);
    (inside <= (d * d - 1) / 2).then(|| vec![BORDER; image.pixels().len()])
}

/// Which median filter implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MedianMethod {
    /// Full window recomputation per pixel
    Naive,
    /// Huang's per-row sliding kernel
    Huang,
    /// Per-column histogram reuse
    #[default]
    ConstantTime,
}

impl MedianMethod {
    /// All methods, in benchmark report order.
    pub const ALL: [MedianMethod; 3] = [
        MedianMethod::Huang,
        MedianMethod::ConstantTime,
        MedianMethod::Naive,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            MedianMethod::Naive => "naive",
            MedianMethod::Huang => "huang",
            MedianMethod::ConstantTime => "constant",
        }
    }
}

impl fmt::Display for MedianMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MedianMethod {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "naieve" => Ok(MedianMethod::Naive),
            "huang" => Ok(MedianMethod::Huang),
            "constant" | "constant-time" | "ctmf" => Ok(MedianMethod::ConstantTime),
            _ => Err(FilterError::UnknownMethod(s.to_string())),
        }
    }
}

/// Run the chosen median filter.
///
/// Returns the filtered pixels as a flat row-major sequence of length
/// `width * height`.
pub fn median_filter(
    image: &Image,
    radius: u32,
    method: MedianMethod,
) -> FilterResult<Vec<PixelValue>> {
    log::debug!(
        "{} median filter: {}x{} radius {}",
        method,
        image.width(),
        image.height(),
        radius
    );
    let start = Instant::now();
    let out = match method {
        MedianMethod::Naive => naive_median_filter(image, radius)?,
        MedianMethod::Huang => huang_median_filter(image, radius)?,
        MedianMethod::ConstantTime => constant_time_median_filter(image, radius)?,
    };
    log::debug!("{} median filter done in {:?}", method, start.elapsed());
    Ok(out)
}

/// Run the chosen median filter and wrap the result in an image with the
/// input's dimensions and color mode.
pub fn median_filter_image(image: &Image, radius: u32, method: MedianMethod) -> FilterResult<Image> {
    let pixels = median_filter(image, radius, method)?;
    Ok(Image::from_pixels(
        image.width(),
        image.height(),
        image.mode(),
        pixels,
    )?)
}
