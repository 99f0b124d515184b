//! Naive median filter
//!
//! Rebuilds the whole `(2r+1) x (2r+1)` window for every output pixel and
//! extracts its median. No state is carried between pixels, which makes it
//! the reference the incremental filters are checked against.
//!
//! Cost per pixel: O(r²) fetches plus an O(r² log r) sort.

use crate::rank::RankBuffer;
use crate::{FilterError, FilterResult, border_dominated, kernel_dim};
use ctmf_core::{Image, PixelGrid, PixelValue};

/// Median filter by full window recomputation.
///
/// Returns the filtered pixels row-major, `width * height` entries.
pub fn naive_median_filter(image: &Image, radius: u32) -> FilterResult<Vec<PixelValue>> {
    if let Some(out) = border_dominated(image, radius) {
        return Ok(out);
    }
    let dim = kernel_dim(radius)?;
    let grid = PixelGrid::new(image);
    let (w, h) = (grid.width(), grid.height());
    let r = radius as i64;

    let mut buf = RankBuffer::with_capacity(dim * dim);
    let mut out = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            buf.clear();
            for dy in -r..=r {
                for dx in -r..=r {
                    buf.push(grid.pixel(x as i64 + dx, y as i64 + dy));
                }
            }
            out.push(buf.median().ok_or(FilterError::EmptyWindow { x, y })?);
        }
    }
    Ok(out)
}
