//! Huang's incremental median filter
//!
//! For each output row the kernel is kept as a window of `2r+1` column
//! slices, each slice holding the `2r+1` pixels of one column over rows
//! `[y-r, y+r]`. Moving one pixel right evicts the leftmost slice and
//! fetches a single new slice at column `x+r`.
//!
//! Cost per pixel: O(r) fetches for the new slice plus the O(r² log r)
//! sort of the flattened kernel. Only window construction is cheaper
//! than the naive filter; extraction is the same.

use crate::rank::RankBuffer;
use crate::window::SlidingWindow;
use crate::{FilterError, FilterResult, border_dominated, kernel_dim};
use ctmf_core::{BORDER, Image, PixelGrid, PixelValue};

/// Fill `slice` with column `x` over rows `[y-r, y+r]`.
///
/// Columns outside the image produce a slice made entirely of [`BORDER`].
fn fill_column_slice(grid: &PixelGrid<'_>, x: i64, y: i64, r: i64, slice: &mut Vec<PixelValue>) {
    slice.clear();
    if x < 0 || x >= grid.width() as i64 {
        slice.resize((2 * r + 1) as usize, BORDER);
        return;
    }
    for dy in -r..=r {
        slice.push(grid.pixel(x, y + dy));
    }
}

/// Median filter with a per-row sliding kernel of column slices.
///
/// Returns the filtered pixels row-major, `width * height` entries.
pub fn huang_median_filter(image: &Image, radius: u32) -> FilterResult<Vec<PixelValue>> {
    if let Some(out) = border_dominated(image, radius) {
        return Ok(out);
    }
    let dim = kernel_dim(radius)?;
    let grid = PixelGrid::new(image);
    let (w, h) = (grid.width(), grid.height());
    let r = radius as i64;

    let mut kernel: SlidingWindow<Vec<PixelValue>> = SlidingWindow::new(dim);
    // Evicted slices, refilled instead of reallocated.
    let mut pool: Vec<Vec<PixelValue>> = Vec::with_capacity(dim + 1);
    let mut buf = RankBuffer::with_capacity(dim * dim);
    let mut out = Vec::with_capacity(w * h);

    for y in 0..h {
        let yi = y as i64;

        // Prime with columns [-r, r-1]; the first step of the row adds column r.
        while let Some(slice) = kernel.pop_oldest() {
            pool.push(slice);
        }
        for x in -r..r {
            let mut slice = pool.pop().unwrap_or_else(|| Vec::with_capacity(dim));
            fill_column_slice(&grid, x, yi, r, &mut slice);
            kernel.push(slice);
        }

        for x in 0..w {
            let mut slice = pool.pop().unwrap_or_else(|| Vec::with_capacity(dim));
            fill_column_slice(&grid, x as i64 + r, yi, r, &mut slice);
            if let Some(evicted) = kernel.push(slice) {
                pool.push(evicted);
            }

            buf.clear();
            for slice in kernel.iter() {
                buf.extend_from_slice(slice);
            }
            out.push(buf.median().ok_or(FilterError::EmptyWindow { x, y })?);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::naive_median_filter;
    use ctmf_core::ColorMode;

    #[test]
    fn test_column_slice_outside_is_all_border() {
        let image = Image::filled(2, 2, ColorMode::Rgba, PixelValue::gray(1)).unwrap();
        let grid = PixelGrid::new(&image);
        let mut slice = vec![PixelValue::gray(99)];
        fill_column_slice(&grid, 2, 0, 2, &mut slice);
        assert_eq!(slice, vec![BORDER; 5]);
        fill_column_slice(&grid, -1, 0, 1, &mut slice);
        assert_eq!(slice, vec![BORDER; 3]);
    }

    #[test]
    fn test_column_slice_pads_rows() {
        let image = Image::filled(2, 2, ColorMode::Rgba, PixelValue::gray(1)).unwrap();
        let grid = PixelGrid::new(&image);
        let mut slice = Vec::new();
        fill_column_slice(&grid, 1, 0, 1, &mut slice);
        assert_eq!(slice, vec![BORDER, PixelValue::gray(1), PixelValue::gray(1)]);
    }

    #[test]
    fn test_matches_naive_on_gradient() {
        let pixels = (0..35u32)
            .map(|i| PixelValue::new((i * 37 % 11) as u8, (i % 3) as u8, 0, 255))
            .collect();
        let image = Image::from_pixels(7, 5, ColorMode::Rgba, pixels).unwrap();
        for radius in 0..4 {
            assert_eq!(
                huang_median_filter(&image, radius).unwrap(),
                naive_median_filter(&image, radius).unwrap(),
                "radius {radius}"
            );
        }
    }

    #[test]
    fn test_reused_slices_carry_no_stale_rows() {
        // Every row has a distinct level, so a slice refilled from the
        // pool with leftovers from an earlier row would change the result.
        let pixels = (0..6 * 9)
            .map(|i: u32| PixelValue::new((i / 6 * 25) as u8, (i % 6) as u8, 0, 255))
            .collect();
        let image = Image::from_pixels(6, 9, ColorMode::Rgba, pixels).unwrap();
        for radius in 1..=2 {
            assert_eq!(
                huang_median_filter(&image, radius).unwrap(),
                naive_median_filter(&image, radius).unwrap(),
                "radius {radius}"
            );
        }
    }
}
