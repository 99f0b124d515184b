//! Constant-time median filter (column-histogram reuse)
//!
//! The filter keeps a [`ColumnBank`]: one [`ColumnHistogram`] per image
//! column, each a window of the `2r+1` pixels of that column over rows
//! `[y-r, y+r]`. When the scan moves to a new row every histogram slides
//! down by exactly one pixel, so maintaining the bank costs O(1) per
//! output pixel regardless of the radius.
//!
//! The kernel for output `(x, y)` is the `2r+1` histograms of columns
//! `[x-r, x+r]`. It is itself a sliding window of column indices: moving
//! one pixel right adds column `x+r` and drops column `x-r-1`. Columns
//! outside the image contribute `2r+1` [`BORDER`] values.
//!
//! "Constant-time" here refers to column reuse only. The median is still
//! extracted by sorting the `(2r+1)²` kernel values, so extraction stays
//! O(r² log r) per pixel. An O(1) extractor would additionally need
//! counting histograms with a running rank pointer, which this filter
//! does not implement.

use crate::rank::RankBuffer;
use crate::window::SlidingWindow;
use crate::{FilterError, FilterResult, border_dominated, kernel_dim};
use ctmf_core::{BORDER, Image, PixelGrid, PixelValue};

/// Vertical slice of one column over rows `[y-r, y+r]`.
#[derive(Debug, Clone)]
pub struct ColumnHistogram {
    window: SlidingWindow<PixelValue>,
}

impl ColumnHistogram {
    /// Histogram for column `x`, primed with `r` border values followed by
    /// rows `0..r`.
    ///
    /// That is one entry short of full: the first [`slide`](Self::slide)
    /// for row 0 appends row `r` and completes the window.
    pub fn primed(grid: &PixelGrid<'_>, x: usize, radius: usize) -> Self {
        let mut window = SlidingWindow::new(2 * radius + 1);
        for _ in 0..radius {
            window.push(BORDER);
        }
        for row in 0..radius {
            window.push(grid.pixel(x as i64, row as i64));
        }
        ColumnHistogram { window }
    }

    /// Append the next pixel below, evicting the topmost one when full.
    #[inline]
    pub fn slide(&mut self, value: PixelValue) {
        self.window.push(value);
    }

    /// Number of pixels currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Pixels from top to bottom.
    pub fn values(&self) -> impl Iterator<Item = PixelValue> + '_ {
        self.window.iter().copied()
    }

    /// Append the pixels to `out`, top to bottom.
    #[inline]
    pub fn copy_into(&self, out: &mut Vec<PixelValue>) {
        self.window.copy_into(out);
    }
}

/// One [`ColumnHistogram`] per image column, owned by a single filter pass.
#[derive(Debug)]
pub struct ColumnBank<'a> {
    grid: PixelGrid<'a>,
    radius: usize,
    columns: Vec<ColumnHistogram>,
}

impl<'a> ColumnBank<'a> {
    /// Prime a histogram for every column of `grid`.
    pub fn new(grid: PixelGrid<'a>, radius: usize) -> Self {
        let columns = (0..grid.width())
            .map(|x| ColumnHistogram::primed(&grid, x, radius))
            .collect();
        ColumnBank {
            grid,
            radius,
            columns,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Slide column `x` so that it covers rows `[y-r, y+r]`.
    ///
    /// Must be called exactly once per column per output row, in row order.
    #[inline]
    pub fn advance(&mut self, x: usize, y: usize) {
        let value = self.grid.pixel(x as i64, (y + self.radius) as i64);
        self.columns[x].slide(value);
    }

    /// Histogram of column `x`.
    #[inline]
    pub fn column(&self, x: usize) -> &ColumnHistogram {
        &self.columns[x]
    }
}

/// Median filter reusing per-column histograms across rows.
///
/// Returns the filtered pixels row-major, `width * height` entries.
pub fn constant_time_median_filter(image: &Image, radius: u32) -> FilterResult<Vec<PixelValue>> {
    if let Some(out) = border_dominated(image, radius) {
        return Ok(out);
    }
    let dim = kernel_dim(radius)?;
    let r = radius as usize;
    let grid = PixelGrid::new(image);
    let (w, h) = (grid.width(), grid.height());

    let mut bank = ColumnBank::new(grid, r);
    // `None` marks a column outside the image.
    let mut kernel: SlidingWindow<Option<usize>> = SlidingWindow::new(dim);
    let mut buf = RankBuffer::with_capacity(dim * dim);
    let mut out = Vec::with_capacity(w * h);

    for y in 0..h {
        // Prime with columns [-r, r-1]; the first step of the row adds column r.
        kernel.clear();
        for c in -(r as i64)..r as i64 {
            if c >= 0 && (c as usize) < w {
                bank.advance(c as usize, y);
                kernel.push(Some(c as usize));
            } else {
                kernel.push(None);
            }
        }

        for x in 0..w {
            let c = x + r;
            if c < w {
                bank.advance(c, y);
                kernel.push(Some(c));
            } else {
                kernel.push(None);
            }

            buf.clear();
            for entry in kernel.iter() {
                match entry {
                    Some(c) => bank.column(*c).copy_into(buf.values_mut()),
                    None => buf.extend_border(dim),
                }
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

    fn column_image() -> Image {
        // 2 columns, 4 rows, value = row index
        let pixels = (0..8).map(|i| PixelValue::gray(i / 2)).collect();
        Image::from_pixels(2, 4, ColorMode::Gray, pixels).unwrap()
    }

    #[test]
    fn test_primed_histogram() {
        let image = column_image();
        let grid = PixelGrid::new(&image);
        let hist = ColumnHistogram::primed(&grid, 1, 2);
        assert_eq!(hist.len(), 4);
        assert_eq!(
            hist.values().collect::<Vec<_>>(),
            vec![BORDER, BORDER, PixelValue::gray(0), PixelValue::gray(1)]
        );
    }

    #[test]
    fn test_bank_slides_one_row_at_a_time() {
        let image = column_image();
        let mut bank = ColumnBank::new(PixelGrid::new(&image), 1);
        assert_eq!(bank.width(), 2);

        let expected = [
            vec![BORDER, PixelValue::gray(0), PixelValue::gray(1)],
            vec![PixelValue::gray(0), PixelValue::gray(1), PixelValue::gray(2)],
            vec![PixelValue::gray(1), PixelValue::gray(2), PixelValue::gray(3)],
            vec![PixelValue::gray(2), PixelValue::gray(3), BORDER],
        ];
        for (y, rows) in expected.iter().enumerate() {
            bank.advance(0, y);
            assert_eq!(&bank.column(0).values().collect::<Vec<_>>(), rows, "row {y}");
            assert_eq!(bank.column(0).len(), 3);
        }
        // Column 1 was never advanced
        assert_eq!(bank.column(1).len(), 2);
    }

    #[test]
    fn test_radius_zero_bank() {
        let image = column_image();
        let mut bank = ColumnBank::new(PixelGrid::new(&image), 0);
        assert!(bank.column(0).is_empty());
        bank.advance(0, 3);
        assert_eq!(bank.column(0).values().collect::<Vec<_>>(), vec![PixelValue::gray(3)]);
    }

    #[test]
    fn test_window_wider_than_image() {
        // The kernel spans past both side edges but the image still wins
        // the center windows, so the bank does the work.
        for (w, h, radius) in [(3u32, 8u32, 2u32), (4, 9, 3)] {
            let pixels = (0..w * h)
                .map(|v| PixelValue::new((v * 37 % 251) as u8, 0, 0, 255))
                .collect();
            let image = Image::from_pixels(w, h, ColorMode::Rgba, pixels).unwrap();
            assert!(crate::border_dominated(&image, radius).is_none());
            assert_eq!(
                constant_time_median_filter(&image, radius).unwrap(),
                naive_median_filter(&image, radius).unwrap(),
                "{w}x{h} radius {radius}"
            );
        }
    }
}
