//! Order-statistic extraction
//!
//! Every filter ends each output pixel the same way: flatten the window
//! into one sequence, sort it by the lexicographic [`PixelValue`] order and
//! take the element at index `len / 2`. For odd lengths that is the true
//! median; for even lengths it is the upper of the two middle values.
//!
//! Extraction costs O(n log n) in the window size for all three filters.
//! The incremental filters only save on *building* the window.

use ctmf_core::{BORDER, PixelValue};

/// Median of a window of any shape.
///
/// `window` is flattened (rows, column slices, or a flat list all work),
/// sorted, and the element at the midpoint rank is returned. Returns
/// `None` for an empty window.
///
/// # Examples
///
/// ```
/// use ctmf_core::PixelValue;
/// use ctmf_filter::median;
///
/// let rows = vec![
///     vec![PixelValue::gray(9), PixelValue::gray(1)],
///     vec![PixelValue::gray(5)],
/// ];
/// assert_eq!(median(rows), Some(PixelValue::gray(5)));
/// ```
pub fn median<W, S>(window: W) -> Option<PixelValue>
where
    W: IntoIterator<Item = S>,
    S: IntoIterator<Item = PixelValue>,
{
    let mut buf = RankBuffer::default();
    for slice in window {
        buf.extend(slice);
    }
    buf.median()
}

/// Reusable scratch buffer for median extraction.
///
/// Filters clear and refill one buffer per output pixel so the sort
/// never allocates after the first pixel.
#[derive(Debug, Default)]
pub struct RankBuffer {
    values: Vec<PixelValue>,
}

impl RankBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        RankBuffer {
            values: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[inline]
    pub fn push(&mut self, value: PixelValue) {
        self.values.push(value);
    }

    #[inline]
    pub fn extend_from_slice(&mut self, values: &[PixelValue]) {
        self.values.extend_from_slice(values);
    }

    /// Append `count` copies of [`BORDER`].
    #[inline]
    pub fn extend_border(&mut self, count: usize) {
        self.values.extend(std::iter::repeat_n(BORDER, count));
    }

    /// Direct access for bulk fills from a sliding window.
    #[inline]
    pub fn values_mut(&mut self) -> &mut Vec<PixelValue> {
        &mut self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sort the buffered values and return the one at index `len / 2`.
    pub fn median(&mut self) -> Option<PixelValue> {
        if self.values.is_empty() {
            return None;
        }
        self.values.sort_unstable();
        Some(self.values[self.values.len() / 2])
    }
}

impl Extend<PixelValue> for RankBuffer {
    fn extend<I: IntoIterator<Item = PixelValue>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
