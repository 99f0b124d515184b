//! Pixel values and their ordering
//!
//! A [`PixelValue`] is a fixed-arity tuple of four 8-bit channels. Two
//! values compare lexicographically over the tuple: red first, then green,
//! blue and alpha. The median filters rank whole tuples with this order;
//! they never compute per-channel medians.

use std::fmt;

/// A 4-channel pixel tuple `(r, g, b, a)`.
///
/// `Ord` is derived from the inner array and is therefore lexicographic.
///
/// # Examples
///
/// ```
/// use ctmf_core::PixelValue;
///
/// let a = PixelValue::new(10, 0, 0, 0);
/// let b = PixelValue::new(9, 255, 255, 255);
/// assert!(a > b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PixelValue(pub [u8; 4]);

/// Value substituted for every window position outside the image:
/// all channels zero, fully transparent.
pub const BORDER: PixelValue = PixelValue([0, 0, 0, 0]);

impl PixelValue {
    /// Create a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        PixelValue([r, g, b, a])
    }

    /// Create an opaque gray pixel `(v, v, v, 255)`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        PixelValue([v, v, v, 255])
    }

    /// Channel values in tuple order.
    #[inline]
    pub fn channels(self) -> [u8; 4] {
        self.0
    }

    /// Whether this is the border padding value.
    #[inline]
    pub fn is_border(self) -> bool {
        self == BORDER
    }
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "({}, {}, {}, {})", r, g, b, a)
    }
}
