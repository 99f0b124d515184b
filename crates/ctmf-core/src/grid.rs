//! Border-padded pixel access
//!
//! [`PixelGrid`] is the read-only view the median filters scan. It accepts
//! signed coordinates and answers [`BORDER`] for any position outside the
//! image, so window construction never has to special-case the edges.
//! Padding is constant; there is no reflect or clamp mode.

use crate::image::Image;
use crate::pixel::{BORDER, PixelValue};

/// Read-only 2-D view over an image with constant border padding.
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid<'a> {
    image: &'a Image,
    width: i64,
    height: i64,
}

impl<'a> PixelGrid<'a> {
    /// Wrap an image.
    pub fn new(image: &'a Image) -> Self {
        PixelGrid {
            image,
            width: image.width() as i64,
            height: image.height() as i64,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Pixel at column `x`, row `y`, or [`BORDER`] outside the image.
    #[inline]
    pub fn pixel(&self, x: i64, y: i64) -> PixelValue {
        if self.contains(x, y) {
            self.image.get_pixel_unchecked(x as u32, y as u32)
        } else {
            BORDER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorMode;

    #[test]
    fn test_inside_and_outside() {
        let pixels = (0..6).map(PixelValue::gray).collect();
        let image = Image::from_pixels(3, 2, ColorMode::Gray, pixels).unwrap();
        let grid = PixelGrid::new(&image);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel(0, 0), PixelValue::gray(0));
        assert_eq!(grid.pixel(2, 1), PixelValue::gray(5));
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (-5, -5), (100, 100)] {
            assert_eq!(grid.pixel(x, y), BORDER, "({x}, {y})");
        }
    }

    #[test]
    fn test_last_column_is_not_padded() {
        let image = Image::filled(4, 4, ColorMode::Rgba, PixelValue::gray(9)).unwrap();
        let grid = PixelGrid::new(&image);
        assert_eq!(grid.pixel(3, 3), PixelValue::gray(9));
        assert_eq!(grid.pixel(0, 3), PixelValue::gray(9));
    }
}
