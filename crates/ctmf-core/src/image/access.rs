//! Pixel access functions
//!
//! Getting and setting individual pixels by `(x, y)` coordinate.

use super::{Image, ImageMut};
use crate::error::{Error, Result};
use crate::pixel::PixelValue;

impl Image {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<PixelValue> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without the bounds check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index lies outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> PixelValue {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }
}

impl ImageMut {
    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: PixelValue) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the pixel at (x, y) without the bounds check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index lies outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: PixelValue) {
        let idx = y as usize * self.inner.width as usize + x as usize;
        self.inner.data[idx] = val;
    }
}
