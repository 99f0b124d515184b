//! Image - The pixel container filtered by the median filters
//!
//! An image is a `width x height` row-major buffer of [`PixelValue`]s plus
//! the [`ColorMode`] it was decoded from, which decides how it is encoded
//! again on output.
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership) and is immutable.
//! To modify pixel data, take a copy with [`Image::to_mut`], then convert
//! back with `Into<Image>`.

mod access;

use crate::error::{Error, Result};
use crate::pixel::PixelValue;
use std::sync::Arc;

/// Channel layout of an image on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Single gray channel
    Gray,
    /// Gray plus alpha
    GrayAlpha,
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    #[default]
    Rgba,
}

impl ColorMode {
    /// Number of samples per pixel in this mode.
    pub fn channels(self) -> u32 {
        match self {
            ColorMode::Gray => 1,
            ColorMode::GrayAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }
}

/// Internal image data
#[derive(Debug, Clone)]
struct ImageData {
    width: u32,
    height: u32,
    mode: ColorMode,
    /// Row-major pixels, `width * height` entries
    data: Vec<PixelValue>,
}

impl ImageData {
    fn check_dimensions(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }
}

/// Immutable image container
///
/// # Examples
///
/// ```
/// use ctmf_core::{ColorMode, Image};
///
/// let image = Image::new(640, 480, ColorMode::Rgba).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.pixels().len(), 640 * 480);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with every pixel set to `(0, 0, 0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, mode: ColorMode) -> Result<Self> {
        Self::filled(width, height, mode, PixelValue::default())
    }

    /// Create a new image with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, mode: ColorMode, value: PixelValue) -> Result<Self> {
        let len = ImageData::check_dimensions(width, height)?;
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                mode,
                data: vec![value; len],
            }),
        })
    }

    /// Build an image from a flat, row-major pixel sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(
        width: u32,
        height: u32,
        mode: ColorMode,
        pixels: Vec<PixelValue>,
    ) -> Result<Self> {
        let expected = ImageData::check_dimensions(width, height)?;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                mode,
                data: pixels,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the color mode.
    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.inner.mode
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[PixelValue] {
        &self.inner.data
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a mutable deep copy.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable image container
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}
