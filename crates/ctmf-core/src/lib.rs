//! ctmf-core - Basic data structures for windowed median filtering
//!
//! This crate provides the types shared by the filter, I/O and test crates:
//!
//! - [`Image`] / [`ImageMut`] - Immutable (shared) and mutable image containers
//! - [`PixelValue`] - A 4-channel pixel tuple with lexicographic ordering
//! - [`BORDER`] - The constant padding value used outside image bounds
//! - [`PixelGrid`] - Read-only, border-padded 2-D view over an image
//! - [`ColorMode`] - Channel layout an image was decoded from / is encoded to

pub mod error;
pub mod grid;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use image::{ColorMode, Image, ImageMut};
pub use pixel::{BORDER, PixelValue};
