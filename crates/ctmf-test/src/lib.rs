//! ctmf-test - Regression test harness for the median filters
//!
//! Two modes, chosen by the `REGTEST_MODE` environment variable:
//!
//! - **Compare** (default): check values and images, report failures
//! - **Display**: additionally write every checked image to `tests/regout/`
//!
//! # Usage
//!
//! ```ignore
//! use ctmf_test::{RegParams, pattern_image};
//!
//! let mut rp = RegParams::new("parity");
//! rp.compare_values(81.0, out.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! The test images are synthetic and deterministic, so there are no
//! fixture files to keep in sync.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use ctmf_core::{ColorMode, Image, PixelValue};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // ctmf-test is at crates/ctmf-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// An RGBA image with every pixel set to `value`.
pub fn constant_image(width: u32, height: u32, value: PixelValue) -> TestResult<Image> {
    Ok(Image::filled(width, height, ColorMode::Rgba, value)?)
}

/// A deterministic pseudo-random RGBA image.
///
/// Pixels come from a xorshift sequence seeded by `seed`; the same
/// arguments always produce the same image. Channels are restricted to
/// a few levels so windows contain many ties.
pub fn pattern_image(width: u32, height: u32, seed: u64) -> TestResult<Image> {
    let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
    let len = width as usize * height as usize;
    let mut pixels = Vec::with_capacity(len);
    for _ in 0..len {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let bytes = state.to_le_bytes();
        pixels.push(PixelValue::new(
            bytes[0] % 4 * 60,
            bytes[1],
            bytes[2] % 2 * 255,
            255,
        ));
    }
    Ok(Image::from_pixels(width, height, ColorMode::Rgba, pixels)?)
}
