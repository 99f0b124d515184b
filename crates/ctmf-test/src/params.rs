//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use ctmf_core::{Image, PixelValue};
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check values only (default)
    #[default]
    Compare,
    /// Check values and write images for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index, the mode and
/// every recorded failure. Finish a test with [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "parity")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters, configured from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        if mode == RegTestMode::Display {
            let _ = fs::create_dir_all(regout_dir());
        }

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two flat pixel sequences element by element
    pub fn compare_pixels(&mut self, expected: &[PixelValue], actual: &[PixelValue]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: pixel comparison for index {} - length {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            return self.fail(msg);
        }

        if let Some(pos) = expected.iter().zip(actual).position(|(a, b)| a != b) {
            let msg = format!(
                "Failure in {}_reg: pixel comparison for index {} - mismatch at {}: {} vs {}",
                self.test_name, self.index, pos, expected[pos], actual[pos]
            );
            return self.fail(msg);
        }

        true
    }

    /// Compare two images for exact equality
    pub fn compare_images(&mut self, image1: &Image, image2: &Image) -> bool {
        if !image1.sizes_equal(image2) {
            self.index += 1;
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch {}x{} vs {}x{}",
                self.test_name,
                self.index,
                image1.width(),
                image1.height(),
                image2.width(),
                image2.height()
            );
            return self.fail(msg);
        }
        self.compare_pixels(image1.pixels(), image2.pixels())
    }

    /// Write an image to `tests/regout/` in display mode.
    ///
    /// Does nothing in compare mode.
    pub fn write_image(&mut self, image: &Image, tag: &str) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        let path = format!("{}/{}.{}.png", regout_dir(), self.test_name, tag);
        ctmf_io::write_image(image, &path).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
