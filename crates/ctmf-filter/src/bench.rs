//! Benchmark harness
//!
//! Times each filter over a set of radii and renders the averages as CSV
//! with header `Radius,Huang,Constant,naieve`. The header spelling is kept
//! as-is so existing spreadsheets keep importing the output.

use crate::{FilterError, FilterResult, MedianMethod, median_filter};
use ctmf_core::Image;
use std::fmt::Write as _;
use std::io;
use std::time::{Duration, Instant};

/// CSV header of [`BenchmarkReport::to_csv`].
pub const CSV_HEADER: &str = "Radius,Huang,Constant,naieve";

/// Average wall-clock duration of `iterations` runs of `method` for each
/// radius in `radii`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `iterations` is 0, or
/// any error from the filter itself.
pub fn benchmark(
    method: MedianMethod,
    image: &Image,
    iterations: u32,
    radii: &[u32],
) -> FilterResult<Vec<Duration>> {
    if iterations == 0 {
        return Err(FilterError::InvalidParameters(
            "iterations must be >= 1".into(),
        ));
    }

    let mut results = Vec::with_capacity(radii.len());
    for &radius in radii {
        let mut total = Duration::ZERO;
        for _ in 0..iterations {
            let start = Instant::now();
            let out = median_filter(image, radius, method)?;
            total += start.elapsed();
            std::hint::black_box(out);
        }
        let avg = total / iterations;
        log::info!("{} r={}: avg {:?} over {} runs", method, radius, avg, iterations);
        results.push(avg);
    }
    Ok(results)
}

/// Per-radius average durations of all three filters.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub radii: Vec<u32>,
    pub huang: Vec<Duration>,
    pub constant: Vec<Duration>,
    pub naive: Vec<Duration>,
}

impl BenchmarkReport {
    /// Benchmark Huang, constant-time and naive, in that order.
    pub fn run(image: &Image, iterations: u32, radii: &[u32]) -> FilterResult<Self> {
        let huang = benchmark(MedianMethod::Huang, image, iterations, radii)?;
        let constant = benchmark(MedianMethod::ConstantTime, image, iterations, radii)?;
        let naive = benchmark(MedianMethod::Naive, image, iterations, radii)?;
        Ok(BenchmarkReport {
            radii: radii.to_vec(),
            huang,
            constant,
            naive,
        })
    }

    /// Average durations of one method.
    pub fn durations(&self, method: MedianMethod) -> &[Duration] {
        match method {
            MedianMethod::Huang => &self.huang,
            MedianMethod::ConstantTime => &self.constant,
            MedianMethod::Naive => &self.naive,
        }
    }

    /// Render as CSV: the header, then `radius,huang,constant,naive` per
    /// radius with durations in seconds.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        let _ = writeln!(csv, "{}", CSV_HEADER);
        for (i, radius) in self.radii.iter().enumerate() {
            let secs = |d: &[Duration]| d.get(i).map_or(0.0, Duration::as_secs_f64);
            let _ = writeln!(
                csv,
                "{},{},{},{}",
                radius,
                secs(&self.huang),
                secs(&self.constant),
                secs(&self.naive)
            );
        }
        csv
    }

    /// Write [`to_csv`](Self::to_csv) output to `writer`.
    pub fn write_csv<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_csv().as_bytes())
    }
}
