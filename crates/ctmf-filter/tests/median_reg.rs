//! Median filter regression test
//!
//! Checks the properties every filter must share:
//!   (1) output has `width * height` pixels in row-major order
//!   (2) naive, Huang and constant-time agree element for element
//!   (3) radius 0 returns the input, and repeated runs are identical
//!   (4) a constant image keeps its color inside and loses it at corners
//!   (5) the 3x3 literal scenario and its border-majority threshold
//!   (6) radii far beyond the image size return all border, without
//!       allocating a window of that size

use ctmf_core::{BORDER, ColorMode, Image, PixelValue};
use ctmf_filter::{
    MedianMethod, constant_time_median_filter, huang_median_filter, median_filter,
    median_filter_image, naive_median_filter,
};
use ctmf_test::{RegParams, constant_image, pattern_image};

const SIZES: [(u32, u32); 7] = [(1, 1), (1, 7), (7, 1), (2, 2), (5, 4), (9, 9), (16, 11)];

/// Number of in-image positions in the window at (x, y).
fn inside_count(w: u32, h: u32, x: u32, y: u32, r: u32) -> u32 {
    let span = |c: u32, n: u32| (c + r).min(n - 1) - c.saturating_sub(r) + 1;
    span(x, w) * span(y, h)
}

#[test]
fn median_reg_dimensions() {
    let mut rp = RegParams::new("median_dimensions");

    for (i, &(w, h)) in SIZES.iter().enumerate() {
        let image = pattern_image(w, h, i as u64).expect("pattern_image");
        for method in MedianMethod::ALL {
            for radius in [0, 1, 3] {
                let out = median_filter(&image, radius, method).expect("median_filter");
                rp.compare_values((w * h) as f64, out.len() as f64, 0.0);

                let filtered = median_filter_image(&image, radius, method).expect("image");
                rp.compare_values(w as f64, filtered.width() as f64, 0.0);
                rp.compare_values(h as f64, filtered.height() as f64, 0.0);
            }
        }
    }

    assert!(rp.cleanup(), "median_dimensions regression test failed");
}

#[test]
fn median_reg_cross_algorithm_parity() {
    let mut rp = RegParams::new("median_parity");

    for (i, &(w, h)) in SIZES.iter().enumerate() {
        let image = pattern_image(w, h, 100 + i as u64).expect("pattern_image");
        for radius in 0..=4 {
            let naive = naive_median_filter(&image, radius).expect("naive");
            let huang = huang_median_filter(&image, radius).expect("huang");
            let constant = constant_time_median_filter(&image, radius).expect("constant");
            rp.compare_pixels(&naive, &huang);
            rp.compare_pixels(&naive, &constant);
        }
    }

    let image = pattern_image(16, 11, 5).expect("pattern_image");
    let filtered = median_filter_image(&image, 2, MedianMethod::ConstantTime).expect("filter");
    rp.write_image(&filtered, "constant_r2").expect("write_image");

    assert!(rp.cleanup(), "median_parity regression test failed");
}

#[test]
fn median_reg_radius_zero_and_determinism() {
    let mut rp = RegParams::new("median_radius0");

    let image = pattern_image(12, 8, 9).expect("pattern_image");
    for method in MedianMethod::ALL {
        let out = median_filter(&image, 0, method).expect("radius 0");
        rp.compare_pixels(image.pixels(), &out);

        let first = median_filter(&image, 2, method).expect("first run");
        let second = median_filter(&image, 2, method).expect("second run");
        rp.compare_pixels(&first, &second);
    }

    assert!(rp.cleanup(), "median_radius0 regression test failed");
}

#[test]
fn median_reg_border_attenuation() {
    let mut rp = RegParams::new("median_border");

    let bright = PixelValue::new(240, 230, 220, 255);
    let (w, h) = (9u32, 9u32);
    let image = constant_image(w, h, bright).expect("constant_image");

    for radius in [1u32, 2, 3] {
        let window = (2 * radius + 1) * (2 * radius + 1);
        for method in MedianMethod::ALL {
            let out = median_filter(&image, radius, method).expect("median_filter");
            let mut interior_ok = true;
            let mut border_ok = true;
            for y in 0..h {
                for x in 0..w {
                    let value = out[(y * w + x) as usize];
                    let interior = x >= radius && y >= radius && x + radius < w && y + radius < h;
                    if interior {
                        interior_ok &= value == bright;
                    }
                    // Median index is window / 2: border wins once it fills past it
                    let borders = window - inside_count(w, h, x, y, radius);
                    let expected = if borders > window / 2 { BORDER } else { bright };
                    border_ok &= value == expected;
                }
            }
            rp.compare_values(1.0, if interior_ok { 1.0 } else { 0.0 }, 0.0);
            rp.compare_values(1.0, if border_ok { 1.0 } else { 0.0 }, 0.0);

            // Corners always see a border majority
            rp.compare_values(1.0, if out[0] != bright { 1.0 } else { 0.0 }, 0.0);
        }
    }

    assert!(rp.cleanup(), "median_border regression test failed");
}

#[test]
fn median_reg_literal_3x3() {
    let mut rp = RegParams::new("median_literal");

    let ten = PixelValue::new(10, 10, 10, 10);
    let image = Image::filled(3, 3, ColorMode::Rgba, ten).expect("image");

    // Corners: 4 pixels + 5 border -> border majority. Edges: 6 + 3 -> ten.
    let expected = vec![
        BORDER, ten, BORDER, //
        ten, ten, ten, //
        BORDER, ten, BORDER,
    ];
    for method in MedianMethod::ALL {
        let out = median_filter(&image, 1, method).expect("median_filter");
        rp.compare_pixels(&expected, &out);
        rp.compare_values(1.0, if out[4] == ten { 1.0 } else { 0.0 }, 0.0);
    }

    // 4x4: corners still 4 + 5, every other edge position 6 + 3
    let image = Image::filled(4, 4, ColorMode::Rgba, ten).expect("image");
    let out = median_filter(&image, 1, MedianMethod::ConstantTime).expect("median_filter");
    let borders = out.iter().filter(|p| p.is_border()).count();
    rp.compare_values(4.0, borders as f64, 0.0);

    assert!(rp.cleanup(), "median_literal regression test failed");
}

#[test]
fn median_reg_huge_radius() {
    let mut rp = RegParams::new("median_huge_radius");

    let bright = PixelValue::new(240, 230, 220, 255);
    for &(w, h) in SIZES.iter() {
        let image = constant_image(w, h, bright).expect("constant_image");
        for radius in [5u32, 16, 1 << 14, 1 << 30, u32::MAX] {
            // Per-pixel in-image count in u128 so the window size cannot overflow
            let r = u128::from(radius);
            let window = (2 * r + 1) * (2 * r + 1);
            let span = |c: u32, n: u32| {
                let c = u128::from(c);
                (c + r).min(u128::from(n) - 1) - c.saturating_sub(r) + 1
            };
            let mut expected = Vec::with_capacity((w * h) as usize);
            for y in 0..h {
                for x in 0..w {
                    let borders = window - span(x, w) * span(y, h);
                    expected.push(if borders > window / 2 { BORDER } else { bright });
                }
            }

            for method in MedianMethod::ALL {
                let out = median_filter(&image, radius, method).expect("median_filter");
                rp.compare_pixels(&expected, &out);
            }
        }
    }

    assert!(rp.cleanup(), "median_huge_radius regression test failed");
}

#[test]
fn median_reg_independent_passes() {
    let mut rp = RegParams::new("median_independent");

    let image_a = pattern_image(10, 6, 1).expect("pattern_image");
    let image_b = pattern_image(6, 10, 2).expect("pattern_image");
    let expected_a = naive_median_filter(&image_a, 2).expect("naive a");
    let expected_b = naive_median_filter(&image_b, 1).expect("naive b");

    let (got_a, got_b) = std::thread::scope(|s| {
        let a = s.spawn(|| constant_time_median_filter(&image_a, 2));
        let b = s.spawn(|| constant_time_median_filter(&image_b, 1));
        (a.join(), b.join())
    });
    rp.compare_pixels(&expected_a, &got_a.expect("thread a").expect("constant a"));
    rp.compare_pixels(&expected_b, &got_b.expect("thread b").expect("constant b"));

    assert!(rp.cleanup(), "median_independent regression test failed");
}

#[test]
fn median_reg_gray_mode_preserved() {
    let pixels = (0..20u8).map(|v| PixelValue::gray(v * 12)).collect();
    let image = Image::from_pixels(5, 4, ColorMode::Gray, pixels).expect("image");
    let filtered = median_filter_image(&image, 1, MedianMethod::Huang).expect("filter");
    assert_eq!(filtered.mode(), ColorMode::Gray);
    // Center of a monotone ramp stays put
    assert_eq!(filtered.get_pixel(2, 2), image.get_pixel(2, 2));
}
