//! PNG image format support
//!
//! Decoding normalizes every PNG layout to 8 bits per channel (palettes
//! expanded, 16-bit samples stripped) and maps it onto 4-channel
//! [`PixelValue`]s:
//!
//! | PNG layout  | `ColorMode` | pixel           |
//! |-------------|-------------|-----------------|
//! | gray        | `Gray`      | `(v, v, v, 255)`|
//! | gray+alpha  | `GrayAlpha` | `(v, v, v, a)`  |
//! | RGB         | `Rgb`       | `(r, g, b, 255)`|
//! | RGBA        | `Rgba`      | `(r, g, b, a)`  |
//!
//! Encoding writes the image's `ColorMode` back out.

use crate::{IoError, IoResult};
use ::png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use ctmf_core::{ColorMode, Image, PixelValue};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after expansion: {:?}",
            output_info.bit_depth
        )));
    }

    let (mode, samples) = match output_info.color_type {
        ColorType::Grayscale => (ColorMode::Gray, 1),
        ColorType::GrayscaleAlpha => (ColorMode::GrayAlpha, 2),
        ColorType::Rgb => (ColorMode::Rgb, 3),
        ColorType::Rgba => (ColorMode::Rgba, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for px in row.chunks_exact(samples).take(width as usize) {
            let value = match mode {
                ColorMode::Gray => PixelValue::gray(px[0]),
                ColorMode::GrayAlpha => PixelValue::new(px[0], px[0], px[0], px[1]),
                ColorMode::Rgb => PixelValue::new(px[0], px[1], px[2], 255),
                ColorMode::Rgba => PixelValue::new(px[0], px[1], px[2], px[3]),
            };
            pixels.push(value);
        }
    }

    Ok(Image::from_pixels(width, height, mode, pixels)?)
}

/// Write a PNG image
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();

    let color_type = match image.mode() {
        ColorMode::Gray => ColorType::Grayscale,
        ColorMode::GrayAlpha => ColorType::GrayscaleAlpha,
        ColorMode::Rgb => ColorType::Rgb,
        ColorMode::Rgba => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let samples = image.mode().channels() as usize;
    let mut data = Vec::with_capacity(image.pixels().len() * samples);
    for &pixel in image.pixels() {
        let [r, g, b, a] = pixel.channels();
        match image.mode() {
            ColorMode::Gray => data.push(r),
            ColorMode::GrayAlpha => data.extend_from_slice(&[r, a]),
            ColorMode::Rgb => data.extend_from_slice(&[r, g, b]),
            ColorMode::Rgba => data.extend_from_slice(&[r, g, b, a]),
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_gray_is_widened_and_narrowed() {
        let pixels = (0..12u8).map(|v| PixelValue::gray(v * 20)).collect();
        let image = Image::from_pixels(4, 3, ColorMode::Gray, pixels).unwrap();

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.mode(), ColorMode::Gray);
        assert_eq!(image2.width(), 4);
        assert_eq!(image2.height(), 3);
        assert_eq!(image2.get_pixel(3, 2), Some(PixelValue::gray(220)));
    }

    #[test]
    fn test_png_rgb_drops_alpha() {
        let image = Image::filled(2, 2, ColorMode::Rgb, PixelValue::new(1, 2, 3, 0)).unwrap();

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.mode(), ColorMode::Rgb);
        assert_eq!(image2.get_pixel(1, 1), Some(PixelValue::new(1, 2, 3, 255)));
    }

    #[test]
    fn test_png_gray_alpha_keeps_alpha() {
        let image =
            Image::filled(3, 1, ColorMode::GrayAlpha, PixelValue::new(40, 40, 40, 7)).unwrap();

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let image2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(image2.mode(), ColorMode::GrayAlpha);
        assert_eq!(image2.get_pixel(2, 0), Some(PixelValue::new(40, 40, 40, 7)));
    }

    #[test]
    fn test_read_garbage_fails() {
        let result = read_png(Cursor::new(vec![1u8, 2, 3, 4]));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
