//! ctmf-io - Image I/O for the median filters
//!
//! Reads and writes PNG files and implements the output naming
//! convention `{base_name}_r{radius}.png`.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use crate::png::{read_png, write_png};

use ctmf_core::Image;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::{Path, PathBuf};

/// The 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the file is not a PNG.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    if !data.starts_with(&PNG_SIGNATURE) {
        return Err(IoError::UnsupportedFormat(format!(
            "{} is not a PNG file",
            path.display()
        )));
    }
    let image = read_png(Cursor::new(data))?;
    log::debug!(
        "read {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.mode()
    );
    Ok(image)
}

/// Write an image to a file path as PNG.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the path has an extension
/// other than `png`.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if let Some(ext) = path.extension().and_then(|e| e.to_str())
        && !ext.eq_ignore_ascii_case("png")
    {
        return Err(IoError::UnsupportedFormat(format!(
            "cannot write .{} files, only .png",
            ext
        )));
    }
    let file = File::create(path)?;
    write_png(image, BufWriter::new(file))?;
    log::debug!(
        "wrote {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.mode()
    );
    Ok(())
}

/// Output path for a filtered image: `{base_name}_r{radius}.png`.
///
/// `base_name` is the input path with its extension stripped, so the
/// output lands next to the input.
///
/// # Examples
///
/// ```
/// use ctmf_io::output_path;
/// use std::path::Path;
///
/// assert_eq!(output_path(Path::new("dir/test.png"), 3), Path::new("dir/test_r3.png"));
/// ```
pub fn output_path(input: &Path, radius: u32) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_r{}.png", stem, radius))
}
