//! Image decoding into pixel matrices

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::analysis::color::{PixelMatrix, pixel_matrix};
use crate::io::error::{PatternError, Result};

/// A decoded input image together with the encoded bytes it came from
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Decoded pixels
    pub pixels: PixelMatrix,
    /// Format sniffed from the file contents
    pub format: ImageFormat,
    /// The file exactly as read
    pub bytes: Vec<u8>,
}

impl SourceImage {
    /// MIME type of the encoded bytes, e.g. `image/png`
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

/// Read and decode the image at `path`
///
/// The format is sniffed from the file contents, so any format enabled in
/// the `image` crate (PNG, JPEG, WEBP, ...) is accepted regardless of the
/// file extension.
///
/// # Errors
///
/// Returns [`PatternError::DecodeFailure`] if the file cannot be read or
/// its format is not recognized
pub fn load_source(path: &Path) -> Result<SourceImage> {
    let decode_failure = |source| PatternError::DecodeFailure {
        path: path.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(path).map_err(|e| decode_failure(image::ImageError::IoError(e)))?;

    let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()
        .map_err(|e| decode_failure(image::ImageError::IoError(e)))?;
    let format = reader.format();
    let decoded = reader.decode().map_err(decode_failure)?;

    let format = format.ok_or_else(|| {
        decode_failure(image::ImageError::Unsupported(
            image::error::UnsupportedError::from_format_and_kind(
                image::error::ImageFormatHint::Unknown,
                image::error::UnsupportedErrorKind::Format(image::error::ImageFormatHint::Unknown),
            ),
        ))
    })?;

    Ok(SourceImage {
        pixels: pixel_matrix(&decoded.to_rgba8()),
        format,
        bytes,
    })
}

/// Decode the image at `path` into a pixel matrix
///
/// # Errors
///
/// Same conditions as [`load_source`]
pub fn load_pixels(path: &Path) -> Result<PixelMatrix> {
    load_source(path).map(|source| source.pixels)
}
