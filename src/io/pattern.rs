//! Pattern file: the renderer-independent text matrix of codes
//!
//! One line per image row, the codes of that row concatenated with no
//! delimiter. Codes come from the same [`CodeBook`] the grid is built
//! from, so the text and the rendered image always agree.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::color::PixelMatrix;
use crate::analysis::ranking::CodeBook;
use crate::io::error::{Result, WithPath, file_system_error};

/// Write the pattern for `pixels` to `writer`
///
/// # Errors
///
/// Returns an error if a pixel color has no code or writing fails
pub fn write_pattern<W: Write>(pixels: &PixelMatrix, code_book: &CodeBook, writer: &mut W) -> Result<()> {
    for row in pixels.rows() {
        for &color in row {
            writer.write_all(code_book.resolve(color)?.as_str().as_bytes())?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// The pattern for `pixels` as a string
///
/// # Errors
///
/// Returns an error if a pixel color has no code
pub fn render_pattern(pixels: &PixelMatrix, code_book: &CodeBook) -> Result<String> {
    let mut buffer = Vec::new();
    write_pattern(pixels, code_book, &mut buffer)?;
    // Codes are `String`s, so the bytes are always valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Delete a pattern file left over from an earlier run
///
/// A missing file is not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed
pub fn remove_stale_pattern(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(file_system_error(path, "remove stale pattern", e)),
    }
}

/// Replace the file at `path` with the pattern for `pixels`
///
/// # Errors
///
/// Returns an error if the old file cannot be removed, the new one cannot
/// be created or written, or a pixel color has no code
pub fn write_pattern_file(path: &Path, pixels: &PixelMatrix, code_book: &CodeBook) -> Result<()> {
    remove_stale_pattern(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    let file = File::create(path).map_err(|e| file_system_error(path, "create pattern", e))?;
    let mut writer = BufWriter::new(file);
    write_pattern(pixels, code_book, &mut writer).with_path(path)?;
    writer
        .flush()
        .map_err(|e| file_system_error(path, "flush pattern", e))
}
