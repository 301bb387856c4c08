//! Error types and path context for pattern synthesis

use std::fmt;
use std::path::{Path, PathBuf};

use crate::analysis::color::Color;

/// Placeholder used when an error was converted without knowing its file
const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for every stage of a conversion run
#[derive(Debug)]
pub enum PatternError {
    /// Input path unreadable or image format unrecognized
    DecodeFailure {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// More distinct colors than the alphabet has symbols
    TooManyColors {
        /// Distinct colors found in the image
        count: usize,
        /// Number of symbols in the alphabet
        limit: usize,
    },

    /// A cell inside the declared grid bounds was never populated
    ///
    /// This is a construction-order bug, never an input problem.
    GridLookupInconsistency {
        /// Column that was requested
        column: usize,
        /// Row that was requested
        row: usize,
    },

    /// A cell was written outside the declared grid bounds
    CellOutOfBounds {
        /// Column that was written
        column: usize,
        /// Row that was written
        row: usize,
        /// Declared grid width in cells
        width: usize,
        /// Declared grid height in cells
        height: usize,
    },

    /// A pixel color has no code in the code book
    UnknownColor {
        /// The color that could not be resolved
        color: Color,
    },

    /// Canvas size does not match the grid it should hold
    CanvasMismatch {
        /// Size the grid needs (width, height) in pixels
        expected: (u32, u32),
        /// Size the canvas has
        actual: (u32, u32),
    },

    /// The drawing surface rejected a draw call
    Surface {
        /// Draw operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode or save the rendered grid image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Font for code labels could not be loaded
    FontLoad {
        /// Path of the font file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeFailure { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::TooManyColors { count, limit } => {
                write!(
                    f,
                    "Too many colors to create pattern: {count} colors, limit {limit}"
                )
            }
            Self::GridLookupInconsistency { column, row } => {
                write!(
                    f,
                    "Grid cell ({column}, {row}) was never populated but lies inside the grid"
                )
            }
            Self::CellOutOfBounds {
                column,
                row,
                width,
                height,
            } => {
                write!(
                    f,
                    "Cell ({column}, {row}) is outside the {width}x{height} grid"
                )
            }
            Self::UnknownColor { color } => {
                write!(f, "Color {color} has no assigned code")
            }
            Self::CanvasMismatch { expected, actual } => {
                write!(
                    f,
                    "Canvas is {}x{} but the grid needs {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::Surface { operation, reason } => {
                write!(f, "Drawing surface error during {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FontLoad { path, reason } => {
                write!(f, "Failed to load font '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DecodeFailure { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Attaches a file path to errors that were converted without one
pub trait WithPath<T> {
    /// Replace an unknown path in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<PatternError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors converted through `From` carry the placeholder
            match &mut error {
                PatternError::DecodeFailure { path: slot, .. }
                | PatternError::ImageExport { path: slot, .. }
                | PatternError::FileSystem { path: slot, .. }
                    if slot.as_os_str() == UNKNOWN_PATH =>
                {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::DecodeFailure {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> PatternError {
    PatternError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
