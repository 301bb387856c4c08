//! Stitch pattern synthesis from raster images
//!
//! Every distinct pixel color is ranked by frequency and given a short code
//! from a bounded alphabet. The codes are laid out on a grid with one cell
//! per pixel, written out as a text pattern, and rendered as an image whose
//! lines trace the boundaries between differently coded cells.

#![forbid(unsafe_code)]

/// Exact-color census and frequency ranking
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// End-to-end conversion runs
pub mod pipeline;
/// Grid rendering onto drawing surfaces
pub mod render;
/// The pattern grid data structure
pub mod spatial;

pub use io::error::{PatternError, Result};
