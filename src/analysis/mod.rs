//! Color analysis: exact-color census and frequency ranking

/// Pixel counts per distinct color
pub mod census;
/// Exact RGBA color values and pixel matrices
pub mod color;
/// Frequency ranking and code assignment
pub mod ranking;
