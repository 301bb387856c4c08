//! Spatial data structures for the pattern grid

/// Cell coordinates, rectangles and the pattern grid
pub mod grid;

pub use grid::PatternGrid;
