//! Exact-color pixel counts gathered in one row-major scan

use crate::analysis::color::{Color, PixelMatrix};
use std::collections::HashMap;

/// Pixel count per distinct color, remembering first-seen order
///
/// First-seen order is the tie-break used when ranking, so two runs over
/// the same image always rank colors the same way.
#[derive(Debug, Clone, Default)]
pub struct ColorCensus {
    order: Vec<Color>,
    counts: HashMap<Color, usize>,
    total: usize,
}

impl ColorCensus {
    /// Count every pixel of the matrix, top to bottom, left to right
    pub fn from_pixels(pixels: &PixelMatrix) -> Self {
        let mut census = Self::default();
        // ndarray iterates in logical (row-major) order
        for &color in pixels {
            census.record(color);
        }
        census
    }

    /// Count one more pixel of `color`
    pub fn record(&mut self, color: Color) {
        if let Some(count) = self.counts.get_mut(&color) {
            *count += 1;
        } else {
            self.counts.insert(color, 1);
            self.order.push(color);
        }
        self.total += 1;
    }

    /// Total number of pixels recorded
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct colors
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Pixel count for `color`, zero if never seen
    pub fn count(&self, color: Color) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Colors with their counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.order.iter().map(|&color| (color, self.count(color)))
    }
}
