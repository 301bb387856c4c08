//! Exact RGBA color values and the pixel matrix they populate

use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::fmt;

/// Row-major matrix of pixel colors indexed by `[row, column]`
pub type PixelMatrix = Array2<Color>;

/// An exact 8-bit RGBA color
///
/// Alpha takes part in equality, so two pixels that differ only in
/// transparency are distinct colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Build a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Build an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, u8::MAX])
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Alpha channel
    pub const fn a(self) -> u8 {
        self.0[3]
    }

    /// Lowercase `#rrggbb` hex code, alpha omitted
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }

    /// CSS `rgb(r,g,b)` triple, alpha omitted
    pub fn css_rgb(self) -> String {
        format!("rgb({},{},{})", self.r(), self.g(), self.b())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Self(pixel.0)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Self(color.0)
    }
}

/// Copy an RGBA image into a pixel matrix
pub fn pixel_matrix(image: &RgbaImage) -> PixelMatrix {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut pixels = Array2::from_elem((height, width), Color::default());

    for (x, y, pixel) in image.enumerate_pixels() {
        if let Some(slot) = pixels.get_mut((y as usize, x as usize)) {
            *slot = Color::from(*pixel);
        }
    }

    pixels
}

/// Build a pixel matrix from rows of colors
///
/// Returns `None` when the rows are not all the same length.
pub fn pixel_matrix_from_rows(rows: &[Vec<Color>]) -> Option<PixelMatrix> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != width) {
        return None;
    }
    let flat: Vec<Color> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((height, width), flat).ok()
}
