//! Pattern grid mapping cell coordinates to rendered rectangles and codes
//!
//! The grid holds one cell per source pixel. Cell coordinates are exact
//! integer pairs; the multiplier only scales the rectangle each cell covers
//! on the rendered canvas, never the logical grid dimensions.

use ndarray::Array2;

use crate::analysis::color::PixelMatrix;
use crate::analysis::ranking::{Code, CodeBook};
use crate::io::configuration::GRID_EXTENSION;
use crate::io::error::{PatternError, Result, invalid_parameter};

/// Integer (column, row) key of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoordinate {
    /// Column, counted from the left
    pub column: usize,
    /// Row, counted from the top
    pub row: usize,
}

impl CellCoordinate {
    /// Create a coordinate
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Rectangle this cell covers at `multiplier` pixels per cell
    ///
    /// Edges saturate at `u32::MAX`; cells of a [`PatternGrid`] never reach
    /// it because the grid checks its canvas size on creation.
    pub const fn area(self, multiplier: u32) -> Rectangle {
        let x0 = saturate(self.column).saturating_mul(multiplier);
        let y0 = saturate(self.row).saturating_mul(multiplier);
        Rectangle {
            x0,
            y0,
            x1: x0.saturating_add(multiplier),
            y1: y0.saturating_add(multiplier),
        }
    }
}

const fn saturate(value: usize) -> u32 {
    if value > u32::MAX as usize {
        u32::MAX
    } else {
        value as u32
    }
}

/// Canvas size (width, height) in pixels for a grid of `width` x `height`
/// cells at `multiplier` pixels per cell
///
/// # Errors
///
/// Returns [`PatternError::InvalidParameter`] for the multiplier if either
/// side does not fit in a `u32`
pub fn canvas_size_for(width: usize, height: usize, multiplier: u32) -> Result<(u32, u32)> {
    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(multiplier))
    };
    match (side(width), side(height)) {
        (Some(canvas_width), Some(canvas_height)) => Ok((canvas_width, canvas_height)),
        _ => Err(invalid_parameter(
            "multiplier",
            &multiplier,
            &format!("a {width}x{height} grid at this size exceeds the largest canvas"),
        )),
    }
}

/// Pixel-space rectangle; adjacent cells share exactly one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Left edge
    pub x0: u32,
    /// Top edge
    pub y0: u32,
    /// Right edge
    pub x1: u32,
    /// Bottom edge
    pub y1: u32,
}

impl Rectangle {
    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Contents of one populated cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Rendered rectangle
    pub area: Rectangle,
    /// Code of the source pixel
    pub code: Code,
}

/// Dense grid of cells built once from a pixel scan and then read-only
#[derive(Debug, Clone)]
pub struct PatternGrid {
    /// Cells indexed by `[row, column]`; `None` until set
    cells: Array2<Option<Position>>,
    multiplier: u32,
    canvas: (u32, u32),
    name: String,
    /// (distinct colors, alphabet limit) when the source overflowed
    color_overflow: Option<(usize, usize)>,
}

impl PatternGrid {
    /// Create an empty grid of `width` x `height` cells
    ///
    /// A multiplier of zero is treated as one.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidParameter`] if the rendered canvas
    /// would be wider or taller than `u32::MAX` pixels
    pub fn new(width: usize, height: usize, multiplier: u32) -> Result<Self> {
        let multiplier = multiplier.max(1);
        let canvas = canvas_size_for(width, height, multiplier)?;
        Ok(Self {
            cells: Array2::from_elem((height, width), None),
            multiplier,
            canvas,
            name: String::new(),
            color_overflow: None,
        })
    }

    /// Build a fully populated grid from a pixel matrix
    ///
    /// Calls [`PatternGrid::set`] once per pixel, top to bottom and left to
    /// right, with the code the book assigns to that pixel's color.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownColor`] if a pixel color is missing
    /// from the code book, or [`PatternError::InvalidParameter`] if the
    /// multiplier makes the canvas too large
    pub fn from_pixels(pixels: &PixelMatrix, code_book: &CodeBook, multiplier: u32) -> Result<Self> {
        Self::from_pixels_observed(pixels, code_book, multiplier, |_| {})
    }

    /// Build a grid like [`PatternGrid::from_pixels`], calling `on_row`
    /// after each finished row
    ///
    /// # Errors
    ///
    /// Same conditions as [`PatternGrid::from_pixels`]
    pub fn from_pixels_observed<F>(
        pixels: &PixelMatrix,
        code_book: &CodeBook,
        multiplier: u32,
        mut on_row: F,
    ) -> Result<Self>
    where
        F: FnMut(usize),
    {
        let (height, width) = pixels.dim();
        let mut grid = Self::new(width, height, multiplier)?;

        for (row, line) in pixels.rows().into_iter().enumerate() {
            for (column, &color) in line.iter().enumerate() {
                let code = code_book.resolve(color)?;
                grid.set(column, row, code.clone())?;
            }
            on_row(row);
        }

        Ok(grid)
    }

    /// Set the name used to derive output file names
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Name used to derive output file names
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the rendered grid image, `<name>.grid.png`
    pub fn image_file_name(&self) -> String {
        format!("{}.{GRID_EXTENSION}", self.name)
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Rendered pixels per cell side
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Canvas size (width, height) in pixels needed to render the grid
    pub const fn canvas_size(&self) -> (u32, u32) {
        self.canvas
    }

    /// Whether the source had more colors than the alphabet
    pub const fn too_many_colors(&self) -> bool {
        self.color_overflow.is_some()
    }

    /// Distinct color count and alphabet limit, if the source overflowed
    pub const fn color_overflow(&self) -> Option<(usize, usize)> {
        self.color_overflow
    }

    /// Record that the source had `count` colors for `limit` symbols
    pub const fn mark_too_many_colors(&mut self, count: usize, limit: usize) {
        self.color_overflow = Some((count, limit));
    }

    /// Store `code` at (`column`, `row`); a second call overwrites the first
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::CellOutOfBounds`] if the coordinate lies
    /// outside the declared grid
    pub fn set(&mut self, column: usize, row: usize, code: Code) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let area = CellCoordinate::new(column, row).area(self.multiplier);
        let cell = self
            .cells
            .get_mut((row, column))
            .ok_or(PatternError::CellOutOfBounds {
                column,
                row,
                width,
                height,
            })?;
        *cell = Some(Position { area, code });
        Ok(())
    }

    /// Cell at (`column`, `row`), or `None` if it was never set or lies
    /// outside the grid
    pub fn get(&self, column: usize, row: usize) -> Option<&Position> {
        self.cells.get((row, column)).and_then(Option::as_ref)
    }

    /// Cell at `coordinate`
    pub fn at(&self, coordinate: CellCoordinate) -> Option<&Position> {
        self.get(coordinate.column, coordinate.row)
    }

    /// Cell that must exist because it lies inside the grid
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::GridLookupInconsistency`] if the cell was
    /// never populated, and [`PatternError::CellOutOfBounds`] if the
    /// coordinate is outside the grid
    pub fn position(&self, column: usize, row: usize) -> Result<&Position> {
        match self.cells.get((row, column)) {
            Some(Some(position)) => Ok(position),
            Some(None) => Err(PatternError::GridLookupInconsistency { column, row }),
            None => Err(PatternError::CellOutOfBounds {
                column,
                row,
                width: self.width(),
                height: self.height(),
            }),
        }
    }

    /// Whether every coordinate inside the bounds has been set
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of populated cells
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
