//! Boundary-line rendering of a pattern grid
//!
//! The grid is walked row by row. Every cell compares its code with the
//! cell to its right and the cell below it and strokes the shared edge only
//! when the codes differ, so each interior edge is drawn at most once, by
//! its upper or left cell. The outer border is closed by a single
//! full-canvas rectangle at the end. No flood fill is needed: outlines of
//! same-code regions fall out of the purely local comparison.

use std::path::Path;

use crate::analysis::color::Color;
use crate::io::configuration::{DEFAULT_STROKE, LABEL_OFFSET_DIVISOR};
use crate::io::error::{PatternError, Result};
use crate::render::canvas::{Canvas, ImageCanvas, LabelFont};
use crate::spatial::grid::{PatternGrid, Position};

/// Stroke color and optional label font for rendered grids
#[derive(Debug)]
pub struct RenderStyle {
    /// Line and label color
    pub stroke: Color,
    /// Font for code labels; labels are drawn only when present
    pub font: Option<LabelFont>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke: Color(DEFAULT_STROKE),
            font: None,
        }
    }
}

/// Issues the draw calls for a fully populated grid
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer {
    labels: bool,
}

impl GridRenderer {
    /// Create a renderer; `labels` draws each cell's code inside it
    pub const fn new(labels: bool) -> Self {
        Self { labels }
    }

    /// Whether code labels are drawn
    pub const fn labels(&self) -> bool {
        self.labels
    }

    /// Render `grid` onto `canvas`
    ///
    /// # Errors
    ///
    /// Returns an error if the grid was built from too many colors, the
    /// canvas size does not match the grid, a cell inside the grid was
    /// never populated, or the canvas rejects a draw call
    pub fn render<C: Canvas>(&self, grid: &PatternGrid, canvas: &mut C) -> Result<()> {
        self.render_observed(grid, canvas, |_| {})
    }

    /// Render `grid`, calling `on_row` after each finished row
    ///
    /// # Errors
    ///
    /// Same conditions as [`GridRenderer::render`]
    pub fn render_observed<C, F>(&self, grid: &PatternGrid, canvas: &mut C, mut on_row: F) -> Result<()>
    where
        C: Canvas,
        F: FnMut(usize),
    {
        if let Some((count, limit)) = grid.color_overflow() {
            return Err(PatternError::TooManyColors { count, limit });
        }

        let expected = grid.canvas_size();
        let actual = canvas.size();
        if expected != actual {
            return Err(PatternError::CanvasMismatch { expected, actual });
        }

        let inset = (grid.multiplier() / LABEL_OFFSET_DIVISOR).max(1);

        for row in 0..grid.height() {
            for column in 0..grid.width() {
                let cell = grid.position(column, row)?;

                if self.labels {
                    canvas.draw_label(
                        cell.code.as_str(),
                        cell.area.x0 + inset,
                        cell.area.y0 + inset,
                    )?;
                }

                if differs(cell, grid.get(column + 1, row)) {
                    canvas.draw_line((cell.area.x1, cell.area.y0), (cell.area.x1, cell.area.y1))?;
                }

                if differs(cell, grid.get(column, row + 1)) {
                    canvas.draw_line((cell.area.x0, cell.area.y1), (cell.area.x1, cell.area.y1))?;
                }
            }
            on_row(row);
        }

        canvas.draw_border()
    }
}

// Missing neighbours mark the grid edge, which only the border closes
fn differs(cell: &Position, neighbour: Option<&Position>) -> bool {
    neighbour.is_some_and(|n| n.code != cell.code)
}

/// Render `grid` to a PNG at `path`
///
/// The image is written only after every draw call succeeded.
///
/// # Errors
///
/// Returns an error if rendering fails or the PNG cannot be written
pub fn render_png(grid: &PatternGrid, style: RenderStyle, path: &Path) -> Result<()> {
    render_png_observed(grid, style, path, |_| {})
}

/// Render `grid` to a PNG at `path`, reporting each finished row
///
/// # Errors
///
/// Same conditions as [`render_png`]
pub fn render_png_observed<F>(
    grid: &PatternGrid,
    style: RenderStyle,
    path: &Path,
    on_row: F,
) -> Result<()>
where
    F: FnMut(usize),
{
    let (width, height) = grid.canvas_size();
    let renderer = GridRenderer::new(style.font.is_some());

    let mut canvas = ImageCanvas::new(width, height, style.stroke);
    if let Some(font) = style.font {
        canvas = canvas.with_font(font);
    }

    renderer.render_observed(grid, &mut canvas, on_row)?;
    canvas.save(path)
}
