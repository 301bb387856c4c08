//! Drawing surfaces the grid renderer strokes onto
//!
//! [`Canvas`] is the seam between boundary detection and rasterization.
//! [`ImageCanvas`] rasterizes with `imageproc` into an RGBA buffer;
//! [`RecordingCanvas`] keeps the calls so they can be inspected.

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

use crate::analysis::color::Color;
use crate::io::error::{PatternError, Result, file_system_error};

/// Abstract 2D drawing surface
pub trait Canvas {
    /// Surface size (width, height) in pixels
    fn size(&self) -> (u32, u32);

    /// Stroke a straight line between two points
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot draw the line
    fn draw_line(&mut self, from: (u32, u32), to: (u32, u32)) -> Result<()>;

    /// Draw `text` with its top-left corner at (`x`, `y`)
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot draw text
    fn draw_label(&mut self, text: &str, x: u32, y: u32) -> Result<()>;

    /// Stroke one rectangle around the whole surface
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot draw the rectangle
    fn draw_border(&mut self) -> Result<()>;
}

/// Font and pixel size used for cell labels
pub struct LabelFont {
    font: FontVec,
    scale: PxScale,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl LabelFont {
    /// Load a TrueType or OpenType font file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid font,
    /// or if `size` is not a positive finite number
    pub fn load(path: &Path, size: f32) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| file_system_error(path, "read font", e))?;
        Self::from_bytes(data, size, path)
    }

    /// Parse font data already in memory; `origin` names it in errors
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a valid font or `size` is not a
    /// positive finite number
    pub fn from_bytes(data: Vec<u8>, size: f32, origin: &Path) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(PatternError::FontLoad {
                path: origin.to_path_buf(),
                reason: format!("font size {size} must be positive"),
            });
        }

        let font = FontVec::try_from_vec(data).map_err(|e| PatternError::FontLoad {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Pixel size of the labels
    pub const fn size(&self) -> f32 {
        self.scale.y
    }
}

/// Canvas backed by an RGBA image buffer with a transparent background
#[derive(Debug)]
pub struct ImageCanvas {
    image: RgbaImage,
    stroke: Rgba<u8>,
    font: Option<LabelFont>,
}

impl ImageCanvas {
    /// Create a transparent canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32, stroke: Color) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            stroke: stroke.into(),
            font: None,
        }
    }

    /// Use `font` for labels
    #[must_use]
    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Rendered pixels so far
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the rendered image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode the canvas as PNG at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// image cannot be encoded and written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| PatternError::ImageExport {
                path: PathBuf::from(path),
                source: e,
            })
    }

    fn check_point(&self, point: (u32, u32)) -> Result<()> {
        let (width, height) = self.size();
        if point.0 > width || point.1 > height {
            return Err(PatternError::Surface {
                operation: "draw line",
                reason: format!(
                    "point ({}, {}) lies outside the {width}x{height} canvas",
                    point.0, point.1
                ),
            });
        }
        Ok(())
    }
}

impl Canvas for ImageCanvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn draw_line(&mut self, from: (u32, u32), to: (u32, u32)) -> Result<()> {
        self.check_point(from)?;
        self.check_point(to)?;
        draw_line_segment_mut(
            &mut self.image,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            self.stroke,
        );
        Ok(())
    }

    fn draw_label(&mut self, text: &str, x: u32, y: u32) -> Result<()> {
        let font = self.font.as_ref().ok_or_else(|| PatternError::Surface {
            operation: "draw label",
            reason: "no font loaded for labels".to_string(),
        })?;
        draw_text_mut(
            &mut self.image,
            self.stroke,
            x as i32,
            y as i32,
            font.scale,
            &font.font,
            text,
        );
        Ok(())
    }

    fn draw_border(&mut self) -> Result<()> {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return Err(PatternError::Surface {
                operation: "draw border",
                reason: "canvas is empty".to_string(),
            });
        }
        draw_hollow_rect_mut(
            &mut self.image,
            Rect::at(0, 0).of_size(width, height),
            self.stroke,
        );
        Ok(())
    }
}

/// A single draw call captured by [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Straight line
    Line {
        /// Start point
        from: (u32, u32),
        /// End point
        to: (u32, u32),
    },
    /// Text anchored at its top-left corner
    Label {
        /// Label text
        text: String,
        /// Left edge
        x: u32,
        /// Top edge
        y: u32,
    },
    /// Full-canvas rectangle
    Border {
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },
}

/// Canvas that records draw calls instead of rasterizing them
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty recording of a `width` x `height` surface
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Every call in the order it was made
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Lines whose endpoints share an x coordinate
    pub fn vertical_lines(&self) -> Vec<((u32, u32), (u32, u32))> {
        self.lines().filter(|(from, to)| from.0 == to.0).collect()
    }

    /// Lines whose endpoints share a y coordinate
    pub fn horizontal_lines(&self) -> Vec<((u32, u32), (u32, u32))> {
        self.lines().filter(|(from, to)| from.1 == to.1).collect()
    }

    /// Label texts with their anchors
    pub fn labels(&self) -> Vec<(&str, u32, u32)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Label { text, x, y } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Number of border rectangles drawn
    pub fn borders(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Border { .. }))
            .count()
    }

    fn lines(&self) -> impl Iterator<Item = ((u32, u32), (u32, u32))> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_line(&mut self, from: (u32, u32), to: (u32, u32)) -> Result<()> {
        self.commands.push(DrawCommand::Line { from, to });
        Ok(())
    }

    fn draw_label(&mut self, text: &str, x: u32, y: u32) -> Result<()> {
        self.commands.push(DrawCommand::Label {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn draw_border(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Border {
            width: self.width,
            height: self.height,
        });
        Ok(())
    }
}
