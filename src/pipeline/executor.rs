//! One conversion run: decode, count, rank, build the grid, write outputs
//!
//! The run is a single sequential pass. Every error ends it; nothing is
//! retried and no partial output is produced on purpose. The stale pattern
//! file is removed before the color check, so a run that fails with too
//! many colors leaves neither a pattern file nor a grid image behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::analysis::census::ColorCensus;
use crate::analysis::color::{Color, PixelMatrix};
use crate::analysis::ranking::{Alphabet, CodeBook, ColorRanker, Ranking};
use crate::io::configuration::{
    DEFAULT_MULTIPLIER, DEFAULT_STROKE, LABEL_SCALE_RATIO, PATTERN_FILE_NAME,
};
use crate::io::error::{PatternError, Result, file_system_error};
use crate::io::image::load_source;
use crate::io::pattern::{remove_stale_pattern, write_pattern_file};
use crate::io::progress::ProgressManager;
use crate::io::report::{data_uri, html_report};
use crate::render::canvas::LabelFont;
use crate::render::renderer::{RenderStyle, render_png_observed};
use crate::spatial::grid::{PatternGrid, canvas_size_for};

/// Everything one run needs to know
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source image
    pub input: PathBuf,
    /// Rendered pixels per cell side
    pub multiplier: u32,
    /// Symbols codes are drawn from
    pub alphabet: Alphabet,
    /// Where the pattern file is written
    pub pattern_path: PathBuf,
    /// Where the grid image is written; `None` puts `<grid name>.grid.png`
    /// beside the input
    pub grid_path: Option<PathBuf>,
    /// Line and label color
    pub stroke: Color,
    /// Font for cell labels; labels are drawn only when set
    pub font: Option<PathBuf>,
    /// Label size in pixels; defaults to a fraction of the multiplier
    pub font_size: Option<f32>,
    /// Show a progress bar
    pub show_progress: bool,
}

impl PipelineConfig {
    /// Defaults for converting `input`
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            multiplier: DEFAULT_MULTIPLIER,
            alphabet: Alphabet::default(),
            pattern_path: PathBuf::from(PATTERN_FILE_NAME),
            grid_path: None,
            stroke: Color(DEFAULT_STROKE),
            font: None,
            font_size: None,
            show_progress: false,
        }
    }

    /// Multiplier actually used; zero means one
    pub fn effective_multiplier(&self) -> u32 {
        self.multiplier.max(1)
    }

    /// Label size actually used
    pub fn effective_font_size(&self) -> f32 {
        self.font_size
            .unwrap_or_else(|| self.effective_multiplier() as f32 * LABEL_SCALE_RATIO)
    }
}

/// Name of the grid: the input file name without its final extension
pub fn grid_name_for(input: &Path) -> String {
    input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Image width in pixels (and grid width in cells)
    pub width: usize,
    /// Image height in pixels (and grid height in cells)
    pub height: usize,
    /// Distinct colors, each with its own code
    pub colors: usize,
    /// Pattern file written
    pub pattern_path: PathBuf,
    /// Grid image written
    pub grid_path: PathBuf,
}

/// Runs conversions for one configuration
pub struct PatternPipeline {
    config: PipelineConfig,
}

impl PatternPipeline {
    /// Create a pipeline for `config`
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Convert the configured image, writing the HTML report to `report`
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded, it has more colors
    /// than the alphabet, the font cannot be loaded, or any output cannot
    /// be written
    pub fn run<W: Write>(&self, report: &mut W) -> Result<PipelineSummary> {
        let source = load_source(&self.config.input)?;
        let image_src = data_uri(source.mime_type(), &source.bytes);
        self.convert(&source.pixels, &image_src, report)
    }

    /// Convert an already decoded pixel matrix
    ///
    /// With no encoded image at hand, the report refers to the configured
    /// input by path.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PatternPipeline::run`], minus decoding
    pub fn run_pixels<W: Write>(&self, pixels: &PixelMatrix, report: &mut W) -> Result<PipelineSummary> {
        let image_src = self.config.input.to_string_lossy();
        self.convert(pixels, &image_src, report)
    }

    fn convert<W: Write>(
        &self,
        pixels: &PixelMatrix,
        image_src: &str,
        report: &mut W,
    ) -> Result<PipelineSummary> {
        let config = &self.config;
        let (height, width) = pixels.dim();
        info!(
            "Loaded '{}' ({width}x{height}, {} pixels)",
            config.input.display(),
            width * height
        );

        let census = ColorCensus::from_pixels(pixels);
        let ranking = ColorRanker::new(config.alphabet.clone()).rank(&census);
        info!("Found {} distinct colors", ranking.distinct());

        remove_stale_pattern(&config.pattern_path)?;
        let code_book = Self::code_book(&ranking)?;
        canvas_size_for(width, height, config.effective_multiplier())?;
        let style = self.style()?;

        report
            .write_all(html_report(image_src, width, height, &ranking).as_bytes())
            .map_err(|e| file_system_error(Path::new("<report>"), "write report", e))?;

        let mut progress = ProgressManager::new(config.show_progress);

        progress.start_stage("grid", height);
        let grid = PatternGrid::from_pixels_observed(
            pixels,
            &code_book,
            config.effective_multiplier(),
            |_| progress.row_done(),
        )?
        .with_name(grid_name_for(&config.input));
        debug!(
            "Built grid '{}' with {} cells",
            grid.name(),
            grid.populated()
        );

        write_pattern_file(&config.pattern_path, pixels, &code_book)?;
        info!("Wrote pattern '{}'", config.pattern_path.display());

        let grid_path = config
            .grid_path
            .clone()
            .unwrap_or_else(|| config.input.with_file_name(grid.image_file_name()));

        progress.start_stage("render", height);
        render_png_observed(&grid, style, &grid_path, |_| progress.row_done())?;
        progress.finish();
        info!("Wrote grid image '{}'", grid_path.display());

        Ok(PipelineSummary {
            width,
            height,
            colors: ranking.distinct(),
            pattern_path: config.pattern_path.clone(),
            grid_path,
        })
    }

    fn code_book(ranking: &Ranking) -> Result<CodeBook> {
        ranking.code_book().inspect_err(|e| {
            if let PatternError::TooManyColors { count, limit } = e {
                for stat in ranking.stats() {
                    error!("{} {} {} pixels", stat.code, stat.color, stat.count);
                }
                error!("too many colors to create pattern: {count} colors, limit {limit}");
            }
        })
    }

    fn style(&self) -> Result<RenderStyle> {
        let font = match &self.config.font {
            Some(path) => Some(LabelFont::load(path, self.config.effective_font_size())?),
            None => None,
        };
        Ok(RenderStyle {
            stroke: self.config.stroke,
            font,
        })
    }
}
