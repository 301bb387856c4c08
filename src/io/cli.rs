//! Command-line interface for converting an image into a stitch pattern

use crate::analysis::color::Color;
use crate::analysis::ranking::Alphabet;
use crate::io::configuration::{DEFAULT_MULTIPLIER, PATTERN_FILE_NAME};
use crate::io::error::Result;
use crate::pipeline::executor::{PatternPipeline, PipelineConfig, PipelineSummary};
use clap::Parser;
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stitchgrid")]
#[command(
    author,
    version,
    about = "Convert an image into a coded stitch pattern and boundary grid"
)]
/// Command-line arguments for the pattern converter
pub struct Cli {
    /// Image to convert (PNG, JPEG, WEBP, ...)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Rendered pixels per cell side; 0 means 1
    #[arg(value_name = "MULTIPLIER", default_value_t = DEFAULT_MULTIPLIER)]
    pub multiplier: u32,

    /// Pattern file to write
    #[arg(long, value_name = "PATH", default_value = PATTERN_FILE_NAME)]
    pub pattern: PathBuf,

    /// Grid image to write (defaults to <input stem>.grid.png beside the input)
    #[arg(long, value_name = "PATH")]
    pub grid: Option<PathBuf>,

    /// Font used to draw each cell's code; labels are off without it
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Label size in pixels (defaults to 0.8 x multiplier)
    #[arg(long, value_name = "PX")]
    pub font_size: Option<f32>,

    /// Line color as rrggbb or rrggbbaa
    #[arg(long, value_name = "HEX", value_parser = parse_stroke)]
    pub stroke: Option<Color>,

    /// Comma separated code symbols, most frequent color first
    #[arg(long, value_name = "SYMBOLS", value_parser = parse_alphabet)]
    pub alphabet: Option<Alphabet>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline configuration for these arguments
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::new(self.input.clone());
        config.multiplier = self.multiplier.max(1);
        config.pattern_path.clone_from(&self.pattern);
        config.grid_path.clone_from(&self.grid);
        if let Some(stroke) = self.stroke {
            config.stroke = stroke;
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet.clone_from(alphabet);
        }
        config.font.clone_from(&self.font);
        config.font_size = self.font_size;
        config.show_progress = self.should_show_progress();
        config
    }
}

/// Parse a stroke color given as `rrggbb` or `rrggbbaa`, `#` optional
///
/// # Errors
///
/// Returns a message if the text is not six or eight hex digits
pub fn parse_stroke(text: &str) -> std::result::Result<Color, String> {
    let digits = text.trim_start_matches('#');
    if !(digits.len() == 6 || digits.len() == 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{text}' is not a rrggbb or rrggbbaa hex color"));
    }

    let channel = |index: usize| {
        digits
            .get(index * 2..index * 2 + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| format!("'{text}' is not a rrggbb or rrggbbaa hex color"))
    };

    let alpha = if digits.len() == 8 { channel(3)? } else { u8::MAX };
    Ok(Color::new(channel(0)?, channel(1)?, channel(2)?, alpha))
}

/// Parse a comma separated alphabet
///
/// # Errors
///
/// Returns a message if the alphabet is empty or has empty or repeated
/// symbols
pub fn parse_alphabet(text: &str) -> std::result::Result<Alphabet, String> {
    Alphabet::parse(text).map_err(|e| e.to_string())
}

/// Runs the pipeline for parsed arguments, sending the report to stdout
pub struct PatternProcessor {
    cli: Cli,
}

impl PatternProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Convert the input image
    ///
    /// # Errors
    ///
    /// Returns the first error of the run; nothing is retried
    pub fn process(&self) -> Result<PipelineSummary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let summary = self.process_to(&mut out)?;
        out.flush()?;
        Ok(summary)
    }

    /// Convert the input image, writing the report to `report`
    ///
    /// # Errors
    ///
    /// Returns the first error of the run; nothing is retried
    pub fn process_to<W: Write>(&self, report: &mut W) -> Result<PipelineSummary> {
        let pipeline = PatternPipeline::new(self.cli.to_config());
        match pipeline.run(report) {
            Ok(summary) => {
                info!(
                    "Converted {}x{} image with {} colors",
                    summary.width, summary.height, summary.colors
                );
                Ok(summary)
            }
            Err(e) => {
                error!("{e}");
                Err(e)
            }
        }
    }
}
