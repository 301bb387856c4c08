//! Row-by-row progress display for the grid building and rendering stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress over the rows of one image, one stage at a time
///
/// When disabled every call is a no-op, so callers never need to branch.
pub struct ProgressManager {
    bar: ProgressBar,
    stage: String,
}

impl ProgressManager {
    /// Create a progress display; `visible` false hides it entirely
    pub fn new(visible: bool) -> Self {
        let bar = ProgressBar::new(0);
        if visible {
            bar.set_style(STAGE_STYLE.clone());
        } else {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        Self {
            bar,
            stage: String::new(),
        }
    }

    /// Begin a stage covering `rows` rows
    pub fn start_stage(&mut self, stage: &str, rows: usize) {
        stage.clone_into(&mut self.stage);
        self.bar.set_prefix(stage.to_string());
        self.bar.set_length(rows as u64);
        self.bar.set_position(0);
    }

    /// Mark one more row of the current stage as done
    pub fn row_done(&self) {
        self.bar.inc(1);
    }

    /// Name of the current stage
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Rows finished in the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
