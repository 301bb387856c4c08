//! Tests for the row progress display

#[cfg(test)]
mod tests {
    use stitchgrid::io::progress::ProgressManager;

    // Tests a hidden manager still tracks its stage and rows
    // Verified by skipping the increment when hidden
    #[test]
    fn test_hidden_progress_counts_rows() {
        let mut progress = ProgressManager::new(false);

        progress.start_stage("grid", 3);
        progress.row_done();
        progress.row_done();

        assert_eq!(progress.stage(), "grid");
        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests starting a new stage resets the position
    // Verified by carrying the position across stages
    #[test]
    fn test_stage_reset() {
        let mut progress = ProgressManager::new(false);

        progress.start_stage("grid", 2);
        progress.row_done();
        progress.start_stage("render", 2);

        assert_eq!(progress.stage(), "render");
        assert_eq!(progress.position(), 0);
        progress.finish();
    }
}
