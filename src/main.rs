//! CLI entry point for the stitch pattern converter

use clap::Parser;
use stitchgrid::io::cli::{Cli, PatternProcessor};

fn main() -> stitchgrid::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    PatternProcessor::new(cli).process().map(|_| ())
}
