//! Input/output: command line, configuration, errors and file formats

/// Command-line parsing and the processor it drives
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Image decoding
pub mod image;
/// Pattern file writing
pub mod pattern;
/// Progress display
pub mod progress;
/// HTML color report
pub mod report;
