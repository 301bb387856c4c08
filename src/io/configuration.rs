//! Pattern constants and runtime configuration defaults

/// Code symbols in ranking order; the most frequent color gets the first
pub const DEFAULT_ALPHABET: [&str; 35] = [
    "Σ", "0", "∆", "1", "#", "2", "3", "4", "5", "6", "7", "8", "9", "C", "D", "F", "G", "H", "J",
    "K", "L", "M", "N", "P", "Q", "R", "U", "V", "W", "X", "Y", "Z", "@", "$", "*",
];

/// Rendered size of one cell in pixels when none is given
pub const DEFAULT_MULTIPLIER: u32 = 1;

/// Pattern file written in the working directory
pub const PATTERN_FILE_NAME: &str = "pattern.csv";

/// Extension replacing the input's own to name the grid image
pub const GRID_EXTENSION: &str = "grid.png";

/// Boundary line and label color (mid-gray)
pub const DEFAULT_STROKE: [u8; 4] = [120, 120, 120, 255];

// Labels are sized relative to the cell so they fit inside it
/// Label font size as a fraction of the cell multiplier
pub const LABEL_SCALE_RATIO: f32 = 0.8;

/// Label inset from the cell corner as a divisor of the multiplier
pub const LABEL_OFFSET_DIVISOR: u32 = 5;

// Report settings
/// Physical size of one stitch in millimetres
pub const MM_PER_STITCH: usize = 2;
/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
