//! Frequency ranking of colors and code assignment from a bounded alphabet
//!
//! Colors are sorted by pixel count, most frequent first, and zipped
//! against the alphabet in order. The resulting [`CodeBook`] is the only
//! place codes come from, so the grid image and the pattern file can never
//! disagree about which code a color has.

use crate::analysis::census::ColorCensus;
use crate::analysis::color::Color;
use crate::io::configuration::DEFAULT_ALPHABET;
use crate::io::error::{PatternError, Result, invalid_parameter};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Symbolic label standing for one color in the pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
    /// Wrap a symbol as a code
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The code text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free set of code symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Code>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.iter().map(|&s| Code::new(s)).collect(),
        }
    }
}

impl Alphabet {
    /// Build an alphabet from symbols in ranking order
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a symbol is empty or a
    /// symbol appears twice
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<Code> = symbols.into_iter().map(Code::new).collect();

        if symbols.is_empty() {
            return Err(invalid_parameter(
                "alphabet",
                &"",
                &"must contain at least one symbol",
            ));
        }

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if symbol.as_str().is_empty() {
                return Err(invalid_parameter(
                    "alphabet",
                    &joined(&symbols),
                    &"symbols must not be empty",
                ));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(invalid_parameter(
                    "alphabet",
                    &joined(&symbols),
                    &format!("symbol '{symbol}' appears more than once"),
                ));
            }
        }

        Ok(Self { symbols })
    }

    /// Parse a comma separated list such as `a,b,c`
    ///
    /// # Errors
    ///
    /// Same conditions as [`Alphabet::new`]
    pub fn parse(list: &str) -> Result<Self> {
        Self::new(list.split(',').map(str::trim))
    }

    /// Number of symbols, i.e. the maximum number of colors a pattern may use
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols (never true for a built alphabet)
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `rank`, if the alphabet reaches that far
    pub fn symbol(&self, rank: usize) -> Option<&Code> {
        self.symbols.get(rank)
    }
}

fn joined(symbols: &[Code]) -> String {
    symbols
        .iter()
        .map(Code::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Ranked statistics for one distinct color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStats {
    /// Assigned code, or the numeric rank once the alphabet is exhausted
    pub code: Code,
    /// The exact color
    pub color: Color,
    /// Number of pixels with this color
    pub count: usize,
    /// Share of all pixels, in percent
    pub percent: f64,
}

/// Ranks a census against an alphabet
#[derive(Debug, Clone, Default)]
pub struct ColorRanker {
    alphabet: Alphabet,
}

impl ColorRanker {
    /// Create a ranker for `alphabet`
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet codes are drawn from
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Sort colors by count, most frequent first
    ///
    /// The sort is stable over first-seen order so equal counts keep the
    /// order the colors appeared in the scan.
    pub fn rank(&self, census: &ColorCensus) -> Ranking {
        let total = census.total();
        let mut ranked: Vec<(Color, usize)> = census.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let stats = ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (color, count))| ColorStats {
                code: self
                    .alphabet
                    .symbol(rank)
                    .cloned()
                    .unwrap_or_else(|| Code::new(rank.to_string())),
                color,
                count,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
            })
            .collect();

        Ranking {
            stats,
            total,
            limit: self.alphabet.len(),
        }
    }
}

/// Result of ranking: ordered stats plus the alphabet limit
#[derive(Debug, Clone)]
pub struct Ranking {
    stats: Vec<ColorStats>,
    total: usize,
    limit: usize,
}

impl Ranking {
    /// Stats ordered by count, most frequent first
    pub fn stats(&self) -> &[ColorStats] {
        &self.stats
    }

    /// Total pixel count the percentages are relative to
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct colors
    pub fn distinct(&self) -> usize {
        self.stats.len()
    }

    /// Alphabet size
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Whether there are more colors than symbols
    pub fn exceeds_alphabet(&self) -> bool {
        self.stats.len() > self.limit
    }

    /// Build the color to code lookup
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::TooManyColors`] if the image has more
    /// distinct colors than the alphabet has symbols
    pub fn code_book(&self) -> Result<CodeBook> {
        if self.exceeds_alphabet() {
            return Err(PatternError::TooManyColors {
                count: self.stats.len(),
                limit: self.limit,
            });
        }

        let codes = self
            .stats
            .iter()
            .map(|stat| (stat.color, stat.code.clone()))
            .collect();
        Ok(CodeBook { codes })
    }
}

/// Color to code lookup shared by the grid and the pattern file
#[derive(Debug, Clone, Default)]
pub struct CodeBook {
    codes: HashMap<Color, Code>,
}

impl CodeBook {
    /// Code for `color`, if it was ranked
    pub fn code(&self, color: Color) -> Option<&Code> {
        self.codes.get(&color)
    }

    /// Code for `color`
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownColor`] if the color was never ranked
    pub fn resolve(&self, color: Color) -> Result<&Code> {
        self.code(color).ok_or(PatternError::UnknownColor { color })
    }

    /// Number of colors with a code
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the book holds no codes
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
